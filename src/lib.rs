//! `optscan` is a native implementation of the `getopt` family of option parsers.
//!
//! It follows the contract of POSIX `getopt` and GNU `getopt_long` / `getopt_long_only`, without calling into the C library.
//! Specifically, `optscan` prioritizes the following design concerns:
//! * *No hidden state*:
//! There is no `optind`, `optarg` or `opterr`.
//! Every parse returns all it derived (matches, operands, diagnostics) in one value.
//! * *Every problem at once*:
//! Unknown options, missing arguments, and ambiguous abbreviations are collected as diagnostics.
//! A bad token never stops the parse.
//! * *Fail fast on bad declarations*:
//! Malformed options (ex: a repeated short name) are a [`ConfigError`], reported before any argument is looked at.
//!
//! # Usage
//! The getopt-family functions mirror their C namesakes:
//! ```
//! use optscan::{getopt, Value};
//!
//! let outcome = getopt("ab:", &["-a", "-b", "value", "file"]).unwrap();
//! assert!(outcome.ok());
//! assert_eq!(outcome.results.get("a"), Some(&Value::Switch));
//! assert_eq!(outcome.results.get("b"), Some(&Value::Text("value".to_string())));
//! assert_eq!(outcome.operands, vec!["file".to_string()]);
//! ```
//!
//! For direct access to the matches, declare [`OptionSpec`]s and build an [`OptionParser`]:
//! ```
//! use optscan::{OptionParser, OptionSpec};
//!
//! let parser = OptionParser::new(vec![
//!     OptionSpec::long("verbose").with_short('v'),
//!     OptionSpec::long("version"),
//! ])
//! .unwrap();
//!
//! let result = parser.parse_tokens(&["-v", "--ver"]);
//! assert_eq!(result.matches.len(), 1);
//! assert_eq!(
//!     result.diagnostics[0].to_string(),
//!     "option '--ver' is ambiguous; possibilities: '--verbose' '--version'"
//! );
//! ```
//!
//! # Scanning
//! Arguments are scanned left to right, without a program name slot.
//! * `--` ends option scanning; everything after it is an operand.
//! * `-` on its own, and anything not starting with `-`, is an operand.
//! By default operands are set aside and scanning continues (permute mode).
//! In posix mode ([`OptionParser::posix`], or a leading `+` in the option string) the first operand ends scanning.
//! * `--name` and `--name=value` are long options.
//! An unambiguous prefix of a declared long name matches it (ex: `--verb` for `--verbose`).
//! * `-abc` is a cluster of short options.
//! An option that takes an argument ends the cluster, using the rest of the cluster (or the next argument) as its value.
//!
//! In long-only mode ([`getopt_long_only`]), `-name` is tried as a long option first.
//! If that fails and its first character is a declared short option, it is read as a short cluster instead.
//!
//! ### Argument policies
//! | [`ArgPolicy`]        | Option string | Short forms          | Long forms                  |
//! |----------------------|---------------|----------------------|-----------------------------|
//! | `NoArgument`         | `x`           | `-x`                 | `--name`                    |
//! | `RequiredArgument`   | `x:`          | `-xVALUE`, `-x VALUE` | `--name=VALUE`, `--name VALUE` |
//! | `OptionalArgument`   | `x::`         | `-xVALUE`, `-x`      | `--name=VALUE`, `--name`    |
//!
//! # Binding
//! Each option may name a [`BindingTarget`].
//! After a parse, a [`Binder`] routes the matches:
//! * [`BindingTarget::None`]: collected into a table under [`OptionSpec::key`].
//! * [`BindingTarget::Flag`]: assigned to a variable in an [`Environment`].
//! The innermost [`Scope`] that declares the variable receives it; otherwise it lands in the globals.
//! * [`BindingTarget::Callback`]: passed to a [`prelude::Handler`].
//! A handler's `Err` becomes a [`DiagnosticKind::HandlerFailed`] diagnostic.
//!
//! ```
//! use optscan::{getopt_long, Binder, Environment, OptionSpec, Scope, Value};
//!
//! let mut environment = Environment::new();
//! environment.push(Scope::new().declare("verbose"));
//!
//! let outcome = getopt_long(
//!     "o:",
//!     vec![OptionSpec::long("verbose").flag("verbose")],
//!     &["--verbose", "-o", "out.txt"],
//!     &mut Binder::new(),
//!     &mut environment,
//! )
//! .unwrap();
//!
//! assert!(outcome.ok());
//! assert_eq!(environment.get("verbose"), Some(&Value::Switch));
//! assert_eq!(outcome.results.get("o"), Some(&Value::Text("out.txt".to_string())));
//! ```
//!
//! # Reporting
//! Diagnostics render with the familiar GNU wording, and go out through a [`UserInterface`]:
//! ```console
//! program: invalid option -- 'z'
//! program: option requires an argument -- 'x'
//! program: unrecognized option '--nope'
//! program: option '--ver' is ambiguous; possibilities: '--verbose' '--version'
//! ```
//! A leading `:` in the option string selects quiet mode, where [`Outcome::report`] prints nothing.
//!
//! # Features
//! * `unit_test`: exposes `util::InMemoryInterface`, a [`UserInterface`] for tests.
//! * `tracing_debug`: emits `tracing` debug events while scanning and binding.
pub use optscan_core::*;
