use std::collections::BTreeMap;

use crate::api::{Binder, Environment, OptionParser};
use crate::matcher::Diagnostic;
use crate::model::{OptionSpec, Value};
use crate::parser::{report, ConfigError, OptionString, OptionStringError, UserInterface};

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// The result of a getopt-family call.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Outcome {
    /// Collected option values, keyed by [`OptionSpec::key`].
    /// Options without a value are [`Value::Switch`]; a repeated option keeps its last value.
    pub results: BTreeMap<String, Value>,
    /// Arguments left over once options were taken out.
    pub operands: Vec<String>,
    /// Parse problems followed by handler failures.
    pub diagnostics: Vec<Diagnostic>,
    quiet: bool,
}

impl Outcome {
    /// `true` iff nothing went wrong.
    pub fn ok(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Whether the option string asked for quiet mode (leading `:`).
    pub fn quiet(&self) -> bool {
        self.quiet
    }

    /// Report the diagnostics as `program: message`, unless in quiet mode.
    pub fn report(&self, program: &str, user_interface: &(impl UserInterface + ?Sized)) {
        if !self.quiet {
            report(program, &self.diagnostics, user_interface);
        }
    }
}

/// Parse `arguments` (without a program name) against a classic option string.
///
/// ### Example
/// ```
/// # use optscan_core as optscan;
/// use optscan::{getopt, Value};
///
/// let outcome = getopt("ab:", &["-a", "input", "-bfoo"]).unwrap();
///
/// assert!(outcome.ok());
/// assert_eq!(outcome.results.get("a"), Some(&Value::Switch));
/// assert_eq!(outcome.results.get("b"), Some(&Value::Text("foo".to_string())));
/// assert_eq!(outcome.operands, vec!["input".to_string()]);
/// ```
pub fn getopt<S: AsRef<str>>(optstring: &str, arguments: &[S]) -> Result<Outcome, ConfigError> {
    scan(
        optstring,
        Vec::default(),
        arguments,
        &mut Binder::new(),
        &mut Environment::new(),
        false,
    )
}

/// Parse `arguments` against a classic option string plus long options (`--name`).
///
/// A long option whose short name also appears in `optstring` is the same option; both must agree on the argument policy.
/// Matches are routed through `binder` (see [`Binder::bind`]), and collected values land in [`Outcome::results`].
///
/// ### Example
/// ```
/// # use optscan_core as optscan;
/// use optscan::{getopt_long, Binder, Environment, OptionSpec, Value};
///
/// let outcome = getopt_long(
///     "vf:",
///     vec![OptionSpec::long("file").with_short('f').required()],
///     &["--fi=a.txt", "-v"],
///     &mut Binder::new(),
///     &mut Environment::new(),
/// )
/// .unwrap();
///
/// assert!(outcome.ok());
/// assert_eq!(outcome.results.get("file"), Some(&Value::Text("a.txt".to_string())));
/// assert_eq!(outcome.results.get("v"), Some(&Value::Switch));
/// ```
pub fn getopt_long<S: AsRef<str>>(
    optstring: &str,
    specs: Vec<OptionSpec>,
    arguments: &[S],
    binder: &mut Binder,
    environment: &mut Environment,
) -> Result<Outcome, ConfigError> {
    scan(optstring, specs, arguments, binder, environment, false)
}

/// As [`getopt_long`], but long options may also be written with a single dash (`-name`).
///
/// ### Example
/// ```
/// # use optscan_core as optscan;
/// use optscan::{getopt_long_only, Binder, Environment, OptionSpec, Value};
///
/// let outcome = getopt_long_only(
///     "x",
///     vec![OptionSpec::long("verbose")],
///     &["-verb", "-x"],
///     &mut Binder::new(),
///     &mut Environment::new(),
/// )
/// .unwrap();
///
/// assert!(outcome.ok());
/// assert_eq!(outcome.results.get("verbose"), Some(&Value::Switch));
/// assert_eq!(outcome.results.get("x"), Some(&Value::Switch));
/// ```
pub fn getopt_long_only<S: AsRef<str>>(
    optstring: &str,
    specs: Vec<OptionSpec>,
    arguments: &[S],
    binder: &mut Binder,
    environment: &mut Environment,
) -> Result<Outcome, ConfigError> {
    scan(optstring, specs, arguments, binder, environment, true)
}

/// The version of this library.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

fn scan<S: AsRef<str>>(
    optstring: &str,
    specs: Vec<OptionSpec>,
    arguments: &[S],
    binder: &mut Binder,
    environment: &mut Environment,
    long_only: bool,
) -> Result<Outcome, ConfigError> {
    let option_string = OptionString::parse(optstring)?;
    let posix = option_string.posix();
    let quiet = option_string.quiet();
    let specs = merge(option_string.into_specs(), specs)?;

    #[cfg(feature = "tracing_debug")]
    {
        debug!("Scanning {n} argument(s) against {m} option(s), long_only={long_only}, posix={posix}.", n = arguments.len(), m = specs.len());
    }

    let parser = OptionParser::new(specs)?
        .long_only(long_only)
        .posix(posix);
    let result = parser.parse_tokens(arguments);
    let bindings = binder.bind(&parser, &result, environment)?;
    let mut diagnostics = result.diagnostics;
    diagnostics.extend(bindings.diagnostics);

    Ok(Outcome {
        results: bindings.collected,
        operands: result.operands,
        diagnostics,
        quiet,
    })
}

// Option string entries come first, except those a long option already declares by its short name.
fn merge(
    short_specs: Vec<OptionSpec>,
    long_specs: Vec<OptionSpec>,
) -> Result<Vec<OptionSpec>, ConfigError> {
    let mut specs = Vec::default();

    for short_spec in short_specs {
        let short = short_spec
            .short_name()
            .expect("internal error - option string entries always have a short name");

        match long_specs.iter().find(|s| s.short_name() == Some(short)) {
            Some(alias) if alias.policy() != short_spec.policy() => {
                return Err(OptionStringError::ConflictingPolicy(short).into());
            }
            Some(_) => {}
            None => specs.push(short_spec),
        }
    }

    specs.extend(long_specs);
    Ok(specs)
}
