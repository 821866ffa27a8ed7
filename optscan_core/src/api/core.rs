use crate::matcher::{Match, OptionTable, ParseResult, TokenMatcher};
use crate::model::OptionSpec;
use crate::parser::{ConfigError, ParseRequest, Printer, UserInterface};

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// A validated set of declared options, ready to parse any number of argument lists.
///
/// The parser holds no cursor: each call to [`OptionParser::parse_tokens`] starts fresh, and may run concurrently with others.
///
/// ### Example
/// ```
/// # use optscan_core as optscan;
/// use optscan::{OptionParser, OptionSpec};
///
/// let parser = OptionParser::new(vec![
///     OptionSpec::short('a'),
///     OptionSpec::long("file").with_short('f').required(),
/// ])
/// .unwrap();
///
/// let result = parser.parse_tokens(&["input", "-af", "out.txt"]);
///
/// assert!(result.ok());
/// assert_eq!(result.matches.len(), 2);
/// assert_eq!(parser.spec(&result.matches[1]).key(), "file");
/// assert_eq!(result.operands, vec!["input".to_string()]);
/// ```
#[derive(Debug, Clone)]
pub struct OptionParser {
    table: OptionTable,
    long_only: bool,
    posix: bool,
}

impl OptionParser {
    /// Validate the declared options.
    /// Malformed options (ex: a repeated short name) are rejected here, before any argument is looked at.
    pub fn new(specs: Vec<OptionSpec>) -> Result<Self, ConfigError> {
        let table = OptionTable::new(specs)?;

        #[cfg(feature = "tracing_debug")]
        {
            debug!("Validated {n} option(s).", n = table.specs().len());
        }

        Ok(Self {
            table,
            long_only: false,
            posix: false,
        })
    }

    /// Accept long options behind a single dash (`-name`).
    pub fn long_only(mut self, long_only: bool) -> Self {
        self.long_only = long_only;
        self
    }

    /// Stop scanning at the first operand, instead of permuting operands to the end.
    pub fn posix(mut self, posix: bool) -> Self {
        self.posix = posix;
        self
    }

    /// The declared options, in declaration order.
    pub fn specs(&self) -> &[OptionSpec] {
        self.table.specs()
    }

    /// The declared option behind a match from this parser.
    ///
    /// # Panics
    /// If `matched` came from a parser with more options than this one.
    pub fn spec(&self, matched: &Match) -> &OptionSpec {
        self.table.spec(matched.index)
    }

    /// Parse the tokens (without a program name).
    /// Problems with individual tokens are returned as diagnostics; they never stop the parse.
    pub fn parse_tokens<S: AsRef<str>>(&self, tokens: &[S]) -> ParseResult {
        TokenMatcher::new(&self.table, self.long_only, self.posix).consume(tokens)
    }

    /// Print the usage summary and options table, sized to the terminal.
    pub fn print_usage(&self, program: &str, user_interface: &(impl UserInterface + ?Sized)) {
        Printer::terminal(self.table.specs()).print_usage(program, user_interface);
    }
}

/// Validate then parse a request in one step.
///
/// ### Example
/// ```
/// # use optscan_core as optscan;
/// use optscan::{parse, DiagnosticKind, OptionSpec, ParseRequest};
///
/// let request = ParseRequest::new(vec![OptionSpec::short('x')], ["-z"]);
/// let result = parse(&request).unwrap();
///
/// assert!(!result.ok());
/// assert_eq!(result.diagnostics[0].kind, DiagnosticKind::UnknownOption);
/// assert_eq!(result.diagnostics[0].token, "z");
/// ```
pub fn parse(request: &ParseRequest) -> Result<ParseResult, ConfigError> {
    let parser = OptionParser::new(request.specs.clone())?
        .long_only(request.long_only)
        .posix(request.posix);
    Ok(parser.parse_tokens(&request.arguments))
}
