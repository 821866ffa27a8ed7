use thiserror::Error;

use crate::api::BindingError;
use crate::matcher::TableError;
use crate::model::OptionSpec;
use crate::parser::OptionStringError;

/// A caller-input error: the declared options (or option string) cannot be used to parse.
/// Reported before any argument is looked at.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("Config error: {0}")]
pub struct ConfigError(pub(crate) String);

impl From<TableError> for ConfigError {
    fn from(error: TableError) -> Self {
        ConfigError(error.to_string())
    }
}

impl From<OptionStringError> for ConfigError {
    fn from(error: OptionStringError) -> Self {
        ConfigError(error.to_string())
    }
}

impl From<BindingError> for ConfigError {
    fn from(error: BindingError) -> Self {
        ConfigError(error.to_string())
    }
}

/// One parse invocation: the declared options, the arguments, and the scanning mode.
///
/// ### Example
/// ```
/// # use optscan_core as optscan;
/// use optscan::{parse, OptionSpec, ParseRequest};
///
/// let request = ParseRequest::new(
///     vec![OptionSpec::short('x').required(), OptionSpec::long("verbose")],
///     ["--verb", "-xfoo", "input"],
/// );
/// let result = parse(&request).unwrap();
///
/// assert!(result.ok());
/// assert_eq!(result.matches.len(), 2);
/// assert_eq!(result.matches[1].value.as_deref(), Some("foo"));
/// assert_eq!(result.operands, vec!["input".to_string()]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseRequest {
    pub(crate) specs: Vec<OptionSpec>,
    pub(crate) arguments: Vec<String>,
    pub(crate) long_only: bool,
    pub(crate) posix: bool,
}

impl ParseRequest {
    /// Create a request in the default (permuting, `--name`/`-x`) mode.
    /// The arguments have no program-name slot.
    pub fn new<I, S>(specs: Vec<OptionSpec>, arguments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            specs,
            arguments: arguments.into_iter().map(Into::into).collect(),
            long_only: false,
            posix: false,
        }
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

    /// The declared options.
    pub fn specs(&self) -> &[OptionSpec] {
        &self.specs
    }

    /// The arguments to parse.
    pub fn arguments(&self) -> &[String] {
        &self.arguments
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request() {
        let request = ParseRequest::new(vec![OptionSpec::short('a')], vec!["-a".to_string()])
            .long_only(true)
            .posix(true);

        assert_eq!(request.specs(), &[OptionSpec::short('a')]);
        assert_eq!(request.arguments(), &["-a".to_string()]);
        assert!(request.long_only);
        assert!(request.posix);
    }

    #[test]
    fn request_defaults() {
        let arguments: &[&str] = &[];
        let request = ParseRequest::new(Vec::default(), arguments.iter().copied());

        assert!(request.arguments().is_empty());
        assert!(!request.long_only);
        assert!(!request.posix);
    }

    #[test]
    fn config_error() {
        let error = ConfigError::from(TableError::DuplicateShortOption('v'));
        assert_eq!(
            error.to_string(),
            "Config error: Cannot duplicate the short option 'v'."
        );
    }
}
