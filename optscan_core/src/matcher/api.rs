use crate::constant::*;
use crate::model::OptionSpec;

/// One matched occurrence of a declared option.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Match {
    /// The position of the matched option in the declared specs.
    pub index: usize,
    /// The value consumed for the option, if any.
    pub value: Option<String>,
}

impl Match {
    pub(crate) fn new(index: usize, value: Option<&str>) -> Self {
        Self {
            index,
            value: value.map(str::to_string),
        }
    }
}

/// The class of problem found while parsing (or binding).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DiagnosticKind {
    /// The option is not declared, or a no-argument long option was given an `=VALUE`.
    UnknownOption,
    /// An argument-taking option ran out of arguments.
    MissingArgument,
    /// An abbreviated long option matches more than one declared long name.
    AmbiguousLongOption {
        /// The declared long names the token is a prefix of.
        candidates: Vec<String>,
    },
    /// A callback handler rejected its match.
    HandlerFailed {
        /// The handler's error message.
        message: String,
    },
}

/// How the offending option was written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptionForm {
    /// A short option character (`-x`, or inside a cluster such as `-ax`).
    Short,
    /// A long option (`--name`, or `-name` in long-only mode).
    Long,
}

/// A per-token problem.
/// Diagnostics never stop a parse; they accumulate in order of discovery.
///
/// The `token` is the single character for short options, and the long option as written (ex: `--verb`) otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Diagnostic {
    /// What went wrong.
    pub kind: DiagnosticKind,
    /// The offending token.
    pub token: String,
    /// Whether `token` is a short option character or a written long option.
    pub form: OptionForm,
}

impl Diagnostic {
    fn new(kind: DiagnosticKind, token: impl Into<String>, form: OptionForm) -> Self {
        Self {
            kind,
            token: token.into(),
            form,
        }
    }

    pub(crate) fn unknown_short(single: char) -> Self {
        Self::new(DiagnosticKind::UnknownOption, single, OptionForm::Short)
    }

    pub(crate) fn missing_short(single: char) -> Self {
        Self::new(DiagnosticKind::MissingArgument, single, OptionForm::Short)
    }

    pub(crate) fn unknown(written: impl Into<String>) -> Self {
        Self::new(DiagnosticKind::UnknownOption, written, OptionForm::Long)
    }

    pub(crate) fn missing(written: impl Into<String>) -> Self {
        Self::new(DiagnosticKind::MissingArgument, written, OptionForm::Long)
    }

    pub(crate) fn ambiguous(written: impl Into<String>, candidates: Vec<String>) -> Self {
        Self::new(
            DiagnosticKind::AmbiguousLongOption { candidates },
            written,
            OptionForm::Long,
        )
    }

    pub(crate) fn handler_failed(spec: &OptionSpec, message: impl Into<String>) -> Self {
        let form = match spec.long_name() {
            Some(_) => OptionForm::Long,
            None => OptionForm::Short,
        };

        Self::new(
            DiagnosticKind::HandlerFailed {
                message: message.into(),
            },
            spec.key(),
            form,
        )
    }

    // Long options are listed behind the prefix they were written with.
    fn long_prefix(&self) -> &'static str {
        if self.token.starts_with(LONG_PREFIX) {
            LONG_PREFIX
        } else {
            LONG_ONLY_PREFIX
        }
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let token = &self.token;

        match &self.kind {
            DiagnosticKind::UnknownOption if self.form == OptionForm::Short => {
                write!(f, "invalid option -- '{token}'")
            }
            DiagnosticKind::UnknownOption => write!(f, "unrecognized option '{token}'"),
            DiagnosticKind::MissingArgument if self.form == OptionForm::Short => {
                write!(f, "option requires an argument -- '{token}'")
            }
            DiagnosticKind::MissingArgument => {
                write!(f, "option '{token}' requires an argument")
            }
            DiagnosticKind::AmbiguousLongOption { candidates } => {
                let prefix = self.long_prefix();
                let possibilities = candidates
                    .iter()
                    .map(|c| format!("'{prefix}{c}'"))
                    .collect::<Vec<String>>()
                    .join(" ");
                write!(
                    f,
                    "option '{token}' is ambiguous; possibilities: {possibilities}"
                )
            }
            DiagnosticKind::HandlerFailed { message } => {
                write!(f, "option '{token}' was rejected: {message}")
            }
        }
    }
}

/// Everything derived from one parse.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParseResult {
    /// Matched options, in the order they were discovered.
    pub matches: Vec<Match>,
    /// Arguments not consumed as options or option values, in their original relative order.
    pub operands: Vec<String>,
    /// Problems, in the order they were discovered.
    pub diagnostics: Vec<Diagnostic>,
}

impl ParseResult {
    /// `true` iff no diagnostics were recorded.
    pub fn ok(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Diagnostic::unknown_short('z'), "invalid option -- 'z'")]
    #[case(Diagnostic::unknown_short('-'), "invalid option -- '-'")]
    #[case(Diagnostic::unknown("--foo"), "unrecognized option '--foo'")]
    #[case(Diagnostic::unknown("--verbose=1"), "unrecognized option '--verbose=1'")]
    #[case(Diagnostic::unknown("-"), "unrecognized option '-'")]
    #[case(Diagnostic::unknown("-x"), "unrecognized option '-x'")]
    #[case(Diagnostic::missing_short('x'), "option requires an argument -- 'x'")]
    #[case(Diagnostic::missing("--file"), "option '--file' requires an argument")]
    #[case(Diagnostic::missing("-f"), "option '-f' requires an argument")]
    #[case(
        Diagnostic::ambiguous("--ver", vec!["verbose".to_string(), "version".to_string()]),
        "option '--ver' is ambiguous; possibilities: '--verbose' '--version'"
    )]
    #[case(
        Diagnostic::ambiguous("-ver", vec!["verbose".to_string(), "version".to_string()]),
        "option '-ver' is ambiguous; possibilities: '-verbose' '-version'"
    )]
    #[case(
        Diagnostic::handler_failed(&OptionSpec::long("level"), "not a number"),
        "option 'level' was rejected: not a number"
    )]
    #[case(
        Diagnostic::handler_failed(&OptionSpec::short('l'), "not a number"),
        "option 'l' was rejected: not a number"
    )]
    fn display(#[case] diagnostic: Diagnostic, #[case] expected: &str) {
        assert_eq!(diagnostic.to_string(), expected);
    }

    #[test]
    fn ok() {
        let mut result = ParseResult::default();
        assert!(result.ok());

        result.diagnostics.push(Diagnostic::unknown_short('z'));
        assert!(!result.ok());
    }

    #[test]
    fn handler_failed_form() {
        let long = Diagnostic::handler_failed(&OptionSpec::long("level").with_short('l'), "no");
        assert_eq!(long.token, "level");
        assert_eq!(long.form, OptionForm::Long);

        let short = Diagnostic::handler_failed(&OptionSpec::short('l'), "no");
        assert_eq!(short.token, "l");
        assert_eq!(short.form, OptionForm::Short);
    }
}
