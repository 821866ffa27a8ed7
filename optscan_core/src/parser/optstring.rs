use std::str::FromStr;
use thiserror::Error;

use crate::constant::*;
use crate::matcher::OptionTable;
use crate::model::{ArgPolicy, OptionSpec};
use crate::parser::ConfigError;

#[derive(Debug, Error, PartialEq, Eq)]
pub(crate) enum OptionStringError {
    #[error("In-order option strings (leading '-') are not supported.")]
    InOrder,

    #[error("Too many ':' after option '{0}'.")]
    TooManyColons(char),

    #[error("Option '{0}' is declared with conflicting argument policies.")]
    ConflictingPolicy(char),
}

/// A classic getopt option string, such as `"ab:c::"`.
///
/// * `x`: an option that takes no value.
/// * `x:`: an option that requires a value.
/// * `x::`: an option that takes an optional (attached) value.
///
/// Leading modifiers:
/// * `+`: scan in posix mode (stop at the first operand).
/// * `:`: quiet mode; diagnostics are still returned, but not reported.
///
/// ### Example
/// ```
/// # use optscan_core as optscan;
/// use optscan::{ArgPolicy, OptionString};
///
/// let option_string: OptionString = "+ab:c::".parse().unwrap();
///
/// assert!(option_string.posix());
/// assert!(!option_string.quiet());
/// assert_eq!(option_string.specs()[1].policy(), ArgPolicy::RequiredArgument);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionString {
    specs: Vec<OptionSpec>,
    posix: bool,
    quiet: bool,
}

impl OptionString {
    /// Parse an option string.
    /// Malformed option strings, including repeated or reserved option characters, are rejected.
    pub fn parse(optstring: &str) -> Result<Self, ConfigError> {
        let mut singles = optstring.chars().peekable();
        let mut posix = false;
        let mut quiet = false;

        while let Some(modifier) = singles.peek() {
            match *modifier {
                POSIX_FLAG => posix = true,
                QUIET_FLAG => quiet = true,
                IN_ORDER_FLAG => return Err(OptionStringError::InOrder.into()),
                _ => break,
            }

            singles.next();
        }

        let mut specs = Vec::default();

        // Leading colons were taken as modifiers, and every later colon follows its option character.
        while let Some(single) = singles.next() {
            let mut colons = 0;

            while let Some(&MISSING_MARKER) = singles.peek() {
                colons += 1;
                singles.next();
            }

            let policy = match colons {
                0 => ArgPolicy::NoArgument,
                1 => ArgPolicy::RequiredArgument,
                2 => ArgPolicy::OptionalArgument,
                _ => return Err(OptionStringError::TooManyColons(single).into()),
            };
            specs.push(OptionSpec::short(single).policy_of(policy));
        }

        // Surface invalid or repeated option characters now, rather than at parse time.
        OptionTable::new(specs.clone())?;

        Ok(Self {
            specs,
            posix,
            quiet,
        })
    }

    /// The declared options, in option string order.
    pub fn specs(&self) -> &[OptionSpec] {
        &self.specs
    }

    /// Take the declared options.
    pub fn into_specs(self) -> Vec<OptionSpec> {
        self.specs
    }

    /// Whether the option string selects posix mode (`+`).
    pub fn posix(&self) -> bool {
        self.posix
    }

    /// Whether the option string selects quiet mode (`:`).
    pub fn quiet(&self) -> bool {
        self.quiet
    }
}

impl FromStr for OptionString {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        OptionString::parse(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matcher::TableError;
    use rstest::rstest;

    fn policies(option_string: &OptionString) -> Vec<(Option<char>, ArgPolicy)> {
        option_string
            .specs()
            .iter()
            .map(|s| (s.short_name(), s.policy()))
            .collect()
    }

    #[test]
    fn plus_as_option() {
        let option_string = OptionString::parse("a+:").unwrap();
        assert_eq!(
            policies(&option_string),
            vec![
                (Some('a'), ArgPolicy::NoArgument),
                (Some('+'), ArgPolicy::RequiredArgument),
            ]
        );
    }

    #[test]
    fn empty() {
        let option_string = OptionString::parse("").unwrap();
        assert!(option_string.specs().is_empty());
        assert!(!option_string.posix());
        assert!(!option_string.quiet());
    }

    #[test]
    fn policies_in_order() {
        let option_string = OptionString::parse("ab:c::d").unwrap();
        assert_eq!(
            policies(&option_string),
            vec![
                (Some('a'), ArgPolicy::NoArgument),
                (Some('b'), ArgPolicy::RequiredArgument),
                (Some('c'), ArgPolicy::OptionalArgument),
                (Some('d'), ArgPolicy::NoArgument),
            ]
        );
    }

    #[rstest]
    #[case("a", false, false)]
    #[case("+a", true, false)]
    #[case(":a", false, true)]
    #[case("+:a", true, true)]
    #[case(":+a", true, true)]
    fn modifiers(#[case] optstring: &str, #[case] posix: bool, #[case] quiet: bool) {
        let option_string: OptionString = optstring.parse().unwrap();
        assert_eq!(option_string.posix(), posix);
        assert_eq!(option_string.quiet(), quiet);
        assert_eq!(
            policies(&option_string),
            vec![(Some('a'), ArgPolicy::NoArgument)]
        );
    }

    #[rstest]
    #[case("-ab", OptionStringError::InOrder.into())]
    #[case("a:::", OptionStringError::TooManyColons('a').into())]
    #[case("a::::", OptionStringError::TooManyColons('a').into())]
    #[case("aba", TableError::DuplicateShortOption('a').into())]
    #[case("a?", TableError::InvalidShortOption('?').into())]
    #[case("a b", TableError::InvalidShortOption(' ').into())]
    #[case("a-", TableError::InvalidShortOption('-').into())]
    fn invalid(#[case] optstring: &str, #[case] expected: ConfigError) {
        assert_eq!(OptionString::parse(optstring).unwrap_err(), expected);
    }
}
