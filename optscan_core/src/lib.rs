//! Core module for `optscan`.
//! See the `optscan` crate root for full details.
#![deny(missing_docs)]
mod api;
mod constant;
mod matcher;
mod model;
mod parser;
pub mod prelude;

pub use api::*;
pub use matcher::{Diagnostic, DiagnosticKind, Match, OptionForm, ParseResult};
pub use model::*;
#[cfg(any(test, feature = "unit_test"))]
pub use parser::util;
pub use parser::{report, ConfigError, ConsoleInterface, OptionString, ParseRequest, UserInterface};

#[cfg(test)]
#[macro_use]
extern crate assert_matches;

#[cfg(test)]
pub(crate) mod test {
    macro_rules! assert_contains {
        ($base:expr, $sub:expr) => {
            assert!(
                $base.contains($sub),
                "'{b}' does not contain '{s}'",
                b = $base,
                s = $sub,
            );
        };
    }

    pub(crate) use assert_contains;
}
