mod base;
mod interface;
mod optstring;
mod printer;

pub use base::*;
pub use interface::{report, ConsoleInterface, UserInterface};
pub(crate) use interface::{ColumnRenderer, LeftWidth, MiddleWidth, PaddingWidth, TotalWidth};
#[cfg(any(test, feature = "unit_test"))]
pub use interface::util;
pub use optstring::OptionString;
pub(crate) use optstring::OptionStringError;
pub(crate) use printer::Printer;
