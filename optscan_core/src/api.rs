mod binding;
mod core;
mod getopt;

pub use self::core::*;
pub use binding::*;
pub use getopt::*;
