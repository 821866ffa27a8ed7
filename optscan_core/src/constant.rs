pub(crate) const OPTION_PREFIX: char = '-';
pub(crate) const LONG_PREFIX: &str = "--";
pub(crate) const LONG_ONLY_PREFIX: &str = "-";
pub(crate) const TERMINATOR: &str = "--";
pub(crate) const STDIN_OPERAND: &str = "-";
pub(crate) const VALUE_DELIMITER: char = '=';

// Characters getopt reserves for its own return values.
pub(crate) const UNKNOWN_MARKER: char = '?';
pub(crate) const MISSING_MARKER: char = ':';

// Option string modifiers.
pub(crate) const POSIX_FLAG: char = '+';
pub(crate) const QUIET_FLAG: char = ':';
pub(crate) const IN_ORDER_FLAG: char = '-';
