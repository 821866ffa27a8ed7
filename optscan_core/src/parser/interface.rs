use crate::matcher::Diagnostic;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

#[derive(Debug)]
pub(crate) struct PaddingWidth(usize);

impl PaddingWidth {
    pub(crate) fn new(width: usize) -> Result<Self, ()> {
        // padding must be at least 1
        if width >= 1 {
            Ok(PaddingWidth(width))
        } else {
            Err(())
        }
    }
}

#[derive(Debug)]
pub(crate) struct LeftWidth(usize);

impl LeftWidth {
    pub(crate) fn new(width: usize) -> Result<Self, ()> {
        // left must be at least 1
        if width >= 1 {
            Ok(LeftWidth(width))
        } else {
            Err(())
        }
    }
}

#[derive(Debug)]
pub(crate) struct MiddleWidth(usize);

impl MiddleWidth {
    pub(crate) fn new(width: usize) -> Result<Self, ()> {
        // middle must be at least 2 (so we can hyphenate)
        if width >= 2 {
            Ok(MiddleWidth(width))
        } else {
            Err(())
        }
    }
}

#[derive(Debug)]
pub(crate) struct TotalWidth(pub usize);

/// Two column layout: the option forms on the left, the (wrapped) help text in the middle.
#[derive(Debug)]
pub(crate) struct ColumnRenderer {
    padding: PaddingWidth,
    left: LeftWidth,
    middle: MiddleWidth,
}

// We'll target 95% of the total width, to ensure the renderer doesn't literally use the full space.
const TARGET_TOTAL_FACTOR: f64 = 0.95;

// Let's assume the average word length is 5.
// Then 17 is a good minimum, because it allows precisely 3 words with a space between them.
pub(crate) const MINIMUM_MIDDLE_WIDTH: usize = 17;

impl ColumnRenderer {
    /// Produce a renderer based off the provided widths.
    /// This renderer will use a heuristic to chose the middle width.
    pub(crate) fn guided(
        padding: PaddingWidth,
        left: LeftWidth,
        middle: MiddleWidth,
        total_width: TotalWidth,
    ) -> Self {
        let non_middle: usize = left.0 + padding.0;
        let target_total_width = (total_width.0 as f64 * TARGET_TOTAL_FACTOR) as usize;
        let guided_middle = std::cmp::max(middle.0, MINIMUM_MIDDLE_WIDTH);

        if guided_middle + non_middle <= target_total_width {
            #[cfg(feature = "tracing_debug")]
            {
                debug!("Columns {non_middle} and middle fit within the target total {target_total_width}.  Selecting middle: {guided_middle}.");
            }

            Self::new(padding, left, MiddleWidth(guided_middle))
        } else if non_middle < total_width.0 {
            let calculated_middle = std::cmp::max(total_width.0 - non_middle, MINIMUM_MIDDLE_WIDTH);
            #[cfg(feature = "tracing_debug")]
            {
                debug!("Columns {non_middle} fits within the total {t}.  Selecting middle: {calculated_middle}.", t = total_width.0);
            }

            Self::new(padding, left, MiddleWidth(calculated_middle))
        } else {
            #[cfg(feature = "tracing_debug")]
            {
                debug!("Columns {non_middle} do not fit within the total {t}.  Selecting middle: {MINIMUM_MIDDLE_WIDTH}.", t = total_width.0);
            }

            Self::new(padding, left, MiddleWidth(MINIMUM_MIDDLE_WIDTH))
        }
    }

    /// Produce a renderer based off the provided widths.
    pub(crate) fn new(padding: PaddingWidth, left: LeftWidth, middle: MiddleWidth) -> Self {
        Self {
            padding,
            left,
            middle,
        }
    }

    pub(crate) fn render(&self, indent: usize, left: &str, middle: &str) -> Vec<String> {
        let padding = self.padding.0;
        let padding = format!("{:padding$}", "");
        let left_column_width = self.left.0;
        assert!(left.chars().count() <= left_column_width);
        let middle_column_width = self.middle.0 - indent;
        let middle_parts = chunk(middle, middle_column_width);
        let mut out = Vec::default();

        for (i, part) in middle_parts.iter().enumerate() {
            if i == 0 {
                out.push(format!(
                    "{:indent$}{:left_column_width$}{padding}{}",
                    "", left, part
                ));
            } else {
                out.push(format!(
                    "{:indent$}{:left_column_width$}{padding}{}",
                    "", "", part
                ));
            }
        }

        if out.is_empty() {
            out.push(format!("{:indent$}{}", "", left));
        }

        out
    }
}

fn chunk(paragraph: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::default();
    let mut current = String::default();

    for word in paragraph.split(' ') {
        if !word.is_empty() {
            if current.is_empty() {
                hyphenate(width, &mut lines, &mut current, word);
            } else if current.chars().count() + word.chars().count() < width {
                current.push(' ');
                current.push_str(word);
            } else {
                lines.push(current);
                current = String::default();
                hyphenate(width, &mut lines, &mut current, word);
            }
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines
}

fn hyphenate(width: usize, lines: &mut Vec<String>, current: &mut String, word: &str) {
    let singles: Vec<char> = word.chars().collect();
    let increment = width - 1;
    let mut left = 0;
    let mut right = increment;

    while right + 1 < singles.len() {
        lines.push(format!("{}-", singles[left..right].iter().collect::<String>()));
        left += increment;
        right += increment;
    }

    current.extend(&singles[left..]);
}

/// Where rendered usage text and diagnostics are sent.
pub trait UserInterface {
    /// Print a regular message (ex: the usage text).
    fn print(&self, message: String);

    /// Print an error message.
    fn print_error(&self, error: String);
}

/// A [`UserInterface`] that writes messages to stdout, and errors to stderr.
#[derive(Debug, Default)]
pub struct ConsoleInterface {}

impl UserInterface for ConsoleInterface {
    fn print(&self, message: String) {
        println!("{message}");
    }

    fn print_error(&self, error: String) {
        eprintln!("{error}");
    }
}

/// Report each diagnostic as `program: message`, in order.
///
/// ### Example
/// ```
/// # use optscan_core as optscan;
/// use optscan::{parse, report, ConsoleInterface, OptionSpec, ParseRequest};
///
/// let result = parse(&ParseRequest::new(vec![OptionSpec::short('x')], ["-z"])).unwrap();
/// // Prints "program: invalid option -- 'z'" to stderr.
/// report("program", &result.diagnostics, &ConsoleInterface::default());
/// ```
pub fn report(
    program: &str,
    diagnostics: &[Diagnostic],
    user_interface: &(impl UserInterface + ?Sized),
) {
    for diagnostic in diagnostics {
        user_interface.print_error(format!("{program}: {diagnostic}"));
    }
}

/// Test support.
/// *Available using 'unit_test' crate feature only.*
#[cfg(any(test, feature = "unit_test"))]
pub mod util {
    use crate::parser::UserInterface;
    use std::cell::RefCell;

    /// A [`UserInterface`] that keeps everything it is sent in memory.
    #[derive(Debug, Default)]
    pub struct InMemoryInterface {
        message: RefCell<Vec<String>>,
        error: RefCell<Vec<String>>,
    }

    impl UserInterface for InMemoryInterface {
        fn print(&self, message: String) {
            // Allows for print() to be called many times, concatenating the messages.
            self.message.borrow_mut().push(message);
        }

        fn print_error(&self, error: String) {
            self.error.borrow_mut().push(error);
        }
    }

    impl InMemoryInterface {
        /// Take the (newline joined) messages and errors, if any were sent.
        pub fn consume(self) -> (Option<String>, Option<String>) {
            let InMemoryInterface { message, error } = self;
            (join(message.into_inner()), join(error.into_inner()))
        }

        /// Take the messages, asserting that no error was sent.
        pub fn consume_message(self) -> String {
            let (message, error) = self.consume();
            assert_eq!(error, None);
            message.unwrap_or_default()
        }

        /// Take the errors, asserting that no message was sent.
        pub fn consume_error(self) -> String {
            let (message, error) = self.consume();
            assert_eq!(message, None);
            error.unwrap_or_default()
        }
    }

    fn join(values: Vec<String>) -> Option<String> {
        if values.is_empty() {
            None
        } else {
            Some(values.join("\n"))
        }
    }
}
