use terminal_size::{terminal_size, Width};

use crate::constant::*;
use crate::model::{ArgPolicy, OptionSpec};
use crate::parser::interface::UserInterface;
use crate::parser::{ColumnRenderer, LeftWidth, MiddleWidth, PaddingWidth, TotalWidth};

pub(crate) struct Printer {
    options: Vec<OptionSpec>,
    terminal_width: Option<usize>,
}

const PADDING_WIDTH: usize = 3;
const MAIN_INDENT: usize = 1;

impl Printer {
    pub(crate) fn terminal(options: &[OptionSpec]) -> Self {
        let terminal_width = if let Some((Width(terminal_width), _)) = terminal_size() {
            Some(terminal_width as usize)
        } else {
            None
        };

        Self::new(options, terminal_width)
    }

    pub(crate) fn new(options: &[OptionSpec], terminal_width: Option<usize>) -> Self {
        Self {
            options: options.to_vec(),
            terminal_width,
        }
    }

    pub(crate) fn print_usage(
        &self,
        program: &str,
        user_interface: &(impl UserInterface + ?Sized),
    ) {
        let mut switches = String::default();
        let mut summary = Vec::default();
        let mut rows = Vec::default();
        let mut left_column_width = 1;
        let mut middle_column_width = MAIN_INDENT;

        for spec in &self.options {
            let meta = spec.meta_text();

            match (spec.short_name(), spec.long_name(), spec.policy()) {
                (Some(s), _, ArgPolicy::NoArgument) => switches.push(s),
                (Some(s), _, ArgPolicy::RequiredArgument) => summary.push(format!("[-{s} {meta}]")),
                (Some(s), _, ArgPolicy::OptionalArgument) => {
                    summary.push(format!("[-{s}[{meta}]]"))
                }
                (None, Some(l), policy) => summary.push(format!(
                    "[{LONG_PREFIX}{l}{grammar}]",
                    grammar = long_grammar(policy, meta)
                )),
                (None, None, _) => {}
            }

            let forms = forms(spec);
            left_column_width = std::cmp::max(left_column_width, forms.chars().count());

            if let Some(help) = spec.help_text() {
                middle_column_width =
                    std::cmp::max(middle_column_width, help.chars().count() + MAIN_INDENT);
            }

            rows.push((forms, spec.help_text().unwrap_or_default().to_string()));
        }

        if !switches.is_empty() {
            summary.insert(0, format!("[{OPTION_PREFIX}{switches}]"));
        }

        if summary.is_empty() {
            user_interface.print(format!("usage: {program}"));
        } else {
            user_interface.print(format!("usage: {program} {s}", s = summary.join(" ")));
        }

        if rows.is_empty() {
            return;
        }

        let padding = PaddingWidth::new(PADDING_WIDTH)
            .expect("internal error - the padding width is a positive constant");
        let left = LeftWidth::new(left_column_width)
            .expect("internal error - the left column is at least 1 wide");
        let middle = MiddleWidth::new(std::cmp::max(middle_column_width, MAIN_INDENT + 1))
            .expect("internal error - the middle column is at least 2 wide");
        let column_renderer = match &self.terminal_width {
            Some(tw) => ColumnRenderer::guided(padding, left, middle, TotalWidth(*tw)),
            // Without a terminal, nothing is wrapped.
            None => ColumnRenderer::new(padding, left, middle),
        };

        user_interface.print("".to_string());
        user_interface.print("options:".to_string());

        for (forms, help) in rows {
            for line in column_renderer.render(MAIN_INDENT, &forms, &help) {
                user_interface.print(line);
            }
        }
    }
}

fn long_grammar(policy: ArgPolicy, meta: &str) -> String {
    match policy {
        ArgPolicy::NoArgument => "".to_string(),
        ArgPolicy::RequiredArgument => format!("={meta}"),
        ArgPolicy::OptionalArgument => format!("[={meta}]"),
    }
}

fn forms(spec: &OptionSpec) -> String {
    let meta = spec.meta_text();
    let short = spec.short_name().map(|s| match spec.policy() {
        ArgPolicy::NoArgument => format!("-{s}"),
        ArgPolicy::RequiredArgument => format!("-{s} {meta}"),
        ArgPolicy::OptionalArgument => format!("-{s}[{meta}]"),
    });
    let long = spec
        .long_name()
        .map(|l| format!("{LONG_PREFIX}{l}{g}", g = long_grammar(spec.policy(), meta)));

    match (short, long) {
        (Some(s), Some(l)) => format!("{s}, {l}"),
        (Some(s), None) => s,
        (None, Some(l)) => l,
        (None, None) => "".to_string(),
    }
}
