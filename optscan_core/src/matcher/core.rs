use crate::constant::*;
use crate::matcher::api::*;
use crate::matcher::model::*;
use crate::model::ArgPolicy;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// How many argument tokens a single option token used up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Consumed {
    Token,
    WithNext,
}

/// Single-pass scanner over an argument list.
/// Owns nothing but the result being accumulated, so every parse starts from a clean cursor.
#[derive(Debug)]
pub(crate) struct TokenMatcher<'t> {
    table: &'t OptionTable,
    long_only: bool,
    posix: bool,
    result: ParseResult,
}

impl<'t> TokenMatcher<'t> {
    pub(crate) fn new(table: &'t OptionTable, long_only: bool, posix: bool) -> Self {
        Self {
            table,
            long_only,
            posix,
            result: ParseResult::default(),
        }
    }

    pub(crate) fn consume<S: AsRef<str>>(mut self, tokens: &[S]) -> ParseResult {
        let mut offset = 0;

        while offset < tokens.len() {
            let token: &str = tokens[offset].as_ref();
            let next: Option<&str> = tokens.get(offset + 1).map(|t| t.as_ref());
            offset += 1;

            // 1. The terminator ends option scanning; everything after it is an operand.
            if token == TERMINATOR {
                #[cfg(feature = "tracing_debug")]
                {
                    debug!("Terminator at {offset}, {n} operand(s) follow.", n = tokens.len() - offset);
                }

                self.push_operands(&tokens[offset..]);
                break;
            }

            // 2. Operands: anything not starting with '-', and the lone '-'.
            if token == STDIN_OPERAND || !token.starts_with(OPTION_PREFIX) {
                if self.posix {
                    #[cfg(feature = "tracing_debug")]
                    {
                        debug!("Operand '{token}' stops the scan (posix).");
                    }

                    self.push_operands(&tokens[offset - 1..]);
                    break;
                }

                self.result.operands.push(token.to_string());
                continue;
            }

            // 3/4. Long option or short option cluster.
            if self.feed(token, next) == Consumed::WithNext {
                offset += 1;
            }
        }

        self.result
    }

    fn feed(&mut self, token: &str, next: Option<&str>) -> Consumed {
        // Find a 'long' option, such as:
        //  --initial
        //  --initial ..
        //  --initial=..
        //  --ini (an unambiguous abbreviation)
        if let Some(body) = token.strip_prefix(LONG_PREFIX) {
            return self.match_option(token, body, next, false);
        }

        let body = &token[OPTION_PREFIX.len_utf8()..];

        // In long-only mode, '-initial' is a long option too, unless it is precisely a declared '-i'.
        if self.long_only && !self.is_lone_short(body) {
            return self.match_option(token, body, next, true);
        }

        // Find 'short' option(s), such as (both -i and -v are example short options):
        //  -i
        //  -i..
        //  -i ..
        //  -iv..
        //  -iv ..
        self.match_option_short(body, next)
    }

    fn is_lone_short(&self, body: &str) -> bool {
        let mut singles = body.chars();

        match (singles.next(), singles.next()) {
            (Some(single), None) => self.table.short(single).is_some(),
            _ => false,
        }
    }

    fn match_option(
        &mut self,
        token: &str,
        body: &str,
        next: Option<&str>,
        short_fallback: bool,
    ) -> Consumed {
        let (option_name, single_argument) = split_equals_delimiter(body);
        // The option as written, without any '=VALUE'.
        let written = &token[..token.len() - body.len() + option_name.len()];

        match self.table.long(option_name) {
            LongLookup::Exact(index) | LongLookup::Prefix(index) => {
                self.apply_option(index, token, written, single_argument, next)
            }
            LongLookup::Ambiguous(indices) => {
                let candidates = indices
                    .into_iter()
                    .filter_map(|index| self.table.spec(index).long_name())
                    .map(str::to_string)
                    .collect::<Vec<String>>();

                #[cfg(feature = "tracing_debug")]
                {
                    debug!("Option '{written}' is ambiguous amongst {candidates:?}.");
                }

                self.result
                    .diagnostics
                    .push(Diagnostic::ambiguous(written, candidates));
                Consumed::Token
            }
            LongLookup::Missing => {
                if short_fallback {
                    if let Some(single) = body.chars().next() {
                        if self.table.short(single).is_some() {
                            #[cfg(feature = "tracing_debug")]
                            {
                                debug!("No long option for '{token}', re-reading it as short options.");
                            }

                            return self.match_option_short(body, next);
                        }
                    }
                }

                self.result.diagnostics.push(Diagnostic::unknown(written));
                Consumed::Token
            }
        }
    }

    fn apply_option(
        &mut self,
        index: usize,
        token: &str,
        written: &str,
        single_argument: Option<&str>,
        next: Option<&str>,
    ) -> Consumed {
        match (self.table.spec(index).policy(), single_argument) {
            (ArgPolicy::NoArgument, Some(_)) => {
                // A value was attached to an option that takes none.
                self.result.diagnostics.push(Diagnostic::unknown(token));
                Consumed::Token
            }
            (ArgPolicy::NoArgument, None) => self.push_match(index, None, Consumed::Token),
            (ArgPolicy::RequiredArgument, Some(value)) => {
                self.push_match(index, Some(value), Consumed::Token)
            }
            (ArgPolicy::RequiredArgument, None) => match next {
                // The next token is taken as-is, even if it looks like an option.
                Some(value) => self.push_match(index, Some(value), Consumed::WithNext),
                None => {
                    self.result.diagnostics.push(Diagnostic::missing(written));
                    Consumed::Token
                }
            },
            (ArgPolicy::OptionalArgument, value) => self.push_match(index, value, Consumed::Token),
        }
    }

    fn match_option_short(&mut self, cluster: &str, next: Option<&str>) -> Consumed {
        for (position, single) in cluster.char_indices() {
            let index = match self.table.short(single) {
                Some(index) => index,
                None => {
                    // Abandon the rest of the cluster.
                    self.result
                        .diagnostics
                        .push(Diagnostic::unknown_short(single));
                    return Consumed::Token;
                }
            };
            let remaining = &cluster[position + single.len_utf8()..];

            match self.table.spec(index).policy() {
                ArgPolicy::NoArgument => {
                    self.push_match(index, None, Consumed::Token);
                }
                ArgPolicy::RequiredArgument => {
                    if !remaining.is_empty() {
                        return self.push_match(index, Some(remaining), Consumed::Token);
                    }

                    return match next {
                        Some(value) => self.push_match(index, Some(value), Consumed::WithNext),
                        None => {
                            self.result
                                .diagnostics
                                .push(Diagnostic::missing_short(single));
                            Consumed::Token
                        }
                    };
                }
                ArgPolicy::OptionalArgument => {
                    let value = if remaining.is_empty() {
                        None
                    } else {
                        Some(remaining)
                    };
                    return self.push_match(index, value, Consumed::Token);
                }
            }
        }

        Consumed::Token
    }

    fn push_match(&mut self, index: usize, value: Option<&str>, consumed: Consumed) -> Consumed {
        #[cfg(feature = "tracing_debug")]
        {
            debug!(
                "Matched '{key}' with value {value:?}.",
                key = self.table.spec(index).key()
            );
        }

        self.result.matches.push(Match::new(index, value));
        consumed
    }

    fn push_operands<S: AsRef<str>>(&mut self, tokens: &[S]) {
        self.result
            .operands
            .extend(tokens.iter().map(|t| AsRef::<str>::as_ref(t).to_string()));
    }
}

fn split_equals_delimiter(token: &str) -> (&str, Option<&str>) {
    match token.split_once(VALUE_DELIMITER) {
        Some((n, v)) => (n, Some(v)),
        None => (token, None),
    }
}
