use std::collections::HashMap;
use thiserror::Error;

use crate::constant::*;
use crate::model::{ArgPolicy, BindingTarget, OptionSpec};

#[derive(Debug, Error, PartialEq, Eq)]
pub(crate) enum TableError {
    #[error("Option #{0} has neither a short nor a long name.")]
    Unnamed(usize),

    #[error("Invalid short option '{0}'.")]
    InvalidShortOption(char),

    #[error("Invalid long option '{0}'.")]
    InvalidLongOption(String),

    #[error("Cannot duplicate the short option '{0}'.")]
    DuplicateShortOption(char),

    #[error("Cannot duplicate the option '{0}'.")]
    DuplicateOption(String),

    #[error("Option '{0}' cannot bind a flag with an optional argument.")]
    InconsistentFlag(String),
}

/// Outcome of looking up a (possibly abbreviated) long name.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum LongLookup {
    Exact(usize),
    Prefix(usize),
    Ambiguous(Vec<usize>),
    Missing,
}

/// The validated, indexed form of the declared options.
#[derive(Debug, Clone)]
pub(crate) struct OptionTable {
    specs: Vec<OptionSpec>,
    short_options: HashMap<char, usize>,
    long_options: Vec<(String, usize)>,
}

impl OptionTable {
    pub(crate) fn new(specs: Vec<OptionSpec>) -> Result<Self, TableError> {
        let mut short_options = HashMap::default();
        let mut long_options: Vec<(String, usize)> = Vec::default();

        for (index, spec) in specs.iter().enumerate() {
            if spec.short_name().is_none() && spec.long_name().is_none() {
                return Err(TableError::Unnamed(index));
            }

            if let Some(short) = spec.short_name() {
                if !valid_short(short) {
                    return Err(TableError::InvalidShortOption(short));
                }

                if short_options.insert(short, index).is_some() {
                    return Err(TableError::DuplicateShortOption(short));
                }
            }

            if let Some(long) = spec.long_name() {
                if long.is_empty() || long.contains(VALUE_DELIMITER) {
                    return Err(TableError::InvalidLongOption(long.to_string()));
                }

                if long_options.iter().any(|(name, _)| name == long) {
                    return Err(TableError::DuplicateOption(long.to_string()));
                }

                long_options.push((long.to_string(), index));
            }

            if matches!(spec.target(), BindingTarget::Flag(_))
                && spec.policy() == ArgPolicy::OptionalArgument
            {
                return Err(TableError::InconsistentFlag(spec.key()));
            }
        }

        Ok(Self {
            specs,
            short_options,
            long_options,
        })
    }

    pub(crate) fn specs(&self) -> &[OptionSpec] {
        &self.specs
    }

    pub(crate) fn spec(&self, index: usize) -> &OptionSpec {
        &self.specs[index]
    }

    pub(crate) fn short(&self, short: char) -> Option<usize> {
        self.short_options.get(&short).copied()
    }

    pub(crate) fn long(&self, candidate: &str) -> LongLookup {
        if candidate.is_empty() {
            return LongLookup::Missing;
        }

        let mut prefixed = Vec::default();

        for (name, index) in &self.long_options {
            if name == candidate {
                return LongLookup::Exact(*index);
            }

            if name.starts_with(candidate) {
                prefixed.push(*index);
            }
        }

        match prefixed.len() {
            0 => LongLookup::Missing,
            1 => LongLookup::Prefix(prefixed[0]),
            _ => LongLookup::Ambiguous(prefixed),
        }
    }
}

fn valid_short(short: char) -> bool {
    !short.is_control()
        && !short.is_whitespace()
        && short != OPTION_PREFIX
        && short != UNKNOWN_MARKER
        && short != MISSING_MARKER
}
