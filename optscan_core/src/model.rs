/// Whether a declared option takes a value.
///
/// Mirrors the `has_arg` field of a C `struct option`, and the `x`, `x:`, `x::` forms of an option string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ArgPolicy {
    /// `x`: The option never takes a value.
    #[default]
    NoArgument,
    /// `x:`: The option always takes a value, either attached or as the next argument.
    RequiredArgument,
    /// `x::`: The option takes a value only when attached (`-xVALUE` or `--name=VALUE`).
    OptionalArgument,
}

impl std::fmt::Display for ArgPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Where a match for an option is routed once parsing has finished.
///
/// An option has at most one binding target.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum BindingTarget {
    /// Stored in the collector table, under [`OptionSpec::key`].
    #[default]
    None,
    /// Assigned to the named variable, resolved via [`crate::Environment::resolve`].
    Flag(String),
    /// Passed to the [`crate::prelude::Handler`] registered under this handle.
    Callback(String),
}

/// One declared option.
///
/// ### Example
/// ```
/// # use optscan_core as optscan;
/// use optscan::{ArgPolicy, OptionSpec};
///
/// let spec = OptionSpec::long("file")
///     .with_short('f')
///     .required()
///     .help("The file to read.");
///
/// assert_eq!(spec.short_name(), Some('f'));
/// assert_eq!(spec.long_name(), Some("file"));
/// assert_eq!(spec.policy(), ArgPolicy::RequiredArgument);
/// assert_eq!(spec.key(), "file");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OptionSpec {
    short: Option<char>,
    long: Option<String>,
    policy: ArgPolicy,
    target: BindingTarget,
    help: Option<String>,
    meta: Option<String>,
}

impl OptionSpec {
    /// Create a short-only option (ex: `-x`).
    pub fn short(short: char) -> Self {
        Self::new(Some(short), None)
    }

    /// Create a long-only option (ex: `--verbose`).
    pub fn long(long: impl Into<String>) -> Self {
        Self::new(None, Some(long.into()))
    }

    /// Create an option from its (optional) names.
    /// At least one name must be set by the time the option is handed to an [`crate::OptionParser`].
    pub fn new(short: Option<char>, long: Option<String>) -> Self {
        Self {
            short,
            long,
            policy: ArgPolicy::default(),
            target: BindingTarget::default(),
            help: None,
            meta: None,
        }
    }

    /// Set (or replace) the short name.
    pub fn with_short(mut self, short: char) -> Self {
        self.short.replace(short);
        self
    }

    /// Set (or replace) the long name.
    pub fn with_long(mut self, long: impl Into<String>) -> Self {
        self.long.replace(long.into());
        self
    }

    /// Set the argument policy.
    pub fn policy_of(mut self, policy: ArgPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Shorthand for [`ArgPolicy::RequiredArgument`].
    pub fn required(self) -> Self {
        self.policy_of(ArgPolicy::RequiredArgument)
    }

    /// Shorthand for [`ArgPolicy::OptionalArgument`].
    pub fn optional(self) -> Self {
        self.policy_of(ArgPolicy::OptionalArgument)
    }

    /// Bind matches of this option to the named variable.
    pub fn flag(mut self, name: impl Into<String>) -> Self {
        self.target = BindingTarget::Flag(name.into());
        self
    }

    /// Route matches of this option to the handler registered under `handle`.
    pub fn callback(mut self, handle: impl Into<String>) -> Self {
        self.target = BindingTarget::Callback(handle.into());
        self
    }

    /// Document the option for the usage message.
    /// If repeated, only the final help message will apply.
    pub fn help(mut self, description: impl Into<String>) -> Self {
        self.help.replace(description.into());
        self
    }

    /// Name the option's value in the usage message (default `ARG`).
    pub fn meta(mut self, meta: impl Into<String>) -> Self {
        self.meta.replace(meta.into());
        self
    }

    /// The short name, if any.
    pub fn short_name(&self) -> Option<char> {
        self.short
    }

    /// The long name, if any.
    pub fn long_name(&self) -> Option<&str> {
        self.long.as_deref()
    }

    /// The argument policy.
    pub fn policy(&self) -> ArgPolicy {
        self.policy
    }

    /// The binding target.
    pub fn target(&self) -> &BindingTarget {
        &self.target
    }

    pub(crate) fn help_text(&self) -> Option<&str> {
        self.help.as_deref()
    }

    pub(crate) fn meta_text(&self) -> &str {
        self.meta.as_deref().unwrap_or("ARG")
    }

    /// The name this option is collected under: the long name when present, otherwise the short name.
    pub fn key(&self) -> String {
        match (&self.long, &self.short) {
            (Some(long), _) => long.clone(),
            (None, Some(short)) => short.to_string(),
            (None, None) => String::default(),
        }
    }
}

/// A value produced for a matched option.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Value {
    /// The option was present without a value.
    Switch,
    /// The option was present with this value.
    Text(String),
}

impl From<Option<&str>> for Value {
    fn from(value: Option<&str>) -> Self {
        match value {
            Some(text) => Value::Text(text.to_string()),
            None => Value::Switch,
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Switch => write!(f, "true"),
            Value::Text(text) => write!(f, "{text}"),
        }
    }
}
