use std::collections::{BTreeMap, HashMap};
use thiserror::Error;

use crate::api::OptionParser;
use crate::matcher::{Diagnostic, ParseResult};
use crate::model::{BindingTarget, Value};
use crate::parser::ConfigError;
use crate::prelude::Handler;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

#[derive(Debug, Error, PartialEq, Eq)]
pub(crate) enum BindingError {
    #[error("No handler is registered for the callback '{0}'.")]
    UnregisteredHandler(String),
    #[error("Match #{0} does not belong to this parser.")]
    ForeignMatch(usize),
}

/// One lexical level of named variables.
///
/// A variable may be declared without a value; it still captures assignments to its name.
///
/// ### Example
/// ```
/// # use optscan_core as optscan;
/// use optscan::{Scope, Value};
///
/// let scope = Scope::new()
///     .declare("verbose")
///     .define("output", Value::Text("-".to_string()));
///
/// assert!(scope.declares("verbose"));
/// assert_eq!(scope.get("verbose"), None);
/// assert_eq!(scope.get("output"), Some(&Value::Text("-".to_string())));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scope {
    variables: HashMap<String, Option<Value>>,
}

impl Scope {
    /// Create an empty scope.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a variable, without a value.
    pub fn declare(mut self, name: impl Into<String>) -> Self {
        self.variables.entry(name.into()).or_insert(None);
        self
    }

    /// Declare a variable with an initial value.
    pub fn define(mut self, name: impl Into<String>, value: Value) -> Self {
        self.variables.insert(name.into(), Some(value));
        self
    }

    /// Whether this scope declares `name`.
    pub fn declares(&self, name: &str) -> bool {
        self.variables.contains_key(name)
    }

    /// The current value of `name`, if declared here and set.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.variables.get(name).and_then(Option::as_ref)
    }

    fn set(&mut self, name: &str, value: Value) {
        if let Some(slot) = self.variables.get_mut(name) {
            slot.replace(value);
        }
    }
}

/// Where a variable name resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// The scope `depth` levels out from the innermost (`0`).
    Local {
        /// Distance from the innermost scope.
        depth: usize,
    },
    /// No scope declares the name; the global slot is used.
    Global,
}

/// The variables visible to [`BindingTarget::Flag`] options: a chain of lexical scopes over a global table.
///
/// ### Example
/// ```
/// # use optscan_core as optscan;
/// use optscan::{Environment, Resolution, Scope, Value};
///
/// let mut environment = Environment::new();
/// environment.push(Scope::new().declare("verbose"));
/// environment.push(Scope::new().declare("quiet"));
///
/// assert_eq!(environment.resolve("quiet"), Resolution::Local { depth: 0 });
/// assert_eq!(environment.resolve("verbose"), Resolution::Local { depth: 1 });
/// assert_eq!(environment.resolve("debug"), Resolution::Global);
///
/// environment.assign("debug", Value::Switch);
/// assert_eq!(environment.globals().get("debug"), Some(&Value::Switch));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Environment {
    // Outermost first.
    scopes: Vec<Scope>,
    globals: HashMap<String, Value>,
}

impl Environment {
    /// Create an environment with no scopes and no globals.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enter a new innermost scope.
    pub fn push(&mut self, scope: Scope) {
        self.scopes.push(scope);
    }

    /// Leave the innermost scope, returning it.
    pub fn pop(&mut self) -> Option<Scope> {
        self.scopes.pop()
    }

    /// The global variables.
    pub fn globals(&self) -> &HashMap<String, Value> {
        &self.globals
    }

    /// The scope `depth` levels out from the innermost.
    pub fn scope(&self, depth: usize) -> Option<&Scope> {
        self.scopes.iter().rev().nth(depth)
    }

    /// Find the innermost scope that declares `name`, walking outward.
    /// Names no scope declares resolve to the global slot.
    pub fn resolve(&self, name: &str) -> Resolution {
        match self
            .scopes
            .iter()
            .rev()
            .position(|scope| scope.declares(name))
        {
            Some(depth) => Resolution::Local { depth },
            None => Resolution::Global,
        }
    }

    /// Assign `value` to wherever `name` resolves.
    pub fn assign(&mut self, name: &str, value: Value) -> Resolution {
        let resolution = self.resolve(name);

        match resolution {
            Resolution::Local { depth } => {
                let index = self.scopes.len() - 1 - depth;
                self.scopes[index].set(name, value);
            }
            Resolution::Global => {
                self.globals.insert(name.to_string(), value);
            }
        }

        resolution
    }

    /// The value `name` resolves to, if set.
    pub fn get(&self, name: &str) -> Option<&Value> {
        match self.resolve(name) {
            Resolution::Local { depth } => self.scope(depth).and_then(|scope| scope.get(name)),
            Resolution::Global => self.globals.get(name),
        }
    }
}

/// What a binding pass produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bindings {
    /// Values of [`BindingTarget::None`] options, under [`crate::OptionSpec::key`].
    /// When an option repeats, the last match wins.
    pub collected: BTreeMap<String, Value>,
    /// Handler failures, in match order.
    pub diagnostics: Vec<Diagnostic>,
}

impl Bindings {
    /// `true` iff no handler failed.
    pub fn ok(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

/// Routes the matches of a parse to their [`BindingTarget`]s.
///
/// ### Example
/// ```
/// # use optscan_core as optscan;
/// use optscan::{Binder, Environment, OptionParser, OptionSpec, Scope, Value};
///
/// let mut levels: Vec<String> = Vec::default();
/// let parser = OptionParser::new(vec![
///     OptionSpec::short('a'),
///     OptionSpec::long("verbose").flag("verbose"),
///     OptionSpec::long("level").required().callback("level"),
/// ])
/// .unwrap();
/// let result = parser.parse_tokens(&["-a", "--verbose", "--level", "3"]);
///
/// let mut environment = Environment::new();
/// environment.push(Scope::new().declare("verbose"));
/// let mut binder = Binder::new().handler(
///     "level",
///     |_key: &str, value: Option<&str>| -> Result<(), String> {
///         levels.push(value.unwrap_or_default().to_string());
///         Ok(())
///     },
/// );
/// let bindings = binder.bind(&parser, &result, &mut environment).unwrap();
/// drop(binder);
///
/// assert!(bindings.ok());
/// assert_eq!(bindings.collected.get("a"), Some(&Value::Switch));
/// assert_eq!(environment.get("verbose"), Some(&Value::Switch));
/// assert_eq!(levels, vec!["3".to_string()]);
/// ```
#[derive(Default)]
pub struct Binder<'h> {
    handlers: HashMap<String, Box<dyn Handler + 'h>>,
}

impl<'h> std::fmt::Debug for Binder<'h> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut handles: Vec<&String> = self.handlers.keys().collect();
        handles.sort();
        f.debug_struct("Binder").field("handlers", &handles).finish()
    }
}

impl<'h> Binder<'h> {
    /// Create a binder without any handlers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `handler` under `handle`.
    /// If repeated, only the final handler will apply.
    pub fn handler(mut self, handle: impl Into<String>, handler: impl Handler + 'h) -> Self {
        self.handlers.insert(handle.into(), Box::new(handler));
        self
    }

    /// Route every match in `result` (produced by `parser`) to its target, in match order.
    ///
    /// Fails, before routing anything, when an option names a callback handle that has no registered handler,
    /// or when `result` holds a match for an option `parser` does not declare.
    pub fn bind(
        &mut self,
        parser: &OptionParser,
        result: &ParseResult,
        environment: &mut Environment,
    ) -> Result<Bindings, ConfigError> {
        if let Some(matched) = result
            .matches
            .iter()
            .find(|m| m.index >= parser.specs().len())
        {
            return Err(BindingError::ForeignMatch(matched.index).into());
        }

        for spec in parser.specs() {
            if let BindingTarget::Callback(handle) = spec.target() {
                if !self.handlers.contains_key(handle) {
                    return Err(BindingError::UnregisteredHandler(handle.clone()).into());
                }
            }
        }

        let mut bindings = Bindings::default();

        for matched in &result.matches {
            let spec = parser.spec(matched);
            let key = spec.key();
            let value = matched.value.as_deref();

            match spec.target() {
                BindingTarget::None => {
                    bindings.collected.insert(key, Value::from(value));
                }
                BindingTarget::Flag(name) => {
                    let _resolution = environment.assign(name, Value::from(value));

                    #[cfg(feature = "tracing_debug")]
                    {
                        debug!("Bound '{key}' to '{name}' ({_resolution:?}).");
                    }
                }
                BindingTarget::Callback(handle) => {
                    let handler = self.handlers.get_mut(handle).unwrap_or_else(|| {
                        unreachable!("internal error - handler '{handle}' checked before binding")
                    });

                    if let Err(message) = handler.handle(&key, value) {
                        #[cfg(feature = "tracing_debug")]
                        {
                            debug!("Handler '{handle}' rejected '{key}': {message}.");
                        }

                        bindings
                            .diagnostics
                            .push(Diagnostic::handler_failed(spec, message));
                    }
                }
            }
        }

        Ok(bindings)
    }
}
