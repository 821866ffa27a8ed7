//! Traits which, typically, may be imported without concern: `use optscan::prelude::*`.

/// Caller code that receives the matches of a [`crate::BindingTarget::Callback`] option.
///
/// Any `FnMut(&str, Option<&str>) -> Result<(), String>` is a `Handler`.
// Needs to be imported in order to implement a custom `Handler`.
pub trait Handler {
    /// Receive one match: the option's key, and its value (if any).
    /// An `Err` is reported as a diagnostic against the option; binding carries on.
    fn handle(&mut self, key: &str, value: Option<&str>) -> Result<(), String>;
}

impl<F> Handler for F
where
    F: FnMut(&str, Option<&str>) -> Result<(), String>,
{
    fn handle(&mut self, key: &str, value: Option<&str>) -> Result<(), String> {
        self(key, value)
    }
}
