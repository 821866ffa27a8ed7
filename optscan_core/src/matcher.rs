mod api;
mod core;
mod model;

pub use api::*;
pub(crate) use self::core::*;
pub(crate) use model::*;
