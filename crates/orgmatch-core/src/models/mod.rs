//! Domain models for company identity resolution.

mod identity;
mod resolution;

pub use identity::*;
pub use resolution::*;
