//! Traits which, typically, may be imported without concern: `use dropt::prelude::*`.

/// Behaviour to convert an option's value and store it into a caller-owned destination.
// Needs to be imported in order to implement a custom handler.
pub use crate::api::ValueHandler;
/// Behaviour to report parse outcomes to the user.
pub use crate::parser::UserInterface;
