//! Engine module for `dropt`.
//! See [documentation root](https://docs.rs/dropt/latest/dropt/index.html) for full details.
#![deny(missing_docs)]
mod api;
mod constant;
mod matcher;
mod model;
mod parser;
#[allow(missing_docs)]
pub mod prelude;

pub use api::*;
pub use matcher::{case_insensitive_match, exact_match, NameComparator};
pub use model::*;
pub use parser::*;

#[cfg(test)]
#[macro_use]
extern crate assert_matches;
