mod core;
mod cursor;
mod table;
mod token;

pub(crate) use self::core::*;
pub(crate) use table::OptionTable;
pub use table::{case_insensitive_match, exact_match, NameComparator};
