mod error;
mod interface;
mod printer;

pub use error::*;
pub use interface::*;
pub use printer::*;
