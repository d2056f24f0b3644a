mod context;
mod handler;
mod spec;

pub use context::*;
pub use handler::*;
pub use spec::*;
