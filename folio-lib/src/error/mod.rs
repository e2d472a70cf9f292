//! Error types

mod save;
mod shape;
mod table;

pub use save::*;
pub use shape::*;
pub use table::*;
