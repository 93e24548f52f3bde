//! Core data models.

mod category;
mod player;
mod report;

pub use category::*;
pub use player::*;
pub use report::*;
