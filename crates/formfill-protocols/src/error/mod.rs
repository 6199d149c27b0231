//! Error types for the formfill protocol layer.

mod fill;
mod generation;

pub use fill::*;
pub use generation::*;
