//! Data types exchanged between the scanner, the generator and the control surface.

mod field;
mod message;
mod summary;
mod value;

pub use field::*;
pub use message::*;
pub use summary::*;
pub use value::*;
