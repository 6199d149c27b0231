//! # formfill Core
//!
//! Finds the fillable controls of a [`Document`](formfill_dom::Document),
//! describes them for a [`ValueGenerator`](formfill_protocols::ValueGenerator),
//! and writes the generated values back with the events a user edit would
//! produce.
//!
//! One fill operation is strictly sequential: scan, one generator call,
//! fill. The document is borrowed mutably for the whole operation.

mod filler;
mod label;
mod pipeline;
mod scanner;

pub use filler::{FillAction, apply_value, locate_field};
pub use label::infer_label;
pub use pipeline::FormFiller;
pub use scanner::{FIELD_TAGS, FieldScanner};
