//! # formfill Protocols
//!
//! Types and traits shared by the formfill crates.
//! Contains only data definitions and interfaces - no implementations.
//!
//! ## Core Types
//!
//! - [`FieldDescriptor`] - Metadata describing one eligible form control
//! - [`GeneratedValue`] - One synthetic value, aligned by position with a descriptor
//! - [`FillSummary`] - Result reported back to the control surface
//! - [`PageMessage`] - Inbound trigger message
//!
//! ## Core Traits
//!
//! - [`ValueGenerator`] - Produces one value per field descriptor

pub mod error;
pub mod generator;
pub mod types;

pub use error::{FillError, GenerationError};
pub use generator::ValueGenerator;
pub use types::*;
