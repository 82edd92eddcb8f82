//! Validation Engine
//!
//! Accept/reject policy for parsed deck lines, kept apart from parsing.

pub mod engine;

pub use engine::{validate_document, validate_line, ValidationResult};
