//! Design validation.

mod validate;

pub use validate::{quick_validate, validate_design, ValidationResult};
