//! Domain models with validation at construction
//!
//! Name/age input is validated when building a `RecordInput`.
//! Invalid input returns ValidationError, not panic.

pub mod record;
pub mod validation;

pub use record::{Record, RecordInput};
pub use validation::{validate, ValidationError, MAX_AGE, MAX_NAME_CHARS};
