//! Repository implementations for database access

pub mod records;

pub use records::{DbError, RecordRepo};
