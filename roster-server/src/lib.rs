//! roster-server: HTTP server for person records
//!
//! Validates form input, persists records in SQLite and maps
//! results back to JSON responses.

pub mod db;
pub mod http;
pub mod models;

pub use http::{build_router, run_server, ApiError, AppState, ServerConfig, ServerError};
pub use models::{validate, Record, RecordInput, ValidationError};
