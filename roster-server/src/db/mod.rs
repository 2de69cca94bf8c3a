//! Database layer - connection pool, schema and repositories
//!
//! - Connection pool, no Arc<Mutex<Connection>>
//! - Parameterized statements only
//! - Not-found is decided from rows affected, no check-then-write

pub mod pool;
pub mod repos;
pub mod schema;

pub use pool::{create_pool, create_pool_with_options, DEFAULT_MAX_CONNECTIONS};
pub use repos::*;
