//! Database layer - connection pool, schema, and repositories
//!
//! - Connection pool with an explicit limit
//! - Rely on DB constraints, handle violations - no check-then-insert
//! - Ordering is always by id so paging is stable

pub mod pool;
pub mod migrations;
pub mod repos;

pub use pool::{create_pool, create_pool_with_options, ping, DEFAULT_MAX_CONNECTIONS};
pub use repos::*;
pub use sqlx::PgPool;
