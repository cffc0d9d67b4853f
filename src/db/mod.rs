//! Database layer: pool and schema bootstrap for PostgreSQL.

mod pool;

pub use pool::{create_pool, ensure_schema, DbPool};
