//! Database connection pool management

mod postgres;

pub use postgres::{create_pool, create_pool_from_env, run_migrations};

// Re-export the shared config and PgPool for convenience
pub use garden_common::config::DatabaseConfig;
pub use sqlx::postgres::PgPool;
