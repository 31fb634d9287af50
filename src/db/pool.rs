//! Database connection pool
//!
//! One fixed-size sqlx PgPool shared by every request; checkout beyond
//! the limit queues.

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

/// Maximum connections held by the pool.
const MAX_CONNECTIONS: u32 = 10;

/// Create the PostgreSQL connection pool.
///
/// # Errors
///
/// Returns an error if the initial connection fails.
pub async fn create_pool(database_url: &str) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(MAX_CONNECTIONS)
        .connect(database_url)
        .await
}
