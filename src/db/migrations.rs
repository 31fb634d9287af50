//! Startup schema bootstrap
//!
//! The database and the books table are created idempotently; existing
//! objects are left untouched. Failures here are fatal to startup.

use sqlx::{Connection, Executor, PgConnection, PgPool};

use crate::config::DbConfig;

/// Create the target database if it does not exist yet.
///
/// Runs over a direct connection to the maintenance database, since
/// CREATE DATABASE cannot target the database the pool connects to.
pub async fn ensure_database(db: &DbConfig) -> Result<(), sqlx::Error> {
    let mut conn = PgConnection::connect(&db.admin_url()).await?;

    let exists: bool =
        sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
            .bind(&db.name)
            .fetch_one(&mut conn)
            .await?;

    if !exists {
        // Identifier, not a bind parameter; escape embedded quotes.
        let quoted = db.name.replace('"', "\"\"");
        conn.execute(format!(r#"CREATE DATABASE "{quoted}""#).as_str())
            .await?;
        tracing::info!(database = %db.name, "Database created");
    }

    conn.close().await?;
    Ok(())
}

/// Create the books table and its indexes if absent.
pub async fn run(pool: &PgPool) -> Result<(), sqlx::Error> {
    tracing::info!("Running schema bootstrap...");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS books (
            id BIGSERIAL PRIMARY KEY,
            title VARCHAR(255) NOT NULL,
            author VARCHAR(255) NOT NULL,
            isbn VARCHAR(20) UNIQUE,
            published_year INT,
            publisher VARCHAR(255),
            language VARCHAR(50) DEFAULT 'English',
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
            updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    )
    .execute(pool)
    .await?;

    // List and search order by recency
    sqlx::query("CREATE INDEX IF NOT EXISTS idx_books_created ON books(created_at DESC)")
        .execute(pool)
        .await?;

    tracing::info!("Schema bootstrap complete");
    Ok(())
}
