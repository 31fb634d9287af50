use std::net::SocketAddr;

use anyhow::{anyhow, Context};
use tracing_subscriber::EnvFilter;

use bookshelf_server::config::Config;
use bookshelf_server::db;
use bookshelf_server::http::{run_server, ServerConfig};

/// Console tracing with RUST_LOG override (default: info).
fn init_tracing() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .compact()
        .try_init()
        .map_err(|err| anyhow!(err))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing()?;

    let config = Config::from_env();

    db::migrations::ensure_database(&config.db)
        .await
        .context("failed to create database")?;

    let pool = db::create_pool(&config.db.url())
        .await
        .context("failed to connect to database")?;

    db::migrations::run(&pool)
        .await
        .context("failed to initialize schema")?;

    let server = ServerConfig {
        bind_addr: SocketAddr::from(([0, 0, 0, 0], config.port)),
    };

    run_server(pool, server).await.context("server error")?;

    Ok(())
}
