//! bookshelf-server: HTTP CRUD API for a book catalog
//!
//! Request validation, a single `books` table behind a PgPool, and a
//! uniform JSON response envelope.

pub mod config;
pub mod db;
pub mod http;
pub mod models;

pub use config::Config;
pub use http::{run_server, AppState, ServerConfig};
