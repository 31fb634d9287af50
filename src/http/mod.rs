//! HTTP server layer
//!
//! Axum server with:
//! - Uniform JSON response envelope
//! - CORS and request tracing
//! - Graceful shutdown

pub mod error;
pub mod extractors;
pub mod response;
pub mod routes;
pub mod server;

pub use error::ApiError;
pub use response::ApiResponse;
pub use server::{run_server, AppState, ServerConfig};
