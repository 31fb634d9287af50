//! Persistence layer: pool construction, startup DDL, repositories

pub mod migrations;
pub mod pool;
pub mod repos;

pub use pool::create_pool;
pub use repos::{BookRepo, DbError};
