//! Repository implementations for database access
//!
//! Every statement is parameterized; absent rows surface as `None`
//! rather than errors, and storage-level conflicts carry their own
//! variant so handlers can map them cleanly.

pub mod books;

pub use books::{BookRepo, DbError};
