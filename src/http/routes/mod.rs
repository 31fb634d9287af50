//! Route handlers

pub mod books;
pub mod health;
