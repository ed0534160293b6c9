//! Repository implementations for database access
//!
//! Handlers talk to the `ItemStore` trait; `ItemRepo` is the Postgres
//! implementation. Absence is a value (`None`, zero rows), never an error.

pub mod items;

pub use items::{InventoryItem, ItemRepo, ItemStore};

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),
}
