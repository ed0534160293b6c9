//! Database layer - connection pool, schema bootstrap and repositories
//!
//! # Design Principles
//!
//! - One explicitly constructed pool, handed to repositories by value
//! - Every statement binds its values ($1..$n); SQL text is constant
//! - Writes are single statements; existence is reported by the write itself

pub mod pool;
pub mod repos;
pub mod schema;

pub use pool::create_pool;
pub use repos::*;
pub use schema::ensure_schema;
