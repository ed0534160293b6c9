//! stockroom-server: HTTP API for an inventory catalog
//!
//! Requests flow handler -> validation -> repository -> Postgres pool.
//! Every statement binds its values; SQL text is never assembled from input.

pub mod config;
pub mod db;
pub mod http;
pub mod models;

pub use config::{ConfigError, DatabaseConfig};
pub use http::{build_router, run_server, AppState, ServerConfig};
