//! Schema bootstrap for the items table
//!
//! Idempotent; safe to run on every startup. Column checks mirror the
//! validation rules so the store rejects rows the API would reject.

use sqlx::PgPool;

use super::DbError;

const CREATE_ITEMS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS items (
        id BIGSERIAL PRIMARY KEY,
        name TEXT NOT NULL CHECK (char_length(name) >= 3),
        description TEXT,
        price DOUBLE PRECISION NOT NULL CHECK (price > 0),
        stock_quantity INTEGER NOT NULL CHECK (stock_quantity >= 0)
    )
"#;

/// Create the items table if it does not exist yet.
pub async fn ensure_schema(pool: &PgPool) -> Result<(), DbError> {
    tracing::info!("Ensuring items table exists");
    sqlx::query(CREATE_ITEMS_TABLE).execute(pool).await?;
    Ok(())
}
