//! Item repository
//!
//! CRUD over the `items` table:
//! - create: INSERT ... RETURNING (store assigns the id)
//! - update: UPDATE ... RETURNING (reports whether a row matched)
//! - delete: reports rows affected so callers can detect absence

use async_trait::async_trait;
use sqlx::{FromRow, PgPool};

use super::DbError;
use crate::models::NewItem;

const INSERT_ITEM: &str = r#"
    INSERT INTO items (name, description, price, stock_quantity)
    VALUES ($1, $2, $3, $4)
    RETURNING id, name, description, price, stock_quantity
"#;

const SELECT_ITEMS: &str = r#"
    SELECT id, name, description, price, stock_quantity
    FROM items
    ORDER BY id
"#;

const SELECT_ITEM_BY_ID: &str = r#"
    SELECT id, name, description, price, stock_quantity
    FROM items
    WHERE id = $1
"#;

const UPDATE_ITEM: &str = r#"
    UPDATE items
    SET name = $1, description = $2, price = $3, stock_quantity = $4
    WHERE id = $5
    RETURNING id, name, description, price, stock_quantity
"#;

const DELETE_ITEM: &str = "DELETE FROM items WHERE id = $1";

/// Item record from database
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct InventoryItem {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub stock_quantity: i32,
}

/// Typed data access for inventory items.
///
/// Implementations hold no state across calls beyond the store handle.
#[async_trait]
pub trait ItemStore: Send + Sync {
    /// Insert a row; the store assigns the id.
    async fn create(&self, item: &NewItem) -> Result<InventoryItem, DbError>;

    /// All rows, ordered by id.
    async fn find_all(&self) -> Result<Vec<InventoryItem>, DbError>;

    /// `None` when no row has this id.
    async fn find_by_id(&self, id: i64) -> Result<Option<InventoryItem>, DbError>;

    /// Replace every mutable field of the row.
    ///
    /// Returns `None` without touching the store when no row has this id.
    async fn update(&self, id: i64, item: &NewItem) -> Result<Option<InventoryItem>, DbError>;

    /// Number of rows removed (0 or 1).
    async fn delete(&self, id: i64) -> Result<u64, DbError>;
}

/// Postgres-backed item repository
#[derive(Clone)]
pub struct ItemRepo {
    pool: PgPool,
}

impl ItemRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ItemStore for ItemRepo {
    #[tracing::instrument(skip_all)]
    async fn create(&self, item: &NewItem) -> Result<InventoryItem, DbError> {
        let created = sqlx::query_as::<_, InventoryItem>(INSERT_ITEM)
            .bind(item.name())
            .bind(item.description())
            .bind(item.price())
            .bind(item.stock_quantity())
            .fetch_one(&self.pool)
            .await?;

        tracing::debug!(id = created.id, "inserted item");
        Ok(created)
    }

    #[tracing::instrument(skip_all)]
    async fn find_all(&self) -> Result<Vec<InventoryItem>, DbError> {
        let items = sqlx::query_as::<_, InventoryItem>(SELECT_ITEMS)
            .fetch_all(&self.pool)
            .await?;
        Ok(items)
    }

    #[tracing::instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> Result<Option<InventoryItem>, DbError> {
        let item = sqlx::query_as::<_, InventoryItem>(SELECT_ITEM_BY_ID)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(item)
    }

    #[tracing::instrument(skip(self, item))]
    async fn update(&self, id: i64, item: &NewItem) -> Result<Option<InventoryItem>, DbError> {
        let updated = sqlx::query_as::<_, InventoryItem>(UPDATE_ITEM)
            .bind(item.name())
            .bind(item.description())
            .bind(item.price())
            .bind(item.stock_quantity())
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        if updated.is_none() {
            tracing::debug!("update matched no row");
        }
        Ok(updated)
    }

    #[tracing::instrument(skip(self))]
    async fn delete(&self, id: i64) -> Result<u64, DbError> {
        let result = sqlx::query(DELETE_ITEM).bind(id).execute(&self.pool).await?;
        Ok(result.rows_affected())
    }
}
