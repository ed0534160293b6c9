//! Item endpoints
//!
//! Each handler is a straight pipeline: validate, call the store, shape the
//! response. Validation failures never reach the store.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::db::repos::InventoryItem;
use crate::http::error::ApiError;
use crate::http::extractors::{parse_item_id, ItemId, JsonBody};
use crate::http::server::AppState;
use crate::models::NewItem;

/// Item response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemResponse {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub stock_quantity: i32,
}

impl From<InventoryItem> for ItemResponse {
    fn from(item: InventoryItem) -> Self {
        Self {
            id: item.id,
            name: item.name,
            description: item.description,
            price: item.price,
            stock_quantity: item.stock_quantity,
        }
    }
}

/// GET /items - list every item
async fn list_items(State(state): State<AppState>) -> Result<Json<Vec<ItemResponse>>, ApiError> {
    let items = state.items.find_all().await?;
    Ok(Json(items.into_iter().map(ItemResponse::from).collect()))
}

/// POST /items - create an item, returning it with its new id
async fn create_item(
    State(state): State<AppState>,
    JsonBody(body): JsonBody,
) -> Result<(StatusCode, Json<ItemResponse>), ApiError> {
    let item = NewItem::from_json(&body)?;
    let created = state.items.create(&item).await?;
    tracing::info!(id = created.id, "item created");

    Ok((StatusCode::CREATED, Json(ItemResponse::from(created))))
}

/// GET /items/{id} - get a single item
async fn get_item(
    State(state): State<AppState>,
    ItemId(id): ItemId,
) -> Result<Json<ItemResponse>, ApiError> {
    let item = state
        .items
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::item_not_found(id))?;

    Ok(Json(ItemResponse::from(item)))
}

/// PUT /items/{id} - replace every field of an existing item
///
/// The body is validated before the id is parsed, so an invalid body is a
/// 400 even on a path no row can match. The write itself reports whether
/// the row existed, so there is no gap between an existence check and the
/// update.
async fn update_item(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    JsonBody(body): JsonBody,
) -> Result<Json<ItemResponse>, ApiError> {
    let item = NewItem::from_json(&body)?;
    let id = parse_item_id(&raw_id)?;
    let updated = state
        .items
        .update(id, &item)
        .await?
        .ok_or_else(|| ApiError::item_not_found(id))?;
    tracing::info!(id, "item updated");

    Ok(Json(ItemResponse::from(updated)))
}

/// DELETE /items/{id}
async fn delete_item(
    State(state): State<AppState>,
    ItemId(id): ItemId,
) -> Result<StatusCode, ApiError> {
    if state.items.delete(id).await? == 0 {
        return Err(ApiError::item_not_found(id));
    }
    tracing::info!(id, "item deleted");

    Ok(StatusCode::NO_CONTENT)
}

/// Item routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/items", get(list_items).post(create_item))
        .route(
            "/items/{id}",
            get(get_item).put(update_item).delete(delete_item),
        )
}
