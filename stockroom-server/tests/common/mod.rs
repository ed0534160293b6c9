//! Shared test doubles and request helpers
#![allow(dead_code)]

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;

use sqlx::PgPool;
use stockroom_server::db::{create_pool, ensure_schema, DbError, InventoryItem, ItemStore};
use stockroom_server::models::NewItem;
use stockroom_server::{build_router, AppState, DatabaseConfig};

/// Database settings for tests that need a real Postgres.
///
/// Reads the same variables as the CLI (`DB_HOST`, `DB_PORT`, `DB_USER`,
/// `DB_PASSWORD`, `DB_NAME`); anything unset keeps its default.
pub fn test_db_config() -> DatabaseConfig {
    let defaults = DatabaseConfig::default();
    let var = |name: &str, fallback: String| std::env::var(name).unwrap_or(fallback);

    DatabaseConfig {
        host: var("DB_HOST", defaults.host),
        port: std::env::var("DB_PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(defaults.port),
        user: var("DB_USER", defaults.user),
        password: var("DB_PASSWORD", defaults.password),
        database: var("DB_NAME", defaults.database),
        max_connections: 5,
        acquire_timeout: Duration::from_secs(5),
    }
}

/// Pool built through `create_pool`, with the items table in place.
pub async fn test_pool() -> PgPool {
    let config = test_db_config();
    config.validate().expect("invalid test database config");
    let pool = create_pool(&config).await.expect("pool creation failed");
    ensure_schema(&pool).await.expect("schema bootstrap failed");
    pool
}

/// Combine a store-assigned id with validated fields.
pub fn record(id: i64, item: &NewItem) -> InventoryItem {
    InventoryItem {
        id,
        name: item.name().to_owned(),
        description: item.description().map(str::to_owned),
        price: item.price(),
        stock_quantity: item.stock_quantity(),
    }
}

/// In-memory item store with sequence-style ids (never reused).
#[derive(Default)]
pub struct MemoryStore {
    rows: Mutex<BTreeMap<i64, InventoryItem>>,
    last_id: AtomicI64,
    calls: AtomicUsize,
}

impl MemoryStore {
    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }

    /// Number of store calls made so far
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn touch(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl ItemStore for MemoryStore {
    async fn create(&self, item: &NewItem) -> Result<InventoryItem, DbError> {
        self.touch();
        let id = self.last_id.fetch_add(1, Ordering::SeqCst) + 1;
        let row = record(id, item);
        self.rows.lock().unwrap().insert(id, row.clone());
        Ok(row)
    }

    async fn find_all(&self) -> Result<Vec<InventoryItem>, DbError> {
        self.touch();
        Ok(self.rows.lock().unwrap().values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<InventoryItem>, DbError> {
        self.touch();
        Ok(self.rows.lock().unwrap().get(&id).cloned())
    }

    async fn update(&self, id: i64, item: &NewItem) -> Result<Option<InventoryItem>, DbError> {
        self.touch();
        let mut rows = self.rows.lock().unwrap();
        Ok(rows.get_mut(&id).map(|row| {
            *row = record(id, item);
            row.clone()
        }))
    }

    async fn delete(&self, id: i64) -> Result<u64, DbError> {
        self.touch();
        Ok(u64::from(self.rows.lock().unwrap().remove(&id).is_some()))
    }
}

/// Store whose every call fails as if the pool were exhausted.
pub struct FailingStore;

#[async_trait]
impl ItemStore for FailingStore {
    async fn create(&self, _item: &NewItem) -> Result<InventoryItem, DbError> {
        Err(sqlx::Error::PoolTimedOut.into())
    }

    async fn find_all(&self) -> Result<Vec<InventoryItem>, DbError> {
        Err(sqlx::Error::PoolTimedOut.into())
    }

    async fn find_by_id(&self, _id: i64) -> Result<Option<InventoryItem>, DbError> {
        Err(sqlx::Error::PoolTimedOut.into())
    }

    async fn update(&self, _id: i64, _item: &NewItem) -> Result<Option<InventoryItem>, DbError> {
        Err(sqlx::Error::PoolTimedOut.into())
    }

    async fn delete(&self, _id: i64) -> Result<u64, DbError> {
        Err(sqlx::Error::PoolTimedOut.into())
    }
}

pub fn app_with(store: Arc<dyn ItemStore>) -> Router {
    build_router(AppState::new(store))
}

pub struct TestResponse {
    pub status: StatusCode,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

impl TestResponse {
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).expect("response body is not JSON")
    }

    pub fn text(&self) -> String {
        String::from_utf8(self.body.clone()).expect("response body is not UTF-8")
    }
}

pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> TestResponse {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string())),
        None => builder.body(Body::empty()),
    }
    .unwrap();

    send_request(app, request).await
}

pub async fn send_request(app: &Router, request: Request<Body>) -> TestResponse {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned);
    let body = to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec();

    TestResponse {
        status,
        content_type,
        body,
    }
}
