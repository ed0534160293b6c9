//! Custom Axum extractors

use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use axum::Json;
use serde_json::Value;

use super::error::ApiError;
use crate::models::{ValidationError, Violation};

/// Extract an item id from the path.
///
/// An id that is not a 64-bit integer cannot name any row, so it is
/// reported as not found rather than as a bad request.
pub struct ItemId(pub i64);

impl<S> FromRequestParts<S> for ItemId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::item_not_found(""))?;

        parse_item_id(&raw).map(Self)
    }
}

/// Parse a raw path segment as an item id, mapping failure to not found.
pub fn parse_item_id(raw: &str) -> Result<i64, ApiError> {
    raw.parse::<i64>().map_err(|_| ApiError::item_not_found(raw))
}

/// Extract the request body as untyped JSON.
///
/// Schema checks happen in the handler; this only rejects bodies that are
/// not JSON at all, as a 400 with a single `body` violation.
pub struct JsonBody(pub Value);

impl<S> FromRequest<S> for JsonBody
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<Value>::from_request(req, state)
            .await
            .map_err(|rejection| {
                ApiError::Validation(ValidationError::single(Violation::malformed(
                    "body",
                    rejection.body_text(),
                )))
            })?;

        Ok(Self(value))
    }
}
