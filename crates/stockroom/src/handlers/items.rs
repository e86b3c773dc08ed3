//! Item CRUD handlers.
//!
//! Thin layer over the item service: decode the request, run the operation,
//! encode the response. All cache sequencing lives in the service.

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;

use stockroom_core::item::{sort_items, validate_draft, Item, ItemDraft, ItemId, ItemStatus};

use crate::{
    handlers::{error::error_response, AppError},
    state::AppState,
};

/// Query parameters for listing items.
#[derive(Debug, Deserialize)]
pub struct ListItemsQuery {
    /// Optional status filter token, decoded case-insensitively.
    pub status: Option<String>,
}

/// Query parameters for the status-only update.
#[derive(Debug, Deserialize)]
pub struct StatusQuery {
    pub status: String,
}

/// List items (GET /api/v1/items[?status=]).
///
/// Returns the catalog order: CURRENT before DISCONTINUED, then oldest
/// first. The store query is unordered, so the comparator is applied here.
pub async fn list_items(
    State(state): State<AppState>,
    Query(query): Query<ListItemsQuery>,
) -> Result<Json<Vec<Item>>, AppError> {
    let status = query
        .status
        .as_deref()
        .map(str::parse::<ItemStatus>)
        .transpose()?;

    let mut items = state.items.list(status).await?;
    sort_items(&mut items);

    Ok(Json(items))
}

/// Get a single item (GET /api/v1/items/{id}).
pub async fn get_item(
    State(state): State<AppState>,
    Path(id): Path<ItemId>,
) -> Result<Json<Item>, AppError> {
    let item = state.items.get(id).await?;
    Ok(Json(item))
}

/// Create a new item (POST /api/v1/items).
pub async fn create_item(
    State(state): State<AppState>,
    payload: Result<Json<ItemDraft>, JsonRejection>,
) -> Result<impl IntoResponse, Response> {
    let Json(draft) = payload.map_err(|e| {
        error_response(StatusCode::BAD_REQUEST, format!("Failed to parse body: {e}"))
    })?;
    validate_draft(&draft).map_err(|e| AppError(e.into()).into_response())?;

    let item = state
        .items
        .create(&draft)
        .await
        .map_err(|e| AppError(e.into()).into_response())?;

    Ok((StatusCode::CREATED, Json(item)))
}

/// Replace an item's fields (PUT /api/v1/items/{id}).
pub async fn update_item(
    State(state): State<AppState>,
    Path(id): Path<ItemId>,
    payload: Result<Json<ItemDraft>, JsonRejection>,
) -> Result<Json<Item>, Response> {
    let Json(draft) = payload.map_err(|e| {
        error_response(StatusCode::BAD_REQUEST, format!("Failed to parse body: {e}"))
    })?;
    validate_draft(&draft).map_err(|e| AppError(e.into()).into_response())?;

    let item = state
        .items
        .update(id, &draft)
        .await
        .map_err(|e| AppError(e.into()).into_response())?;

    Ok(Json(item))
}

/// Change only an item's status (PATCH /api/v1/items/{id}/status?status=).
pub async fn update_item_status(
    State(state): State<AppState>,
    Path(id): Path<ItemId>,
    Query(query): Query<StatusQuery>,
) -> Result<Json<Item>, AppError> {
    let status: ItemStatus = query.status.parse()?;

    let item = state.items.update_status(id, status).await?;
    Ok(Json(item))
}

/// Delete an item (DELETE /api/v1/items/{id}).
pub async fn delete_item(
    State(state): State<AppState>,
    Path(id): Path<ItemId>,
) -> Result<StatusCode, AppError> {
    state.items.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
