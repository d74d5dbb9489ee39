//! Item resource routes for the shopping list.
//!
//! This module implements the item CRUD endpoints:
//! - GET /items - List all items in insertion order
//! - POST /items - Add an item
//! - GET /items/{name} - Read the first item with this name
//! - PATCH /items/{name} - Overwrite the first item with this name
//! - DELETE /items/{name} - Remove the first item with this name
//!
//! Anything else under `/items` is answered with "No item name parameter
//! given". A name that does not match any item is also a 400, never a 404.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::{any, get},
};
use serde::{Deserialize, Serialize};
use shopping_core::{Item, ItemUpdate, NewItem};
use shopping_store::StoreError;

use crate::error::{ApiError, ApiResult};
use crate::extract::{ItemName, JsonBody};
use crate::state::AppState;

// ============================================================================
// Request/Response Types
// ============================================================================

/// Response for POST /items.
#[derive(Debug, Serialize, Deserialize)]
pub struct AddedResponse {
    pub added: Item,
}

/// Response for PATCH /items/{name}.
#[derive(Debug, Serialize, Deserialize)]
pub struct UpdatedResponse {
    pub updated: Item,
}

/// Response for DELETE /items/{name}.
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

// ============================================================================
// Route Handlers
// ============================================================================

/// GET /items - List every item.
///
/// # Response
///
/// - 200 OK: `[{ "name": "...", "price": 1.45 }, ...]`
async fn list_items(State(state): State<AppState>) -> Json<Vec<Item>> {
    let store = state.store().lock().await;

    tracing::debug!(count = store.len(), "Listed items");

    Json(store.items().to_vec())
}

/// GET /items/{name} - Read a single item.
///
/// # Response
///
/// - 200 OK: `{ "name": "...", "price": 1.45 }`
/// - 400 Bad Request: `{ "error": "Item is not found" }`
async fn get_item(
    State(state): State<AppState>,
    ItemName(name): ItemName,
) -> ApiResult<Json<Item>> {
    let store = state.store().lock().await;

    let item = store
        .find(&name)
        .cloned()
        .ok_or_else(|| StoreError::ItemNotFound(name))?;

    Ok(Json(item))
}

/// POST /items - Add an item to the end of the list.
///
/// # Request
///
/// Body: `{ "name": "popsicle", "price": 1.45 }`. Extra fields are dropped.
///
/// # Response
///
/// - 201 Created: `{ "added": { "name": "popsicle", "price": 1.45 } }`
/// - 400 Bad Request: missing name and/or price
async fn create_item(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<NewItem>,
) -> ApiResult<(StatusCode, Json<AddedResponse>)> {
    let item = payload.validate()?;

    let mut store = state.store().lock().await;
    let added = store.push(item).clone();

    tracing::info!(
        name = ?added.name,
        price = ?added.price,
        count = store.len(),
        "Item added"
    );

    Ok((StatusCode::CREATED, Json(AddedResponse { added })))
}

/// PATCH /items/{name} - Rename and reprice an item.
///
/// The body is applied as-is without presence checks.
///
/// # Response
///
/// - 200 OK: `{ "updated": { "name": "...", "price": 2.45 } }`
/// - 400 Bad Request: `{ "error": "Item is not found" }`
async fn update_item(
    State(state): State<AppState>,
    ItemName(name): ItemName,
    JsonBody(update): JsonBody<ItemUpdate>,
) -> ApiResult<Json<UpdatedResponse>> {
    let mut store = state.store().lock().await;
    let updated = store.update(&name, update)?.clone();

    tracing::info!(
        from = %name,
        to = ?updated.name,
        price = ?updated.price,
        "Item updated"
    );

    Ok(Json(UpdatedResponse { updated }))
}

/// DELETE /items/{name} - Remove an item.
///
/// # Response
///
/// - 202 Accepted: `{ "message": "Deleted" }`
/// - 400 Bad Request: `{ "error": "Item is not found" }`
async fn delete_item(
    State(state): State<AppState>,
    ItemName(name): ItemName,
) -> ApiResult<(StatusCode, Json<MessageResponse>)> {
    let mut store = state.store().lock().await;
    store.remove(&name)?;

    tracing::info!(name = %name, count = store.len(), "Item deleted");

    Ok((
        StatusCode::ACCEPTED,
        Json(MessageResponse {
            message: "Deleted".to_string(),
        }),
    ))
}

/// Catch-all for requests under `/items` that carry no usable name.
async fn missing_name() -> ApiError {
    ApiError::MissingName
}

/// Build item routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/items",
            get(list_items).post(create_item).fallback(missing_name),
        )
        .route("/items/", any(missing_name))
        .route(
            "/items/{name}",
            get(get_item)
                .patch(update_item)
                .delete(delete_item)
                .fallback(missing_name),
        )
        .route("/items/{name}/{*rest}", any(missing_name))
}

// ============================================================================
// Tests
// ============================================================================
