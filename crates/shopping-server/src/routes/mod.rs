//! Route definitions for the HTTP API.

pub mod items;

use axum::Router;

use crate::error::ApiError;
use crate::state::AppState;

/// Build the complete router with all routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(items::routes())
        .fallback(not_found)
        .with_state(state)
}

/// Fallback for paths no route matches.
async fn not_found() -> ApiError {
    ApiError::NotFound
}
