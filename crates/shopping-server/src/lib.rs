//! shopping-server: HTTP API server for the shopping list service
//!
//! This crate provides:
//! - REST endpoints for listing, reading, adding, updating and deleting items
//! - A uniform `{ "error": <message> }` JSON error body
//! - Environment-based configuration
//!
//! # Architecture
//!
//! The server is built on Axum with a middleware stack for:
//! - Request tracing and logging
//! - CORS handling
//! - Request ID generation
//!
//! The item store is held in [`AppState`] behind a mutex and handed to
//! every handler through the `State` extractor.
//!
//! # Usage
//!
//! ```rust,ignore
//! use shopping_server::{build_app, AppState, ServerConfig};
//! use shopping_store::ItemStore;
//!
//! let config = ServerConfig::from_env()?;
//! let app = build_app(AppState::new(ItemStore::new(), config))?;
//! ```

pub mod config;
pub mod error;
pub mod extract;
pub mod middleware;
pub mod routes;
pub mod state;

use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

// Re-exports for convenience
pub use config::{ConfigError, ServerConfig};
pub use error::{ApiError, ApiResult};
pub use state::AppState;

// Re-export dependent crates
pub use shopping_core;
pub use shopping_store;

/// Build the router wrapped in the full middleware stack.
pub fn build_app(state: AppState) -> Result<Router, ConfigError> {
    let cors = build_cors_layer(&state.config().cors_allowed_origins)?;

    Ok(routes::build_router(state)
        .layer(axum::middleware::from_fn(
            middleware::request_id::propagate_request_id,
        ))
        .layer(middleware::request_id::request_id_layer())
        .layer(cors)
        .layer(TraceLayer::new_for_http()))
}

/// Build CORS layer from configuration.
fn build_cors_layer(allowed_origins: &str) -> Result<CorsLayer, ConfigError> {
    if allowed_origins.trim() == "*" {
        return Ok(CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any));
    }

    // Parse comma-separated origins
    let origins = allowed_origins
        .split(',')
        .map(|s| {
            s.trim().parse().map_err(|_| ConfigError::InvalidValue {
                name: "CORS_ALLOWED_ORIGINS".to_string(),
                reason: format!("invalid origin {:?}", s.trim()),
            })
        })
        .collect::<Result<Vec<http::HeaderValue>, _>>()?;

    Ok(CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(Any)
        .allow_headers(Any))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cors_wildcard() {
        assert!(build_cors_layer("*").is_ok());
    }

    #[test]
    fn test_cors_origin_list() {
        assert!(build_cors_layer("http://localhost:3000, https://example.com").is_ok());
    }

    #[test]
    fn test_cors_invalid_origin() {
        let err = build_cors_layer("http://ok.example,bad\norigin").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue { ref name, .. } if name == "CORS_ALLOWED_ORIGINS"
        ));
    }
}
