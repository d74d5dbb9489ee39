//! Application state shared across handlers.

use std::sync::Arc;

use shopping_store::ItemStore;
use tokio::sync::Mutex;

use crate::config::ServerConfig;

/// Application state shared across all handlers.
///
/// This is cloneable and can be extracted in handlers using `State<AppState>`.
/// Handlers hold the store lock for the whole of their scan or mutation, so
/// requests touch the store one at a time.
#[derive(Clone)]
pub struct AppState {
    /// Item store.
    store: Arc<Mutex<ItemStore>>,
    /// Server configuration.
    config: Arc<ServerConfig>,
}

impl AppState {
    /// Create new application state.
    pub fn new(store: ItemStore, config: ServerConfig) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
            config: Arc::new(config),
        }
    }

    /// Get a reference to the item store.
    pub fn store(&self) -> &Arc<Mutex<ItemStore>> {
        &self.store
    }

    /// Get a reference to the server configuration.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
