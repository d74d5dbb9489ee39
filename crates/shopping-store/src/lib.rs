//! shopping-store: In-memory storage for the shopping list service
//!
//! This crate provides:
//! - [`ItemStore`], an ordered sequence of items with first-match lookups by name
//! - [`StoreError`] for operations that reference a missing item
//!
//! # Usage
//!
//! ```rust
//! use shopping_store::{Item, ItemStore};
//!
//! let mut store = ItemStore::new();
//! store.push(Item::new("popsicle", 1.45));
//! assert!(store.find("popsicle").is_some());
//! ```
//!
//! Nothing is persisted. The store lives as long as its owner.

pub mod error;
pub mod store;

pub use error::{StoreError, StoreResult};
pub use store::ItemStore;

// Re-export shopping-core for downstream crates
pub use shopping_core;
pub use shopping_core::{Item, ItemUpdate, NewItem};
