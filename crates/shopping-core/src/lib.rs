//! shopping-core: Core types for the shopping list service
//!
//! This crate provides:
//! - The [`Item`] record (a name/price pair)
//! - Request payloads for creating ([`NewItem`]) and updating ([`ItemUpdate`]) items
//! - Create-time validation with its fixed rule precedence
//!
//! Names are lookup keys but are never required to be unique.

pub mod error;
pub mod types;

pub use error::ValidationError;
pub use types::{Item, ItemUpdate, NewItem};
