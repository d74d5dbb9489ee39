//! Ordered in-memory item storage.
//!
//! The `ItemStore` keeps items in insertion order and allows duplicate
//! names. Every lookup is a linear scan that stops at the first item whose
//! name matches, so with duplicates only the earliest one is ever read,
//! updated, or removed.

use shopping_core::{Item, ItemUpdate};

use crate::error::{StoreError, StoreResult};

/// Ordered collection of shopping list items.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemStore {
    items: Vec<Item>,
}

impl ItemStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with `items`, preserving their order.
    pub fn with_items(items: impl IntoIterator<Item = Item>) -> Self {
        Self {
            items: items.into_iter().collect(),
        }
    }

    /// All items in insertion order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Find the first item named `name`.
    pub fn find(&self, name: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.has_name(name))
    }

    /// Append an item and return the stored copy.
    pub fn push(&mut self, item: Item) -> &Item {
        self.items.push(item);
        tracing::debug!(len = self.items.len(), "Item appended");
        &self.items[self.items.len() - 1]
    }

    /// Overwrite the first item named `name` in place.
    ///
    /// Returns the item as it reads after the update.
    pub fn update(&mut self, name: &str, update: ItemUpdate) -> StoreResult<&Item> {
        let index = self.position(name)?;
        let item = &mut self.items[index];
        item.apply(update);
        Ok(item)
    }

    /// Remove the first item named `name`.
    ///
    /// Removal is by position, so later items with the same name stay.
    pub fn remove(&mut self, name: &str) -> StoreResult<Item> {
        let index = self.position(name)?;
        Ok(self.items.remove(index))
    }

    /// Drop every item.
    pub fn clear(&mut self) {
        tracing::debug!(dropped = self.items.len(), "Store cleared");
        self.items.clear();
    }

    fn position(&self, name: &str) -> StoreResult<usize> {
        self.items
            .iter()
            .position(|item| item.has_name(name))
            .ok_or_else(|| StoreError::ItemNotFound(name.to_string()))
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn seeded() -> ItemStore {
        ItemStore::with_items([Item::new("snickers", 1.99), Item::new("reeses", 1.75)])
    }

    #[test]
    fn new_store_is_empty() {
        let store = ItemStore::new();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
        assert!(store.items().is_empty());
    }

    #[test]
    fn push_preserves_insertion_order() {
        let mut store = seeded();
        let added = store.push(Item::new("skittles", 1.50)).clone();
        assert_eq!(added, Item::new("skittles", 1.5));

        let names: Vec<_> = store
            .items()
            .iter()
            .map(|i| i.name.as_ref().and_then(|n| n.as_str()).unwrap())
            .collect();
        assert_eq!(names, ["snickers", "reeses", "skittles"]);
    }

    #[test]
    fn find_returns_first_match() {
        let mut store = seeded();
        store.push(Item::new("snickers", 3.00));

        let found = store.find("snickers").unwrap();
        assert_eq!(found, &Item::new("snickers", 1.99));
        assert!(store.find("apple").is_none());
    }

    #[test]
    fn update_overwrites_first_match_in_place() {
        let mut store = seeded();
        let updated = store
            .update(
                "snickers",
                ItemUpdate {
                    name: Some(json!("new snickers")),
                    price: Some(json!(2.45)),
                },
            )
            .unwrap()
            .clone();

        assert_eq!(updated, Item::new("new snickers", 2.45));
        assert_eq!(store.items()[0], updated);
        assert_eq!(store.len(), 2);
        assert!(store.find("snickers").is_none());
    }

    #[test]
    fn update_missing_item_fails() {
        let mut store = seeded();
        let err = store.update("apple", ItemUpdate::default()).unwrap_err();
        assert_eq!(err, StoreError::ItemNotFound("apple".to_string()));
        assert_eq!(store, seeded());
    }

    #[test]
    fn remove_takes_only_first_duplicate() {
        let mut store = seeded();
        store.push(Item::new("snickers", 3.00));

        let removed = store.remove("snickers").unwrap();
        assert_eq!(removed, Item::new("snickers", 1.99));
        assert_eq!(store.len(), 2);
        assert_eq!(store.find("snickers"), Some(&Item::new("snickers", 3.0)));
    }

    #[test]
    fn remove_missing_item_fails() {
        let mut store = seeded();
        assert!(matches!(
            store.remove("apple"),
            Err(StoreError::ItemNotFound(name)) if name == "apple"
        ));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn clear_empties_store() {
        let mut store = seeded();
        store.clear();
        assert!(store.is_empty());
    }

    #[test]
    fn item_without_name_is_never_found() {
        let mut store = ItemStore::with_items([Item {
            name: None,
            price: Some(json!(1.0)),
        }]);
        assert!(store.find("").is_none());
        assert!(store.remove("").is_err());
    }

    #[test]
    fn not_found_message() {
        let err = StoreError::ItemNotFound("apple".to_string());
        assert_eq!(err.to_string(), "Item is not found");
    }
}
