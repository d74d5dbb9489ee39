//! Core data types for the shopping list service.
//!
//! Field values are kept as raw JSON: neither `name` nor `price` is checked
//! for type or range, only for presence. Presence follows "falsy" semantics:
//! a field counts as missing when it is absent, `null`, `false`, an empty
//! string, or zero. A price of `0` is therefore rejected on create.
//!
//! All types derive `Serialize` and `Deserialize`. Absent fields are left
//! out of the JSON rendering rather than written as `null`.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ValidationError;

// ============================================================================
// Item
// ============================================================================

/// A single entry on the shopping list.
///
/// Both fields are optional at the type level because an update writes the
/// request body's values as-is, including absent ones. Items created through
/// [`NewItem::validate`] always carry both.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Item {
    /// Display name, also used as the lookup key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<Value>,

    /// Unit price.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<Value>,
}

impl Item {
    /// Creates an item with both fields set.
    #[must_use]
    pub fn new(name: impl Into<String>, price: impl Into<Value>) -> Self {
        Self {
            name: Some(Value::String(name.into())),
            price: Some(price.into()),
        }
    }

    /// Returns true if this item's name is the string `name`.
    ///
    /// An item without a name, or with a non-string name, never matches.
    #[must_use]
    pub fn has_name(&self, name: &str) -> bool {
        matches!(&self.name, Some(Value::String(n)) if n == name)
    }

    /// Overwrites both fields with the update's values.
    pub fn apply(&mut self, update: ItemUpdate) {
        self.name = update.name;
        self.price = update.price;
    }
}

// ============================================================================
// Request Payloads
// ============================================================================

/// Body of a create request. Unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NewItem {
    #[serde(default)]
    pub name: Option<Value>,
    #[serde(default)]
    pub price: Option<Value>,
}

impl NewItem {
    /// Validates the payload and builds the item to store.
    ///
    /// Rules are checked in order and the first failure wins:
    /// 1. name and price both missing
    /// 2. name missing
    /// 3. price missing
    pub fn validate(self) -> Result<Item, ValidationError> {
        match (is_truthy(self.name.as_ref()), is_truthy(self.price.as_ref())) {
            (false, false) => Err(ValidationError::MissingNameAndPrice),
            (false, true) => Err(ValidationError::MissingName),
            (true, false) => Err(ValidationError::MissingPrice),
            (true, true) => Ok(Item {
                name: self.name,
                price: self.price,
            }),
        }
    }
}

/// Body of an update request.
///
/// Not validated: whatever the client sends replaces the stored fields.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ItemUpdate {
    #[serde(default)]
    pub name: Option<Value>,
    #[serde(default)]
    pub price: Option<Value>,
}

/// JavaScript truthiness of an optional JSON value.
fn is_truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) | Some(Value::Bool(false)) => false,
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0),
        Some(_) => true,
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn parse(json: &str) -> NewItem {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn validate_accepts_complete_payload() {
        let item = parse(r#"{"name": "skittles", "price": 1.50}"#)
            .validate()
            .unwrap();
        assert_eq!(item, Item::new("skittles", 1.5));
    }

    #[test]
    fn validate_discards_extra_fields() {
        let item = parse(r#"{"name": "gum", "price": 0.5, "aisle": 7}"#)
            .validate()
            .unwrap();
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json, json!({"name": "gum", "price": 0.5}));
    }

    #[test]
    fn validate_empty_payload_reports_both_missing() {
        assert_eq!(
            parse("{}").validate(),
            Err(ValidationError::MissingNameAndPrice)
        );
    }

    #[test]
    fn validate_precedence() {
        assert_eq!(
            parse(r#"{"price": 1.50}"#).validate(),
            Err(ValidationError::MissingName)
        );
        assert_eq!(
            parse(r#"{"name": "noprice"}"#).validate(),
            Err(ValidationError::MissingPrice)
        );
    }

    #[test]
    fn validate_treats_falsy_values_as_missing() {
        assert_eq!(
            parse(r#"{"name": "", "price": 0}"#).validate(),
            Err(ValidationError::MissingNameAndPrice)
        );
        assert_eq!(
            parse(r#"{"name": null, "price": 2}"#).validate(),
            Err(ValidationError::MissingName)
        );
        assert_eq!(
            parse(r#"{"name": false, "price": 2}"#).validate(),
            Err(ValidationError::MissingName)
        );
        assert_eq!(
            parse(r#"{"name": "free sample", "price": 0.0}"#).validate(),
            Err(ValidationError::MissingPrice)
        );
        assert_eq!(
            parse(r#"{"name": "refund", "price": -0.0}"#).validate(),
            Err(ValidationError::MissingPrice)
        );
        assert_eq!(
            parse(r#"{"name": "blank", "price": ""}"#).validate(),
            Err(ValidationError::MissingPrice)
        );
    }

    #[test]
    fn validate_keeps_values_untyped() {
        let item = parse(r#"{"name": 42, "price": "1.50"}"#).validate().unwrap();
        assert_eq!(item.name, Some(json!(42)));
        assert_eq!(item.price, Some(json!("1.50")));

        let item = parse(r#"{"name": "coupon", "price": -1}"#).validate().unwrap();
        assert_eq!(item.price, Some(json!(-1)));
    }

    #[test]
    fn validation_messages() {
        assert_eq!(
            ValidationError::MissingNameAndPrice.to_string(),
            "Name and Price is required"
        );
        assert_eq!(ValidationError::MissingName.to_string(), "Name is required");
        assert_eq!(ValidationError::MissingPrice.to_string(), "Price is required");
    }

    #[test]
    fn item_serializes_without_absent_fields() {
        let item = Item {
            name: Some(json!("cheerios")),
            price: None,
        };
        assert_eq!(
            serde_json::to_string(&item).unwrap(),
            r#"{"name":"cheerios"}"#
        );
    }

    #[test]
    fn item_has_name_requires_exact_string_match() {
        let item = Item::new("popsicle", 1.45);
        assert!(item.has_name("popsicle"));
        assert!(!item.has_name("Popsicle"));
        assert!(!Item::default().has_name(""));

        let numeric = Item {
            name: Some(json!(42)),
            price: Some(json!(1)),
        };
        assert!(!numeric.has_name("42"));
    }

    #[test]
    fn apply_overwrites_both_fields() {
        let mut item = Item::new("snickers", 1.99);
        item.apply(ItemUpdate {
            name: Some(json!("new snickers")),
            price: Some(json!(2.45)),
        });
        assert_eq!(item, Item::new("new snickers", 2.45));

        item.apply(ItemUpdate::default());
        assert_eq!(item, Item::default());
    }
}
