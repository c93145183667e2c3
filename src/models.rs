//! Frontend Models
//!
//! Data structures matching the `/api/items` payloads.

use serde::{Deserialize, Serialize};

/// Item data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: u32,
    pub name: String,
    pub price: f64,
    pub quantity: f64,
}

/// Unsaved item being edited in the creation form.
///
/// Serializes to the `POST /api/items` body; the id is assigned server-side.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Draft {
    pub name: String,
    pub price: f64,
    pub quantity: f64,
}

impl Draft {
    /// Required-field check, same rule as the input's `required`
    /// attribute: the name must not be empty.
    pub fn is_submittable(&self) -> bool {
        !self.name.is_empty()
    }
}

/// Form inputs that map onto a single draft field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Name,
    Price,
    Quantity,
}

impl DraftField {
    /// Value of the input's `name` attribute
    pub fn as_str(&self) -> &'static str {
        match self {
            DraftField::Name => "name",
            DraftField::Price => "price",
            DraftField::Quantity => "quantity",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "name" => Some(DraftField::Name),
            "price" => Some(DraftField::Price),
            "quantity" => Some(DraftField::Quantity),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_deserialization() {
        let json = r#"[{"id":1,"name":"Widget","price":9.99,"quantity":3},{"id":2,"name":"Bolt","price":0.5,"quantity":100}]"#;
        let items: Vec<Item> = serde_json::from_str(json).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].name, "Widget");
        assert_eq!(items[0].price, 9.99);
        assert_eq!(items[1].id, 2);
        assert_eq!(items[1].quantity, 100.0);
    }

    #[test]
    fn test_draft_body_has_no_id() {
        let draft = Draft { name: "Widget".to_string(), price: 9.99, quantity: 3.0 };
        let value = serde_json::to_value(&draft).unwrap();
        let obj = value.as_object().unwrap();
        assert_eq!(obj.len(), 3);
        assert!(!obj.contains_key("id"));
        assert_eq!(obj["name"], "Widget");
        assert_eq!(obj["quantity"], 3.0);
    }

    #[test]
    fn test_draft_default_is_empty_form() {
        let draft = Draft::default();
        assert_eq!(draft.name, "");
        assert_eq!(draft.price, 0.0);
        assert_eq!(draft.quantity, 0.0);
        assert!(!draft.is_submittable());
    }

    #[test]
    fn test_whitespace_name_is_submittable() {
        let draft = Draft { name: "   ".to_string(), ..Default::default() };
        assert!(draft.is_submittable());
    }

    #[test]
    fn test_draft_field_names() {
        for field in [DraftField::Name, DraftField::Price, DraftField::Quantity] {
            assert_eq!(DraftField::from_str(field.as_str()), Some(field));
        }
        assert_eq!(DraftField::from_str("id"), None);
    }
}
