//! The sellable catalog item shape.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::id::{CategoryId, ProductId};

/// A sellable catalog item.
///
/// This is a pure value shape: instances are built at decode boundaries
/// (or as literals) and carry no behavior. All fields except [`image`]
/// are always present; malformed input fails at the serde boundary that
/// produced it, not here.
///
/// [`image`]: Product::image
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Unique product ID, assigned by the upstream data source.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Free-form descriptive text.
    pub description: String,
    /// Monetary amount. Currency and display precision are the
    /// consumer's contract, not encoded in the shape.
    pub price: Decimal,
    /// Expiration date as text. The format (e.g. ISO-8601) is owed by
    /// the producer of the data and is not enforced here.
    pub expiration_date: String,
    /// Image URL or path. `None` means "no image provided" and is
    /// distinct from an empty string.
    pub image: Option<String>,
    /// Reference to the owning [`Category`]'s ID. Referential integrity
    /// is the data source's responsibility; this shape does not check it.
    ///
    /// [`Category`]: crate::types::Category
    pub category_id: CategoryId,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn widget() -> Product {
        Product {
            id: ProductId::new(1),
            name: "Widget".to_owned(),
            description: "A widget".to_owned(),
            price: Decimal::new(999, 2),
            expiration_date: "2025-12-31".to_owned(),
            image: Some("widget.png".to_owned()),
            category_id: CategoryId::new(2),
        }
    }

    #[test]
    fn test_decode_with_image() {
        let json = r#"{
            "id": 1,
            "name": "Widget",
            "description": "A widget",
            "price": 9.99,
            "expiration_date": "2025-12-31",
            "image": "widget.png",
            "category_id": 2
        }"#;

        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id, ProductId::new(1));
        assert_eq!(product.name, "Widget");
        assert_eq!(product.price, Decimal::new(999, 2));
        assert_eq!(product.image.as_deref(), Some("widget.png"));
        assert_eq!(product.category_id, CategoryId::new(2));
    }

    #[test]
    fn test_decode_with_null_image() {
        let json = r#"{
            "id": 1,
            "name": "Widget",
            "description": "A widget",
            "price": 9.99,
            "expiration_date": "2025-12-31",
            "image": null,
            "category_id": 2
        }"#;

        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.image, None);
    }

    #[test]
    fn test_absent_image_is_not_empty_string() {
        let mut product = widget();
        product.image = None;
        assert_ne!(product.image, Some(String::new()));
    }

    #[test]
    fn test_serde_roundtrip() {
        let product = widget();
        let json = serde_json::to_string(&product).unwrap();
        let parsed: Product = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, product);
    }

    #[test]
    fn test_missing_price_is_rejected() {
        let json = r#"{
            "id": 1,
            "name": "Widget",
            "description": "A widget",
            "expiration_date": "2025-12-31",
            "image": null,
            "category_id": 2
        }"#;

        assert!(serde_json::from_str::<Product>(json).is_err());
    }

    #[test]
    fn test_duplicate_ids_are_not_rejected() {
        // Uniqueness of `id` is a producer invariant; the shape itself
        // accepts two products that share an ID but differ elsewhere.
        let first = widget();
        let mut second = widget();
        second.name = "Other widget".to_owned();

        assert_eq!(first.id, second.id);
        assert_ne!(first, second);
    }
}
