//! Product entity model and DTOs.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use shelf_core::types::DbId;
use sqlx::FromRow;

/// Full product row from the `products` table.
///
/// Serializes with camelCase field names (`inStock`), matching the wire
/// contract the catalog client consumes.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: DbId,
    pub name: String,
    /// Exact decimal in the store; a plain JSON number on the wire.
    pub price: Decimal,
    pub category: String,
    pub in_stock: bool,
}

/// DTO for inserting a new product (seeding and tests; there is no
/// create endpoint).
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProduct {
    pub name: String,
    pub price: Decimal,
    pub category: String,
    pub in_stock: bool,
}

/// DTO for updating an existing product. All fields are optional; absent
/// fields keep their stored value.
///
/// Unknown fields are rejected at deserialization so the update surface
/// stays limited to this allow-list.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateProduct {
    pub name: Option<String>,
    pub price: Option<Decimal>,
    pub category: Option<String>,
    pub in_stock: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_serializes_with_camel_case_stock_flag() {
        let product = Product {
            id: 7,
            name: "Rustic Steel Chair".to_string(),
            price: Decimal::new(4250, 2),
            category: "Furniture".to_string(),
            in_stock: true,
        };

        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["inStock"], true);
        assert!(json.get("in_stock").is_none(), "snake_case key must not appear");
        assert_eq!(json["price"].as_f64().unwrap(), 42.50);
    }

    #[test]
    fn update_rejects_unknown_fields() {
        let body = r#"{ "price": 9.99, "admin": true }"#;
        let result: Result<UpdateProduct, _> = serde_json::from_str(body);
        assert!(result.is_err(), "unknown fields must fail deserialization");
    }

    #[test]
    fn update_accepts_partial_camel_case_body() {
        let body = r#"{ "price": 9.99, "inStock": false }"#;
        let update: UpdateProduct = serde_json::from_str(body).unwrap();
        assert_eq!(update.price, Some(Decimal::new(999, 2)));
        assert_eq!(update.in_stock, Some(false));
        assert!(update.name.is_none());
        assert!(update.category.is_none());
    }
}
