//! Domain Models
//!
//! Product records as read from the catalog. Prices use `rust_decimal`.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A catalog product
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "postgres", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Stable identifier, also the detail page key
    pub id: String,

    /// Display name
    pub name: String,

    /// Image URI
    pub image: String,

    /// Current sale price
    pub price: Decimal,

    /// List / reference price
    pub original_price: Decimal,

    /// Shown on the landing page
    pub featured: bool,
}

impl Product {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        image: impl Into<String>,
        price: Decimal,
        original_price: Decimal,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            image: image.into(),
            price,
            original_price,
            featured: false,
        }
    }

    pub fn featured(mut self) -> Self {
        self.featured = true;
        self
    }

    /// List price is above the sale price
    pub fn is_on_sale(&self) -> bool {
        self.original_price > self.price
    }

    /// Detail page link target
    pub fn href(&self) -> String {
        format!("/products/{}", self.id)
    }
}

/// Read query against a product store: a filter plus a result-size limit
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProductQuery {
    /// `Some(flag)` keeps only products whose `featured` matches
    pub featured: Option<bool>,

    /// Maximum number of records returned
    pub limit: usize,
}

impl ProductQuery {
    /// Featured products, at most `limit`
    pub fn featured(limit: usize) -> Self {
        Self {
            featured: Some(true),
            limit,
        }
    }

    /// Check a product against the filter (ignores the limit)
    pub fn matches(&self, product: &Product) -> bool {
        self.featured.is_none_or(|flag| product.featured == flag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_on_sale() {
        let sale = Product::new("p1", "Kettle", "/k.png", dec!(14.99), dec!(19.99));
        assert!(sale.is_on_sale());

        let flat = Product::new("p2", "Mug", "/m.png", dec!(5), dec!(5));
        assert!(!flat.is_on_sale());
    }

    #[test]
    fn test_href() {
        let product = Product::new("clx42", "Lamp", "/l.png", dec!(10), dec!(12));
        assert_eq!(product.href(), "/products/clx42");
    }

    #[test]
    fn test_featured_query_filter() {
        let query = ProductQuery::featured(8);
        let plain = Product::new("p1", "Mug", "/m.png", dec!(5), dec!(5));
        assert!(!query.matches(&plain));
        assert!(query.matches(&plain.featured()));
    }

    #[test]
    fn test_serde_uses_camel_case() {
        let product = Product::new("p1", "Mug", "/m.png", dec!(5), dec!(7)).featured();
        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(json["originalPrice"], "7");
        assert_eq!(json["featured"], true);
    }
}
