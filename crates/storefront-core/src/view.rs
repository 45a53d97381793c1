//! Landing Page View Model
//!
//! Turns loaded products into display-ready cards. The web frontend only
//! lays these out; every price/discount decision is made here.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::discount::calculate_discount;
use crate::loader::FeaturedLoad;
use crate::model::Product;

/// One product card in the deals grid
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductCard {
    pub id: String,

    /// Detail page link (`/products/{id}`)
    pub href: String,

    pub name: String,

    pub image: String,

    /// Current price, e.g. `$14.99`
    pub price_label: String,

    /// Struck-through list price, only when the product is on sale
    pub original_price_label: Option<String>,

    /// "NN% OFF" badge value, only when the product is on sale
    pub discount_percent: Option<i64>,
}

impl ProductCard {
    pub fn from_product(product: &Product) -> Self {
        let on_sale = product.is_on_sale();

        let discount_percent = if on_sale {
            calculate_discount(product.original_price, product.price).filter(|p| *p >= 0)
        } else {
            None
        };

        Self {
            id: product.id.clone(),
            href: product.href(),
            name: product.name.clone(),
            image: product.image.clone(),
            price_label: price_label(product.price),
            original_price_label: on_sale.then(|| price_label(product.original_price)),
            discount_percent,
        }
    }
}

/// What the deals section shows
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LandingView {
    /// Cards in store order
    Grid(Vec<ProductCard>),

    /// "No super deals yet" placeholder
    Empty,
}

impl LandingView {
    pub fn from_products(products: &[Product]) -> Self {
        if products.is_empty() {
            return LandingView::Empty;
        }
        LandingView::Grid(products.iter().map(ProductCard::from_product).collect())
    }

    /// Store failures render exactly like an empty catalog
    pub fn from_load(load: &FeaturedLoad) -> Self {
        Self::from_products(load.products())
    }

    pub fn cards(&self) -> &[ProductCard] {
        match self {
            LandingView::Grid(cards) => cards,
            LandingView::Empty => &[],
        }
    }

    pub fn into_cards(self) -> Vec<ProductCard> {
        match self {
            LandingView::Grid(cards) => cards,
            LandingView::Empty => Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, LandingView::Empty)
    }
}

fn price_label(amount: Decimal) -> String {
    format!("${}", amount.normalize())
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    fn product(id: &str, price: Decimal, original: Decimal) -> Product {
        Product::new(id, format!("Product {id}"), format!("/img/{id}.png"), price, original).featured()
    }

    #[test]
    fn test_card_on_sale() {
        let card = ProductCard::from_product(&product("kettle", dec!(14.99), dec!(19.99)));

        assert_eq!(card.href, "/products/kettle");
        assert_eq!(card.price_label, "$14.99");
        assert_eq!(card.original_price_label.as_deref(), Some("$19.99"));
        assert_eq!(card.discount_percent, Some(25));
    }

    #[test]
    fn test_card_equal_prices_has_no_badge() {
        let card = ProductCard::from_product(&product("lamp", dec!(12.50), dec!(12.50)));

        assert_eq!(card.price_label, "$12.5");
        assert_eq!(card.original_price_label, None);
        assert_eq!(card.discount_percent, None);
    }

    #[test]
    fn test_card_price_above_original_has_no_badge() {
        let card = ProductCard::from_product(&product("odd", dec!(30), dec!(25)));

        assert_eq!(card.original_price_label, None);
        assert_eq!(card.discount_percent, None);
    }

    #[test]
    fn test_card_zero_list_price() {
        let card = ProductCard::from_product(&product("free", Decimal::ZERO, Decimal::ZERO));
        assert_eq!(card.price_label, "$0");
        assert_eq!(card.discount_percent, None);
    }

    #[test]
    fn test_empty_products() {
        let view = LandingView::from_products(&[]);
        assert!(view.is_empty());
        assert!(view.cards().is_empty());
    }

    #[test]
    fn test_store_failure_renders_empty_state() {
        let load = FeaturedLoad::Unavailable {
            reason: "Store unavailable: connection refused".into(),
        };
        assert_eq!(LandingView::from_load(&load), LandingView::Empty);
    }

    #[test]
    fn test_eight_products_keep_input_order() {
        let ids = ["h", "c", "a", "g", "b", "f", "e", "d"];
        let products: Vec<_> = ids.iter().map(|id| product(id, dec!(10), dec!(20))).collect();

        let view = LandingView::from_load(&FeaturedLoad::Loaded(products));
        let rendered: Vec<_> = view.cards().iter().map(|c| c.id.as_str()).collect();
        assert_eq!(rendered, ids);
    }

    #[test]
    fn test_card_serializes_for_frontend() {
        let card = ProductCard::from_product(&product("mug", dec!(8), dec!(10)));
        let json = serde_json::to_value(&card).unwrap();
        assert_eq!(json["href"], "/products/mug");
        assert_eq!(json["discount_percent"], 20);
        assert_eq!(json["original_price_label"], "$10");
    }
}
