//! API Client

use serde::{Deserialize, Serialize};

/// Product card as served by `/api/products/featured`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProductCard {
    pub id: String,
    pub href: String,
    pub name: String,
    pub image: String,
    pub price_label: String,
    #[serde(default)]
    pub original_price_label: Option<String>,
    #[serde(default)]
    pub discount_percent: Option<i64>,
}

impl ProductCard {
    /// Badge text, e.g. `25% OFF`
    pub fn badge(&self) -> Option<String> {
        self.discount_percent.map(|p| format!("{p}% OFF"))
    }
}

#[derive(Debug, Deserialize)]
struct FeaturedResponse {
    products: Vec<ProductCard>,
}

/// Load the featured deals
///
/// Any failure (server down, bad payload) shows the empty state.
pub async fn featured_products() -> Vec<ProductCard> {
    fetch_featured().await.unwrap_or_default()
}

async fn fetch_featured() -> Result<Vec<ProductCard>, String> {
    let origin = web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_else(|| "http://localhost:3000".into());

    let response = reqwest::Client::new()
        .get(featured_url(&origin))
        .send()
        .await
        .map_err(|e| e.to_string())?;

    if !response.status().is_success() {
        return Err(format!("Request failed: {}", response.status()));
    }

    let data: FeaturedResponse = response.json().await.map_err(|e| e.to_string())?;
    Ok(data.products)
}

fn featured_url(origin: &str) -> String {
    format!("{}/api/products/featured", origin.trim_end_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_featured_url() {
        assert_eq!(featured_url("http://shop.test"), "http://shop.test/api/products/featured");
        assert_eq!(featured_url("http://shop.test/"), "http://shop.test/api/products/featured");
    }

    #[test]
    fn test_parse_response() {
        let json = r#"{"products":[
            {"id":"kettle","href":"/products/kettle","name":"Kettle","image":"/k.png",
             "price_label":"$14.99","original_price_label":"$19.99","discount_percent":25},
            {"id":"lamp","href":"/products/lamp","name":"Lamp","image":"/l.png",
             "price_label":"$12.5","original_price_label":null,"discount_percent":null}
        ]}"#;

        let data: FeaturedResponse = serde_json::from_str(json).unwrap();
        assert_eq!(data.products.len(), 2);
        assert_eq!(data.products[0].badge().as_deref(), Some("25% OFF"));
        assert_eq!(data.products[1].badge(), None);
    }
}
