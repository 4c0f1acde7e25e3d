//! Wire types for the public catalog API.
//!
//! DESIGN
//! ======
//! Field names mirror the remote JSON (camelCase where the API uses it).
//! Optional fields carry `#[serde(default)]` so list responses that omit
//! them still decode.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

use crate::state::cart::NewCartItem;

/// A product row as returned by the list endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProductSummary {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub thumbnail: Option<String>,
}

/// One page of `GET /products`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProductsPage {
    pub products: Vec<ProductSummary>,
    pub total: u32,
    pub skip: u32,
    pub limit: u32,
}

impl ProductsPage {
    /// Offset of the following page, or `None` once `total` is reached.
    pub fn next_offset(&self) -> Option<u32> {
        let next = self.skip.saturating_add(self.limit);
        (self.limit > 0 && next < self.total).then_some(next)
    }
}

/// Full product from `GET /products/{id}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    #[serde(default)]
    pub thumbnail: String,
    #[serde(default)]
    pub category: Option<String>,
}

impl From<&Product> for NewCartItem {
    fn from(product: &Product) -> Self {
        Self::new(product.id, product.title.clone(), product.price, product.thumbnail.clone())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLineRequest {
    pub id: u64,
    pub quantity: u32,
}

/// Body of `POST /carts/add`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddToCartRequest {
    pub user_id: u64,
    pub products: Vec<CartLineRequest>,
}

impl AddToCartRequest {
    pub fn single(user_id: u64, product_id: u64, quantity: u32) -> Self {
        Self {
            user_id,
            products: vec![CartLineRequest { id: product_id, quantity }],
        }
    }
}

/// Response of `POST /carts/add`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddToCartResponse {
    pub id: u64,
    #[serde(default)]
    pub products: Vec<serde_json::Value>,
    #[serde(default)]
    pub total: f64,
    #[serde(default)]
    pub discounted_total: f64,
    pub user_id: u64,
    #[serde(default)]
    pub total_products: u32,
    #[serde(default)]
    pub total_quantity: u32,
}
