//! REST helpers for the public catalog API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `ApiError::Unavailable` since the
//! catalog is only fetched from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ApiError>`. Non-2xx responses become
//! `ApiError::Status`; pages turn any error into a coalesced toast.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

#[cfg(feature = "hydrate")]
use super::types::AddToCartRequest;
use super::types::{AddToCartResponse, Product, ProductsPage};

/// Catalog request failure.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("missing product id")]
    MissingId,
    #[error("request failed: {0}")]
    Network(String),
    #[error("request failed with status {0}")]
    Status(u16),
    #[error("invalid response: {0}")]
    Decode(String),
    #[error("not available on server")]
    Unavailable,
}

#[cfg(any(test, feature = "hydrate"))]
fn products_endpoint(base: &str, skip: u32, limit: u32) -> String {
    format!("{base}/products?limit={limit}&skip={skip}")
}

#[cfg(any(test, feature = "hydrate"))]
fn product_endpoint(base: &str, id: &str) -> String {
    format!("{base}/products/{id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn add_to_cart_endpoint(base: &str) -> String {
    format!("{base}/carts/add")
}

fn normalize_id(id: &str) -> Result<&str, ApiError> {
    let trimmed = id.trim();
    if trimmed.is_empty() { Err(ApiError::MissingId) } else { Ok(trimmed) }
}

#[cfg(feature = "hydrate")]
async fn read_json<T: serde::de::DeserializeOwned>(resp: gloo_net::http::Response) -> Result<T, ApiError> {
    if !resp.ok() {
        return Err(ApiError::Status(resp.status()));
    }
    resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
}

/// Fetch one page of products via `GET /products?limit=&skip=`.
///
/// # Errors
///
/// Returns an error if the request fails, the status is not 2xx, or the body
/// does not decode.
pub async fn fetch_products(skip: u32, limit: u32) -> Result<ProductsPage, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = products_endpoint(crate::config::catalog_api_base_url(), skip, limit);
        let resp = gloo_net::http::Request::get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        read_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (skip, limit);
        Err(ApiError::Unavailable)
    }
}

/// Fetch a product via `GET /products/{id}`.
///
/// # Errors
///
/// Returns `ApiError::MissingId` for a blank id without issuing a request,
/// otherwise the same failures as `fetch_products`.
pub async fn fetch_product(id: &str) -> Result<Product, ApiError> {
    let id = normalize_id(id)?;
    #[cfg(feature = "hydrate")]
    {
        let url = product_endpoint(crate::config::catalog_api_base_url(), id);
        let resp = gloo_net::http::Request::get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        read_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err(ApiError::Unavailable)
    }
}

/// Add `quantity` of a product to the demo user's remote cart via
/// `POST /carts/add`.
///
/// # Errors
///
/// Returns an error if the request fails, the status is not 2xx, or the body
/// does not decode.
pub async fn add_product_to_cart(product_id: u64, quantity: u32) -> Result<AddToCartResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = add_to_cart_endpoint(crate::config::catalog_api_base_url());
        let body = AddToCartRequest::single(crate::config::CART_USER_ID, product_id, quantity);
        let resp = gloo_net::http::Request::post(&url)
            .json(&body)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        read_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (product_id, quantity);
        Err(ApiError::Unavailable)
    }
}
