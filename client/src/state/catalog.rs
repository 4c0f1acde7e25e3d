//! Product list paging, product detail, and catalog failure toasts.
//!
//! DESIGN
//! ======
//! Pages accumulate in request order. Whether another page exists is decided
//! only by the last page received (`skip + limit < total`), so the next
//! request is never issued once the reported total is reached.
//!
//! Failure toasts use deterministic ids so a retried request that fails again
//! replaces the visible toast instead of stacking a new one.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use super::notifications::NotificationInput;
use crate::i18n::{Language, Msg};
use crate::net::api::ApiError;
use crate::net::types::{Product, ProductSummary, ProductsPage};

pub const PRODUCTS_LOAD_ERROR_ID: &str = "products-load-error";
const MISSING_ID: &str = "missing-id";
const ERROR_TIMEOUT_MS: u32 = 6_000;
const SUCCESS_TIMEOUT_MS: u32 = 3_000;

/// How the product list is rendered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ViewMode {
    #[default]
    Table,
    List,
}

/// Accumulated product pages plus list-view controls.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CatalogState {
    pub pages: Vec<ProductsPage>,
    pub loading: bool,
    pub loading_more: bool,
    pub error: Option<ApiError>,
    pub view_mode: ViewMode,
    pub search: String,
}

impl CatalogState {
    /// Offset for the first page, unless it is already loaded or in flight.
    pub fn begin_initial_load(&mut self) -> Option<u32> {
        if self.loading || !self.pages.is_empty() {
            return None;
        }
        self.loading = true;
        self.error = None;
        Some(0)
    }

    /// Offset for the next page, or `None` when nothing more is available or
    /// a request is already in flight.
    pub fn begin_next_page(&mut self) -> Option<u32> {
        if self.loading || self.loading_more {
            return None;
        }
        let offset = self.pages.last()?.next_offset()?;
        self.loading_more = true;
        Some(offset)
    }

    pub fn receive_page(&mut self, page: ProductsPage) {
        self.pages.push(page);
        self.loading = false;
        self.loading_more = false;
        self.error = None;
    }

    pub fn receive_error(&mut self, error: ApiError) {
        self.loading = false;
        self.loading_more = false;
        self.error = Some(error);
    }

    pub fn has_more(&self) -> bool {
        self.pages.last().and_then(ProductsPage::next_offset).is_some()
    }

    pub fn products(&self) -> impl Iterator<Item = &ProductSummary> {
        self.pages.iter().flat_map(|page| page.products.iter())
    }

    /// Products whose title contains the search text, ignoring case.
    pub fn visible_products(&self) -> Vec<ProductSummary> {
        let needle = self.search.trim().to_lowercase();
        self.products()
            .filter(|p| needle.is_empty() || p.title.to_lowercase().contains(&needle))
            .cloned()
            .collect()
    }
}

/// Detail page state for one product id.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProductDetailState {
    pub product: Option<Product>,
    pub loading: bool,
    pub error: Option<ApiError>,
    pub adding_to_cart: bool,
}

impl ProductDetailState {
    pub fn begin_load(&mut self) {
        self.loading = true;
        self.error = None;
    }

    pub fn finish_load(&mut self, result: Result<Product, ApiError>) {
        self.loading = false;
        match result {
            Ok(product) => {
                self.product = Some(product);
                self.error = None;
            }
            Err(e) => {
                self.product = None;
                self.error = Some(e);
            }
        }
    }

    /// Start an add-to-cart request; `None` while one is pending or no
    /// product is loaded.
    pub fn begin_add_to_cart(&mut self) -> Option<Product> {
        if self.adding_to_cart {
            return None;
        }
        let product = self.product.clone()?;
        self.adding_to_cart = true;
        Some(product)
    }

    pub fn finish_add_to_cart(&mut self) {
        self.adding_to_cart = false;
    }
}

/// Toast id for a failed detail load.
pub fn product_load_error_id(product_id: Option<&str>) -> String {
    format!("product-load-error:{}", id_or_missing(product_id))
}

/// Toast id for a failed add-to-cart request.
pub fn add_to_cart_error_id(product_id: Option<&str>) -> String {
    format!("add-to-cart-error:{}", id_or_missing(product_id))
}

fn id_or_missing(product_id: Option<&str>) -> &str {
    product_id.map(str::trim).filter(|id| !id.is_empty()).unwrap_or(MISSING_ID)
}

fn failure_text(lang: Language, error: &ApiError, generic: Msg) -> &'static str {
    match error {
        ApiError::MissingId => lang.text(Msg::MissingId),
        _ => lang.text(generic),
    }
}

pub fn products_load_failed(lang: Language, error: &ApiError) -> NotificationInput {
    NotificationInput::error(failure_text(lang, error, Msg::ProductsLoadFailed))
        .with_id(PRODUCTS_LOAD_ERROR_ID)
        .with_timeout(ERROR_TIMEOUT_MS)
}

pub fn product_load_failed(lang: Language, product_id: Option<&str>, error: &ApiError) -> NotificationInput {
    NotificationInput::error(failure_text(lang, error, Msg::DetailLoadFailed))
        .with_id(product_load_error_id(product_id))
        .with_timeout(ERROR_TIMEOUT_MS)
}

pub fn add_to_cart_failed(lang: Language, product_id: Option<&str>, error: &ApiError) -> NotificationInput {
    NotificationInput::error(failure_text(lang, error, Msg::AddToCartFailed))
        .with_id(add_to_cart_error_id(product_id))
        .with_timeout(ERROR_TIMEOUT_MS)
}

pub fn add_to_cart_succeeded(lang: Language) -> NotificationInput {
    NotificationInput::success(lang.text(Msg::AddToCartSuccess)).with_timeout(SUCCESS_TIMEOUT_MS)
}
