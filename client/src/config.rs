//! Compile-time client settings.
//!
//! The catalog base URL can be overridden at build time with
//! `CATALOG_API_BASE_URL`; everything else is fixed for the demo.

/// Default public catalog API.
pub const DEFAULT_CATALOG_API_BASE_URL: &str = "https://dummyjson.com";

/// User id sent with cart mutations (the public API has no auth).
pub const CART_USER_ID: u64 = 1;

/// Products requested per page.
pub const PRODUCTS_PAGE_SIZE: u32 = 20;

/// Simulated network latency for check-in submissions.
pub const CHECK_IN_SUBMIT_DELAY_MS: u32 = 800;

/// `localStorage` keys.
pub mod storage_keys {
    pub const CART_ITEMS: &str = "cart-items";
    pub const CART_OPEN: &str = "cart-open";
    pub const THEME: &str = "theme";
    pub const CHECK_IN_DRAFT: &str = "checkin-form-draft";
    pub const LANGUAGE: &str = "app-language";
}

/// Base URL for the remote catalog API, without a trailing slash.
pub fn catalog_api_base_url() -> &'static str {
    option_env!("CATALOG_API_BASE_URL")
        .map(|raw| raw.trim_end_matches('/'))
        .filter(|raw| !raw.is_empty())
        .unwrap_or(DEFAULT_CATALOG_API_BASE_URL)
}
