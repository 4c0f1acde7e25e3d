use super::*;
use crate::state::notifications::{NotificationKind, NotificationsState};

fn summary(id: u64, title: &str) -> ProductSummary {
    ProductSummary {
        id,
        title: title.to_owned(),
        price: Some(10.0),
        category: None,
        thumbnail: None,
    }
}

fn page(skip: u32, limit: u32, total: u32, products: Vec<ProductSummary>) -> ProductsPage {
    ProductsPage { products, total, skip, limit }
}

// =============================================================
// paging
// =============================================================

#[test]
fn short_catalog_has_no_second_page() {
    let mut state = CatalogState::default();
    assert_eq!(state.begin_initial_load(), Some(0));
    state.receive_page(page(0, 20, 2, vec![summary(1, "Phone Max"), summary(2, "Desk Lamp")]));

    assert!(!state.has_more());
    assert_eq!(state.begin_next_page(), None);
    assert!(!state.loading_more);
    assert_eq!(state.products().count(), 2);
}

#[test]
fn pages_accumulate_until_total_reached() {
    let mut state = CatalogState::default();
    state.begin_initial_load();
    state.receive_page(page(0, 2, 5, vec![summary(1, "a"), summary(2, "b")]));
    assert!(state.has_more());

    assert_eq!(state.begin_next_page(), Some(2));
    assert_eq!(state.begin_next_page(), None, "request already in flight");
    state.receive_page(page(2, 2, 5, vec![summary(3, "c"), summary(4, "d")]));

    assert_eq!(state.begin_next_page(), Some(4));
    state.receive_page(page(4, 2, 5, vec![summary(5, "e")]));

    assert!(!state.has_more());
    let ids: Vec<u64> = state.products().map(|p| p.id).collect();
    assert_eq!(ids, [1, 2, 3, 4, 5]);
}

#[test]
fn initial_load_is_not_repeated() {
    let mut state = CatalogState::default();
    assert_eq!(state.begin_initial_load(), Some(0));
    assert_eq!(state.begin_initial_load(), None);
    state.receive_page(page(0, 20, 1, vec![summary(1, "a")]));
    assert_eq!(state.begin_initial_load(), None);
}

#[test]
fn error_clears_loading_flags() {
    let mut state = CatalogState::default();
    state.begin_initial_load();
    state.receive_error(ApiError::Status(500));
    assert!(!state.loading);
    assert_eq!(state.error, Some(ApiError::Status(500)));
    assert_eq!(state.begin_initial_load(), Some(0));
    assert_eq!(state.error, None);
}

#[test]
fn search_filters_titles_case_insensitively() {
    let mut state = CatalogState::default();
    state.receive_page(page(0, 20, 2, vec![summary(1, "Phone Max"), summary(2, "Desk Lamp")]));

    state.search = "LAMP".to_owned();
    let visible = state.visible_products();
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].title, "Desk Lamp");

    state.search = "  ".to_owned();
    assert_eq!(state.visible_products().len(), 2);
}

#[test]
fn default_view_is_table() {
    assert_eq!(CatalogState::default().view_mode, ViewMode::Table);
}

// =============================================================
// detail
// =============================================================

#[test]
fn detail_add_to_cart_requires_loaded_product_and_no_pending_request() {
    let mut state = ProductDetailState::default();
    assert_eq!(state.begin_add_to_cart(), None);

    state.begin_load();
    state.finish_load(Ok(Product {
        id: 1,
        title: "Phone Max".to_owned(),
        description: String::new(),
        price: 999.0,
        thumbnail: String::new(),
        category: None,
    }));
    assert!(!state.loading);

    assert_eq!(state.begin_add_to_cart().map(|p| p.id), Some(1));
    assert_eq!(state.begin_add_to_cart(), None);
    state.finish_add_to_cart();
    assert!(state.begin_add_to_cart().is_some());
}

#[test]
fn detail_failure_drops_stale_product() {
    let mut state = ProductDetailState::default();
    state.finish_load(Err(ApiError::Status(404)));
    assert_eq!(state.product, None);
    assert_eq!(state.error, Some(ApiError::Status(404)));
}

// =============================================================
// failure toasts
// =============================================================

#[test]
fn error_ids_are_deterministic() {
    assert_eq!(product_load_error_id(Some("42")), "product-load-error:42");
    assert_eq!(product_load_error_id(None), "product-load-error:missing-id");
    assert_eq!(add_to_cart_error_id(Some(" ")), "add-to-cart-error:missing-id");
}

#[test]
fn repeated_detail_failures_show_one_toast() {
    let mut toasts = NotificationsState::default();
    for attempt in 0..3 {
        let notice = product_load_failed(Language::En, Some("404"), &ApiError::Status(404));
        toasts.add(notice, attempt * 100);
    }
    assert_eq!(toasts.items.len(), 1);
    let toast = &toasts.items[0];
    assert_eq!(toast.id, "product-load-error:404");
    assert_eq!(toast.kind, NotificationKind::Error);
    assert_eq!(toast.message, "Failed to load product");
    assert_eq!(toast.timeout_ms, Some(6_000));
}

#[test]
fn missing_id_uses_specific_message() {
    let notice = product_load_failed(Language::En, None, &ApiError::MissingId);
    assert_eq!(notice.message, "Missing product id.");
    assert_eq!(notice.id.as_deref(), Some("product-load-error:missing-id"));
}

#[test]
fn list_failure_uses_fixed_id() {
    let notice = products_load_failed(Language::En, &ApiError::Network("offline".to_owned()));
    assert_eq!(notice.id.as_deref(), Some(PRODUCTS_LOAD_ERROR_ID));
}

#[test]
fn add_to_cart_success_notice() {
    let notice = add_to_cart_succeeded(Language::En);
    assert_eq!(notice.kind, NotificationKind::Success);
    assert_eq!(notice.message, "Product added to cart");
    assert_eq!(notice.id, None);
}
