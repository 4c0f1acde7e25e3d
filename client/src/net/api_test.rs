use super::*;

#[test]
fn products_endpoint_formats_query() {
    assert_eq!(
        products_endpoint("https://dummyjson.com", 0, 20),
        "https://dummyjson.com/products?limit=20&skip=0"
    );
}

#[test]
fn product_endpoint_formats_path() {
    assert_eq!(product_endpoint("https://api.test", "7"), "https://api.test/products/7");
}

#[test]
fn add_to_cart_endpoint_formats_path() {
    assert_eq!(add_to_cart_endpoint("https://api.test"), "https://api.test/carts/add");
}

#[test]
fn normalize_id_rejects_blank() {
    assert_eq!(normalize_id("   "), Err(ApiError::MissingId));
    assert_eq!(normalize_id(" 42 "), Ok("42"));
}

#[test]
fn status_error_message_includes_code() {
    assert_eq!(ApiError::Status(404).to_string(), "request failed with status 404");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn fetch_product_with_blank_id_fails_before_request() {
    let result = block_on_ready(fetch_product(""));
    assert_eq!(result, Err(ApiError::MissingId));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn calls_are_unavailable_outside_the_browser() {
    assert_eq!(block_on_ready(fetch_products(0, 20)), Err(ApiError::Unavailable));
    assert!(matches!(
        block_on_ready(add_product_to_cart(1, 1)),
        Err(ApiError::Unavailable)
    ));
}

/// Minimal executor for futures that complete without yielding.
#[cfg(not(feature = "hydrate"))]
fn block_on_ready<F: std::future::Future>(future: F) -> F::Output {
    use std::task::{Context, Poll, Waker};

    let mut future = std::pin::pin!(future);
    let mut cx = Context::from_waker(Waker::noop());
    match future.as_mut().poll(&mut cx) {
        Poll::Ready(output) => output,
        Poll::Pending => panic!("future was expected to complete immediately"),
    }
}
