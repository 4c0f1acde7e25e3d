//! Product detail page with add-to-cart.
//!
//! The remote cart call only confirms the mutation; on success the product is
//! added to the local cart silently and a single success toast is raised here.
//! Load and mutation failures use per-product toast ids so repeated failures
//! replace each other instead of stacking.

#[cfg(test)]
#[path = "product_detail_test.rs"]
mod product_detail_test;

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

use crate::components::global_loader::GlobalLoader;
use crate::i18n::{self, Msg};
use crate::net::api;
use crate::state::catalog::{self, ProductDetailState};
use crate::state::stores::{CartStore, LocaleStore, Notifier};

/// Route parameter normalized to a usable id.
fn route_id(raw: Option<String>) -> Option<String> {
    raw.map(|id| id.trim().to_owned()).filter(|id| !id.is_empty())
}

#[component]
pub fn ProductDetailPage() -> impl IntoView {
    let notifier = expect_context::<Notifier>();
    let locale = expect_context::<LocaleStore>();
    let cart = expect_context::<CartStore>();
    let params = use_params_map();
    let id = Memo::new(move |_| route_id(params.with(|p| p.get("id"))));
    let detail = RwSignal::new(ProductDetailState::default());
    let text = move |msg: Msg| locale.get().text(msg);

    Effect::new(move |_| {
        let Some(current) = id.get() else {
            return;
        };
        detail.update(ProductDetailState::begin_load);
        leptos::task::spawn_local(async move {
            let result = api::fetch_product(&current).await;
            // Ignore responses for a torn-down page or a route that has since changed.
            if id.try_get_untracked().flatten().as_deref() != Some(current.as_str()) {
                return;
            }
            if let Err(e) = &result {
                log::warn!("product load failed: id={current} error={e}");
                notifier.notify(catalog::product_load_failed(locale.get_untracked(), Some(&current), e));
            }
            detail.try_update(|d| d.finish_load(result));
        });
    });

    let on_add = move |_| {
        let Some(product) = detail.try_update(ProductDetailState::begin_add_to_cart).flatten() else {
            return;
        };
        leptos::task::spawn_local(async move {
            match api::add_product_to_cart(product.id, 1).await {
                Ok(response) => {
                    log::debug!("remote cart updated: cart_id={} total_quantity={}", response.id, response.total_quantity);
                    cart.add_item((&product).into(), false);
                    notifier.notify(catalog::add_to_cart_succeeded(locale.get_untracked()));
                }
                Err(e) => {
                    log::warn!("add to cart failed: product_id={} error={e}", product.id);
                    let product_id = product.id.to_string();
                    notifier.notify(catalog::add_to_cart_failed(locale.get_untracked(), Some(&product_id), &e));
                }
            }
            detail.try_update(ProductDetailState::finish_add_to_cart);
        });
    };

    view! {
        {move || {
            if id.get().is_none() {
                return view! { <p>{move || text(Msg::MissingId)}</p> }.into_any();
            }
            let state = detail.get();
            if state.loading {
                return view! { <GlobalLoader message=Signal::derive(move || text(Msg::LoadingDetail).to_owned())/> }
                    .into_any();
            }
            if state.error.is_some() {
                return view! { <p>{move || text(Msg::DetailError)}</p> }.into_any();
            }
            let Some(product) = state.product else {
                return view! { <GlobalLoader message=Signal::derive(move || text(Msg::LoadingDetail).to_owned())/> }
                    .into_any();
            };
            view! {
                <section class="card">
                    <A href="/products">"← "{move || text(Msg::BackToProducts)}</A>
                    <h2>{product.title.clone()}</h2>
                    <img class="product-thumb" src=product.thumbnail.clone() alt=product.title.clone()/>
                    <p>
                        <strong>{move || text(Msg::Description)}":"</strong>
                        " "
                        {product.description.clone()}
                    </p>
                    <p>
                        <strong>{move || text(Msg::Price)}": "{i18n::format_price(product.price)}</strong>
                    </p>
                    <button
                        type="button"
                        disabled=move || detail.with(|d| d.product.is_none() || d.adding_to_cart)
                        on:click=on_add
                    >
                        {move || {
                            if detail.with(|d| d.adding_to_cart) {
                                text(Msg::AddingToCart)
                            } else {
                                text(Msg::AddToCart)
                            }
                        }}
                    </button>
                </section>
            }
            .into_any()
        }}
    }
}
