//! Product list page: paged fetch, table/list views, title search.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::global_loader::GlobalLoader;
use crate::config::PRODUCTS_PAGE_SIZE;
use crate::i18n::{self, Msg};
use crate::net::api;
use crate::net::types::ProductSummary;
use crate::state::catalog::{self, CatalogState, ViewMode};
use crate::state::stores::{LocaleStore, Notifier};

/// Fetch one page at `offset` and fold the outcome into `catalog`. A
/// response arriving after the page is torn down is dropped.
fn load_page(catalog: RwSignal<CatalogState>, notifier: Notifier, locale: LocaleStore, offset: u32) {
    leptos::task::spawn_local(async move {
        match api::fetch_products(offset, PRODUCTS_PAGE_SIZE).await {
            Ok(page) => {
                log::debug!("products page loaded: skip={} count={}", page.skip, page.products.len());
                catalog.try_update(|c| c.receive_page(page));
            }
            Err(e) => {
                log::warn!("products load failed: {e}");
                notifier.notify(catalog::products_load_failed(locale.get_untracked(), &e));
                catalog.try_update(|c| c.receive_error(e));
            }
        }
    });
}

fn product_href(product: &ProductSummary) -> String {
    format!("/products/{}", product.id)
}

fn price_text(product: &ProductSummary) -> String {
    product.price.map(i18n::format_price).unwrap_or_default()
}

#[component]
pub fn ProductsPage() -> impl IntoView {
    let notifier = expect_context::<Notifier>();
    let locale = expect_context::<LocaleStore>();
    let catalog = RwSignal::new(CatalogState::default());
    let text = move |msg: Msg| locale.get().text(msg);

    Effect::new(move |_| {
        if let Some(offset) = catalog.try_update(CatalogState::begin_initial_load).flatten() {
            load_page(catalog, notifier, locale, offset);
        }
    });

    let on_load_more = move |_| {
        if let Some(offset) = catalog.try_update(CatalogState::begin_next_page).flatten() {
            load_page(catalog, notifier, locale, offset);
        }
    };

    let initial_pending = move || catalog.with(|c| c.pages.is_empty() && c.error.is_none());
    let failed = move || catalog.with(|c| c.pages.is_empty() && c.error.is_some());
    let visible = move || catalog.with(CatalogState::visible_products);
    let is_list = move || catalog.with(|c| c.view_mode == ViewMode::List);

    let more_label = move || {
        catalog.with(|c| {
            if c.loading_more {
                text(Msg::LoadingMore)
            } else if c.has_more() {
                text(Msg::LoadMore)
            } else {
                text(Msg::NoMoreProducts)
            }
        })
    };

    view! {
        <section class="card">
            <h2>{move || text(Msg::ProductsTitle)}</h2>
            <Show
                when=move || !initial_pending() && !failed()
                fallback=move || {
                    view! {
                        <Show
                            when=failed
                            fallback=move || view! { <GlobalLoader message=Signal::derive(move || text(Msg::LoadingProducts).to_owned())/> }
                        >
                            <p class="field-error">{move || text(Msg::ProductsLoadFailed)}</p>
                        </Show>
                    }
                }
            >
                <div class="toolbar-row">
                    <label for="product-search">{move || text(Msg::Search)}</label>
                    <input
                        id="product-search"
                        type="search"
                        placeholder=move || text(Msg::SearchPlaceholder)
                        prop:value=move || catalog.with(|c| c.search.clone())
                        on:input=move |ev| {
                            let raw = event_target_value(&ev);
                            catalog.update(|c| c.search = raw);
                        }
                    />
                    <button
                        type="button"
                        on:click=move |_| {
                            catalog.update(|c| {
                                c.view_mode = match c.view_mode {
                                    ViewMode::Table => ViewMode::List,
                                    ViewMode::List => ViewMode::Table,
                                };
                            });
                        }
                    >
                        {move || if is_list() { text(Msg::TableView) } else { text(Msg::ListView) }}
                    </button>
                </div>

                <Show when=move || visible().is_empty()>
                    <p class="muted">{move || text(Msg::NoMatches)}</p>
                </Show>

                <Show
                    when=is_list
                    fallback=move || {
                        view! {
                            <table class="product-table">
                                <thead>
                                    <tr>
                                        <th>{move || text(Msg::ColumnTitle)}</th>
                                        <th>{move || text(Msg::ColumnPrice)}</th>
                                        <th>{move || text(Msg::ColumnCategory)}</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    <For
                                        each=visible
                                        key=|p| p.id
                                        children=move |p| {
                                            let href = product_href(&p);
                                            let price = price_text(&p);
                                            let category = p.category.unwrap_or_default();
                                            view! {
                                                <tr>
                                                    <td><A href=href>{p.title}</A></td>
                                                    <td>{price}</td>
                                                    <td>{category}</td>
                                                </tr>
                                            }
                                        }
                                    />
                                </tbody>
                            </table>
                        }
                    }
                >
                    <ul class="contact-list">
                        <For
                            each=visible
                            key=|p| p.id
                            children=move |p| {
                                let href = product_href(&p);
                                let price = price_text(&p);
                                view! {
                                    <li>
                                        <A href=href>
                                            <strong>{p.title}</strong>
                                        </A>
                                        <span class="muted small">" "{price}</span>
                                    </li>
                                }
                            }
                        />
                    </ul>
                </Show>

                <button
                    type="button"
                    disabled=move || catalog.with(|c| !c.has_more() || c.loading_more)
                    on:click=on_load_more
                >
                    {more_label}
                </button>
            </Show>
        </section>
    }
}
