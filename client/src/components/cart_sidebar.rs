//! Slide-over cart panel with line items, total, and remove/clear actions.

use leptos::prelude::*;

use crate::i18n::{self, Msg};
use crate::state::stores::{CartStore, LocaleStore};

/// Cart panel bound to the header toggle via `id="global-cart"`.
///
/// Escape closes the panel while it is open.
#[component]
pub fn CartSidebar() -> impl IntoView {
    let cart = expect_context::<CartStore>();
    let locale = expect_context::<LocaleStore>();
    let text = move |msg: Msg| locale.get().text(msg);

    let handle = window_event_listener(leptos::ev::keydown, move |ev| {
        if ev.key() == "Escape" && cart.snapshot().is_open {
            cart.close();
        }
    });
    on_cleanup(move || handle.remove());

    view! {
        <div
            class="sidebar-overlay"
            data-open=move || cart.is_open().to_string()
            aria-hidden=move || (!cart.is_open()).to_string()
        >
            <button
                type="button"
                class="sidebar-backdrop"
                aria-label=move || text(Msg::CloseCart)
                on:click=move |_| cart.close()
            ></button>
            <aside id="global-cart" class="sidebar-panel" aria-label=move || text(Msg::CartTitle) role="complementary">
                <div class="sidebar-header">
                    <h2>{move || text(Msg::CartTitle)}</h2>
                    <button type="button" on:click=move |_| cart.close()>
                        {move || text(Msg::Close)}
                    </button>
                </div>

                <Show
                    when=move || cart.count() != 0
                    fallback=move || view! { <p class="muted">{move || text(Msg::CartEmpty)}</p> }
                >
                    <ul class="cart-list">
                        <For
                            each=move || cart.items()
                            key=|item| (item.id, item.quantity)
                            children=move |item| {
                                let id = item.id;
                                let (quantity, amount) = (item.quantity, item.line_total());
                                view! {
                                    <li class="cart-item">
                                        <img class="cart-thumb" src=item.thumbnail.clone() alt=item.title.clone()/>
                                        <div class="cart-item-main">
                                            <div class="cart-item-title">
                                                <strong>{item.title.clone()}</strong>
                                            </div>
                                            <div class="muted small">
                                                {move || i18n::cart_line(locale.get(), quantity, amount)}
                                            </div>
                                        </div>
                                        <button type="button" on:click=move |_| cart.remove_item(id)>
                                            {move || text(Msg::Remove)}
                                        </button>
                                    </li>
                                }
                            }
                        />
                    </ul>
                    <div class="cart-footer">
                        <div>
                            <span class="muted">{move || text(Msg::Total)}</span>
                            <div>
                                <strong>{move || i18n::format_price(cart.total())}</strong>
                            </div>
                        </div>
                        <button type="button" on:click=move |_| cart.clear()>
                            {move || text(Msg::Clear)}
                        </button>
                    </div>
                </Show>
            </aside>
        </div>
    }
}
