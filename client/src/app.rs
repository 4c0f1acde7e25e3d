//! Root application component with routing, header chrome and context
//! providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{A, Route, Router, Routes},
};

use crate::components::{cart_sidebar::CartSidebar, toast_host::ToastHost};
use crate::i18n::{self, Msg};
use crate::pages::{
    about::AboutPage, check_in::CheckInPage, product_detail::ProductDetailPage, products::ProductsPage,
};
use crate::state::stores::Stores;
use crate::state::theme::Palette;
use crate::util::document;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en" dir="ltr">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <title>"Demo Shop"</title>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Creates the app-wide stores, restores persisted preferences once
/// hydrated, and mirrors theme and language onto the document.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let stores = Stores::new();
    stores.provide();

    // Effects only run in the browser, after hydration.
    Effect::new(move |_| untrack(|| stores.restore()));

    let theme = stores.theme;
    let locale = stores.locale;
    let cart = stores.cart;

    Effect::new(move |_| {
        if !theme.is_restored() {
            return;
        }
        let state = theme.get();
        document::apply_theme(state.theme);
        document::apply_palette(state.palette);
    });
    Effect::new(move |_| document::apply_language(locale.get()));

    let text = move |msg: Msg| locale.get().text(msg);

    view! {
        <Stylesheet id="leptos" href="/pkg/shop.css"/>

        <Router>
            <div class="app-shell">
                <header class="nav">
                    <h1>{move || text(Msg::HeaderTitle)}</h1>
                    <nav class="nav-links">
                        <A href="/" attr:class="nav-tab nav-tab--form">{move || text(Msg::NavForm)}</A>
                        <A href="/about">{move || text(Msg::NavAbout)}</A>
                        <A href="/products">{move || text(Msg::NavProducts)}</A>
                        <button
                            type="button"
                            aria-controls="global-cart"
                            aria-expanded=move || cart.is_open().to_string()
                            on:click=move |_| cart.toggle()
                        >
                            {move || i18n::cart_label(locale.get(), cart.count())}
                        </button>
                        <button type="button" on:click=move |_| theme.toggle_theme()>
                            {move || i18n::theme_label(locale.get(), theme.get().theme.as_str())}
                        </button>
                        <select
                            class="nav-palette"
                            prop:value=move || theme.get().palette.name()
                            on:change=move |ev| {
                                if let Some(palette) = Palette::from_name(&event_target_value(&ev)) {
                                    theme.set_palette(palette);
                                }
                            }
                        >
                            {Palette::ALL
                                .into_iter()
                                .map(|p| view! { <option value=p.name()>{p.label()}</option> })
                                .collect_view()}
                        </select>
                        <button type="button" on:click=move |_| locale.toggle()>
                            {move || i18n::language_label(locale.get())}
                        </button>
                    </nav>
                </header>

                <main>
                    <Routes fallback=move || view! { <p>{text(Msg::PageNotFound)}</p> }>
                        <Route path=StaticSegment("") view=CheckInPage/>
                        <Route path=StaticSegment("about") view=AboutPage/>
                        <Route path=StaticSegment("products") view=ProductsPage/>
                        <Route path=(StaticSegment("products"), ParamSegment("id")) view=ProductDetailPage/>
                    </Routes>
                </main>

                <CartSidebar/>
                <ToastHost/>
            </div>
        </Router>
    }
}
