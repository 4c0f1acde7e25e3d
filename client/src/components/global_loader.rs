//! Inline loading message used while route data is in flight.

use leptos::prelude::*;

#[component]
pub fn GlobalLoader(#[prop(into)] message: Signal<String>) -> impl IntoView {
    view! {
        <p class="muted global-loader" role="status" aria-busy="true">
            {move || message.get()}
        </p>
    }
}
