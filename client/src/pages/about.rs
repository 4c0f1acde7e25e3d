//! About page with demo toast triggers.

use leptos::prelude::*;

use crate::i18n::Msg;
use crate::state::notifications::NotificationInput;
use crate::state::stores::{LocaleStore, Notifier};

#[component]
pub fn AboutPage() -> impl IntoView {
    let notifier = expect_context::<Notifier>();
    let locale = expect_context::<LocaleStore>();
    let text = move |msg: Msg| locale.get().text(msg);

    let on_success = move |_| {
        notifier.notify(NotificationInput::success(locale.get_untracked().text(Msg::DemoSaved)).with_timeout(4000));
    };
    let on_error = move |_| {
        notifier.notify(NotificationInput::error(locale.get_untracked().text(Msg::DemoFailed)).with_timeout(6000));
    };

    view! {
        <section class="card">
            <h2>{move || text(Msg::AboutTitle)}</h2>
            <p class="muted">{move || text(Msg::AboutBody)}</p>
            <div class="button-row">
                <button type="button" on:click=on_success>{move || text(Msg::ShowSuccessToast)}</button>
                <button type="button" on:click=on_error>{move || text(Msg::ShowErrorToast)}</button>
            </div>
        </section>
    }
}
