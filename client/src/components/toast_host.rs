//! Toast stack rendering the live notifications.
//!
//! Each toast with a timeout arms its own timer when mounted. Toasts are
//! keyed by `(id, seq)`, so replacing an entry remounts it with the new
//! message and restarts the timer. The stale timer is cancelled on cleanup
//! and would be ignored by `dismiss_if_current` anyway.

use leptos::prelude::*;

use crate::i18n::Msg;
use crate::state::notifications::Notification;
use crate::state::stores::{LocaleStore, Notifier};

/// Fixed-position list of active toasts; renders nothing when empty.
#[component]
pub fn ToastHost() -> impl IntoView {
    let notifier = expect_context::<Notifier>();
    let locale = expect_context::<LocaleStore>();

    view! {
        <Show when=move || !notifier.is_empty()>
            <ol class="toast-host" aria-label=move || locale.get().text(Msg::NotificationsLabel)>
                <For
                    each=move || notifier.items()
                    key=|toast| (toast.id.clone(), toast.seq)
                    children=move |toast| view! { <ToastItem toast/> }
                />
            </ol>
        </Show>
    }
}

#[component]
fn ToastItem(toast: Notification) -> impl IntoView {
    let notifier = expect_context::<Notifier>();
    let locale = expect_context::<LocaleStore>();

    #[cfg(feature = "hydrate")]
    {
        if let Some(timeout_ms) = toast.timeout_ms {
            let alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
            let alive_task = alive.clone();
            let id = toast.id.clone();
            let seq = toast.seq;
            leptos::task::spawn_local(async move {
                gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(timeout_ms))).await;
                if alive_task.load(std::sync::atomic::Ordering::Relaxed) {
                    notifier.dismiss_if_current(&id, seq);
                }
            });
            on_cleanup(move || alive.store(false, std::sync::atomic::Ordering::Relaxed));
        }
    }

    let id = toast.id.clone();
    let class = format!("toast toast--{}", toast.kind.as_str());

    view! {
        <li class=class role="status" aria-live="polite">
            <div class="toast-message">{toast.message}</div>
            <button
                type="button"
                class="toast-close"
                aria-label=move || locale.get().text(Msg::DismissNotification)
                on:click=move |_| notifier.dismiss(&id)
            >
                "×"
            </button>
        </li>
    }
}
