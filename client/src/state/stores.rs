//! Reactive store handles provided through Leptos context.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each handle is a `Copy` wrapper around an `RwSignal` holding one of the
//! plain state models. The handles are the only mutation path: they apply
//! the model operation, persist the result to `localStorage`, and raise the
//! resulting toast. Persisted values are restored once on the client after
//! hydration so SSR markup always renders defaults.

#[cfg(test)]
#[path = "stores_test.rs"]
mod stores_test;

use leptos::prelude::*;

use super::cart::{self, CartItem, CartState, NewCartItem};
use super::notifications::{Notification, NotificationInput, NotificationsState};
use super::theme::{Palette, Theme, ThemeState};
use crate::config::storage_keys;
use crate::i18n::Language;
use crate::util::{clock, document, storage};

/// Toast queue handle.
#[derive(Clone, Copy, Debug)]
pub struct Notifier {
    state: RwSignal<NotificationsState>,
}

impl Notifier {
    pub fn new() -> Self {
        Self { state: RwSignal::new(NotificationsState::default()) }
    }

    /// Live toasts (tracked).
    pub fn items(&self) -> Vec<Notification> {
        self.state.with(|s| s.items.clone())
    }

    /// Whether any toast is live (tracked).
    pub fn is_empty(&self) -> bool {
        self.state.with(NotificationsState::is_empty)
    }

    /// Show a toast; returns its id.
    pub fn notify(&self, input: NotificationInput) -> String {
        let now = clock::now_ms();
        self.state.try_update(|s| s.add(input, now)).unwrap_or_default()
    }

    pub fn dismiss(&self, id: &str) {
        self.state.update(|s| {
            s.remove(id);
        });
    }

    /// Auto-dismiss callback for a timer armed for revision `seq`.
    pub fn dismiss_if_current(&self, id: &str, seq: u64) {
        self.state.update(|s| {
            s.dismiss_if_current(id, seq);
        });
    }

    pub fn clear(&self) {
        self.state.update(NotificationsState::clear);
    }
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new()
    }
}

/// UI language handle.
#[derive(Clone, Copy, Debug)]
pub struct LocaleStore {
    lang: RwSignal<Language>,
}

impl LocaleStore {
    pub fn new() -> Self {
        Self { lang: RwSignal::new(Language::default()) }
    }

    /// Load the stored language preference, if any.
    pub fn restore(&self) {
        if let Some(lang) = storage::load_raw(storage_keys::LANGUAGE).as_deref().and_then(Language::from_code) {
            self.lang.set(lang);
        }
    }

    /// Current language (tracked).
    pub fn get(&self) -> Language {
        self.lang.get()
    }

    pub fn get_untracked(&self) -> Language {
        self.lang.get_untracked()
    }

    pub fn set(&self, lang: Language) {
        self.lang.set(lang);
        storage::save_raw(storage_keys::LANGUAGE, lang.code());
    }

    pub fn toggle(&self) {
        self.set(self.lang.get_untracked().toggled());
    }
}

impl Default for LocaleStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Theme preference handle.
#[derive(Clone, Copy, Debug)]
pub struct ThemeStore {
    state: RwSignal<ThemeState>,
    restored: RwSignal<bool>,
}

impl ThemeStore {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(ThemeState::default()),
            restored: RwSignal::new(false),
        }
    }

    /// Load the stored preference, falling back to the system colour scheme.
    pub fn restore(&self) {
        let restored = storage::load_json::<ThemeState>(storage_keys::THEME)
            .unwrap_or_else(|| ThemeState::from_system(document::prefers_dark()));
        self.state.set(restored);
        self.restored.set(true);
    }

    /// Whether `restore` has run (tracked). Until then the state holds
    /// defaults that must not reach the document.
    pub fn is_restored(&self) -> bool {
        self.restored.get()
    }

    /// Current preference (tracked).
    pub fn get(&self) -> ThemeState {
        self.state.get()
    }

    pub fn get_untracked(&self) -> ThemeState {
        self.state.get_untracked()
    }

    pub fn set_theme(&self, theme: Theme) {
        self.mutate(|s| s.set_theme(theme));
    }

    pub fn toggle_theme(&self) {
        self.mutate(ThemeState::toggle_theme);
    }

    pub fn set_palette(&self, palette: Palette) {
        self.mutate(|s| s.set_palette(palette));
    }

    fn mutate(&self, f: impl FnOnce(&mut ThemeState)) {
        self.state.update(f);
        storage::save_json(storage_keys::THEME, &self.state.get_untracked());
    }
}

impl Default for ThemeStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Cart handle; raises cart toasts through the shared `Notifier`.
#[derive(Clone, Copy, Debug)]
pub struct CartStore {
    state: RwSignal<CartState>,
    notifier: Notifier,
    locale: LocaleStore,
}

impl CartStore {
    pub fn new(notifier: Notifier, locale: LocaleStore) -> Self {
        Self {
            state: RwSignal::new(CartState::default()),
            notifier,
            locale,
        }
    }

    /// Load persisted items and panel flag; malformed data yields an empty,
    /// closed cart.
    pub fn restore(&self) {
        let items = storage::load_json::<Vec<CartItem>>(storage_keys::CART_ITEMS);
        let is_open = storage::load_json::<bool>(storage_keys::CART_OPEN);
        self.state.set(CartState::from_stored(items, is_open));
    }

    pub fn is_open(&self) -> bool {
        self.state.with(|s| s.is_open)
    }

    pub fn items(&self) -> Vec<CartItem> {
        self.state.with(|s| s.items.clone())
    }

    pub fn count(&self) -> usize {
        self.state.with(CartState::count)
    }

    pub fn total(&self) -> f64 {
        self.state.with(CartState::total)
    }

    pub fn snapshot(&self) -> CartState {
        self.state.get_untracked()
    }

    pub fn open(&self) {
        self.mutate(CartState::open);
    }

    pub fn close(&self) {
        self.mutate(CartState::close);
    }

    pub fn toggle(&self) {
        self.mutate(CartState::toggle);
    }

    /// Add one unit of `item`. With `notify == false` no toast is raised,
    /// including for rejected items; callers then report on their own.
    pub fn add_item(&self, item: NewCartItem, notify: bool) {
        let outcome = self.mutate(|s| s.add_item(item));
        if let Err(e) = &outcome {
            log::debug!("cart add rejected: {e}");
        }
        if notify {
            self.notifier.notify(cart::notice_for(self.locale.get_untracked(), &outcome));
        }
    }

    pub fn remove_item(&self, id: u64) {
        let outcome = self.mutate(|s| s.remove_item(id));
        self.notifier.notify(cart::notice_for(self.locale.get_untracked(), &outcome));
    }

    pub fn clear(&self) {
        let outcome = Ok(self.mutate(CartState::clear));
        self.notifier.notify(cart::notice_for(self.locale.get_untracked(), &outcome));
    }

    fn mutate<R>(&self, f: impl FnOnce(&mut CartState) -> R) -> R {
        let mut next = self.state.get_untracked();
        let result = f(&mut next);
        if next != self.state.get_untracked() {
            storage::save_json(storage_keys::CART_ITEMS, &next.items);
            storage::save_json(storage_keys::CART_OPEN, &next.is_open);
            self.state.set(next);
        }
        result
    }
}

/// All app-wide stores, created once by `App`.
#[derive(Clone, Copy, Debug)]
pub struct Stores {
    pub notifier: Notifier,
    pub locale: LocaleStore,
    pub theme: ThemeStore,
    pub cart: CartStore,
}

impl Stores {
    pub fn new() -> Self {
        let notifier = Notifier::new();
        let locale = LocaleStore::new();
        Self {
            notifier,
            locale,
            theme: ThemeStore::new(),
            cart: CartStore::new(notifier, locale),
        }
    }

    /// Restore every persisted store.
    pub fn restore(&self) {
        self.locale.restore();
        self.theme.restore();
        self.cart.restore();
    }

    /// Provide each handle as its own context value.
    pub fn provide(self) {
        provide_context(self.notifier);
        provide_context(self.locale);
        provide_context(self.theme);
        provide_context(self.cart);
    }
}

impl Default for Stores {
    fn default() -> Self {
        Self::new()
    }
}
