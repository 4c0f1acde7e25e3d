use super::*;
use crate::state::notifications::NotificationKind;

fn phone() -> NewCartItem {
    NewCartItem::new(1, "Phone Max", 499.0, "https://cdn.example/phone.png")
}

fn stores() -> Stores {
    Stores::new()
}

fn toasts(s: &Stores) -> Vec<Notification> {
    s.notifier.state.with_untracked(|t| t.items.clone())
}

fn quantity_of(s: &Stores, id: u64) -> u32 {
    s.cart.snapshot().items.iter().find(|entry| entry.id == id).map_or(0, |entry| entry.quantity)
}

// =============================================================
// notifier
// =============================================================

#[test]
fn notifier_replaces_toast_with_same_id() {
    let s = stores();
    let first = s.notifier.notify(NotificationInput::error("first").with_id("load-error"));
    let second = s.notifier.notify(NotificationInput::error("second").with_id("load-error"));

    assert_eq!(first, "load-error");
    assert_eq!(second, "load-error");
    let live = toasts(&s);
    assert_eq!(live.len(), 1);
    assert_eq!(live[0].message, "second");
}

#[test]
fn notifier_dismiss_and_clear() {
    let s = stores();
    let a = s.notifier.notify(NotificationInput::info("a"));
    s.notifier.notify(NotificationInput::info("b"));

    s.notifier.dismiss(&a);
    assert_eq!(toasts(&s).len(), 1);
    assert!(!s.notifier.is_empty());

    s.notifier.clear();
    assert!(s.notifier.is_empty());
}

#[test]
fn stale_timer_does_not_dismiss_replacement() {
    let s = stores();
    s.notifier.notify(NotificationInput::error("old").with_id("x").with_timeout(1_000));
    let old = toasts(&s)[0].seq;
    s.notifier.notify(NotificationInput::error("new").with_id("x"));
    let new = toasts(&s)[0].seq;

    s.notifier.dismiss_if_current("x", old);
    let live = toasts(&s);
    assert_eq!(live.len(), 1);
    assert_eq!(live[0].message, "new");
    assert_eq!(live[0].timeout_ms, None);

    s.notifier.dismiss_if_current("x", new);
    assert!(s.notifier.is_empty());
}

// =============================================================
// cart
// =============================================================

#[test]
fn cart_add_raises_success_then_info() {
    let s = stores();
    s.cart.add_item(phone(), true);
    s.cart.add_item(phone(), true);

    assert_eq!(quantity_of(&s, 1), 2);
    assert!(s.cart.snapshot().is_open);

    let kinds: Vec<_> = toasts(&s).iter().map(|n| n.kind).collect();
    assert_eq!(kinds, [NotificationKind::Success, NotificationKind::Info]);
}

#[test]
fn cart_add_without_notify_is_silent() {
    let s = stores();
    s.cart.add_item(phone(), false);
    s.cart.add_item(NewCartItem::default(), false);

    assert_eq!(quantity_of(&s, 1), 1);
    assert!(s.notifier.is_empty());
}

#[test]
fn cart_invalid_item_raises_error_without_mutation() {
    let s = stores();
    s.cart.add_item(NewCartItem::default(), true);

    assert_eq!(s.cart.snapshot(), CartState::default());
    let live = toasts(&s);
    assert_eq!(live[0].kind, NotificationKind::Error);
    assert_eq!(live[0].timeout_ms, Some(5000));
}

#[test]
fn cart_remove_and_clear_notices() {
    let s = stores();
    s.cart.add_item(phone(), false);
    s.cart.remove_item(1);
    s.cart.remove_item(1);
    s.cart.clear();

    let kinds: Vec<_> = toasts(&s).iter().map(|n| n.kind).collect();
    assert_eq!(kinds, [NotificationKind::Info, NotificationKind::Error, NotificationKind::Info]);
}

#[test]
fn cart_toggle_and_close() {
    let s = stores();
    s.cart.toggle();
    assert!(s.cart.snapshot().is_open);
    s.cart.close();
    assert!(!s.cart.snapshot().is_open);
    s.cart.open();
    assert!(s.cart.snapshot().is_open);
}

#[test]
fn cart_restore_without_storage_is_empty_and_closed() {
    let s = stores();
    s.cart.restore();
    assert_eq!(s.cart.snapshot(), CartState::default());
}

// =============================================================
// theme + locale
// =============================================================

#[test]
fn theme_palette_sets_base_mode() {
    let s = stores();
    s.theme.set_palette(Palette::LaraDarkIndigo);
    let state = s.theme.get_untracked();
    assert_eq!(state.palette, Palette::LaraDarkIndigo);
    assert_eq!(state.theme, Theme::Dark);

    s.theme.toggle_theme();
    assert_eq!(s.theme.get_untracked().theme, Theme::Light);
}

#[test]
fn theme_is_not_restored_until_restore_runs() {
    let s = stores();
    assert!(!s.theme.is_restored());

    s.theme.restore();
    assert!(s.theme.is_restored());
    assert_eq!(s.theme.get_untracked(), ThemeState::from_system(false));
}

#[test]
fn locale_toggle_switches_cart_notice_language() {
    let s = stores();
    s.locale.toggle();
    assert_eq!(s.locale.get_untracked(), Language::He);

    s.cart.clear();
    let message = toasts(&s)[0].message.clone();
    assert_eq!(message, Language::He.text(crate::i18n::Msg::CartAlreadyEmpty));
}
