#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn prefers_dark_is_false_in_non_hydrate_tests() {
    assert!(!prefers_dark());
}

#[test]
fn text_direction_follows_language() {
    assert_eq!(text_direction(Language::En), "ltr");
    assert_eq!(text_direction(Language::He), "rtl");
}

#[test]
fn dom_helpers_are_noops_but_callable() {
    apply_theme(Theme::Dark);
    apply_palette(Palette::LaraDarkIndigo);
    apply_language(Language::He);
    set_title("Check-in");
}
