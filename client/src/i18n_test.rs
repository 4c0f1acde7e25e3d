use super::*;

#[test]
fn language_codes_round_trip() {
    for lang in [Language::En, Language::He] {
        assert_eq!(Language::from_code(lang.code()), Some(lang));
    }
    assert_eq!(Language::from_code("fr"), None);
    assert_eq!(Language::from_code(" he "), Some(Language::He));
}

#[test]
fn only_hebrew_is_rtl() {
    assert!(!Language::En.is_rtl());
    assert!(Language::He.is_rtl());
}

#[test]
fn toggled_switches_between_languages() {
    assert_eq!(Language::En.toggled(), Language::He);
    assert_eq!(Language::He.toggled(), Language::En);
}

#[test]
fn contact_count_pluralizes_english() {
    assert_eq!(contact_count(Language::En, 0), "0 contacts");
    assert_eq!(contact_count(Language::En, 1), "1 contact");
    assert_eq!(contact_count(Language::En, 4), "4 contacts");
}

#[test]
fn header_labels_interpolate_values() {
    assert_eq!(cart_label(Language::En, 1), "Cart (1)");
    assert_eq!(theme_label(Language::En, "dark"), "Theme: dark");
    assert_eq!(language_label(Language::En), "Language: English");
    assert_eq!(language_label(Language::He), "שפה: עברית");
}

#[test]
fn cart_line_formats_two_decimals() {
    assert_eq!(cart_line(Language::En, 2, 19.5), "Qty 2 · $19.50");
    assert_eq!(format_price(999.0), "$999.00");
}

#[test]
fn every_english_key_has_hebrew_text() {
    let keys = [
        Msg::HeaderTitle,
        Msg::ContactSaved,
        Msg::ConfirmPasswordMismatch,
        Msg::AddToCartSuccess,
        Msg::CartAlreadyEmpty,
        Msg::DismissNotification,
    ];
    for key in keys {
        assert!(!Language::En.text(key).is_empty());
        assert!(!Language::He.text(key).is_empty());
        assert_ne!(Language::En.text(key), Language::He.text(key));
    }
}
