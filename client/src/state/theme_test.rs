use super::*;

#[test]
fn defaults_to_light_blue() {
    let state = ThemeState::default();
    assert_eq!(state.theme, Theme::Light);
    assert_eq!(state.palette, Palette::LaraLightBlue);
}

#[test]
fn from_system_follows_preference() {
    assert_eq!(ThemeState::from_system(true).theme, Theme::Dark);
    assert_eq!(ThemeState::from_system(false).theme, Theme::Light);
}

#[test]
fn toggle_theme_flips_base_mode_only() {
    let mut state = ThemeState::default();
    state.toggle_theme();
    assert_eq!(state.theme, Theme::Dark);
    assert_eq!(state.palette, Palette::LaraLightBlue);
    state.toggle_theme();
    assert_eq!(state.theme, Theme::Light);
}

#[test]
fn set_palette_derives_base_mode_from_name() {
    let mut state = ThemeState::default();
    state.set_palette(Palette::LaraDarkIndigo);
    assert_eq!(state.theme, Theme::Dark);

    state.set_palette(Palette::LaraLightIndigo);
    assert_eq!(state.theme, Theme::Light);
}

#[test]
fn set_theme_overrides_palette_mode() {
    let mut state = ThemeState::default();
    state.set_theme(Theme::Dark);
    assert_eq!(state.theme, Theme::Dark);
    assert_eq!(state.palette, Palette::LaraLightBlue);
}

#[test]
fn palette_names_round_trip() {
    for palette in Palette::ALL {
        assert_eq!(Palette::from_name(palette.name()), Some(palette));
    }
    assert_eq!(Palette::from_name("saga-green"), None);
}

#[test]
fn stylesheet_href_uses_palette_name() {
    assert_eq!(
        Palette::LaraDarkBlue.stylesheet_href(),
        "https://unpkg.com/primereact/resources/themes/lara-dark-blue/theme.css"
    );
}

#[test]
fn persisted_shape_matches_storage_format() {
    let state = ThemeState { theme: Theme::Dark, palette: Palette::LaraDarkBlue };
    let raw = serde_json::to_string(&state).unwrap();
    assert_eq!(raw, r#"{"theme":"dark","primeTheme":"lara-dark-blue"}"#);

    assert!(serde_json::from_str::<ThemeState>(r#"{"theme":"blue","primeTheme":"lara-dark-blue"}"#).is_err());
}
