//! Document-level side effects: theme attribute, palette stylesheet,
//! language direction, and the page title.
//!
//! Requires a browser environment; every function is a no-op in SSR and
//! native builds so server rendering stays deterministic.

#[cfg(test)]
#[path = "document_test.rs"]
mod document_test;

use crate::i18n::Language;
use crate::state::theme::{Palette, Theme};

#[cfg(feature = "hydrate")]
const PALETTE_LINK_ID: &str = "primereact-theme";

#[cfg(feature = "hydrate")]
fn document() -> Option<web_sys::Document> {
    web_sys::window().and_then(|w| w.document())
}

/// Whether the system prefers a dark colour scheme.
pub fn prefers_dark() -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
            .map_or(false, |mq| mq.matches())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Apply the `data-theme` attribute on the `<html>` element.
pub fn apply_theme(theme: Theme) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = document().and_then(|d| d.document_element()) {
            let _ = el.set_attribute("data-theme", theme.as_str());
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = theme;
    }
}

/// Swap the palette stylesheet `<link>` for `palette`.
pub fn apply_palette(palette: Palette) {
    #[cfg(feature = "hydrate")]
    {
        let Some(doc) = document() else {
            return;
        };
        if let Some(existing) = doc.get_element_by_id(PALETTE_LINK_ID) {
            existing.remove();
        }
        let (Ok(link), Some(head)) = (doc.create_element("link"), doc.head()) else {
            return;
        };
        let _ = link.set_attribute("id", PALETTE_LINK_ID);
        let _ = link.set_attribute("rel", "stylesheet");
        let _ = link.set_attribute("href", &palette.stylesheet_href());
        if head.append_child(&link).is_err() {
            log::warn!("failed to attach palette stylesheet {}", palette.name());
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = palette;
    }
}

/// Set `<html lang>` and `dir` for `lang`.
pub fn apply_language(lang: Language) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = document().and_then(|d| d.document_element()) {
            let _ = el.set_attribute("lang", lang.code());
            let _ = el.set_attribute("dir", text_direction(lang));
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = lang;
    }
}

pub fn set_title(title: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(doc) = document() {
            doc.set_title(title);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = title;
    }
}

/// Value for the `dir` attribute.
pub fn text_direction(lang: Language) -> &'static str {
    if lang.is_rtl() { "rtl" } else { "ltr" }
}
