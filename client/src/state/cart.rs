//! Shopping cart contents and side-panel visibility.
//!
//! DESIGN
//! ======
//! `CartState` holds at most one line per product id; adding an id that is
//! already present bumps its quantity. Operations return a `CartEvent` or
//! `CartError` instead of emitting toasts directly, and `notice_for` maps
//! either outcome to the toast the store shows.

#[cfg(test)]
#[path = "cart_test.rs"]
mod cart_test;

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::notifications::NotificationInput;
use crate::i18n::{self, Language, Msg};

const NOTICE_TIMEOUT_MS: u32 = 2_500;
const ERROR_TIMEOUT_MS: u32 = 5_000;

/// One cart line.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub id: u64,
    pub title: String,
    pub price: f64,
    pub thumbnail: String,
    pub quantity: u32,
}

impl CartItem {
    pub fn line_total(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }
}

/// Candidate item for `add_item`; id and title are validated.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NewCartItem {
    pub id: Option<u64>,
    pub title: Option<String>,
    pub price: f64,
    pub thumbnail: String,
}

impl NewCartItem {
    pub fn new(id: u64, title: impl Into<String>, price: f64, thumbnail: impl Into<String>) -> Self {
        Self {
            id: Some(id),
            title: Some(title.into()),
            price,
            thumbnail: thumbnail.into(),
        }
    }
}

/// Successful cart mutation (or the informational no-op of clearing an
/// empty cart).
#[derive(Clone, Debug, PartialEq)]
pub enum CartEvent {
    Added { title: String },
    Incremented { title: String, quantity: u32 },
    Removed { title: String },
    Cleared,
    AlreadyEmpty,
}

/// Rejected cart mutation; state is unchanged.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CartError {
    #[error("cart item is missing an id or title")]
    InvalidItem,
    #[error("item {0} is not in the cart")]
    NotFound(u64),
}

/// Cart lines plus the side-panel open flag.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CartState {
    pub items: Vec<CartItem>,
    pub is_open: bool,
}

impl CartState {
    /// Rebuild state from persisted values, discarding item lists that break
    /// the one-line-per-id or positive-quantity rules.
    pub fn from_stored(items: Option<Vec<CartItem>>, is_open: Option<bool>) -> Self {
        let items = items.filter(|items| is_well_formed(items)).unwrap_or_default();
        Self {
            items,
            is_open: is_open.unwrap_or(false),
        }
    }

    pub fn open(&mut self) {
        self.is_open = true;
    }

    pub fn close(&mut self) {
        self.is_open = false;
    }

    pub fn toggle(&mut self) {
        self.is_open = !self.is_open;
    }

    /// Add one unit of `item`, opening the panel on success.
    ///
    /// # Errors
    ///
    /// Returns `CartError::InvalidItem` when the id is missing/zero or the
    /// title is blank.
    pub fn add_item(&mut self, item: NewCartItem) -> Result<CartEvent, CartError> {
        let (Some(id), Some(title)) = (item.id.filter(|id| *id != 0), item.title) else {
            return Err(CartError::InvalidItem);
        };
        if title.trim().is_empty() {
            return Err(CartError::InvalidItem);
        }

        let event = if let Some(existing) = self.items.iter_mut().find(|entry| entry.id == id) {
            existing.quantity += 1;
            CartEvent::Incremented {
                title: existing.title.clone(),
                quantity: existing.quantity,
            }
        } else {
            self.items.push(CartItem {
                id,
                title: title.clone(),
                price: item.price,
                thumbnail: item.thumbnail,
                quantity: 1,
            });
            CartEvent::Added { title }
        };
        self.is_open = true;
        Ok(event)
    }

    /// Remove the whole line for `id`.
    ///
    /// # Errors
    ///
    /// Returns `CartError::NotFound` when no line has that id.
    pub fn remove_item(&mut self, id: u64) -> Result<CartEvent, CartError> {
        let index = self
            .items
            .iter()
            .position(|entry| entry.id == id)
            .ok_or(CartError::NotFound(id))?;
        let removed = self.items.remove(index);
        Ok(CartEvent::Removed { title: removed.title })
    }

    pub fn clear(&mut self) -> CartEvent {
        if self.items.is_empty() {
            return CartEvent::AlreadyEmpty;
        }
        self.items.clear();
        CartEvent::Cleared
    }

    /// Number of distinct lines.
    pub fn count(&self) -> usize {
        self.items.len()
    }

    pub fn total(&self) -> f64 {
        self.items.iter().map(CartItem::line_total).sum()
    }
}

fn is_well_formed(items: &[CartItem]) -> bool {
    let mut seen = HashSet::new();
    items
        .iter()
        .all(|item| item.id != 0 && item.quantity > 0 && seen.insert(item.id))
}

/// Toast describing the outcome of a cart operation.
pub fn notice_for(lang: Language, outcome: &Result<CartEvent, CartError>) -> NotificationInput {
    match outcome {
        Ok(CartEvent::Added { title }) => {
            NotificationInput::success(i18n::cart_added(lang, title)).with_timeout(NOTICE_TIMEOUT_MS)
        }
        Ok(CartEvent::Incremented { title, .. }) => {
            NotificationInput::info(i18n::cart_incremented(lang, title)).with_timeout(NOTICE_TIMEOUT_MS)
        }
        Ok(CartEvent::Removed { title }) => {
            NotificationInput::info(i18n::cart_removed(lang, title)).with_timeout(NOTICE_TIMEOUT_MS)
        }
        Ok(CartEvent::Cleared) => {
            NotificationInput::success(lang.text(Msg::CartCleared)).with_timeout(NOTICE_TIMEOUT_MS)
        }
        Ok(CartEvent::AlreadyEmpty) => {
            NotificationInput::info(lang.text(Msg::CartAlreadyEmpty)).with_timeout(NOTICE_TIMEOUT_MS)
        }
        Err(CartError::InvalidItem) => {
            NotificationInput::error(lang.text(Msg::CartInvalidItem)).with_timeout(ERROR_TIMEOUT_MS)
        }
        Err(CartError::NotFound(_)) => {
            NotificationInput::error(lang.text(Msg::CartItemNotFound)).with_timeout(ERROR_TIMEOUT_MS)
        }
    }
}
