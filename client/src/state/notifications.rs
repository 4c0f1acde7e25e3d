//! Toast notification queue.
//!
//! DESIGN
//! ======
//! Notifications are addressable by id. Callers that pass a deterministic id
//! (for example `product-load-error:42`) coalesce repeated failures into one
//! visible toast: re-adding a live id replaces the entry in place.
//!
//! Every `add` stamps the entry with a fresh `seq`. Auto-dismiss timers live
//! in the toast host and call `dismiss_if_current` with the `seq` they were
//! armed for, so a timer belonging to a replaced entry cannot remove its
//! successor, even when both were created in the same millisecond.

#[cfg(test)]
#[path = "notifications_test.rs"]
mod notifications_test;

use serde::{Deserialize, Serialize};

/// Visual category of a toast.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Success,
    Error,
    Info,
}

impl NotificationKind {
    /// CSS modifier suffix (`toast--success` etc).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Info => "info",
        }
    }
}

/// A live toast.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: String,
    pub kind: NotificationKind,
    pub message: String,
    /// Creation time in milliseconds since the Unix epoch.
    pub timestamp: u64,
    /// Auto-dismiss delay; `None` keeps the toast until dismissed.
    pub timeout_ms: Option<u32>,
    /// Revision stamp, unique per `add` within one queue.
    pub seq: u64,
}

/// Request to show a toast. A random id is generated when `id` is omitted.
#[derive(Clone, Debug, PartialEq)]
pub struct NotificationInput {
    pub id: Option<String>,
    pub kind: NotificationKind,
    pub message: String,
    pub timeout_ms: Option<u32>,
}

impl NotificationInput {
    pub fn new(kind: NotificationKind, message: impl Into<String>) -> Self {
        Self {
            id: None,
            kind,
            message: message.into(),
            timeout_ms: None,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(NotificationKind::Success, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(NotificationKind::Error, message)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(NotificationKind::Info, message)
    }

    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout_ms: u32) -> Self {
        self.timeout_ms = Some(timeout_ms);
        self
    }
}

/// Live toast list in display order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NotificationsState {
    pub items: Vec<Notification>,
    next_seq: u64,
}

impl NotificationsState {
    /// Show a toast and return its id.
    ///
    /// A live entry with the same id is replaced at its current position.
    pub fn add(&mut self, input: NotificationInput, now_ms: u64) -> String {
        let id = input.id.unwrap_or_else(generate_id);
        self.next_seq += 1;
        let next = Notification {
            id: id.clone(),
            kind: input.kind,
            message: input.message,
            timestamp: now_ms,
            timeout_ms: input.timeout_ms,
            seq: self.next_seq,
        };

        match self.items.iter_mut().find(|entry| entry.id == id) {
            Some(existing) => *existing = next,
            None => self.items.push(next),
        }
        id
    }

    /// Remove a toast. Returns `false` if it was not live.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|entry| entry.id != id);
        self.items.len() != before
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Timer callback: remove `id` only if it is still the revision `seq`.
    pub fn dismiss_if_current(&mut self, id: &str, seq: u64) -> bool {
        let current = self.items.iter().any(|entry| entry.id == id && entry.seq == seq);
        current && self.remove(id)
    }
}

fn generate_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
