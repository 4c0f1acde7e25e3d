//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! Each domain (`cart`, `theme`, `notifications`, ...) is a plain model with
//! synchronous operations and its own tests. `stores` wraps the app-wide
//! models in signal handles provided through context.

pub mod cart;
pub mod catalog;
pub mod check_in;
pub mod notifications;
pub mod stores;
pub mod theme;
