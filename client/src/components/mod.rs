//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render app chrome (toasts, cart panel, loaders) and read or
//! write the shared stores from Leptos context.

pub mod cart_sidebar;
pub mod global_loader;
pub mod toast_host;
