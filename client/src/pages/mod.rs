//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (fetching, form state) and
//! reads the app-wide stores from context.

pub mod about;
pub mod check_in;
pub mod product_detail;
pub mod products;
