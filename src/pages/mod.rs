//! Route-level page components.

pub mod sidebar;
