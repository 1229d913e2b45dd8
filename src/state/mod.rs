//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`board`, `sidebar`, `selection`, `ui`) so the
//! sidebar components can depend on small focused models.

pub mod board;
pub mod selection;
pub mod sidebar;
pub mod ui;
