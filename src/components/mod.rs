//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render sidebar chrome while reading shared state from Leptos
//! context providers.

pub mod menu;
pub mod permission_gate;
pub mod sidebar_board_item;
