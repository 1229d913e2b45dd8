//! # board-sidebar
//!
//! Leptos + WASM sidebar for a collaborative boards workspace.
//!
//! Each board renders as a `SidebarBoardItem`: a clickable row with an
//! options menu (delete, move to category) and, while the board is active,
//! one row per view. Mutations, permission checks, and selection state come
//! from collaborators provided through Leptos context.

pub mod app;
pub mod components;
pub mod i18n;
pub mod mutator;
pub mod net;
pub mod pages;
pub mod permissions;
pub mod state;

/// WASM entry point: hydrate the server-rendered `App`.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::App;
    use leptos::prelude::*;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(|| view! { <App/> });
}
