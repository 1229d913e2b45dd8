//! Conditional rendering behind a board permission check.

#[cfg(test)]
#[path = "permission_gate_test.rs"]
mod permission_gate_test;

use leptos::prelude::*;

use crate::permissions::{Permission, PermissionChecker, Permissions};

/// Whether gated content may render. No checker in context denies.
fn gate_allows(checker: Option<&Permissions>, board_id: &str, permissions: &[Permission]) -> bool {
    checker.is_some_and(|checker| checker.allows_all(board_id, permissions))
}

/// Renders `children` only if every listed permission is granted on `board_id`.
///
/// The check runs once at render time against the `Permissions` context.
#[component]
pub fn BoardPermissionGate(
    #[prop(into)] board_id: String,
    permissions: Vec<Permission>,
    children: Children,
) -> impl IntoView {
    let checker = use_context::<Permissions>();
    gate_allows(checker.as_ref(), &board_id, &permissions).then(children)
}
