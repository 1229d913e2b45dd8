//! Board permission names and the synchronous check seam.
//!
//! DESIGN
//! ======
//! Components only ask "is this allowed?" at render time. How grants are
//! computed belongs to whoever implements `PermissionChecker`; nothing here
//! caches answers.

#[cfg(test)]
#[path = "permissions_test.rs"]
mod permissions_test;

use std::collections::HashSet;
use std::sync::Arc;

/// Named board permissions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Permission {
    ManageBoardType,
    DeleteBoard,
    ShareBoard,
    ManageBoardRoles,
    ManageBoardCards,
    ManageBoardProperties,
    CommentBoardCards,
    ViewBoard,
}

impl Permission {
    pub const ALL: [Self; 8] = [
        Self::ManageBoardType,
        Self::DeleteBoard,
        Self::ShareBoard,
        Self::ManageBoardRoles,
        Self::ManageBoardCards,
        Self::ManageBoardProperties,
        Self::CommentBoardCards,
        Self::ViewBoard,
    ];
}

/// Answers whether the acting user holds `permission` on a board.
pub trait PermissionChecker {
    fn allows(&self, board_id: &str, permission: Permission) -> bool;

    /// True only when every permission in `permissions` is allowed.
    fn allows_all(&self, board_id: &str, permissions: &[Permission]) -> bool {
        permissions.iter().all(|p| self.allows(board_id, *p))
    }
}

/// Explicit grant set keyed by (board id, permission).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StaticPermissions {
    grants: HashSet<(String, Permission)>,
}

impl StaticPermissions {
    /// Grant `permission` on `board_id`.
    pub fn grant(&mut self, board_id: &str, permission: Permission) {
        self.grants.insert((board_id.to_owned(), permission));
    }

    /// Grant every known permission on `board_id`.
    pub fn grant_all(&mut self, board_id: &str) {
        for permission in Permission::ALL {
            self.grant(board_id, permission);
        }
    }

    /// Drop `permission` on `board_id` if present.
    pub fn revoke(&mut self, board_id: &str, permission: Permission) {
        self.grants.remove(&(board_id.to_owned(), permission));
    }
}

impl PermissionChecker for StaticPermissions {
    fn allows(&self, board_id: &str, permission: Permission) -> bool {
        self.grants.contains(&(board_id.to_owned(), permission))
    }
}

/// Shared checker handle provided through Leptos context.
#[derive(Clone)]
pub struct Permissions(pub Arc<dyn PermissionChecker + Send + Sync>);

impl Permissions {
    pub fn new(checker: impl PermissionChecker + Send + Sync + 'static) -> Self {
        Self(Arc::new(checker))
    }
}

/// Deny-all: nothing gated renders until a real checker is provided.
impl Default for Permissions {
    fn default() -> Self {
        Self::new(StaticPermissions::default())
    }
}

impl PermissionChecker for Permissions {
    fn allows(&self, board_id: &str, permission: Permission) -> bool {
        self.0.allows(board_id, permission)
    }
}
