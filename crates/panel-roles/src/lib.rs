//! # Panel Roles
//!
//! This crate provides role handling for the admin panel: the role
//! records attached to an authenticated session, priority-based
//! resolution of a user's "main" role, and the static display metadata
//! (Persian name, icon, color) the UI renders for each role.
//!
//! ## Overview
//!
//! The panel-roles crate handles:
//! - **Roles**: `{code, name, priority}` records carried by the session
//! - **Resolution**: picking the highest-priority role for display
//! - **Metadata**: role code → display name / icon / color / level
//!
//! Role priority is a display concern only. Permission decisions are
//! made by `panel-rbac` from the session's permission strings and super
//! flags; a role never grants or denies anything by itself.
//!
//! ## Usage
//!
//! ```rust
//! use panel_roles::{Role, highest_priority_role, meta};
//!
//! let roles = vec![
//!     Role::new("author", "Author", 40),
//!     Role::new("admin", "Admin", 80),
//! ];
//!
//! assert_eq!(highest_priority_role(&roles), Some("admin"));
//! assert_eq!(meta("admin").icon, "Shield");
//! ```
//!
//! ## Integration with panel-rbac
//!
//! `panel-rbac` re-exposes these operations as methods on its session
//! snapshot type, so UI code usually calls `caller.highest_priority_role()`
//! rather than this crate directly.

pub mod meta;
pub mod role;

// Re-export main types for convenience
pub use meta::{is_super_admin, meta, RoleMeta, SUPER_ADMIN};
pub use role::{has_role, highest_priority_role, Role};
