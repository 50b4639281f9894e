//! # Panel RBAC
//!
//! Client-side access-control policy engine for the admin panel. Given
//! a snapshot of the authenticated user's session — held permission
//! strings, the super flags, and role records — it answers whether a
//! required capability is granted, so the UI can show, enable, or hide
//! a control. It enforces nothing server-side.
//!
//! ## Overview
//!
//! The panel-rbac crate handles:
//! - **Identifiers**: parsing `resource.action[:scope]` strings
//! - **Matching**: wildcard and scope rules between held and required
//! - **Policy**: `has_permission` and friends over a session snapshot
//! - **Labels**: Persian display labels for permission strings
//!
//! ## Architecture
//!
//! ```text
//! "blog.read:own"
//!      │ parse
//!      ▼
//! PermissionId { resource, action, scope }
//!      │                     │
//!      ▼                     ▼
//! satisfies(held, required)  format_permission
//!      │
//!      ▼
//! Caller::has_permission / has_any / has_all
//! ```
//!
//! ## Matching rules
//!
//! Wildcards (`*`) and the global-scope grant apply to **held**
//! permissions only:
//! - `blog.*` satisfies `blog.read`, `blog.delete:own`, any blog action
//! - `blog.read` (implicit global scope) satisfies `blog.read:own`
//! - `blog.read:own` satisfies only `blog.read:own`
//! - a held `"*"` or `"*.*"`, or either super flag, satisfies everything
//!
//! There is no deny rule: a requirement is denied exactly when no held
//! permission satisfies it.
//!
//! ## Usage
//!
//! ```rust
//! use panel_rbac::Caller;
//!
//! let caller = Caller::with_permissions(["blog.*", "report.read:own"]);
//!
//! assert!(caller.has_permission("blog.delete"));
//! assert!(caller.has_permission("report.read:own"));
//! assert!(!caller.has_permission("report.read"));
//! assert!(caller.has_any_permission(["media.read", "blog.create"]));
//! ```
//!
//! ## Integration with panel-roles
//!
//! [`Caller`] carries the session's role records and forwards role
//! queries (`has_role`, `highest_priority_role`) to `panel-roles`.
//! Roles drive display only; they never grant permissions.

pub mod display;
pub mod identifier;
pub mod matcher;
pub mod policy;

// Re-export main types for convenience
pub use display::format_permission;
pub use identifier::{PermissionId, GLOBAL_SCOPE, WILDCARD};
pub use matcher::satisfies;
pub use policy::Caller;
