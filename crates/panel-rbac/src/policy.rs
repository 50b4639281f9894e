//! # Policy Evaluator
//!
//! Read-only permission queries over a caller's session snapshot. The
//! snapshot is handed in explicitly on every call — the engine never
//! reads ambient session state, which keeps every query pure and safe
//! to run from any number of concurrently rendering components.

use serde::{Deserialize, Serialize};

use crate::identifier::{PermissionId, GLOBAL_SCOPE, WILDCARD};
use crate::matcher::satisfies;
use panel_roles::{self as roles, Role};

/// Literal held permission that bypasses matching entirely.
const ALL: &str = "*";
/// Pre-split spelling of the same bypass.
const ALL_DOTTED: &str = "*.*";

/// Snapshot of the authenticated user's access data.
///
/// The auth layer produces a fresh `Caller` from the current session on
/// every read; the engine never mutates one. Either super flag makes
/// the caller omnipotent — both spellings exist because different
/// backend endpoints report the flag under different names.
///
/// # Example
///
/// ```
/// use panel_rbac::Caller;
///
/// let caller = Caller::with_permissions(["blog.read", "blog.create"]);
/// assert!(caller.has_permission("blog.read"));
/// assert!(!caller.has_permission("blog.delete"));
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Caller {
    /// Held permission strings in `resource.action[:scope]` form.
    #[serde(default)]
    pub permissions: Vec<String>,
    /// Omnipotent bypass flag.
    #[serde(default)]
    pub is_super: bool,
    /// Alternate spelling of the bypass flag.
    #[serde(default)]
    pub is_superuser: bool,
    /// Roles attached to the session, used for display only.
    #[serde(default)]
    pub roles: Vec<Role>,
}

impl Caller {
    /// Create a non-super caller holding the given permissions.
    pub fn with_permissions<I, S>(permissions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            permissions: permissions.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Create a caller with the super bypass set.
    pub fn superuser() -> Self {
        Self {
            is_super: true,
            ..Self::default()
        }
    }

    /// Whether either super flag is set.
    pub fn is_omnipotent(&self) -> bool {
        self.is_super || self.is_superuser
    }

    /// Check whether the caller satisfies a permission requirement.
    ///
    /// The requirement may be a raw string (`"blog.read:own"`) or a
    /// structured [`PermissionId`]; both convert via `Into`.
    ///
    /// Checks, in order:
    /// 1. the super bypass flags;
    /// 2. the literal `"*"` / `"*.*"` held permissions;
    /// 3. literal containment of the scoped form
    ///    `resource.action:scope` (when the required scope is not
    ///    global) and then the unscoped form `resource.action`;
    /// 4. full matching of every held permission against the
    ///    requirement, wildcards and scope rules included.
    ///
    /// Absence of a satisfying permission yields `false`; nothing here
    /// errors.
    pub fn has_permission(&self, requirement: impl Into<PermissionId>) -> bool {
        let required = requirement.into();
        let granted = self.check(&required);
        tracing::trace!(requirement = %required, granted, "permission check");
        granted
    }

    fn check(&self, required: &PermissionId) -> bool {
        if self.is_omnipotent() {
            return true;
        }
        if self
            .permissions
            .iter()
            .any(|held| held == ALL || held == ALL_DOTTED)
        {
            return true;
        }

        let unscoped = format!("{}.{}", required.resource, required.action);
        if required.scope != GLOBAL_SCOPE {
            let scoped = format!("{}:{}", unscoped, required.scope);
            if self.permissions.iter().any(|held| *held == scoped) {
                return true;
            }
        }
        if self.permissions.iter().any(|held| *held == unscoped) {
            return true;
        }

        self.permissions
            .iter()
            .any(|held| satisfies(&PermissionId::parse(held), required))
    }

    /// Check whether at least one of the requirements is satisfied.
    ///
    /// An empty requirement list yields `false`.
    pub fn has_any_permission<I>(&self, requirements: I) -> bool
    where
        I: IntoIterator,
        I::Item: Into<PermissionId>,
    {
        requirements
            .into_iter()
            .any(|requirement| self.has_permission(requirement))
    }

    /// Check whether every requirement is satisfied.
    ///
    /// An empty requirement list yields `true`.
    pub fn has_all_permissions<I>(&self, requirements: I) -> bool
    where
        I: IntoIterator,
        I::Item: Into<PermissionId>,
    {
        requirements
            .into_iter()
            .all(|requirement| self.has_permission(requirement))
    }

    /// Held permissions whose resource equals `resource` or is the
    /// wildcard. A super caller reports the single wildcard entry.
    pub fn permissions_for_resource(&self, resource: &str) -> Vec<String> {
        if self.is_omnipotent() {
            return vec![WILDCARD.to_string()];
        }
        self.permissions
            .iter()
            .filter(|held| {
                let id = PermissionId::parse(held);
                id.resource == resource || id.is_resource_wildcard()
            })
            .cloned()
            .collect()
    }

    /// Held permissions whose action equals `action` or is the
    /// wildcard. A super caller reports the single wildcard entry.
    pub fn permissions_for_action(&self, action: &str) -> Vec<String> {
        if self.is_omnipotent() {
            return vec![WILDCARD.to_string()];
        }
        self.permissions
            .iter()
            .filter(|held| {
                let id = PermissionId::parse(held);
                id.action == action || id.is_action_wildcard()
            })
            .cloned()
            .collect()
    }

    /// Whether the caller carries a role with the given code.
    pub fn has_role(&self, code: &str) -> bool {
        roles::has_role(&self.roles, code)
    }

    /// Code of the caller's highest-priority role, for display.
    pub fn highest_priority_role(&self) -> Option<&str> {
        roles::highest_priority_role(&self.roles)
    }

    /// Whether the caller carries the super-admin display role.
    ///
    /// Display signal only (badge text); independent of the
    /// `is_super`/`is_superuser` bypass and never consulted by
    /// [`has_permission`](Self::has_permission).
    pub fn has_super_admin_role(&self) -> bool {
        self.has_role(roles::SUPER_ADMIN)
    }
}
