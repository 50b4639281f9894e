//! # Permission Identifiers
//!
//! The structured form of a permission string. Identifiers follow the
//! panel's `resource.action[:scope]` format and are parsed exactly once
//! at the boundary; everything downstream (matcher, evaluator,
//! formatter) operates on the structured triple.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The sole wildcard token, recognized in the resource or action
/// position of a held permission.
pub const WILDCARD: &str = "*";

/// The default scope when a permission string carries no `:scope`
/// suffix. A held permission with this scope satisfies any required
/// scope for the same resource and action.
pub const GLOBAL_SCOPE: &str = "global";

/// A parsed `resource.action[:scope]` permission identifier.
///
/// Parsing is total: any string, including the empty string, produces
/// an identifier. Malformed input degrades to best-effort fields
/// rather than an error, because the strings come from a server
/// payload the UI must never crash on.
///
/// # Example
///
/// ```
/// use panel_rbac::PermissionId;
///
/// let id = PermissionId::parse("blog.read:own");
/// assert_eq!(id.resource, "blog");
/// assert_eq!(id.action, "read");
/// assert_eq!(id.scope, "own");
///
/// // No scope suffix means global scope
/// let id = PermissionId::parse("blog.read");
/// assert_eq!(id.scope, "global");
///
/// // No action segment means the action wildcard
/// let id = PermissionId::parse("media");
/// assert_eq!(id.action, "*");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct PermissionId {
    /// The noun the permission governs (e.g. "blog", "media").
    pub resource: String,
    /// The operation on the resource, or `"*"`.
    pub action: String,
    /// Qualifier narrowing the action (e.g. "own"); `"global"` when
    /// absent.
    pub scope: String,
}

impl PermissionId {
    /// Create a global-scoped identifier from its parts.
    pub fn new(resource: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            resource: resource.into(),
            action: action.into(),
            scope: GLOBAL_SCOPE.to_string(),
        }
    }

    /// Create an identifier with an explicit scope.
    pub fn with_scope(
        resource: impl Into<String>,
        action: impl Into<String>,
        scope: impl Into<String>,
    ) -> Self {
        Self {
            resource: resource.into(),
            action: action.into(),
            scope: scope.into(),
        }
    }

    /// Parse a permission string into its structured form.
    ///
    /// The string is split once on `:` to peel off the scope, then the
    /// left part once on `.` to separate resource from action. A
    /// missing scope defaults to `"global"`; a missing action defaults
    /// to the wildcard. Never fails.
    pub fn parse(raw: &str) -> Self {
        let mut colon = raw.splitn(2, ':');
        let left = colon.next().unwrap_or_default();
        let scope = colon.next().unwrap_or(GLOBAL_SCOPE);

        let mut dot = left.splitn(2, '.');
        let resource = dot.next().unwrap_or_default();
        let action = dot.next().unwrap_or(WILDCARD);

        Self {
            resource: resource.to_string(),
            action: action.to_string(),
            scope: scope.to_string(),
        }
    }

    /// Whether the resource position holds the wildcard.
    pub fn is_resource_wildcard(&self) -> bool {
        self.resource == WILDCARD
    }

    /// Whether the action position holds the wildcard.
    pub fn is_action_wildcard(&self) -> bool {
        self.action == WILDCARD
    }

    /// Whether the scope is the default global scope.
    pub fn is_global_scope(&self) -> bool {
        self.scope == GLOBAL_SCOPE
    }
}

impl From<&str> for PermissionId {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}

impl From<String> for PermissionId {
    fn from(raw: String) -> Self {
        Self::parse(&raw)
    }
}

impl From<&String> for PermissionId {
    fn from(raw: &String) -> Self {
        Self::parse(raw)
    }
}

impl fmt::Display for PermissionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.resource, self.action)?;
        if !self.is_global_scope() {
            write!(f, ":{}", self.scope)?;
        }
        Ok(())
    }
}
