//! # Roles
//!
//! Role records as delivered by the session payload, plus the
//! resolution helpers the panel uses to pick a user's display role.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A role attached to an authenticated user.
///
/// Roles arrive with the session payload and are never created or
/// mutated by the panel itself. `code` is expected to be unique per
/// user but that is not enforced here.
///
/// `priority` only influences which role the UI presents as the user's
/// main role; it has no effect on permission checks.
///
/// # Example
///
/// ```
/// use panel_roles::Role;
///
/// let role = Role::new("editor", "Editor", 60);
/// assert_eq!(role.code, "editor");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Role {
    /// Server-side identifier. Older session payloads omit it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    /// Stable machine code (e.g. "admin", "editor").
    pub code: String,
    /// Server-provided display name.
    pub name: String,
    /// Numeric rank; larger means more prominent.
    #[serde(default)]
    pub priority: i32,
}

impl Role {
    /// Create a role record without a server identifier.
    pub fn new(code: impl Into<String>, name: impl Into<String>, priority: i32) -> Self {
        Self {
            id: None,
            code: code.into(),
            name: name.into(),
            priority,
        }
    }
}

/// Check whether any of the given roles carries the given code.
///
/// # Example
///
/// ```
/// use panel_roles::{has_role, Role};
///
/// let roles = [Role::new("editor", "Editor", 60)];
/// assert!(has_role(&roles, "editor"));
/// assert!(!has_role(&roles, "admin"));
/// ```
pub fn has_role(roles: &[Role], code: &str) -> bool {
    roles.iter().any(|role| role.code == code)
}

/// Resolve the code of the role with the largest priority.
///
/// Ties keep the first role seen: a later role only replaces the
/// current best when its priority is strictly greater. Returns `None`
/// for a user with no roles.
///
/// # Example
///
/// ```
/// use panel_roles::{highest_priority_role, Role};
///
/// let roles = vec![
///     Role::new("a", "A", 1),
///     Role::new("b", "B", 5),
///     Role::new("c", "C", 5),
/// ];
/// assert_eq!(highest_priority_role(&roles), Some("b"));
/// ```
pub fn highest_priority_role(roles: &[Role]) -> Option<&str> {
    let mut best: Option<&Role> = None;
    for role in roles {
        match best {
            Some(current) if role.priority <= current.priority => {}
            _ => best = Some(role),
        }
    }
    best.map(|role| role.code.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_role() {
        let roles = [
            Role::new("admin", "Admin", 80),
            Role::new("editor", "Editor", 60),
        ];
        assert!(has_role(&roles, "admin"));
        assert!(has_role(&roles, "editor"));
        assert!(!has_role(&roles, "author"));
        assert!(!has_role(&[], "admin"));
    }

    #[test]
    fn test_highest_priority_role_empty() {
        assert_eq!(highest_priority_role(&[]), None);
    }

    #[test]
    fn test_highest_priority_role_single() {
        let roles = [Role::new("user", "User", 20)];
        assert_eq!(highest_priority_role(&roles), Some("user"));
    }

    #[test]
    fn test_highest_priority_role_picks_max() {
        let roles = [
            Role::new("user", "User", 20),
            Role::new("admin", "Admin", 80),
            Role::new("editor", "Editor", 60),
        ];
        assert_eq!(highest_priority_role(&roles), Some("admin"));
    }

    #[test]
    fn test_highest_priority_role_tie_keeps_first() {
        let roles = [
            Role::new("a", "A", 1),
            Role::new("b", "B", 5),
            Role::new("c", "C", 5),
        ];
        assert_eq!(highest_priority_role(&roles), Some("b"));
    }

    #[test]
    fn test_role_deserializes_without_id_or_priority() {
        let role: Role = serde_json::from_str(r#"{"code":"editor","name":"Editor"}"#).unwrap();
        assert_eq!(role.id, None);
        assert_eq!(role.priority, 0);
    }
}
