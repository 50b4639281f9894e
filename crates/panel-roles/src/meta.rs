//! # Role Metadata
//!
//! Static display metadata for the panel's known roles. The table maps
//! a role code to the Persian display name, Lucide icon name, badge
//! color, and numeric level the UI renders. Unknown codes fall back to
//! the code itself with neutral defaults rather than failing.

/// The role code the UI treats as the super administrator.
///
/// This is a display signal only (badge text and styling). The policy
/// evaluator's omnipotent bypass is driven by the session's
/// `is_super`/`is_superuser` flags, which are tracked independently of
/// whether this role is present.
pub const SUPER_ADMIN: &str = "super_admin";

/// Display metadata for a role code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleMeta {
    /// Persian display name, or the raw code for unknown roles.
    pub name: String,
    /// Lucide icon name rendered next to the role badge.
    pub icon: &'static str,
    /// Badge color token.
    pub color: &'static str,
    /// Numeric level used for visual ordering of badges.
    pub level: u8,
}

impl RoleMeta {
    fn known(name: &str, icon: &'static str, color: &'static str, level: u8) -> Self {
        Self {
            name: name.to_string(),
            icon,
            color,
            level,
        }
    }
}

/// Look up display metadata for a role code.
///
/// Unknown codes pass through: the code itself becomes the display
/// name, with icon `"UserCheck"`, color `"gray"`, and level 0.
///
/// # Example
///
/// ```
/// use panel_roles::meta;
///
/// assert_eq!(meta("admin").color, "blue");
/// assert_eq!(meta("reviewer").name, "reviewer");
/// assert_eq!(meta("reviewer").icon, "UserCheck");
/// ```
pub fn meta(code: &str) -> RoleMeta {
    match code {
        "super_admin" => RoleMeta::known("مدیر کل", "Crown", "purple", 100),
        "admin" => RoleMeta::known("مدیر", "Shield", "blue", 80),
        "editor" => RoleMeta::known("ویرایشگر", "Edit3", "green", 60),
        "author" => RoleMeta::known("نویسنده", "PenTool", "orange", 40),
        "user" => RoleMeta::known("کاربر", "User", "gray", 20),
        _ => RoleMeta {
            name: code.to_string(),
            icon: "UserCheck",
            color: "gray",
            level: 0,
        },
    }
}

/// Check whether a role code is the super-admin display role.
pub fn is_super_admin(code: &str) -> bool {
    code == SUPER_ADMIN
}
