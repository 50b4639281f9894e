//! # Permission Labels
//!
//! Renders a permission identifier as the Persian label the panel
//! shows in permission pickers and audit views. Purely presentational;
//! nothing here affects access decisions.

use crate::identifier::PermissionId;

/// Persian label for a resource segment; unknown resources pass
/// through unchanged.
fn resource_label(resource: &str) -> &str {
    match resource {
        "blog" => "بلاگ",
        "media" => "رسانه",
        "user" => "کاربر",
        "admin" => "ادمین",
        "report" => "گزارش",
        "comment" => "دیدگاه",
        "category" => "دسته‌بندی",
        "setting" => "تنظیمات",
        other => other,
    }
}

/// Persian label for an action segment; unknown actions pass through
/// unchanged.
fn action_label(action: &str) -> &str {
    match action {
        "create" => "ایجاد",
        "read" => "مشاهده",
        "update" => "ویرایش",
        "delete" => "حذف",
        "manage" => "مدیریت",
        "list" => "فهرست",
        "export" => "خروجی",
        "*" => "همه عملیات",
        other => other,
    }
}

/// Persian label for a scope segment; unknown scopes pass through
/// unchanged.
fn scope_label(scope: &str) -> &str {
    match scope {
        "own" => "شخصی",
        "team" => "تیمی",
        "global" => "سراسری",
        other => other,
    }
}

/// Render a permission string as a human-readable Persian label.
///
/// The label reads `"{action} {resource}"`, with a parenthesized scope
/// appended when the scope is not global.
///
/// # Example
///
/// ```
/// use panel_rbac::format_permission;
///
/// assert_eq!(format_permission("blog.create"), "ایجاد بلاگ");
/// assert_eq!(format_permission("report.read:own"), "مشاهده گزارش (شخصی)");
/// ```
pub fn format_permission(raw: &str) -> String {
    let id = PermissionId::parse(raw);
    let mut label = format!(
        "{} {}",
        action_label(&id.action),
        resource_label(&id.resource)
    );
    if !id.is_global_scope() {
        label.push_str(&format!(" ({})", scope_label(&id.scope)));
    }
    label
}
