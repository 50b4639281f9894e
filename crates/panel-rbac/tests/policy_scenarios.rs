//! End-to-end policy scenarios over session payloads as the auth
//! layer actually delivers them: JSON with optional fields, mixed
//! scopes, and role records alongside permission strings.

use panel_rbac::{format_permission, Caller};

fn caller_from_json(json: serde_json::Value) -> Caller {
    serde_json::from_value(json).expect("session payload should deserialize")
}

#[test]
fn manage_does_not_imply_update() {
    let caller = caller_from_json(serde_json::json!({
        "permissions": ["admin.manage"],
        "is_super": false
    }));
    assert!(!caller.has_permission("admin.update"));
}

#[test]
fn literal_star_grants_everything() {
    let caller = caller_from_json(serde_json::json!({
        "permissions": ["*"],
        "is_super": false
    }));
    assert!(caller.has_permission("anything.delete"));
    assert!(caller.has_permission("blog.read:own"));
}

#[test]
fn super_flag_ignores_empty_permission_list() {
    let caller = caller_from_json(serde_json::json!({
        "permissions": [],
        "is_super": true
    }));
    assert!(caller.has_permission("x.y"));
}

#[test]
fn alternate_superuser_spelling_also_bypasses() {
    let caller = caller_from_json(serde_json::json!({
        "is_superuser": true
    }));
    assert!(caller.has_permission("x.y"));
}

#[test]
fn blog_editor_session() {
    let caller = caller_from_json(serde_json::json!({
        "permissions": ["blog.*", "media.read", "report.read:own"],
        "roles": [
            { "code": "editor", "name": "Editor", "priority": 60 },
            { "code": "author", "name": "Author", "priority": 40 }
        ]
    }));

    // blog.* grants every blog action, any scope
    assert!(caller.has_permission("blog.create"));
    assert!(caller.has_permission("blog.delete:own"));

    // media access is read-only
    assert!(caller.has_permission("media.read"));
    assert!(!caller.has_permission("media.delete"));

    // own-scoped report access does not widen
    assert!(caller.has_permission("report.read:own"));
    assert!(!caller.has_permission("report.read"));

    assert!(caller.has_any_permission(["media.delete", "blog.create"]));
    assert!(!caller.has_all_permissions(["blog.create", "media.delete"]));

    assert!(caller.has_role("editor"));
    assert!(!caller.has_role("admin"));
    assert_eq!(caller.highest_priority_role(), Some("editor"));
    assert!(!caller.has_super_admin_role());
}

#[test]
fn highest_priority_role_tie_keeps_first() {
    let caller = caller_from_json(serde_json::json!({
        "roles": [
            { "code": "a", "name": "A", "priority": 1 },
            { "code": "b", "name": "B", "priority": 5 },
            { "code": "c", "name": "C", "priority": 5 }
        ]
    }));
    assert_eq!(caller.highest_priority_role(), Some("b"));
}

#[test]
fn roleless_caller_has_no_display_role() {
    let caller = caller_from_json(serde_json::json!({
        "permissions": ["blog.read"]
    }));
    assert_eq!(caller.highest_priority_role(), None);
}

#[test]
fn sidebar_filtering_by_resource() {
    let caller = caller_from_json(serde_json::json!({
        "permissions": ["blog.read", "blog.create", "media.read"]
    }));
    let blog_perms = caller.permissions_for_resource("blog");
    assert_eq!(blog_perms.len(), 2);
    assert!(blog_perms.iter().all(|p| p.starts_with("blog.")));

    let labels: Vec<String> = blog_perms.iter().map(|p| format_permission(p)).collect();
    assert!(labels.contains(&"مشاهده بلاگ".to_string()));
    assert!(labels.contains(&"ایجاد بلاگ".to_string()));
}

#[test]
fn permission_labels() {
    assert_eq!(format_permission("blog.create"), "ایجاد بلاگ");
    assert_eq!(format_permission("report.read:own"), "مشاهده گزارش (شخصی)");
}
