//! # Matcher
//!
//! Decides whether one held permission satisfies a required one.
//! Matching is permissive and one-directional: wildcards and the
//! global-scope grant only take effect on the held side, and there is
//! no explicit-deny concept anywhere in the model — absence of a
//! matching permission is the only form of denial.

use crate::identifier::PermissionId;

/// Check whether a held permission satisfies a required one.
///
/// Evaluated as an ordered OR of three rules; the first rule to hold
/// grants access:
///
/// 1. Resource and action are equal and the held scope allows the
///    required scope.
/// 2. The held resource is the wildcard, with the same action and
///    scope logic as rule 1.
/// 3. The held action is the wildcard and the resources are equal.
///    Scope is ignored here: a full resource wildcard like
///    `blog.*:own` grants every blog action in every scope.
///
/// Scope allowance is asymmetric by design: a held `"global"` scope
/// satisfies any required scope, while a held narrow scope (e.g.
/// `"own"`) satisfies only an identical required scope. So
/// `report.read` satisfies `report.read:own`, but `report.read:own`
/// satisfies neither `report.read` nor `report.read:team`.
///
/// # Example
///
/// ```
/// use panel_rbac::{satisfies, PermissionId};
///
/// let held = PermissionId::parse("blog.*");
/// assert!(satisfies(&held, &PermissionId::parse("blog.read")));
/// assert!(satisfies(&held, &PermissionId::parse("blog.delete:own")));
/// assert!(!satisfies(&held, &PermissionId::parse("media.read")));
/// ```
pub fn satisfies(held: &PermissionId, required: &PermissionId) -> bool {
    let exact = held.resource == required.resource
        && held.action == required.action
        && scope_allows(held, required);

    let resource_wildcard = held.is_resource_wildcard()
        && held.action == required.action
        && scope_allows(held, required);

    let action_wildcard = held.is_action_wildcard() && held.resource == required.resource;

    exact || resource_wildcard || action_wildcard
}

/// Held-side scope comparison: a global held scope allows everything,
/// otherwise scopes must be identical.
fn scope_allows(held: &PermissionId, required: &PermissionId) -> bool {
    held.is_global_scope() || held.scope == required.scope
}
