use super::*;

// =============================================================
// can / can_any / can_all
// =============================================================

#[test]
fn driver_can_update_delivery_but_not_approve_orders() {
    let perms = RolePermissions::new("driver");
    assert!(perms.can(keys::DELIVERY_UPDATE));
    assert!(!perms.can(keys::PURCHASING_APPROVE));
}

#[test]
fn unknown_permission_key_is_false_for_known_role() {
    let perms = RolePermissions::new("admin");
    assert!(!perms.can("nonsense:fly"));
}

#[test]
fn unknown_role_holds_nothing() {
    let perms = RolePermissions::new("intern");
    assert!(!perms.can(keys::DELIVERY_VIEW));
    assert!(!perms.can_any(&[keys::DELIVERY_VIEW, keys::FINANCE_VIEW]));
    assert!(!perms.can_all(&[keys::DELIVERY_VIEW]));
}

#[test]
fn can_any_requires_one_match() {
    let perms = RolePermissions::new("kitchen");
    assert!(perms.can_any(&[keys::FINANCE_VIEW, keys::KITCHEN_UPDATE]));
    assert!(!perms.can_any(&[keys::FINANCE_VIEW, keys::PURCHASING_APPROVE]));
}

#[test]
fn can_all_requires_every_member() {
    let perms = RolePermissions::new("storekeeper");
    assert!(perms.can_all(&[keys::INVENTORY_VIEW, keys::INVENTORY_ADJUST]));
    // Flipping either membership flips the result.
    assert!(!perms.can_all(&[keys::INVENTORY_VIEW, keys::FINANCE_VIEW]));
    assert!(!perms.can_all(&[keys::FINANCE_VIEW, keys::INVENTORY_ADJUST]));
}

// =============================================================
// is_role / is_any_role
// =============================================================

#[test]
fn role_equality_checks_match_key_exactly() {
    let perms = RolePermissions::new("accountant");
    assert!(perms.is_role("accountant"));
    assert!(!perms.is_role("Accountant"));
    assert!(perms.is_any_role(&["admin", "accountant"]));
    assert!(!perms.is_any_role(&["admin", "ops_manager"]));
}

// =============================================================
// label
// =============================================================

#[test]
fn label_maps_known_roles() {
    assert_eq!(RolePermissions::new("ops_manager").label(), "Operations Manager");
    assert_eq!(RolePermissions::new("kitchen").label(), "Kitchen Staff");
}

#[test]
fn label_for_unknown_role_is_empty_fallback() {
    assert_eq!(RolePermissions::new("intern").label(), "");
    assert_eq!(RolePermissions::default().label(), "");
}

// =============================================================
// from_user
// =============================================================

#[test]
fn from_user_none_yields_unknown_role() {
    let perms = RolePermissions::from_user(None);
    assert!(!perms.can(keys::ATTENDANCE_RECORD));
    assert_eq!(perms.label(), "");
}

#[test]
fn every_table_row_grants_its_own_permissions() {
    for spec in ROLE_TABLE {
        let perms = RolePermissions::new(spec.key);
        assert!(perms.can_all(spec.permissions), "role {} missing own permission", spec.key);
        assert_eq!(perms.label(), spec.label);
    }
}
