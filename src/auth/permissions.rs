//! Role/permission table and the evaluator layered over the current role.
//!
//! DESIGN
//! ======
//! The table is immutable configuration data baked into the binary: role key
//! to permission set plus display label. Lookups are pure functions of the
//! role string; an unknown role holds nothing and labels as the empty
//! string, so a stale or missing identity can never widen access.

#[cfg(test)]
#[path = "permissions_test.rs"]
mod permissions_test;

use crate::net::types::User;

/// Permission keys, grouped by functional area.
pub mod keys {
    pub const DELIVERY_VIEW: &str = "delivery:view";
    pub const DELIVERY_UPDATE: &str = "delivery:update";
    pub const ATTENDANCE_RECORD: &str = "attendance:record";
    pub const ATTENDANCE_VIEW_ALL: &str = "attendance:view_all";
    pub const INVENTORY_VIEW: &str = "inventory:view";
    pub const INVENTORY_ADJUST: &str = "inventory:adjust";
    pub const RECIPES_VIEW: &str = "recipes:view";
    pub const RECIPES_MANAGE: &str = "recipes:manage";
    pub const MENUS_VIEW: &str = "menus:view";
    pub const MENUS_PLAN: &str = "menus:plan";
    pub const PURCHASING_VIEW: &str = "purchasing:view";
    pub const PURCHASING_CREATE: &str = "purchasing:create";
    pub const PURCHASING_APPROVE: &str = "purchasing:approve";
    pub const ASSETS_VIEW: &str = "assets:view";
    pub const ASSETS_MANAGE: &str = "assets:manage";
    pub const FINANCE_VIEW: &str = "finance:view";
    pub const KITCHEN_VIEW: &str = "kitchen:view";
    pub const KITCHEN_UPDATE: &str = "kitchen:update";
    pub const USERS_MANAGE: &str = "users:manage";
}

use keys::*;

/// One row of the static role table.
#[derive(Debug)]
pub struct RoleSpec {
    /// Role key as carried on `User::role`.
    pub key: &'static str,
    /// Human-readable display label.
    pub label: &'static str,
    /// Permission keys the role holds.
    pub permissions: &'static [&'static str],
}

/// Static role table. Order is presentation order in admin screens.
pub const ROLE_TABLE: &[RoleSpec] = &[
    RoleSpec {
        key: "admin",
        label: "Administrator",
        permissions: &[
            DELIVERY_VIEW,
            DELIVERY_UPDATE,
            ATTENDANCE_RECORD,
            ATTENDANCE_VIEW_ALL,
            INVENTORY_VIEW,
            INVENTORY_ADJUST,
            RECIPES_VIEW,
            RECIPES_MANAGE,
            MENUS_VIEW,
            MENUS_PLAN,
            PURCHASING_VIEW,
            PURCHASING_CREATE,
            PURCHASING_APPROVE,
            ASSETS_VIEW,
            ASSETS_MANAGE,
            FINANCE_VIEW,
            KITCHEN_VIEW,
            KITCHEN_UPDATE,
            USERS_MANAGE,
        ],
    },
    RoleSpec {
        key: "ops_manager",
        label: "Operations Manager",
        permissions: &[
            DELIVERY_VIEW,
            DELIVERY_UPDATE,
            ATTENDANCE_RECORD,
            ATTENDANCE_VIEW_ALL,
            INVENTORY_VIEW,
            INVENTORY_ADJUST,
            RECIPES_VIEW,
            RECIPES_MANAGE,
            MENUS_VIEW,
            MENUS_PLAN,
            PURCHASING_VIEW,
            PURCHASING_CREATE,
            PURCHASING_APPROVE,
            ASSETS_VIEW,
            ASSETS_MANAGE,
            FINANCE_VIEW,
            KITCHEN_VIEW,
        ],
    },
    RoleSpec {
        key: "kitchen",
        label: "Kitchen Staff",
        permissions: &[
            ATTENDANCE_RECORD,
            INVENTORY_VIEW,
            RECIPES_VIEW,
            MENUS_VIEW,
            KITCHEN_VIEW,
            KITCHEN_UPDATE,
        ],
    },
    RoleSpec {
        key: "driver",
        label: "Driver",
        permissions: &[DELIVERY_VIEW, DELIVERY_UPDATE, ATTENDANCE_RECORD],
    },
    RoleSpec {
        key: "storekeeper",
        label: "Storekeeper",
        permissions: &[
            ATTENDANCE_RECORD,
            INVENTORY_VIEW,
            INVENTORY_ADJUST,
            PURCHASING_VIEW,
            PURCHASING_CREATE,
            ASSETS_VIEW,
        ],
    },
    RoleSpec {
        key: "accountant",
        label: "Accountant",
        permissions: &[
            ATTENDANCE_RECORD,
            ATTENDANCE_VIEW_ALL,
            PURCHASING_VIEW,
            ASSETS_VIEW,
            FINANCE_VIEW,
        ],
    },
];

fn find_role(key: &str) -> Option<&'static RoleSpec> {
    ROLE_TABLE.iter().find(|spec| spec.key == key)
}

/// Permission evaluator bound to one role key.
///
/// All queries are pure lookups against [`ROLE_TABLE`]; unknown roles and
/// unknown permission keys answer `false`, never panic.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RolePermissions {
    role: String,
}

impl RolePermissions {
    #[must_use]
    pub fn new(role: impl Into<String>) -> Self {
        Self { role: role.into() }
    }

    /// Evaluator for `user`'s role; `None` yields the unknown role.
    #[must_use]
    pub fn from_user(user: Option<&User>) -> Self {
        Self::new(user.map(|u| u.role.clone()).unwrap_or_default())
    }

    /// Whether the role holds `permission`.
    #[must_use]
    pub fn can(&self, permission: &str) -> bool {
        find_role(&self.role).is_some_and(|spec| spec.permissions.contains(&permission))
    }

    /// Whether the role holds at least one of `permissions`.
    #[must_use]
    pub fn can_any(&self, permissions: &[&str]) -> bool {
        permissions.iter().any(|p| self.can(p))
    }

    /// Whether the role holds every one of `permissions`.
    #[must_use]
    pub fn can_all(&self, permissions: &[&str]) -> bool {
        permissions.iter().all(|p| self.can(p))
    }

    /// Whether the current role key equals `role`.
    #[must_use]
    pub fn is_role(&self, role: &str) -> bool {
        self.role == role
    }

    /// Whether the current role key is one of `roles`.
    #[must_use]
    pub fn is_any_role(&self, roles: &[&str]) -> bool {
        roles.contains(&self.role.as_str())
    }

    /// Display label for the current role; empty for unknown roles.
    #[must_use]
    pub fn label(&self) -> &'static str {
        find_role(&self.role).map_or("", |spec| spec.label)
    }
}
