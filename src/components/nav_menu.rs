//! Section navigation filtered by the current role's permissions.
//!
//! SYSTEM CONTEXT
//! ==============
//! Both the dashboard cards and the per-page top bar derive from the same
//! static section list, so a role sees identical destinations everywhere.

#[cfg(test)]
#[path = "nav_menu_test.rs"]
mod nav_menu_test;

use leptos::prelude::*;

use crate::auth::permissions::{RolePermissions, keys};
use crate::state::session::Session;
use crate::state::storage::BrowserStorage;
use crate::state::ui::UiState;

/// One navigable functional area.
#[derive(Debug)]
pub struct Section {
    pub label: &'static str,
    pub path: &'static str,
    /// Any one of these grants visibility.
    pub permissions: &'static [&'static str],
}

/// All sections, in display order.
pub const SECTIONS: &[Section] = &[
    Section { label: "Deliveries", path: "/delivery", permissions: &[keys::DELIVERY_VIEW] },
    Section { label: "Kitchen Board", path: "/kitchen", permissions: &[keys::KITCHEN_VIEW] },
    Section { label: "Attendance", path: "/attendance", permissions: &[keys::ATTENDANCE_RECORD] },
    Section { label: "Inventory", path: "/inventory", permissions: &[keys::INVENTORY_VIEW] },
    Section { label: "Recipes", path: "/recipes", permissions: &[keys::RECIPES_VIEW] },
    Section { label: "Menus", path: "/menus", permissions: &[keys::MENUS_VIEW] },
    Section { label: "Purchasing", path: "/purchasing", permissions: &[keys::PURCHASING_VIEW] },
    Section { label: "Assets", path: "/assets", permissions: &[keys::ASSETS_VIEW] },
    Section { label: "Finance", path: "/finance", permissions: &[keys::FINANCE_VIEW] },
];

/// Sections the given role may see.
#[must_use]
pub fn visible_sections(perms: &RolePermissions) -> Vec<&'static Section> {
    SECTIONS.iter().filter(|s| perms.can_any(s.permissions)).collect()
}

/// Top navigation bar with permission-filtered section links.
#[component]
pub fn NavMenu() -> impl IntoView {
    let session = expect_context::<RwSignal<Session<BrowserStorage>>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let links = move || {
        let perms = session.with(Session::permissions);
        visible_sections(&perms)
            .into_iter()
            .map(|s| view! { <a class="nav-menu__link" href=s.path>{s.label}</a> })
            .collect::<Vec<_>>()
    };

    let nav_class = move || {
        if ui.get().nav_open { "nav-menu nav-menu--open" } else { "nav-menu" }
    };

    view! {
        <nav class=nav_class>
            <a class="nav-menu__home" href="/">"MealOps"</a>
            <button
                class="nav-menu__toggle"
                on:click=move |_| ui.update(|state| state.nav_open = !state.nav_open)
            >
                "Menu"
            </button>
            <div class="nav-menu__links">{links}</div>
        </nav>
    }
}
