//! Route table and the authentication guard applied to every navigation.
//!
//! DESIGN
//! ======
//! Guard evaluation is a pure, synchronous function of the target route's
//! metadata and the session's authentication flag; it never touches the
//! network. Routes that declare no policy are treated as requiring auth —
//! the guard fails closed, so forgetting to annotate a new screen can only
//! lock it down, never expose it.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::session::Session;
use crate::state::storage::BrowserStorage;

/// The only public destination.
pub const LOGIN_PATH: &str = "/login";
/// Default landing destination for authenticated users.
pub const HOME_PATH: &str = "/";

/// Per-destination metadata consulted by the guard.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteMeta {
    pub path: &'static str,
    /// Declared auth policy; `None` means the route never declared one.
    pub requires_auth: Option<bool>,
}

impl RouteMeta {
    #[must_use]
    pub const fn protected(path: &'static str) -> Self {
        Self { path, requires_auth: Some(true) }
    }

    #[must_use]
    pub const fn public(path: &'static str) -> Self {
        Self { path, requires_auth: Some(false) }
    }

    /// A route that forgot to declare a policy.
    #[must_use]
    pub const fn undeclared(path: &'static str) -> Self {
        Self { path, requires_auth: None }
    }

    /// Effective policy: undeclared routes require auth.
    #[must_use]
    pub fn requires_auth(&self) -> bool {
        self.requires_auth.unwrap_or(true)
    }
}

pub const LOGIN: RouteMeta = RouteMeta::public(LOGIN_PATH);
pub const DASHBOARD: RouteMeta = RouteMeta::protected(HOME_PATH);
pub const DELIVERY: RouteMeta = RouteMeta::protected("/delivery");
pub const KITCHEN: RouteMeta = RouteMeta::protected("/kitchen");
pub const ATTENDANCE: RouteMeta = RouteMeta::protected("/attendance");
pub const INVENTORY: RouteMeta = RouteMeta::protected("/inventory");
pub const RECIPES: RouteMeta = RouteMeta::protected("/recipes");
pub const MENUS: RouteMeta = RouteMeta::protected("/menus");
pub const PURCHASING: RouteMeta = RouteMeta::protected("/purchasing");
pub const ASSETS: RouteMeta = RouteMeta::protected("/assets");
pub const FINANCE: RouteMeta = RouteMeta::protected("/finance");

/// Outcome of guarding one navigation attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Continue to the target unmodified.
    Allow,
    /// Abort and go to the login destination.
    RedirectToLogin,
    /// Abort and go to the authenticated landing destination.
    RedirectToHome,
}

/// Decide whether navigation to `meta` may proceed.
#[must_use]
pub fn evaluate(meta: &RouteMeta, authenticated: bool) -> GuardDecision {
    if meta.path == LOGIN_PATH {
        if authenticated {
            return GuardDecision::RedirectToHome;
        }
        return GuardDecision::Allow;
    }
    if meta.requires_auth() && !authenticated {
        return GuardDecision::RedirectToLogin;
    }
    GuardDecision::Allow
}

/// Applies the guard around a routed page.
///
/// Children render only while the decision is `Allow`; otherwise the
/// redirect runs and nothing protected is shown in the meantime.
#[component]
pub fn Guarded(meta: RouteMeta, children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<RwSignal<Session<BrowserStorage>>>();
    let navigate = use_navigate();

    let decision = move || evaluate(&meta, session.with(Session::is_authenticated));

    Effect::new(move || match decision() {
        GuardDecision::RedirectToLogin => navigate(LOGIN_PATH, NavigateOptions::default()),
        GuardDecision::RedirectToHome => navigate(HOME_PATH, NavigateOptions::default()),
        GuardDecision::Allow => {}
    });

    view! {
        <Show when=move || decision() == GuardDecision::Allow>
            {children()}
        </Show>
    }
}
