//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (resource loads, action
//! dispatch) and stays thin: data work happens in `net::api`, session
//! mutations in `state::session`.

pub mod assets;
pub mod attendance;
pub mod dashboard;
pub mod delivery;
pub mod finance;
pub mod inventory;
pub mod kitchen;
pub mod login;
pub mod menus;
pub mod purchasing;
pub mod recipes;

use leptos::prelude::*;

use crate::state::session::Session;
use crate::state::storage::BrowserStorage;

/// The bearer credential for page-scoped API calls; empty when signed out
/// (the guard prevents that from being observable).
pub(crate) fn current_token(session: RwSignal<Session<BrowserStorage>>) -> String {
    session.with_untracked(|s| s.token().map(str::to_owned)).unwrap_or_default()
}
