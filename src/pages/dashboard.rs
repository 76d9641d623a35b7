//! Landing page: identity header and permission-filtered section cards.

use leptos::prelude::*;

use crate::components::nav_menu::visible_sections;
use crate::state::session::Session;
use crate::state::storage::BrowserStorage;

/// Dashboard page — the authenticated landing destination.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session<BrowserStorage>>>();

    let greeting = move || {
        session.with(|s| {
            s.current_user().map_or(String::new(), |user| format!("Hello, {}", user.name))
        })
    };
    let role_label = move || session.with(|s| s.permissions().label());

    let on_logout = move |_| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let mut s = session.get_untracked();
            s.logout(&crate::net::api::auth::HttpAuthApi).await;
            session.set(s);
        });
    };

    let cards = move || {
        let perms = session.with(Session::permissions);
        visible_sections(&perms)
            .into_iter()
            .map(|section| {
                view! {
                    <a class="dashboard-page__card" href=section.path>
                        <h2>{section.label}</h2>
                    </a>
                }
            })
            .collect::<Vec<_>>()
    };

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <div>
                    <h1>{greeting}</h1>
                    <p class="dashboard-page__role">{role_label}</p>
                </div>
                <button class="btn" on:click=on_logout>
                    "Sign Out"
                </button>
            </header>
            <div class="dashboard-page__cards">{cards}</div>
        </div>
    }
}
