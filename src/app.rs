//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{
    assets::AssetsPage, attendance::AttendancePage, dashboard::DashboardPage,
    delivery::DeliveryPage, finance::FinancePage, inventory::InventoryPage, kitchen::KitchenPage,
    login::LoginPage, menus::MenusPage, purchasing::PurchasingPage, recipes::RecipesPage,
};
use crate::routes::{self, Guarded};
use crate::state::session::Session;
use crate::state::storage::BrowserStorage;
use crate::state::ui::UiState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Restores the persisted session before the first navigation so the guard
/// sees the correct authentication state immediately, then revalidates the
/// identity against the backend in the background.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let mut restored = Session::new(BrowserStorage);
    restored.initialize();
    let session = RwSignal::new(restored);
    let ui = RwSignal::new(UiState::default());

    provide_context(session);
    provide_context(ui);

    #[cfg(feature = "hydrate")]
    if session.with_untracked(Session::is_authenticated) {
        leptos::task::spawn_local(async move {
            let mut s = session.get_untracked();
            let _ = s.fetch_current_user(&crate::net::api::auth::HttpAuthApi).await;
            session.set(s);
        });
    }

    view! {
        <Stylesheet id="leptos" href="/pkg/mealops.css"/>
        <Title text="MealOps"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route
                    path=StaticSegment("login")
                    view=|| view! { <Guarded meta=routes::LOGIN><LoginPage/></Guarded> }
                />
                <Route
                    path=StaticSegment("")
                    view=|| view! { <Guarded meta=routes::DASHBOARD><DashboardPage/></Guarded> }
                />
                <Route
                    path=StaticSegment("delivery")
                    view=|| view! { <Guarded meta=routes::DELIVERY><DeliveryPage/></Guarded> }
                />
                <Route
                    path=StaticSegment("kitchen")
                    view=|| view! { <Guarded meta=routes::KITCHEN><KitchenPage/></Guarded> }
                />
                <Route
                    path=StaticSegment("attendance")
                    view=|| view! { <Guarded meta=routes::ATTENDANCE><AttendancePage/></Guarded> }
                />
                <Route
                    path=StaticSegment("inventory")
                    view=|| view! { <Guarded meta=routes::INVENTORY><InventoryPage/></Guarded> }
                />
                <Route
                    path=StaticSegment("recipes")
                    view=|| view! { <Guarded meta=routes::RECIPES><RecipesPage/></Guarded> }
                />
                <Route
                    path=StaticSegment("menus")
                    view=|| view! { <Guarded meta=routes::MENUS><MenusPage/></Guarded> }
                />
                <Route
                    path=StaticSegment("purchasing")
                    view=|| view! { <Guarded meta=routes::PURCHASING><PurchasingPage/></Guarded> }
                />
                <Route
                    path=StaticSegment("assets")
                    view=|| view! { <Guarded meta=routes::ASSETS><AssetsPage/></Guarded> }
                />
                <Route
                    path=StaticSegment("finance")
                    view=|| view! { <Guarded meta=routes::FINANCE><FinancePage/></Guarded> }
                />
            </Routes>
        </Router>
    }
}
