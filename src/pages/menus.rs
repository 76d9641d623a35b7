//! Menus page: this week's planned days.

use leptos::prelude::*;

use crate::components::nav_menu::NavMenu;
use crate::state::session::Session;
use crate::state::storage::BrowserStorage;
use crate::util::date::week_monday;

/// Menus page — the current week's plan, one entry per day and meal slot.
#[component]
pub fn MenusPage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session<BrowserStorage>>>();

    let days = LocalResource::new(move || {
        let token = super::current_token(session);
        async move {
            crate::net::api::menus::week_plan(&token, &week_monday()).await.unwrap_or_default()
        }
    });

    view! {
        <div class="menus-page">
            <NavMenu/>
            <header class="page__header">
                <h1>"Menus"</h1>
            </header>
            <Suspense fallback=move || view! { <p>"Loading plan..."</p> }>
                {move || {
                    days.get()
                        .map(|list| {
                            view! {
                                <ul class="menus-page__week">
                                    {list
                                        .into_iter()
                                        .map(|day| {
                                            view! {
                                                <li class="menus-page__day">
                                                    <span>{day.day.clone()}</span>
                                                    <span>{day.meal.clone()}</span>
                                                    <span>
                                                        {format!("{} recipes", day.recipe_ids.len())}
                                                    </span>
                                                </li>
                                            }
                                        })
                                        .collect::<Vec<_>>()}
                                </ul>
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}
