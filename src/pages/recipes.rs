//! Recipes page: the recipe catalogue.

use leptos::prelude::*;

use crate::components::nav_menu::NavMenu;
use crate::state::session::Session;
use crate::state::storage::BrowserStorage;

/// Recipes page — catalogue listing with servings.
#[component]
pub fn RecipesPage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session<BrowserStorage>>>();

    let recipes = LocalResource::new(move || {
        let token = super::current_token(session);
        async move { crate::net::api::recipes::list_recipes(&token).await.unwrap_or_default() }
    });

    view! {
        <div class="recipes-page">
            <NavMenu/>
            <header class="page__header">
                <h1>"Recipes"</h1>
            </header>
            <Suspense fallback=move || view! { <p>"Loading recipes..."</p> }>
                {move || {
                    recipes
                        .get()
                        .map(|list| {
                            view! {
                                <ul class="recipes-page__list">
                                    {list
                                        .into_iter()
                                        .map(|recipe| {
                                            view! {
                                                <li class="recipes-page__recipe">
                                                    <span>{recipe.name.clone()}</span>
                                                    <span>{format!("{} servings", recipe.servings)}</span>
                                                    <span>{recipe.category.clone().unwrap_or_default()}</span>
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
