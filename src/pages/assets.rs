//! Assets page: the equipment register.

use leptos::prelude::*;

use crate::components::nav_menu::NavMenu;
use crate::state::session::Session;
use crate::state::storage::BrowserStorage;

/// Assets page — registered equipment with current locations.
#[component]
pub fn AssetsPage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session<BrowserStorage>>>();

    let assets = LocalResource::new(move || {
        let token = super::current_token(session);
        async move { crate::net::api::assets::list_assets(&token).await.unwrap_or_default() }
    });

    view! {
        <div class="assets-page">
            <NavMenu/>
            <header class="page__header">
                <h1>"Assets"</h1>
            </header>
            <Suspense fallback=move || view! { <p>"Loading assets..."</p> }>
                {move || {
                    assets
                        .get()
                        .map(|list| {
                            view! {
                                <ul class="assets-page__list">
                                    {list
                                        .into_iter()
                                        .map(|asset| {
                                            view! {
                                                <li class="assets-page__asset">
                                                    <span>{asset.name.clone()}</span>
                                                    <span>{asset.location.clone()}</span>
                                                    <span>{asset.category.clone().unwrap_or_default()}</span>
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
