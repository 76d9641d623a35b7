//! Inventory page: stock levels with low-stock flags.

use leptos::prelude::*;

use crate::components::nav_menu::NavMenu;
use crate::state::session::Session;
use crate::state::storage::BrowserStorage;

/// Inventory page — read-only stock list; adjustments post per item.
#[component]
pub fn InventoryPage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session<BrowserStorage>>>();

    let items = LocalResource::new(move || {
        let token = super::current_token(session);
        async move { crate::net::api::inventory::list_items(&token).await.unwrap_or_default() }
    });

    view! {
        <div class="inventory-page">
            <NavMenu/>
            <header class="page__header">
                <h1>"Inventory"</h1>
            </header>
            <Suspense fallback=move || view! { <p>"Loading stock..."</p> }>
                {move || {
                    items
                        .get()
                        .map(|list| {
                            view! {
                                <ul class="inventory-page__list">
                                    {list
                                        .into_iter()
                                        .map(|item| {
                                            let low = item.is_low();
                                            let item_class = if low {
                                                "inventory-page__item inventory-page__item--low"
                                            } else {
                                                "inventory-page__item"
                                            };
                                            view! {
                                                <li class=item_class>
                                                    <span>{item.name.clone()}</span>
                                                    <span>{format!("{} {}", item.quantity, item.unit)}</span>
                                                    <Show when=move || low>
                                                        <span class="inventory-page__low-badge">"LOW"</span>
                                                    </Show>
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
