//! Purchasing page: order list with approval for authorized roles.

#[cfg(test)]
#[path = "purchasing_test.rs"]
mod purchasing_test;

use leptos::prelude::*;

use crate::auth::permissions::keys;
use crate::components::nav_menu::NavMenu;
use crate::net::types::PurchaseOrderStatus;
use crate::state::session::Session;
use crate::state::storage::BrowserStorage;

fn order_status_label(status: PurchaseOrderStatus) -> &'static str {
    match status {
        PurchaseOrderStatus::Draft => "Draft",
        PurchaseOrderStatus::Submitted => "Submitted",
        PurchaseOrderStatus::Approved => "Approved",
        PurchaseOrderStatus::Received => "Received",
    }
}

/// Purchasing page — orders list; approval button shows only for roles
/// holding the approve permission.
#[component]
pub fn PurchasingPage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session<BrowserStorage>>>();

    let orders = LocalResource::new(move || {
        let token = super::current_token(session);
        async move { crate::net::api::purchasing::list_orders(&token).await.unwrap_or_default() }
    });

    let can_approve = move || session.with(|s| s.permissions().can(keys::PURCHASING_APPROVE));

    let approve = move |order_id: String| {
        #[cfg(feature = "hydrate")]
        {
            let token = super::current_token(session);
            let orders = orders.clone();
            leptos::task::spawn_local(async move {
                if crate::net::api::purchasing::approve_order(&token, &order_id).await.is_ok() {
                    orders.refetch();
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = order_id;
        }
    };

    view! {
        <div class="purchasing-page">
            <NavMenu/>
            <header class="page__header">
                <h1>"Purchasing"</h1>
            </header>
            <Suspense fallback=move || view! { <p>"Loading orders..."</p> }>
                {move || {
                    orders
                        .get()
                        .map(|list| {
                            view! {
                                <ul class="purchasing-page__list">
                                    {list
                                        .into_iter()
                                        .map(|order| {
                                            let approvable = order.status == PurchaseOrderStatus::Submitted;
                                            let order_id = order.id.clone();
                                            view! {
                                                <li class="purchasing-page__order">
                                                    <span>{order.supplier.clone()}</span>
                                                    <span>{format!("{:.2}", order.total)}</span>
                                                    <span>{order_status_label(order.status)}</span>
                                                    <Show when=move || approvable && can_approve()>
                                                        <button
                                                            class="btn btn--primary"
                                                            on:click={
                                                                let order_id = order_id.clone();
                                                                move |_| approve(order_id.clone())
                                                            }
                                                        >
                                                            "Approve"
                                                        </button>
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
