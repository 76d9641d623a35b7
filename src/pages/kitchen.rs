//! Kitchen display board: today's production tickets by stage.

#[cfg(test)]
#[path = "kitchen_test.rs"]
mod kitchen_test;

use leptos::prelude::*;

use crate::components::nav_menu::NavMenu;
use crate::net::types::{KitchenStage, KitchenTicket};
use crate::state::session::Session;
use crate::state::storage::BrowserStorage;
use crate::util::date::today;

fn stage_label(stage: KitchenStage) -> &'static str {
    match stage {
        KitchenStage::Queued => "Queued",
        KitchenStage::Prepping => "Prepping",
        KitchenStage::Cooking => "Cooking",
        KitchenStage::Plating => "Plating",
        KitchenStage::Done => "Done",
    }
}

/// Kitchen page — the production board cooks advance ticket by ticket.
#[component]
pub fn KitchenPage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session<BrowserStorage>>>();

    let tickets = LocalResource::new(move || {
        let token = super::current_token(session);
        async move { crate::net::api::kitchen::board(&token, &today()).await.unwrap_or_default() }
    });

    let advance = move |ticket: &KitchenTicket| {
        #[cfg(feature = "hydrate")]
        {
            let Some(next) = ticket.stage.advance() else {
                return;
            };
            let token = super::current_token(session);
            let ticket_id = ticket.id.clone();
            let tickets = tickets.clone();
            leptos::task::spawn_local(async move {
                if crate::net::api::kitchen::set_stage(&token, &ticket_id, next).await.is_ok() {
                    tickets.refetch();
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = ticket;
        }
    };

    view! {
        <div class="kitchen-page">
            <NavMenu/>
            <header class="page__header">
                <h1>"Kitchen Board"</h1>
            </header>
            <Suspense fallback=move || view! { <p>"Loading board..."</p> }>
                {move || {
                    tickets
                        .get()
                        .map(|list| {
                            view! {
                                <ul class="kitchen-page__board">
                                    {list
                                        .into_iter()
                                        .map(|ticket| {
                                            let stage = stage_label(ticket.stage);
                                            let can_advance = ticket.stage.advance().is_some();
                                            let ticket_for_click = ticket.clone();
                                            view! {
                                                <li class="kitchen-page__ticket">
                                                    <span class="kitchen-page__recipe">
                                                        {format!("{} x{}", ticket.recipe_name, ticket.quantity)}
                                                    </span>
                                                    <span class="kitchen-page__stage">{stage}</span>
                                                    <Show when=move || can_advance>
                                                        <button
                                                            class="btn btn--primary"
                                                            on:click={
                                                                let ticket = ticket_for_click.clone();
                                                                move |_| advance(&ticket)
                                                            }
                                                        >
                                                            "Next Stage"
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
