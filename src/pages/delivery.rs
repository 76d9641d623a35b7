//! Delivery run sheet: today's tasks with status advancement.

#[cfg(test)]
#[path = "delivery_test.rs"]
mod delivery_test;

use leptos::prelude::*;

use crate::components::nav_menu::NavMenu;
use crate::net::types::{DeliveryStatus, DeliveryTask};
use crate::state::session::Session;
use crate::state::storage::BrowserStorage;
use crate::util::date::today;

fn status_label(status: DeliveryStatus) -> &'static str {
    match status {
        DeliveryStatus::Pending => "Pending",
        DeliveryStatus::EnRoute => "En route",
        DeliveryStatus::Delivered => "Delivered",
        DeliveryStatus::Exception => "Exception",
    }
}

fn advance_label(status: DeliveryStatus) -> Option<&'static str> {
    match status.advance()? {
        DeliveryStatus::EnRoute => Some("Start Run"),
        DeliveryStatus::Delivered => Some("Mark Delivered"),
        DeliveryStatus::Pending | DeliveryStatus::Exception => None,
    }
}

/// Delivery page — today's run sheet for the signed-in driver.
#[component]
pub fn DeliveryPage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session<BrowserStorage>>>();

    let tasks = LocalResource::new(move || {
        let token = super::current_token(session);
        async move {
            crate::net::api::delivery::list_tasks(&token, &today()).await.unwrap_or_default()
        }
    });

    let advance = move |task: &DeliveryTask| {
        #[cfg(feature = "hydrate")]
        {
            let Some(next) = task.status.advance() else {
                return;
            };
            let token = super::current_token(session);
            let task_id = task.id.clone();
            let tasks = tasks.clone();
            leptos::task::spawn_local(async move {
                if crate::net::api::delivery::update_status(&token, &task_id, next).await.is_ok() {
                    tasks.refetch();
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = task;
        }
    };

    view! {
        <div class="delivery-page">
            <NavMenu/>
            <header class="page__header">
                <h1>"Deliveries"</h1>
            </header>
            <Suspense fallback=move || view! { <p>"Loading tasks..."</p> }>
                {move || {
                    tasks
                        .get()
                        .map(|list| {
                            view! {
                                <ul class="delivery-page__list">
                                    {list
                                        .into_iter()
                                        .map(|task| {
                                            let action = advance_label(task.status);
                                            let status = status_label(task.status);
                                            let task_for_click = task.clone();
                                            view! {
                                                <li class="delivery-page__task">
                                                    <span class="delivery-page__school">{task.school.clone()}</span>
                                                    <span class="delivery-page__meals">
                                                        {format!("{} meals", task.meal_count)}
                                                    </span>
                                                    <span class="delivery-page__status">{status}</span>
                                                    {action
                                                        .map(|label| {
                                                            view! {
                                                                <button
                                                                    class="btn btn--primary"
                                                                    on:click=move |_| advance(&task_for_click)
                                                                >
                                                                    {label}
                                                                </button>
                                                            }
                                                        })}
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
