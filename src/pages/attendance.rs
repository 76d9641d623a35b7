//! Attendance page: clock in/out plus this month's records.

use leptos::prelude::*;

use crate::components::nav_menu::NavMenu;
use crate::state::session::Session;
use crate::state::storage::BrowserStorage;
use crate::util::date::current_month;

/// Attendance page — one-tap clocking for field staff.
#[component]
pub fn AttendancePage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session<BrowserStorage>>>();
    let info = RwSignal::new(String::new());

    let records = LocalResource::new(move || {
        let token = super::current_token(session);
        async move {
            crate::net::api::attendance::list_records(&token, &current_month())
                .await
                .unwrap_or_default()
        }
    });

    let clock = move |clocking_in: bool| {
        #[cfg(feature = "hydrate")]
        {
            let token = super::current_token(session);
            let records = records.clone();
            leptos::task::spawn_local(async move {
                let result = if clocking_in {
                    crate::net::api::attendance::clock_in(&token).await
                } else {
                    crate::net::api::attendance::clock_out(&token).await
                };
                match result {
                    Ok(_) => records.refetch(),
                    Err(err) => info.set(err.user_message()),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = clocking_in;
        }
    };

    view! {
        <div class="attendance-page">
            <NavMenu/>
            <header class="page__header">
                <h1>"Attendance"</h1>
                <div class="attendance-page__actions">
                    <button class="btn btn--primary" on:click=move |_| clock(true)>
                        "Clock In"
                    </button>
                    <button class="btn" on:click=move |_| clock(false)>
                        "Clock Out"
                    </button>
                </div>
            </header>
            <Show when=move || !info.get().is_empty()>
                <p class="page__message">{move || info.get()}</p>
            </Show>
            <Suspense fallback=move || view! { <p>"Loading records..."</p> }>
                {move || {
                    records
                        .get()
                        .map(|list| {
                            view! {
                                <ul class="attendance-page__list">
                                    {list
                                        .into_iter()
                                        .map(|r| {
                                            view! {
                                                <li class="attendance-page__record">
                                                    <span>{r.day}</span>
                                                    <span>{r.clock_in.unwrap_or_default()}</span>
                                                    <span>{r.clock_out.unwrap_or_default()}</span>
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
