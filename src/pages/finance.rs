//! Finance page: today's report and the month summary.

use leptos::prelude::*;

use crate::components::nav_menu::NavMenu;
use crate::net::types::FinanceSummary;
use crate::state::session::Session;
use crate::state::storage::BrowserStorage;
use crate::util::date::{current_month, today};

#[component]
fn SummaryCard(title: &'static str, summary: FinanceSummary) -> impl IntoView {
    view! {
        <div class="finance-page__card">
            <h2>{title}</h2>
            <p>{format!("Revenue {:.2}", summary.revenue)}</p>
            <p>{format!("Food {:.2}", summary.food_cost)}</p>
            <p>{format!("Labor {:.2}", summary.labor_cost)}</p>
            <p>{format!("Other {:.2}", summary.other_cost)}</p>
            <p class="finance-page__balance">{format!("Balance {:.2}", summary.balance())}</p>
        </div>
    }
}

/// Finance page — daily and monthly figures side by side.
#[component]
pub fn FinancePage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session<BrowserStorage>>>();

    let daily = LocalResource::new(move || {
        let token = super::current_token(session);
        async move { crate::net::api::finance::daily_report(&token, &today()).await.ok() }
    });
    let monthly = LocalResource::new(move || {
        let token = super::current_token(session);
        async move {
            crate::net::api::finance::monthly_summary(&token, &current_month()).await.ok()
        }
    });

    view! {
        <div class="finance-page">
            <NavMenu/>
            <header class="page__header">
                <h1>"Finance"</h1>
            </header>
            <div class="finance-page__cards">
                <Suspense fallback=move || view! { <p>"Loading reports..."</p> }>
                    {move || {
                        daily
                            .get()
                            .and_then(|opt| opt)
                            .map(|summary| view! { <SummaryCard title="Today" summary=summary/> })
                    }}
                    {move || {
                        monthly
                            .get()
                            .and_then(|opt| opt)
                            .map(|summary| {
                                view! { <SummaryCard title="This Month" summary=summary/> }
                            })
                    }}
                </Suspense>
            </div>
        </div>
    }
}
