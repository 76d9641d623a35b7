//! Login page with username/password form.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;

use crate::state::session::Session;
use crate::state::storage::BrowserStorage;

/// Validate and normalize login form input.
fn validate_login_input(username: &str, password: &str) -> Result<(String, String), &'static str> {
    let username = username.trim();
    if username.is_empty() || password.is_empty() {
        return Err("Enter both username and password.");
    }
    Ok((username.to_owned(), password.to_owned()))
}

/// Login page — submits credentials and lets the route guard move
/// authenticated users to the landing page.
#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session<BrowserStorage>>>();
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        match validate_login_input(&username.get(), &password.get()) {
            Err(msg) => info.set(msg.to_owned()),
            Ok((username_value, password_value)) => {
                busy.set(true);
                info.set(String::new());

                #[cfg(feature = "hydrate")]
                leptos::task::spawn_local(async move {
                    let mut s = session.get_untracked();
                    let result =
                        s.login(&crate::net::api::auth::HttpAuthApi, &username_value, &password_value).await;
                    let error = s.last_error.clone();
                    session.set(s);
                    if result.is_err() {
                        info.set(error.unwrap_or_else(|| "Sign-in failed.".to_owned()));
                    }
                    busy.set(false);
                });

                #[cfg(not(feature = "hydrate"))]
                {
                    let _ = (username_value, password_value);
                    busy.set(false);
                }
            }
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"MealOps"</h1>
                <p class="login-card__subtitle">"School meal operations"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        placeholder="Username"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Sign In" }}
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
            </div>
        </div>
    }
}
