//! Login page: username sign-in.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;

/// Trim the username field and require a value.
pub(crate) fn validate_username_input(raw: &str) -> Result<String, &'static str> {
    let username = raw.trim();
    if username.is_empty() {
        return Err("Enter a username first.");
    }
    Ok(username.to_owned())
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    let username = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let name = match validate_username_input(&username.get()) {
            Ok(name) => name,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Signing in...".to_owned());

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::sign_in(&name).await {
                    Ok(resp) => {
                        crate::util::storage::save_token(&resp.token);
                        auth.set(AuthState::signed_in(resp.user, resp.token));
                        navigate("/", leptos_router::NavigateOptions::default());
                    }
                    Err(e) => {
                        info.set(e);
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (name, auth, &navigate);
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Brewlog"</h1>
                <p class="login-card__subtitle">"Sign in to save breweries"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        placeholder="username"
                        maxlength="32"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Sign In"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
            </div>
        </div>
    }
}
