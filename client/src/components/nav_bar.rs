//! Top navigation with sign-in state.

use leptos::prelude::*;

use crate::state::auth::AuthState;
use crate::util::storage;

#[component]
pub fn NavBar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    let on_logout = move |_| {
        let session = auth.get_untracked().session;
        storage::clear_token();
        auth.set(AuthState::signed_out());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            if let Some(token) = session.token() {
                crate::net::api::logout(token).await;
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = session;
    };

    let username = move || auth.get().session.username().map(str::to_owned).unwrap_or_default();

    view! {
        <nav class="nav-bar">
            <a class="nav-bar__brand" href="/">"Brewlog"</a>
            <a class="nav-bar__link" href="/">"Search For Breweries"</a>
            <Show
                when=move || auth.get().logged_in()
                fallback=|| view! { <a class="nav-bar__link" href="/login">"Login"</a> }
            >
                <a class="nav-bar__link" href="/saved">"See Your Breweries"</a>
                <span class="nav-bar__user">{username}</span>
                <button class="nav-bar__logout" on:click=on_logout>"Logout"</button>
            </Show>
        </nav>
    }
}
