//! Root application component with routing and the auth context.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::nav_bar::NavBar;
use crate::pages::{login::LoginPage, saved::SavedPage, search::SearchPage};
use crate::state::auth::AuthState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the auth context and resolves the stored token once in the
/// browser. Pages treat the session as unknown until that finishes.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::resolving());
    provide_context(auth);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        use crate::util::storage;

        let Some(raw) = storage::load_token() else {
            auth.set(AuthState::signed_out());
            return;
        };
        let token = saves::SessionToken::new(raw);
        match crate::net::api::fetch_current_user(&token).await {
            Some(user) => auth.set(AuthState::signed_in(user, token.as_str())),
            None => {
                storage::clear_token();
                auth.set(AuthState::signed_out());
            }
        }
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/brewlog.css"/>
        <Title text="Brewlog"/>

        <Router>
            <NavBar/>
            <main class="app-main">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=SearchPage/>
                    <Route path=StaticSegment("saved") view=SavedPage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                </Routes>
            </main>
        </Router>
    }
}
