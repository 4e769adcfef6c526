//! Profile page listing the signed-in user's saved breweries.
//!
//! SYSTEM CONTEXT
//! ==============
//! The list is fetched from the server's `savedBreweries` query once the
//! session resolves. Deleting a card drops it from the list and from the
//! durable saved-id snapshot before the remote delete is sent, so the search
//! page shows the brewery as unsaved on its next load.
//!
//! ERROR HANDLING
//! ==============
//! A failed fetch leaves an empty list and a console warning. Failed deletes
//! and reactions are logged by the `saves` core and never surface as errors.

#[cfg(test)]
#[path = "saved_test.rs"]
mod saved_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use saves::{BreweryDocument, MAX_REACTION_LEN, SavedList};

use crate::components::brewery_card::{BreweryCard, DeleteButton};
use crate::config;
use crate::state::auth::AuthState;
use crate::util::auth::install_unauth_redirect;

/// Header above the saved list.
#[must_use]
pub fn saved_header(count: usize) -> String {
    if count == 0 { "No Saved Breweries Yet".to_owned() } else { format!("Viewing {count} Saved Breweries") }
}

/// Trim a reaction and check it fits.
pub(crate) fn validate_reaction_input(raw: &str) -> Result<String, &'static str> {
    let body = raw.trim();
    if body.is_empty() {
        return Err("Write a reaction first.");
    }
    if body.chars().count() > MAX_REACTION_LEN {
        return Err("Reactions are limited to 280 characters.");
    }
    Ok(body.to_owned())
}

#[component]
pub fn SavedPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    install_unauth_redirect(auth, navigate);

    let list = RwSignal::new(SavedList::loading(config::reconciler_config()));

    Effect::new(move || {
        let state = auth.get();
        let Some(token) = state.session.token().cloned() else {
            return;
        };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            use saves::MutationApi;

            let items = match crate::net::api::GraphqlClient::default().saved_breweries(&token).await {
                Ok(items) => items,
                Err(e) => {
                    leptos::logging::warn!("saved breweries fetch failed: {e}");
                    Vec::new()
                }
            };
            let _ = list.try_update(|list| list.replace(items));
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = token;
    });

    on_cleanup(move || {
        let _ = list.try_update(SavedList::teardown);
    });

    view! {
        <div class="saved-page">
            <h1 class="saved-page__header">
                {move || {
                    let list = list.get();
                    if list.is_loading() { "Loading...".to_owned() } else { saved_header(list.len()) }
                }}
            </h1>
            <div class="brew-holder">
                <For
                    each=move || list.get().items().to_vec()
                    key=|doc| (doc.record.brew_id.clone(), doc.reaction_count)
                    children=move |doc| saved_card(doc, auth, list)
                />
            </div>
        </div>
    }
}

fn saved_card(doc: BreweryDocument, auth: RwSignal<AuthState>, list: RwSignal<SavedList>) -> impl IntoView {
    let id = doc.record.brew_id.clone();
    let reaction = RwSignal::new(String::new());
    let reaction_info = RwSignal::new(String::new());

    let on_delete = Callback::new({
        let id = id.clone();
        move |()| {
            let session = auth.get_untracked().session;
            let id = id.clone();

            #[cfg(feature = "hydrate")]
            leptos::task::spawn_local(async move {
                let cell = crate::util::cell::SignalCell::new(list);
                let remote = crate::net::api::GraphqlClient::default();
                let store = crate::util::storage::LocalStorageStore;
                saves::driver::remove(&cell, &remote, &store, &session, &id).await;
            });
            #[cfg(not(feature = "hydrate"))]
            let _ = (session, id, list);
        }
    });

    let on_react = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let body = match validate_reaction_input(&reaction.get_untracked()) {
            Ok(body) => body,
            Err(msg) => {
                reaction_info.set(msg.to_owned());
                return;
            }
        };
        let Some(token) = auth.get_untracked().session.token().cloned() else {
            return;
        };
        reaction_info.set(String::new());
        reaction.set(String::new());

        #[cfg(feature = "hydrate")]
        {
            let id = id.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::GraphqlClient::default().add_reaction(&token, &id, &body).await {
                    Ok(doc) => {
                        let _ = list.try_update(|list| list.refresh(doc));
                    }
                    Err(e) => leptos::logging::warn!("add reaction failed: {e}"),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (token, body, &id, list);
    };

    let count = doc.reaction_count;
    view! {
        <BreweryCard record=doc.record reactions=count>
            <form class="brewery-card__react" on:submit=on_react>
                <input
                    class="brewery-card__react-input"
                    type="text"
                    placeholder="Leave a reaction"
                    prop:value=move || reaction.get()
                    on:input=move |ev| reaction.set(event_target_value(&ev))
                />
                <button class="brewery-card__react-button" type="submit">"React"</button>
            </form>
            <Show when=move || !reaction_info.get().is_empty()>
                <p class="brewery-card__react-info">{move || reaction_info.get()}</p>
            </Show>
            <DeleteButton on_delete=on_delete/>
        </BreweryCard>
    }
}
