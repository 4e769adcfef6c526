//! Brewery search page with per-result save actions.
//!
//! SYSTEM CONTEXT
//! ==============
//! The landing route. Results come from Open Brewery DB; the saved markers
//! come from this page's own `SavedReconciler`, loaded from `localStorage`
//! when the session resolves and flushed back when the page is torn down or
//! the browser unloads it.
//!
//! TRADE-OFFS
//! ==========
//! The page does not consult the server's saved list. A brewery saved in
//! another browser shows as unsaved here until it is saved again, which the
//! server treats as an idempotent link.

#[cfg(test)]
#[path = "search_test.rs"]
mod search_test;

use leptos::prelude::*;
use saves::{BreweryRecord, SavedReconciler, Session, SnapshotStore, snapshot_key};

use crate::components::brewery_card::{BreweryCard, SaveButton};
use crate::config;
use crate::state::auth::AuthState;
use crate::util::storage::LocalStorageStore;

/// Header above the result list.
#[must_use]
pub fn results_header(count: usize) -> String {
    if count == 0 { "No Breweries yet".to_owned() } else { format!("Viewing {count} Breweries") }
}

fn is_anonymous(current: &SavedReconciler) -> bool {
    current.storage_key() == snapshot_key(&current.config().storage_namespace, &Session::Anonymous)
}

/// Replace `current` with the saved ids of `session`'s user. The outgoing
/// state is torn down, which flushes it, unless it belonged to nobody.
pub(crate) fn rebind<S: SnapshotStore + ?Sized>(current: &mut SavedReconciler, session: &Session, store: &S) {
    let config = current.config().clone();
    if !is_anonymous(current) {
        current.teardown(store);
    }
    *current = SavedReconciler::load(store, session, config);
}

/// Write the signed-in user's saved ids without tearing the page down.
/// Runs on `pagehide`, since a reload or closed tab never reaches
/// `on_cleanup`.
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
pub(crate) fn persist<S: SnapshotStore + ?Sized>(current: &SavedReconciler, store: &S) {
    if is_anonymous(current) || current.is_torn_down() {
        return;
    }
    current.flush(store);
}

#[component]
pub fn SearchPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let query = RwSignal::new(String::new());
    let results = RwSignal::new(Vec::<BreweryRecord>::new());
    let searching = RwSignal::new(false);
    let saved = RwSignal::new(SavedReconciler::empty(&Session::Anonymous, config::reconciler_config()));

    Effect::new(move |bound: Option<String>| {
        let state = auth.get();
        if state.loading {
            return bound.unwrap_or_default();
        }
        let key = snapshot_key(&config::reconciler_config().storage_namespace, &state.session);
        if bound.as_deref() != Some(key.as_str()) {
            saved.update(|current| rebind(current, &state.session, &LocalStorageStore));
        }
        key
    });

    #[cfg(feature = "hydrate")]
    {
        let on_pagehide = window_event_listener(leptos::ev::pagehide, move |_| {
            let _ = saved.try_with_untracked(|current| persist(current, &LocalStorageStore));
        });
        on_cleanup(move || {
            on_pagehide.remove();
            let _ = saved.try_update(|current| current.teardown(&LocalStorageStore));
        });
    }

    let on_search = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let q = query.get_untracked();
        if q.trim().is_empty() {
            results.set(Vec::new());
            return;
        }
        searching.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let records = saves::search_breweries(&crate::net::api::OpenBreweryDb::default(), &q).await;
            let _ = results.try_set(records);
            let _ = searching.try_set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = q;
    };

    view! {
        <div class="search-page">
            <section class="search-bar">
                <h1 class="search-bar__title">"Search for Breweries!"</h1>
                <form class="search-bar__form" on:submit=on_search>
                    <input
                        class="search-bar__input"
                        type="search"
                        name="searchInput"
                        placeholder="Search for Breweries"
                        aria-label="Search"
                        prop:value=move || query.get()
                        on:input=move |ev| query.set(event_target_value(&ev))
                    />
                    <button class="search-bar__button" type="submit" disabled=move || searching.get()>
                        "Search"
                    </button>
                </form>
            </section>
            <h2 class="search-page__header">{move || results_header(results.get().len())}</h2>
            <div class="brew-holder">
                {move || {
                    results
                        .get()
                        .into_iter()
                        .map(|record| result_card(record, auth, saved))
                        .collect_view()
                }}
            </div>
        </div>
    }
}

fn result_card(record: BreweryRecord, auth: RwSignal<AuthState>, saved: RwSignal<SavedReconciler>) -> impl IntoView {
    let id = record.brew_id.clone();
    let is_saved = Signal::derive(move || saved.with(|r| r.is_saved(&id)));

    let on_save = Callback::new({
        let record = record.clone();
        move |()| {
            let session = auth.get_untracked().session;
            let record = record.clone();

            #[cfg(feature = "hydrate")]
            leptos::task::spawn_local(async move {
                let cell = crate::util::cell::SignalCell::new(saved);
                let remote = crate::net::api::GraphqlClient::default();
                saves::driver::save(&cell, &remote, &session, &record).await;
            });
            #[cfg(not(feature = "hydrate"))]
            let _ = (session, record);
        }
    });

    view! {
        <BreweryCard record=record>
            <Show when=move || auth.get().logged_in()>
                <SaveButton saved=is_saved on_save=on_save/>
            </Show>
        </BreweryCard>
    }
}
