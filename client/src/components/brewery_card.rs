//! Brewery card and its action buttons.
//!
//! DESIGN
//! ======
//! One card layout serves both the search results and the saved list; the
//! page supplies the action (save or delete) as children. Label and link
//! decisions are plain functions so they can be tested without a DOM.

#[cfg(test)]
#[path = "brewery_card_test.rs"]
mod brewery_card_test;

use leptos::prelude::*;
use saves::BreweryRecord;

pub const SITE_LINK_LABEL: &str = "Go to Brewery Site!";
pub const SAVE_LABEL: &str = "Save this brewery!";
pub const SAVED_LABEL: &str = "This brewery has been saved!";
pub const DELETE_LABEL: &str = "Delete";

/// Save button text for the current saved state.
#[must_use]
pub fn save_button_label(saved: bool) -> &'static str {
    if saved { SAVED_LABEL } else { SAVE_LABEL }
}

/// Link target for the brewery site, absent when the record has no site.
#[must_use]
pub fn site_href(record: &BreweryRecord) -> Option<String> {
    record.web.as_deref().map(str::trim).filter(|w| !w.is_empty()).map(str::to_owned)
}

#[must_use]
pub fn reaction_label(count: i64) -> String {
    if count == 1 { "1 reaction".to_owned() } else { format!("{count} reactions") }
}

/// A card showing one brewery.
#[component]
pub fn BreweryCard(
    record: BreweryRecord,
    #[prop(optional)] reactions: Option<i64>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let href = site_href(&record);
    let id = record.brew_id.to_string();

    view! {
        <article class="brewery-card" id=id>
            <h3 class="brewery-card__name">{record.name}</h3>
            <p class="brewery-card__type">"Brewery Type: " {record.kind}</p>
            <p class="brewery-card__city">"Brewery City: " {record.city}</p>
            <p class="brewery-card__state">"Brewery State: " {record.state}</p>
            {href.map(|href| view! {
                <a class="brewery-card__site" href=href target="_blank" rel="noopener">{SITE_LINK_LABEL}</a>
            })}
            {reactions.map(|count| view! { <p class="brewery-card__reactions">{reaction_label(count)}</p> })}
            {children.map(|children| children())}
        </article>
    }
}

/// Save action. Disabled, and inert, once the brewery is saved.
#[component]
pub fn SaveButton(saved: Signal<bool>, on_save: Callback<()>) -> impl IntoView {
    view! {
        <button
            class="brewery-card__save"
            disabled=move || saved.get()
            on:click=move |_| {
                if !saved.get_untracked() {
                    on_save.run(());
                }
            }
        >
            {move || save_button_label(saved.get())}
        </button>
    }
}

/// Delete action for the saved list.
#[component]
pub fn DeleteButton(on_delete: Callback<()>) -> impl IntoView {
    view! {
        <button class="brewery-card__delete" on:click=move |_| on_delete.run(())>
            {DELETE_LABEL}
        </button>
    }
}
