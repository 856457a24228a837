use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use teamforge_shared::SuggestedTeam;

use crate::api;
use crate::app::{Roster, RosterError, RosterLoading};
use crate::character_card::CharacterCard;
use crate::filter_bar::FilterBar;
use crate::filters::{self, ActiveFilters};
use crate::selection::SelectionStore;
use crate::team_card::SuggestedTeamCard;

/// Team builder page: filterable roster grid, persisted selection, and the
/// suggestion-request trigger.
#[component]
pub fn TeamBuilderPage() -> impl IntoView {
    let Roster(roster) = expect_context();
    let RosterLoading(roster_loading) = expect_context();
    let RosterError(roster_error) = expect_context();
    let store: SelectionStore = expect_context();

    // Transient per-mount state, discarded on navigation away.
    let active_filters: RwSignal<ActiveFilters> = RwSignal::new(ActiveFilters::default());
    let name_query: RwSignal<String> = RwSignal::new(String::new());
    let suggesting: RwSignal<bool> = RwSignal::new(false);
    let suggestion_error: RwSignal<Option<String>> = RwSignal::new(None);
    let suggested_teams: RwSignal<Vec<SuggestedTeam>> = RwSignal::new(Vec::new());
    let suggest_nonce: RwSignal<u64> = RwSignal::new(0);

    let visible = Memo::new(move |_| {
        filters::visible_characters(&roster.get(), active_filters.get(), &name_query.get())
    });

    let on_suggest = move |_| {
        if store.is_empty() {
            suggestion_error.set(Some("Select at least one character first.".to_string()));
            suggested_teams.set(Vec::new());
            return;
        }
        let request_nonce = suggest_nonce.get_untracked().wrapping_add(1);
        suggest_nonce.set(request_nonce);
        suggesting.set(true);
        suggestion_error.set(None);
        suggested_teams.set(Vec::new());

        let owned = store.ids();
        spawn_local(async move {
            let result = api::fetch_team_suggestions(&owned).await;
            // Only the latest in-flight request may apply its response.
            if suggest_nonce.get_untracked() != request_nonce {
                return;
            }
            suggesting.set(false);
            match result {
                Ok(teams) => suggested_teams.set(teams),
                Err(e) => {
                    web_sys::console::warn_1(&format!("Suggestion request failed: {e}").into());
                    suggestion_error.set(Some(e));
                }
            }
        });
    };

    view! {
        <div style="max-width: 1100px; margin: 0 auto; padding: 24px;">
            <h1 style="font-size: 1.4rem; margin-bottom: 16px;">"Build Your Team"</h1>
            <FilterBar active_filters=active_filters name_query=name_query />
            {move || {
                if roster_loading.get() {
                    return view! { <p style="color: #9a9590;">"Loading characters..."</p> }
                        .into_any();
                }
                if let Some(err) = roster_error.get() {
                    return view! { <p style="color: #ff7755;">{err}</p> }.into_any();
                }
                view! {
                    <p style="color: #9a9590; font-size: 0.85rem; margin: 12px 0;">
                        {move || {
                            format!(
                                "Select the characters you own ({} of {} shown):",
                                visible.get().len(),
                                roster.get().len(),
                            )
                        }}
                    </p>
                    <div style="display: grid; grid-template-columns: repeat(auto-fill, minmax(130px, 1fr)); gap: 12px;">
                        <For
                            each=move || visible.get()
                            key=|character| character.id.clone()
                            children=move |character| view! { <CharacterCard character=character /> }
                        />
                    </div>
                    {move || {
                        (visible.get().is_empty() && !roster.get().is_empty())
                            .then(|| {
                                view! {
                                    <p style="color: #9a9590;">
                                        "No characters match the selected filters."
                                    </p>
                                }
                            })
                    }}
                    {move || {
                        roster
                            .get()
                            .is_empty()
                            .then(|| {
                                view! {
                                    <p style="color: #9a9590;">"No characters found on the server."</p>
                                }
                            })
                    }}
                }
                    .into_any()
            }}
            <div style="display: flex; align-items: center; gap: 14px; margin-top: 20px;">
                <button
                    style="background: #f5c542; color: #13161f; border: none; border-radius: 6px; padding: 10px 18px; font-weight: 700; cursor: pointer;"
                    prop:disabled=move || suggesting.get() || store.is_empty()
                    on:click=on_suggest
                >
                    {move || if suggesting.get() { "Suggesting..." } else { "Suggest Teams" }}
                </button>
                <button
                    style="background: #1a1d2a; color: #e2e0d8; border: 1px solid #282c3e; border-radius: 6px; padding: 10px 14px; cursor: pointer;"
                    on:click=move |_| store.clear()
                >
                    "Clear selection"
                </button>
                <span style="color: #9a9590; font-size: 0.85rem;">
                    {move || format!("Selected: {}", store.len())}
                </span>
            </div>
            {move || {
                suggestion_error
                    .get()
                    .map(|err| {
                        view! { <p style="color: #ff7755; margin-top: 12px;">{err}</p> }
                    })
            }}
            {move || {
                let teams = suggested_teams.get();
                (!suggesting.get() && !teams.is_empty())
                    .then(|| {
                        view! {
                            <div style="margin-top: 24px;">
                                <h2 style="font-size: 1.15rem; margin-bottom: 12px;">"Suggested Teams"</h2>
                                <div style="display: flex; flex-direction: column; gap: 12px;">
                                    <For
                                        each=move || {
                                            suggested_teams.get().into_iter().enumerate().collect::<Vec<_>>()
                                        }
                                        key=|(i, team)| crate::team_card::team_key(*i, team)
                                        children=move |(_, team)| view! { <SuggestedTeamCard team=team /> }
                                    />
                                </div>
                            </div>
                        }
                    })
            }}
        </div>
    }
}
