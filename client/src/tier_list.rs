use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use teamforge_shared::{TierEntry, tier};

use crate::api;
use crate::app::{CurrentPage, ProfileCharacter, open_profile};
use crate::tooltip::{TierTooltip, score_color};

/// Tier list page: aggregated ranks grouped into sections, strongest first.
/// Hovering a card shows the per-site score breakdown.
#[component]
pub fn TierListPage() -> impl IntoView {
    let entries: RwSignal<Vec<TierEntry>> = RwSignal::new(Vec::new());
    let loading: RwSignal<bool> = RwSignal::new(true);
    let error: RwSignal<Option<String>> = RwSignal::new(None);
    let hovered: RwSignal<Option<String>> = RwSignal::new(None);

    spawn_local(async move {
        match api::fetch_tier_list().await {
            Ok(mut list) => {
                tier::sort_entries(&mut list);
                entries.set(list);
            }
            Err(e) => {
                web_sys::console::error_1(&format!("Tier list fetch failed: {e}").into());
                error.set(Some(
                    "Failed to load the tier list. Is the backend running and reachable?"
                        .to_string(),
                ));
            }
        }
        loading.set(false);
    });

    let groups = Memo::new(move |_| tier::group_by_tier(&entries.get()));

    view! {
        <div style="max-width: 1100px; margin: 0 auto; padding: 24px;">
            <h1 style="font-size: 1.4rem; margin-bottom: 16px;">"Character Tier List"</h1>
            {move || {
                if loading.get() {
                    return view! { <p style="color: #9a9590;">"Loading tier list..."</p> }
                        .into_any();
                }
                if let Some(err) = error.get() {
                    return view! { <p style="color: #ff7755;">{err}</p> }.into_any();
                }
                if entries.get().is_empty() {
                    return view! {
                        <p style="color: #9a9590;">"No tier list data available."</p>
                    }
                        .into_any();
                }
                view! {
                    <For
                        each=move || groups.get()
                        key=|(tier_level, _)| *tier_level
                        children=move |(tier_level, members)| {
                            view! { <TierSection tier_level=tier_level members=members hovered=hovered /> }
                        }
                    />
                }
                    .into_any()
            }}
        </div>
    }
}

#[component]
fn TierSection(
    tier_level: teamforge_shared::TierLevel,
    members: Vec<TierEntry>,
    hovered: RwSignal<Option<String>>,
) -> impl IntoView {
    let accent = score_color(tier_level.label());
    view! {
        <div style="display: flex; gap: 14px; margin-bottom: 14px; align-items: stretch;">
            <div style=format!(
                "min-width: 64px; display: flex; align-items: center; justify-content: center; font-size: 1.5rem; font-weight: 800; border-radius: 8px; background: #1a1d2a; border: 1px solid #282c3e; color: {accent};",
            )>{tier_level.label()}</div>
            <div style="flex: 1; display: flex; flex-wrap: wrap; gap: 10px; background: #13161f; border: 1px solid #282c3e; border-radius: 8px; padding: 10px;">
                <For
                    each=move || members.clone()
                    key=|entry| entry.character_id.clone()
                    children=move |entry| view! { <TierCharacterCard entry=entry hovered=hovered /> }
                />
            </div>
        </div>
    }
}

#[component]
fn TierCharacterCard(entry: TierEntry, hovered: RwSignal<Option<String>>) -> impl IntoView {
    let CurrentPage(page) = expect_context();
    let ProfileCharacter(profile_character) = expect_context();

    let id = entry.character_id.clone();
    let name = entry.display_name().to_string();
    let icon = format!("/assets/images/characters/{id}.png");
    let element_icon = entry
        .element
        .clone()
        .filter(|element| element != "Unknown")
        .map(|element| format!("/assets/images/elements/element_{}.png", element.to_lowercase()));

    let hover_enter_id = id.clone();
    let hover_leave_id = id.clone();
    let profile_id = id.clone();
    let tooltip_id = id.clone();
    let tooltip_entry = entry.clone();

    view! {
        <div
            style="position: relative; width: 72px; text-align: center; cursor: pointer;"
            on:mouseenter=move |_| hovered.set(Some(hover_enter_id.clone()))
            on:mouseleave=move |_| {
                hovered.update(|h| {
                    if h.as_deref() == Some(hover_leave_id.as_str()) {
                        *h = None;
                    }
                })
            }
            on:click=move |_| open_profile(page, profile_character, profile_id.clone())
        >
            <img
                src=icon
                alt=name.clone()
                style="width: 56px; height: 56px; border-radius: 6px; object-fit: cover;"
            />
            {element_icon
                .map(|src| {
                    view! {
                        <img
                            src=src
                            style="position: absolute; top: 0; right: 2px; width: 16px; height: 16px;"
                        />
                    }
                })}
            <div style="font-size: 0.68rem; overflow: hidden; text-overflow: ellipsis; white-space: nowrap;">
                {name.clone()}
            </div>
            {move || {
                (hovered.get().as_deref() == Some(tooltip_id.as_str()))
                    .then(|| view! { <TierTooltip entry=tooltip_entry.clone() /> })
            }}
        </div>
    }
}
