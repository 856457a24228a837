use std::collections::HashMap;

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use teamforge_shared::{ArtifactChoice, ArtifactSet, Build, TeamSlot, WeaponInfo};

use crate::api;
use crate::app::{ActiveTeam, CurrentPage, Page};

/// Reference databases the tooltips resolve against. Kept in one signal so a
/// single fetch populates both.
#[derive(Clone, Default)]
struct ReferenceData {
    artifacts: HashMap<String, ArtifactSet>,
    weapons: HashMap<String, WeaponInfo>,
}

/// Full build breakdown for the team picked on the builder page. The team
/// itself travels through context; only the tooltip databases are fetched.
#[component]
pub fn TeamDetailPage() -> impl IntoView {
    let ActiveTeam(active_team) = expect_context();

    let reference: RwSignal<ReferenceData> = RwSignal::new(ReferenceData::default());
    let db_error: RwSignal<Option<String>> = RwSignal::new(None);
    let hovered: RwSignal<Option<String>> = RwSignal::new(None);

    spawn_local(async move {
        match api::fetch_reference_data().await {
            Ok((artifacts, weapons)) => reference.set(ReferenceData { artifacts, weapons }),
            Err(e) => {
                web_sys::console::warn_1(&format!("Reference database fetch failed: {e}").into());
                db_error.set(Some(
                    "Could not load artifact and weapon details; tooltips are unavailable."
                        .to_string(),
                ));
            }
        }
    });

    let Some(team) = active_team.get_untracked() else {
        return view! {
            <div style="max-width: 900px; margin: 0 auto; padding: 24px;">
                <p style="color: #ff7755;">"No team selected."</p>
                <BackButton label="Back to Team Builder" target=Page::Builder />
            </div>
        }
        .into_any();
    };

    let slots = team.characters_in_team.clone();

    view! {
        <div style="max-width: 900px; margin: 0 auto; padding: 24px;">
            <BackButton label="Back to Team Builder" target=Page::Builder />
            <h1 style="font-size: 1.4rem; margin: 16px 0 6px;">{team.name.clone()}</h1>
            {team
                .strategy
                .clone()
                .map(|strategy| {
                    view! {
                        <p style="color: #9a9590; margin: 0 0 6px;">
                            <strong>"Strategy: "</strong>
                            {strategy}
                        </p>
                    }
                })}
            {team
                .notes
                .clone()
                .map(|notes| {
                    view! { <p style="color: #9a9590; margin: 0 0 6px;">{notes}</p> }
                })}
            {move || {
                db_error
                    .get()
                    .map(|err| {
                        view! {
                            <p style="color: #f5c542; font-size: 0.82rem; margin: 8px 0;">{err}</p>
                        }
                    })
            }}
            <div style="display: flex; flex-direction: column; gap: 16px; margin-top: 16px;">
                <For
                    each=move || slots.clone()
                    key=|slot| slot.id.clone()
                    children=move |slot| {
                        view! { <SlotBuildCard team_slot=slot reference=reference hovered=hovered /> }
                    }
                />
            </div>
        </div>
    }
    .into_any()
}

#[component]
fn BackButton(label: &'static str, target: Page) -> impl IntoView {
    let CurrentPage(page) = expect_context();
    view! {
        <button
            style="background: none; border: none; color: #f5c542; font-size: 0.85rem; cursor: pointer; text-decoration: underline; padding: 0;"
            on:click=move |_| page.set(target)
        >
            {format!("\u{2190} {label}")}
        </button>
    }
}

// Prop names avoid `slot` and `build`; both are reserved by the view macro
// and the generated prop builder respectively.
#[component]
fn SlotBuildCard(
    team_slot: TeamSlot,
    reference: RwSignal<ReferenceData>,
    hovered: RwSignal<Option<String>>,
) -> impl IntoView {
    let slot = team_slot;
    let name = slot.display_name().to_string();
    view! {
        <div style="background: #1a1d2a; border: 1px solid #282c3e; border-radius: 8px; padding: 16px;">
            <div style="display: flex; align-items: center; gap: 12px; margin-bottom: 10px;">
                {slot
                    .icon_url
                    .clone()
                    .map(|src| {
                        view! {
                            <img
                                src=src
                                alt=name.clone()
                                style="width: 56px; height: 56px; border-radius: 6px; object-fit: cover;"
                            />
                        }
                    })}
                <div>
                    <h2 style="margin: 0; font-size: 1.1rem;">{name.clone()}</h2>
                    {slot
                        .role_in_team
                        .clone()
                        .map(|role| {
                            view! {
                                <div style="color: #9a9590; font-size: 0.8rem;">{role}</div>
                            }
                        })}
                </div>
            </div>
            {match slot.build_details.clone() {
                Some(details) => {
                    view! { <BuildDetails slot_id=slot.id.clone() build_details=details reference=reference hovered=hovered /> }
                        .into_any()
                }
                None => {
                    view! {
                        <p style="color: #5a5860; font-size: 0.82rem;">
                            "No build details available for this character."
                        </p>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}

#[component]
fn BuildDetails(
    slot_id: String,
    build_details: Build,
    reference: RwSignal<ReferenceData>,
    hovered: RwSignal<Option<String>>,
) -> impl IntoView {
    let build = build_details;
    let main_stats = build.main_stats.clone().and_then(|stats| {
        let lines: Vec<String> = [
            stats.sands.map(|s| format!("Sands: {s}")),
            stats.goblet.map(|g| format!("Goblet: {g}")),
            stats.circlet.map(|c| format!("Circlet: {c}")),
        ]
        .into_iter()
        .flatten()
        .collect();
        if lines.is_empty() { None } else { Some(lines) }
    });

    let artifact_slot_id = slot_id.clone();
    let weapon_slot_id = slot_id.clone();
    let artifacts = build.artifacts.clone();
    let weapons = build.weapons.clone();

    view! {
        {build
            .name
            .clone()
            .map(|build_name| {
                view! {
                    <h3 style="margin: 0 0 4px; font-size: 0.95rem; color: #f5c542;">{build_name}</h3>
                }
            })}
        {build
            .notes_build
            .clone()
            .map(|notes| {
                view! { <p style="margin: 0 0 10px; color: #9a9590; font-size: 0.82rem;">{notes}</p> }
            })}
        {(!artifacts.is_empty())
            .then(|| {
                view! {
                    <SectionTitle title="Artifacts" />
                    <div style="display: flex; flex-wrap: wrap; gap: 8px; margin-bottom: 10px;">
                        {artifacts
                            .iter()
                            .enumerate()
                            .map(|(idx, choice)| {
                                let key = format!("{artifact_slot_id}:artifact:{idx}");
                                view! {
                                    <ArtifactChoiceChip
                                        choice=choice.clone()
                                        hover_key=key
                                        reference=reference
                                        hovered=hovered
                                    />
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>
                }
            })}
        {main_stats
            .map(|lines| {
                view! {
                    <SectionTitle title="Main stats" />
                    <p style="margin: 0 0 10px; color: #e2e0d8; font-size: 0.82rem;">
                        {lines.join(" / ")}
                    </p>
                }
            })}
        {(!build.sub_stats_priority.is_empty())
            .then(|| {
                view! {
                    <SectionTitle title="Substat priority" />
                    <p style="margin: 0 0 10px; color: #e2e0d8; font-size: 0.82rem;">
                        {build.sub_stats_priority.join(" > ")}
                    </p>
                }
            })}
        {(!weapons.is_empty())
            .then(|| {
                view! {
                    <SectionTitle title="Weapons" />
                    <div style="display: flex; flex-wrap: wrap; gap: 8px; margin-bottom: 10px;">
                        {weapons
                            .iter()
                            .enumerate()
                            .map(|(idx, choice)| {
                                let key = format!("{weapon_slot_id}:weapon:{idx}");
                                let name = choice
                                    .name
                                    .clone()
                                    .or_else(|| choice.weapon_id.clone())
                                    .unwrap_or_else(|| "Unknown weapon".to_string());
                                let weapon_id = choice.weapon_id.clone();
                                let icon = choice.icon_url.clone();
                                let notes = choice.notes.clone();
                                let enter_key = key.clone();
                                let leave_key = key.clone();
                                let shown_key = key.clone();
                                view! {
                                    <div
                                        style="position: relative; background: #13161f; border: 1px solid #282c3e; border-radius: 6px; padding: 6px 10px; display: flex; align-items: center; gap: 6px; font-size: 0.82rem;"
                                        on:mouseenter=move |_| hovered.set(Some(enter_key.clone()))
                                        on:mouseleave=move |_| {
                                            hovered.update(|h| {
                                                if h.as_deref() == Some(leave_key.as_str()) {
                                                    *h = None;
                                                }
                                            })
                                        }
                                    >
                                        {icon
                                            .map(|src| {
                                                view! {
                                                    <img src=src style="width: 24px; height: 24px;" />
                                                }
                                            })}
                                        <span>{name.clone()}</span>
                                        {notes
                                            .map(|n| {
                                                view! {
                                                    <span style="color: #5a5860; font-size: 0.72rem;">{n}</span>
                                                }
                                            })}
                                        {move || {
                                            if hovered.get().as_deref() != Some(shown_key.as_str()) {
                                                return None;
                                            }
                                            let info = weapon_id
                                                .as_ref()
                                                .and_then(|id| {
                                                    reference.with(|r| r.weapons.get(id).cloned())
                                                })?;
                                            Some(
                                                view! { <crate::tooltip::WeaponTooltip weapon=info /> },
                                            )
                                        }}
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>
                }
            })}
        {(!build.talent_priority.is_empty())
            .then(|| {
                view! {
                    <SectionTitle title="Talent priority" />
                    <p style="margin: 0; color: #e2e0d8; font-size: 0.82rem;">
                        {build.talent_priority.join(" > ")}
                    </p>
                }
            })}
    }
}

#[component]
fn SectionTitle(title: &'static str) -> impl IntoView {
    view! {
        <h4 style="margin: 0 0 4px; font-size: 0.7rem; text-transform: uppercase; letter-spacing: 0.1em; color: #5a5860;">
            {title}
        </h4>
    }
}

#[component]
fn ArtifactChoiceChip(
    choice: ArtifactChoice,
    hover_key: String,
    reference: RwSignal<ReferenceData>,
    hovered: RwSignal<Option<String>>,
) -> impl IntoView {
    let name = choice.display_name().to_string();
    let pieces = choice.display_pieces();
    let label = if pieces.is_empty() {
        name.clone()
    } else {
        format!("{name} ({pieces}pc)")
    };

    let enter_key = hover_key.clone();
    let leave_key = hover_key.clone();
    let shown_key = hover_key.clone();
    let tooltip_choice = choice.clone();

    view! {
        <div
            style="position: relative; background: #13161f; border: 1px solid #282c3e; border-radius: 6px; padding: 6px 10px; display: flex; align-items: center; gap: 6px; font-size: 0.82rem;"
            on:mouseenter=move |_| hovered.set(Some(enter_key.clone()))
            on:mouseleave=move |_| {
                hovered.update(|h| {
                    if h.as_deref() == Some(leave_key.as_str()) {
                        *h = None;
                    }
                })
            }
        >
            {choice
                .icon_url
                .clone()
                .map(|src| {
                    view! { <img src=src style="width: 24px; height: 24px;" /> }
                })}
            <span>{label}</span>
            {choice
                .notes
                .clone()
                .map(|n| {
                    view! { <span style="color: #5a5860; font-size: 0.72rem;">{n}</span> }
                })}
            {move || {
                if hovered.get().as_deref() != Some(shown_key.as_str()) {
                    return None;
                }
                if tooltip_choice.is_valid_combo() {
                    let halves: Vec<ArtifactSet> = reference
                        .with(|r| {
                            tooltip_choice
                                .combo_set_ids
                                .iter()
                                .filter_map(|id| r.artifacts.get(id).cloned())
                                .collect()
                        });
                    if halves.is_empty() {
                        return None;
                    }
                    return Some(
                        view! { <crate::tooltip::ArtifactTooltip combo=halves /> }.into_any(),
                    );
                }
                let set = tooltip_choice
                    .set_id
                    .as_ref()
                    .and_then(|id| reference.with(|r| r.artifacts.get(id).cloned()))?;
                Some(view! { <crate::tooltip::ArtifactTooltip artifact=set /> }.into_any())
            }}
        </div>
    }
}
