use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use teamforge_shared::{Character, SuggestedTeam};

use crate::api;
use crate::app::{CurrentPage, Page, ProfileCharacter};
use crate::team_card::SuggestedTeamCard;

/// Character profile: bio and lore details plus every curated team featuring
/// the character. Both fetches run in parallel; teams failing alone only
/// degrades that section.
#[component]
pub fn CharacterProfilePage() -> impl IntoView {
    let CurrentPage(page) = expect_context();
    let ProfileCharacter(profile_character) = expect_context();

    let character: RwSignal<Option<Character>> = RwSignal::new(None);
    let teams: RwSignal<Vec<SuggestedTeam>> = RwSignal::new(Vec::new());
    let teams_error: RwSignal<Option<String>> = RwSignal::new(None);
    let loading: RwSignal<bool> = RwSignal::new(true);
    let error: RwSignal<Option<String>> = RwSignal::new(None);

    let Some(character_id) = profile_character.get_untracked() else {
        return view! {
            <div style="max-width: 900px; margin: 0 auto; padding: 24px;">
                <p style="color: #ff7755;">"No character selected."</p>
                <BackLink page=page />
            </div>
        }
        .into_any();
    };

    spawn_local(async move {
        let (character_result, teams_result) = futures::join!(
            api::fetch_character(&character_id),
            api::fetch_teams_for_character(&character_id),
        );
        match character_result {
            Ok(c) => character.set(Some(c)),
            Err(e) => {
                web_sys::console::error_1(&format!("Character fetch failed: {e}").into());
                error.set(Some("Failed to load this character's profile.".to_string()));
            }
        }
        match teams_result {
            Ok(list) => teams.set(list),
            Err(e) => {
                web_sys::console::warn_1(&format!("Teams fetch failed: {e}").into());
                teams_error.set(Some(
                    "Could not load teams for this character.".to_string(),
                ));
            }
        }
        loading.set(false);
    });

    view! {
        <div style="max-width: 900px; margin: 0 auto; padding: 24px;">
            <BackLink page=page />
            {move || {
                if loading.get() {
                    return view! { <p style="color: #9a9590;">"Loading profile..."</p> }
                        .into_any();
                }
                if let Some(err) = error.get() {
                    return view! { <p style="color: #ff7755;">{err}</p> }.into_any();
                }
                let Some(c) = character.get() else {
                    return view! { <p style="color: #ff7755;">"Character not found."</p> }
                        .into_any();
                };
                view! {
                    <ProfileHeader character=c.clone() />
                    <GeneralInfo character=c.clone() />
                    <div style="margin-top: 24px;">
                        <h2 style="font-size: 1.15rem; margin-bottom: 12px;">
                            {format!("Teams featuring {}", c.display_name())}
                        </h2>
                        {move || {
                            teams_error
                                .get()
                                .map(|err| {
                                    view! { <p style="color: #f5c542; font-size: 0.82rem;">{err}</p> }
                                })
                        }}
                        {move || {
                            (teams.get().is_empty() && teams_error.get().is_none())
                                .then(|| {
                                    view! {
                                        <p style="color: #9a9590;">
                                            "No curated teams feature this character yet."
                                        </p>
                                    }
                                })
                        }}
                        <div style="display: flex; flex-direction: column; gap: 12px;">
                            <For
                                each={move || teams.get().into_iter().enumerate().collect::<Vec<_>>()}
                                key=|(i, team)| crate::team_card::team_key(*i, team)
                                children=move |(_, team)| view! { <SuggestedTeamCard team=team /> }
                            />
                        </div>
                    </div>
                }
                    .into_any()
            }}
        </div>
    }
    .into_any()
}

#[component]
fn BackLink(page: RwSignal<Page>) -> impl IntoView {
    view! {
        <button
            style="background: none; border: none; color: #f5c542; font-size: 0.85rem; cursor: pointer; text-decoration: underline; padding: 0;"
            on:click=move |_| page.set(Page::Builder)
        >
            "\u{2190} Back to Team Builder"
        </button>
    }
}

#[component]
fn ProfileHeader(character: Character) -> impl IntoView {
    let name = character.display_name().to_string();
    let accent = character
        .element
        .map(|e| e.accent_color())
        .unwrap_or("#9a9590");
    let stars = character
        .rarity
        .map(|r| "\u{2605}".repeat(r as usize))
        .unwrap_or_default();

    view! {
        <div style=format!(
            "display: flex; align-items: center; gap: 18px; margin: 16px 0; padding: 16px; background: #1a1d2a; border: 1px solid #282c3e; border-left: 4px solid {accent}; border-radius: 8px;",
        )>
            {character
                .icon_url
                .clone()
                .map(|src| {
                    view! {
                        <img
                            src=src
                            alt=name.clone()
                            style="width: 96px; height: 96px; border-radius: 8px; object-fit: cover;"
                        />
                    }
                })}
            <div>
                <h1 style="margin: 0; font-size: 1.5rem;">{name.clone()}</h1>
                {character
                    .title
                    .clone()
                    .map(|title| {
                        view! {
                            <div style="color: #9a9590; font-style: italic; font-size: 0.9rem;">
                                {title}
                            </div>
                        }
                    })}
                <div style="color: #f5c542; font-size: 1rem; margin-top: 4px;">{stars}</div>
                <div style="display: flex; gap: 8px; margin-top: 6px;">
                    {character
                        .element
                        .map(|element| {
                            view! {
                                <img
                                    src=element.icon_path()
                                    alt=element.label()
                                    title=element.label()
                                    style="width: 24px; height: 24px;"
                                />
                            }
                        })}
                    {character
                        .weapon
                        .map(|weapon| {
                            view! {
                                <img
                                    src=weapon.icon_path()
                                    alt=weapon.label()
                                    title=weapon.label()
                                    style="width: 24px; height: 24px;"
                                />
                            }
                        })}
                </div>
            </div>
        </div>
    }
}

#[component]
fn GeneralInfo(character: Character) -> impl IntoView {
    view! {
        <div style="background: #1a1d2a; border: 1px solid #282c3e; border-radius: 8px; padding: 16px;">
            <h2 style="margin: 0 0 10px; font-size: 1.05rem;">"General Info"</h2>
            {character
                .region
                .clone()
                .map(|region| {
                    view! {
                        <p style="margin: 0 0 6px; font-size: 0.85rem;">
                            <strong>"Region: "</strong>
                            {region}
                        </p>
                    }
                })}
            {(!character.affiliation.is_empty())
                .then(|| {
                    view! {
                        <p style="margin: 0 0 6px; font-size: 0.85rem;">
                            <strong>"Affiliation: "</strong>
                            {character.affiliation.join(", ")}
                        </p>
                    }
                })}
            {(!character.role.is_empty())
                .then(|| {
                    view! {
                        <p style="margin: 0 0 6px; font-size: 0.85rem;">
                            <strong>"Roles: "</strong>
                            {character.role.join(", ")}
                        </p>
                    }
                })}
            {character
                .description_bio
                .clone()
                .map(|bio| {
                    view! {
                        <p style="margin: 10px 0 0; color: #9a9590; font-size: 0.85rem; line-height: 1.5;">
                            {bio}
                        </p>
                    }
                })}
        </div>
    }
}
