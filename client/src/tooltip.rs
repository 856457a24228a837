use leptos::prelude::*;

use teamforge_shared::{ArtifactSet, TierEntry, TierLevel, WeaponInfo};

const PANEL_STYLE: &str = "position: absolute; z-index: 20; top: 100%; left: 0; min-width: 240px; max-width: 320px; background: #13161f; border: 1px solid #3a3f5c; border-radius: 6px; padding: 10px; text-align: left; font-size: 0.78rem; box-shadow: 0 4px 16px rgba(0,0,0,0.5);";

/// Tier rank accent colors, shared by tier cards and tooltip scores.
pub(crate) fn score_color(score: &str) -> &'static str {
    match score {
        "SS" => "#ff7755",
        "S" => "#f5c542",
        "A" => "#a2ff55",
        "B" => "#55ddff",
        "C" => "#c37bff",
        _ => "#9a9590",
    }
}

/// Hover panel for an artifact recommendation: one set with its bonuses, or
/// the two halves of a 2pc+2pc combo (4pc bonuses omitted for combos).
#[component]
pub fn ArtifactTooltip(
    #[prop(optional)] artifact: Option<ArtifactSet>,
    #[prop(optional)] combo: Vec<ArtifactSet>,
) -> impl IntoView {
    if !combo.is_empty() {
        let halves = combo
            .into_iter()
            .map(|set| {
                view! {
                    <div style="margin-bottom: 6px;">
                        <SetHeader set=set.clone() />
                        {set
                            .bonus_2pc
                            .map(|bonus| {
                                view! {
                                    <p style="margin: 4px 0 0;">
                                        <strong>"2-piece: "</strong>
                                        {bonus}
                                    </p>
                                }
                            })}
                    </div>
                }
            })
            .collect::<Vec<_>>();
        return view! { <div style=PANEL_STYLE>{halves}</div> }.into_any();
    }

    let Some(set) = artifact else {
        return ().into_any();
    };
    view! {
        <div style=PANEL_STYLE>
            <SetHeader set=set.clone() />
            {set
                .bonus_2pc
                .map(|bonus| {
                    view! {
                        <p style="margin: 4px 0 0;">
                            <strong>"2-piece: "</strong>
                            {bonus}
                        </p>
                    }
                })}
            {set
                .bonus_4pc
                .map(|bonus| {
                    view! {
                        <p style="margin: 4px 0 0;">
                            <strong>"4-piece: "</strong>
                            {bonus}
                        </p>
                    }
                })}
            {set
                .bonus_1pc
                .map(|bonus| {
                    view! {
                        <p style="margin: 4px 0 0;">
                            <strong>"1-piece: "</strong>
                            {bonus}
                        </p>
                    }
                })}
        </div>
    }
    .into_any()
}

#[component]
fn SetHeader(set: ArtifactSet) -> impl IntoView {
    let name = set.name.clone().unwrap_or_else(|| set.id.clone());
    view! {
        <div style="display: flex; align-items: center; gap: 6px;">
            {set
                .icon_url
                .clone()
                .map(|src| {
                    view! {
                        <img src=src alt=name.clone() style="width: 22px; height: 22px;" />
                    }
                })}
            <strong>{name.clone()}</strong>
        </div>
    }
}

/// Hover panel for a weapon recommendation.
#[component]
pub fn WeaponTooltip(weapon: WeaponInfo) -> impl IntoView {
    let name = weapon.name.clone().unwrap_or_else(|| weapon.id.clone());
    let type_line = format!(
        "Type: {} - Rarity: {}\u{2605}",
        weapon.kind.as_deref().unwrap_or("Unknown"),
        weapon
            .rarity
            .map(|r| r.to_string())
            .unwrap_or_else(|| "?".to_string()),
    );
    let substat = weapon
        .secondary_stat_type
        .as_ref()
        .zip(weapon.secondary_stat_lv90.as_ref())
        .map(|(kind, value)| format!("Substat (Lv. 90): {value} {kind}"));

    view! {
        <div style=PANEL_STYLE>
            <div style="display: flex; align-items: center; gap: 6px;">
                {weapon
                    .icon_url
                    .clone()
                    .map(|src| {
                        view! {
                            <img src=src alt=name.clone() style="width: 22px; height: 22px;" />
                        }
                    })}
                <strong>{name.clone()}</strong>
            </div>
            <p style="margin: 4px 0 0;">{type_line}</p>
            {weapon
                .base_atk_lv90
                .clone()
                .map(|atk| {
                    view! { <p style="margin: 4px 0 0;">{format!("Base ATK (Lv. 90): {atk}")}</p> }
                })}
            {substat.map(|line| view! { <p style="margin: 4px 0 0;">{line}</p> })}
            {weapon
                .passive_name
                .clone()
                .map(|passive| {
                    view! { <p style="margin: 4px 0 0;">{format!("Passive: {passive}")}</p> }
                })}
            {weapon
                .passive_description_r1
                .clone()
                .map(|desc| view! { <p style="margin: 4px 0 0; color: #9a9590;">{desc}</p> })}
            {weapon
                .source_category
                .clone()
                .map(|source| {
                    view! {
                        <p style="margin: 4px 0 0; color: #5a5860; font-size: 0.72rem;">
                            {format!("Source: {source}")}
                        </p>
                    }
                })}
        </div>
    }
}

/// Hover panel for a tier list entry: role, aggregated score, per-site scores.
#[component]
pub fn TierTooltip(entry: TierEntry) -> impl IntoView {
    let aggregated = entry.average_numeric_tier.map(|score| {
        let tier = TierLevel::from_average(score);
        view! {
            <p style="margin: 4px 0 0;">
                "Aggregated score: "
                <span style=format!(
                    "color: {}; font-weight: 700;",
                    score_color(tier.label()),
                )>{tier.label()}</span>
            </p>
        }
    });

    // HashMap iteration order is unstable; sort for a steady tooltip layout.
    let mut site_scores: Vec<(String, String)> = entry
        .original_scores_by_site
        .iter()
        .map(|(site, score)| (site.clone(), score.clone()))
        .collect();
    site_scores.sort();

    view! {
        <div style=PANEL_STYLE>
            <strong>{entry.display_name().to_string()}</strong>
            {entry
                .role
                .clone()
                .filter(|role| role != "Unknown Role")
                .map(|role| view! { <p style="margin: 4px 0 0;">{format!("Role: {role}")}</p> })}
            {entry
                .element
                .clone()
                .filter(|element| element != "Unknown")
                .map(|element| {
                    view! { <p style="margin: 4px 0 0;">{format!("Element: {element}")}</p> }
                })}
            {entry
                .rarity
                .map(|rarity| {
                    view! { <p style="margin: 4px 0 0;">{format!("Rarity: {rarity} stars")}</p> }
                })}
            {aggregated}
            {(!site_scores.is_empty())
                .then(|| {
                    view! {
                        <div style="margin-top: 6px; border-top: 1px solid #282c3e; padding-top: 6px;">
                            <div style="color: #5a5860; font-size: 0.72rem; margin-bottom: 4px;">
                                "Scores by site:"
                            </div>
                            {site_scores
                                .into_iter()
                                .map(|(site, score)| {
                                    view! {
                                        <div style="display: flex; justify-content: space-between; gap: 10px;">
                                            <span>{site.replace('_', " ")}</span>
                                            <span style=format!(
                                                "color: {}; font-weight: 700;",
                                                score_color(&score),
                                            )>{score.clone()}</span>
                                        </div>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </div>
                    }
                })}
            {entry
                .sources_contributing
                .map(|count| {
                    view! {
                        <p style="margin: 6px 0 0; color: #5a5860; font-size: 0.72rem;">
                            {format!("{count} sources contributing")}
                        </p>
                    }
                })}
        </div>
    }
}
