use leptos::prelude::*;

use teamforge_shared::SuggestedTeam;

use crate::app::{ActiveTeam, CurrentPage, Page};

/// Key for keyed team lists. The API does not guarantee unique team names, so
/// the list position disambiguates.
pub(crate) fn team_key(index: usize, team: &SuggestedTeam) -> (usize, String) {
    (index, team.name.clone())
}

/// Compact card for one suggested team, with a link to the full build detail.
#[component]
pub fn SuggestedTeamCard(team: SuggestedTeam) -> impl IntoView {
    let CurrentPage(page) = expect_context();
    let ActiveTeam(active_team) = expect_context();

    let detail_team = team.clone();
    let open_detail = move |_| {
        active_team.set(Some(detail_team.clone()));
        page.set(Page::TeamDetail);
    };

    view! {
        <div style="background: #1a1d2a; border: 1px solid #282c3e; border-radius: 8px; padding: 14px;">
            <h3 style="margin: 0 0 6px; font-size: 1rem; color: #f5c542;">{team.name.clone()}</h3>
            {team
                .strategy
                .clone()
                .or_else(|| team.notes.clone())
                .map(|text| {
                    view! {
                        <p style="margin: 0 0 10px; color: #9a9590; font-size: 0.82rem;">{text}</p>
                    }
                })}
            <div style="display: flex; gap: 8px; margin-bottom: 10px;">
                {team
                    .characters_in_team
                    .iter()
                    .map(|member| {
                        let label = format!(
                            "{}\nRole: {}",
                            member.display_name(),
                            member.role_in_team.as_deref().unwrap_or("N/A"),
                        );
                        view! {
                            <div title=label>
                                {member
                                    .icon_url
                                    .clone()
                                    .map(|src| {
                                        view! {
                                            <img
                                                src=src
                                                alt=member.display_name().to_string()
                                                style="width: 44px; height: 44px; border-radius: 6px; object-fit: cover;"
                                            />
                                        }
                                    })}
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
            <button
                style="background: #232738; border: 1px solid #f5c542; border-radius: 6px; color: #f5c542; padding: 6px 12px; font-size: 0.78rem; cursor: pointer;"
                on:click=open_detail
            >
                "View team details"
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_team_names_still_key_distinctly() {
        let team = SuggestedTeam {
            name: "National".to_string(),
            strategy: None,
            notes: None,
            characters_in_team: Vec::new(),
        };
        let teams = vec![team.clone(), team];
        let keys: Vec<_> = teams
            .iter()
            .enumerate()
            .map(|(i, t)| team_key(i, t))
            .collect();
        assert_ne!(keys[0], keys[1]);
    }
}
