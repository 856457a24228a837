use leptos::prelude::*;

use teamforge_shared::Character;

use crate::app::{CurrentPage, ProfileCharacter, open_profile};
use crate::selection::SelectionStore;

/// One selectable roster card. Clicking the card toggles selection; the
/// profile link navigates without toggling.
#[component]
pub fn CharacterCard(character: Character) -> impl IntoView {
    let store: SelectionStore = expect_context();
    let CurrentPage(page) = expect_context();
    let ProfileCharacter(profile_character) = expect_context();

    let name = character.display_name().to_string();
    let hover_title = format!(
        "{}\nElement: {}\nRarity: {}",
        name,
        character
            .element
            .map(|e| e.label())
            .unwrap_or("Unknown"),
        character
            .rarity
            .map(|r| format!("{r} stars"))
            .unwrap_or_else(|| "Unknown".to_string()),
    );

    let membership_id = character.id.clone();
    let selected = Memo::new(move |_| store.is_selected(&membership_id));
    let toggle_id = character.id.clone();
    let profile_id = character.id.clone();

    let card_style = move || {
        if selected.get() {
            "position: relative; background: #232738; border: 2px solid #f5c542; border-radius: 8px; padding: 10px; text-align: center; cursor: pointer;"
        } else {
            "position: relative; background: #1a1d2a; border: 2px solid #282c3e; border-radius: 8px; padding: 10px; text-align: center; cursor: pointer;"
        }
    };

    view! {
        <div style=card_style title=hover_title on:click=move |_| store.toggle(&toggle_id)>
            {character
                .icon_url
                .clone()
                .map(|src| {
                    view! {
                        <img
                            src=src
                            alt=name.clone()
                            style="width: 84px; height: 84px; border-radius: 6px; object-fit: cover;"
                        />
                    }
                })}
            {character
                .element_icon_url
                .clone()
                .map(|src| {
                    view! {
                        <img
                            src=src
                            style="position: absolute; top: 6px; right: 6px; width: 20px; height: 20px;"
                        />
                    }
                })}
            <h3 style="margin: 8px 0 6px; font-size: 0.85rem; overflow: hidden; text-overflow: ellipsis; white-space: nowrap;">
                {name.clone()}
            </h3>
            <button
                style="background: none; border: none; color: #f5c542; font-size: 0.72rem; cursor: pointer; text-decoration: underline;"
                on:click=move |e| {
                    e.stop_propagation();
                    open_profile(page, profile_character, profile_id.clone());
                }
            >
                "View profile"
            </button>
        </div>
    }
}
