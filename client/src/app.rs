use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use teamforge_shared::{Character, SuggestedTeam};

use crate::api;
use crate::builder::TeamBuilderPage;
use crate::profile::CharacterProfilePage;
use crate::selection::SelectionStore;
use crate::team_detail::TeamDetailPage;
use crate::theme::{self, CurrentTheme, Theme, ThemeToggleButton};
use crate::tier_list::TierListPage;

/// Top-level page switch. The app is a single document; navigation swaps the
/// rendered page rather than the URL.
#[derive(Clone, Copy, PartialEq, Eq)]
pub(crate) enum Page {
    Builder,
    TierList,
    Profile,
    TeamDetail,
}

/// Newtype wrappers to keep same-typed signals distinct in Leptos context.
/// (Without wrappers, `provide_context` overwrites one with the other.)
#[derive(Clone, Copy)]
pub(crate) struct CurrentPage(pub RwSignal<Page>);
#[derive(Clone, Copy)]
pub(crate) struct Roster(pub RwSignal<Vec<Character>>);
#[derive(Clone, Copy)]
pub(crate) struct RosterLoading(pub RwSignal<bool>);
#[derive(Clone, Copy)]
pub(crate) struct RosterError(pub RwSignal<Option<String>>);
/// Character id shown on the profile page.
#[derive(Clone, Copy)]
pub(crate) struct ProfileCharacter(pub RwSignal<Option<String>>);
/// Team shown on the detail page, handed over by whichever card opened it.
#[derive(Clone, Copy)]
pub(crate) struct ActiveTeam(pub RwSignal<Option<SuggestedTeam>>);

pub(crate) fn open_profile(
    page: RwSignal<Page>,
    profile_character: RwSignal<Option<String>>,
    id: String,
) {
    profile_character.set(Some(id));
    page.set(Page::Profile);
}

/// Root application component. Provides global reactive signals via context
/// and loads the roster once at boot.
#[component]
pub fn App() -> impl IntoView {
    let page: RwSignal<Page> = RwSignal::new(Page::Builder);
    let roster: RwSignal<Vec<Character>> = RwSignal::new(Vec::new());
    let roster_loading: RwSignal<bool> = RwSignal::new(true);
    let roster_error: RwSignal<Option<String>> = RwSignal::new(None);
    let profile_character: RwSignal<Option<String>> = RwSignal::new(None);
    let active_team: RwSignal<Option<SuggestedTeam>> = RwSignal::new(None);
    let theme: RwSignal<Theme> = RwSignal::new(theme::load());
    let store = SelectionStore::load();

    provide_context(CurrentPage(page));
    provide_context(Roster(roster));
    provide_context(RosterLoading(roster_loading));
    provide_context(RosterError(roster_error));
    provide_context(ProfileCharacter(profile_character));
    provide_context(ActiveTeam(active_team));
    provide_context(CurrentTheme(theme));
    provide_context(store);

    // Persist and apply the theme on any change.
    Effect::new(move || {
        let current = theme.get();
        theme::save(current);
        theme::apply(current);
    });

    spawn_local(async move {
        match api::fetch_characters().await {
            Ok(characters) => roster.set(characters),
            Err(e) => {
                web_sys::console::error_1(&format!("Roster fetch failed: {e}").into());
                roster_error.set(Some(
                    "Failed to load characters. Is the backend running and reachable?".to_string(),
                ));
            }
        }
        roster_loading.set(false);
    });

    view! {
        <div style="min-height: 100vh; background: #13161f; color: #e2e0d8; font-family: 'Inter', system-ui, sans-serif;">
            <NavBar />
            {move || match page.get() {
                Page::Builder => view! { <TeamBuilderPage /> }.into_any(),
                Page::TierList => view! { <TierListPage /> }.into_any(),
                Page::Profile => view! { <CharacterProfilePage /> }.into_any(),
                Page::TeamDetail => view! { <TeamDetailPage /> }.into_any(),
            }}
        </div>
    }
}

#[component]
fn NavBar() -> impl IntoView {
    let CurrentPage(page) = expect_context();

    let tab_style = move |target: Page| {
        if page.get() == target {
            "background: #232738; border: 1px solid #f5c542; border-radius: 6px; padding: 6px 14px; color: #f5c542; cursor: pointer; font-size: 0.85rem;"
        } else {
            "background: #1a1d2a; border: 1px solid #282c3e; border-radius: 6px; padding: 6px 14px; color: #e2e0d8; cursor: pointer; font-size: 0.85rem;"
        }
    };

    view! {
        <header style="display: flex; align-items: center; gap: 12px; padding: 14px 24px; border-bottom: 1px solid #282c3e;">
            <div style="font-size: 1.1rem; font-weight: 700; letter-spacing: 0.12em; text-transform: uppercase; color: #f5c542;">"Teamforge"</div>
            <nav style="display: flex; gap: 8px; flex: 1;">
                <button style=move || tab_style(Page::Builder) on:click=move |_| page.set(Page::Builder)>
                    "Team Builder"
                </button>
                <button style=move || tab_style(Page::TierList) on:click=move |_| page.set(Page::TierList)>
                    "Tier List"
                </button>
            </nav>
            <ThemeToggleButton />
        </header>
    }
}
