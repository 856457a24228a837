use gloo_storage::Storage;
use leptos::prelude::*;

const THEME_KEY: &str = "teamforge_theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub(crate) enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn flipped(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn attr(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

#[derive(Clone, Copy)]
pub(crate) struct CurrentTheme(pub RwSignal<Theme>);

pub(crate) fn load() -> Theme {
    gloo_storage::LocalStorage::get(THEME_KEY).unwrap_or(Theme::Dark)
}

pub(crate) fn save(theme: Theme) {
    let _ = gloo_storage::LocalStorage::set(THEME_KEY, &theme);
}

/// Expose the active theme to stylesheets via a body attribute.
pub(crate) fn apply(theme: Theme) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };
    let Some(body) = document.body() else {
        return;
    };
    let _ = body.set_attribute("data-theme", theme.attr());
}

#[component]
pub fn ThemeToggleButton() -> impl IntoView {
    let CurrentTheme(theme) = expect_context();

    view! {
        <button
            style="background: #1a1d2a; border: 1px solid #282c3e; border-radius: 6px; padding: 6px 10px; cursor: pointer; font-size: 0.95rem;"
            title=move || {
                if theme.get() == Theme::Light {
                    "Switch to dark theme"
                } else {
                    "Switch to light theme"
                }
            }
            on:click=move |_| theme.update(|t| *t = t.flipped())
        >
            {move || if theme.get() == Theme::Light { "\u{1F319}" } else { "\u{2600}\u{FE0F}" }}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::Theme;

    #[test]
    fn flipping_twice_is_identity() {
        assert_eq!(Theme::Light.flipped().flipped(), Theme::Light);
        assert_eq!(Theme::Dark.flipped(), Theme::Light);
    }
}
