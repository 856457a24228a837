use leptos::prelude::*;
use wasm_bindgen::JsCast;

use teamforge_shared::{Element, WeaponKind};

use crate::filters::ActiveFilters;

/// Rarity values offered as filter buttons, highest first.
const RARITIES: [u8; 2] = [5, 4];

/// Filter controls: one button group per dimension plus the name search box.
/// Clicking an active button clears that dimension.
#[component]
pub fn FilterBar(
    active_filters: RwSignal<ActiveFilters>,
    name_query: RwSignal<String>,
) -> impl IntoView {
    let on_name_input = move |e: leptos::ev::Event| {
        let Some(target) = e.target() else {
            return;
        };
        let Ok(input) = target.dyn_into::<web_sys::HtmlInputElement>() else {
            return;
        };
        name_query.set(input.value());
    };

    view! {
        <div style="background: #1a1d2a; border: 1px solid #282c3e; border-radius: 8px; padding: 14px; display: flex; flex-wrap: wrap; gap: 18px; align-items: flex-end;">
            <FilterSection title="Element">
                {Element::ALL
                    .iter()
                    .map(|&element| {
                        let active = move || active_filters.get().element == Some(element);
                        view! {
                            <button
                                style=move || filter_button_style(active())
                                title=element.label()
                                on:click=move |_| {
                                    active_filters.update(|f| f.toggle_element(element))
                                }
                            >
                                <img
                                    src=element.icon_path()
                                    alt=element.label()
                                    style="width: 22px; height: 22px;"
                                />
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </FilterSection>
            <FilterSection title="Weapon">
                {WeaponKind::ALL
                    .iter()
                    .map(|&weapon| {
                        let active = move || active_filters.get().weapon == Some(weapon);
                        view! {
                            <button
                                style=move || filter_button_style(active())
                                title=weapon.label()
                                on:click=move |_| active_filters.update(|f| f.toggle_weapon(weapon))
                            >
                                <img
                                    src=weapon.icon_path()
                                    alt=weapon.label()
                                    style="width: 22px; height: 22px;"
                                />
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </FilterSection>
            <FilterSection title="Rarity">
                {RARITIES
                    .iter()
                    .map(|&rarity| {
                        let active = move || active_filters.get().rarity == Some(rarity);
                        view! {
                            <button
                                style=move || filter_button_style(active())
                                title=format!("{rarity} stars")
                                on:click=move |_| active_filters.update(|f| f.toggle_rarity(rarity))
                            >
                                <img
                                    src=format!("/assets/images/rarity/rarity_{rarity}.png")
                                    alt=format!("{rarity} stars")
                                    style="width: 22px; height: 22px;"
                                />
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </FilterSection>
            <FilterSection title="Search by name">
                <input
                    type="text"
                    placeholder="Type a name..."
                    style="background: #13161f; border: 1px solid #282c3e; border-radius: 6px; color: #e2e0d8; padding: 8px 10px; font-size: 0.85rem; outline: none; min-width: 180px;"
                    prop:value=move || name_query.get()
                    on:input=on_name_input
                />
            </FilterSection>
        </div>
    }
}

#[component]
fn FilterSection(title: &'static str, children: Children) -> impl IntoView {
    view! {
        <div>
            <h4 style="margin: 0 0 6px; font-size: 0.7rem; text-transform: uppercase; letter-spacing: 0.1em; color: #5a5860;">
                {title}
            </h4>
            <div style="display: flex; gap: 6px; flex-wrap: wrap;">{children()}</div>
        </div>
    }
}

fn filter_button_style(active: bool) -> &'static str {
    if active {
        "background: #232738; border: 1px solid #f5c542; border-radius: 6px; padding: 5px; cursor: pointer; box-shadow: 0 0 8px rgba(245,197,66,0.25);"
    } else {
        "background: #13161f; border: 1px solid #282c3e; border-radius: 6px; padding: 5px; cursor: pointer;"
    }
}
