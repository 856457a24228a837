use teamforge_shared::{Character, Element, WeaponKind};

/// Active filter state for the roster grid. Each dimension holds at most one
/// concrete value; `None` means no constraint on that dimension. The free-text
/// name query is tracked separately by the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ActiveFilters {
    pub element: Option<Element>,
    pub weapon: Option<WeaponKind>,
    pub rarity: Option<u8>,
}

impl ActiveFilters {
    /// Clicking the active value clears the dimension; any other value replaces it.
    pub fn toggle_element(&mut self, value: Element) {
        self.element = if self.element == Some(value) {
            None
        } else {
            Some(value)
        };
    }

    pub fn toggle_weapon(&mut self, value: WeaponKind) {
        self.weapon = if self.weapon == Some(value) {
            None
        } else {
            Some(value)
        };
    }

    pub fn toggle_rarity(&mut self, value: u8) {
        self.rarity = if self.rarity == Some(value) {
            None
        } else {
            Some(value)
        };
    }
}

/// Stable filter over the roster: logical AND of every set dimension plus a
/// case-insensitive name substring. Characters missing a field never match a
/// concrete value on that dimension. Output order is input order.
pub fn visible_characters(
    roster: &[Character],
    filters: ActiveFilters,
    name_query: &str,
) -> Vec<Character> {
    let query = name_query.to_lowercase();
    roster
        .iter()
        .filter(|character| matches(character, filters, &query))
        .cloned()
        .collect()
}

fn matches(character: &Character, filters: ActiveFilters, query_lower: &str) -> bool {
    if let Some(element) = filters.element {
        if character.element != Some(element) {
            return false;
        }
    }
    if let Some(weapon) = filters.weapon {
        if character.weapon != Some(weapon) {
            return false;
        }
    }
    if let Some(rarity) = filters.rarity {
        if character.rarity != Some(rarity) {
            return false;
        }
    }
    if !query_lower.is_empty() {
        // A record with no name cannot match a non-empty query.
        let Some(name) = &character.name else {
            return false;
        };
        if !name.to_lowercase().contains(query_lower) {
            return false;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn character(id: &str, name: &str, element: Element, rarity: u8) -> Character {
        Character {
            id: id.into(),
            name: Some(name.into()),
            element: Some(element),
            weapon: None,
            rarity: Some(rarity),
            icon_url: None,
            element_icon_url: None,
            title: None,
            description_bio: None,
            region: None,
            affiliation: Vec::new(),
            role: Vec::new(),
        }
    }

    fn sample_roster() -> Vec<Character> {
        vec![
            character("a", "Amber", Element::Pyro, 4),
            character("b", "Klee", Element::Pyro, 5),
            character("c", "Lisa", Element::Electro, 4),
        ]
    }

    fn ids(visible: &[Character]) -> Vec<&str> {
        visible.iter().map(|c| c.id.as_str()).collect()
    }

    #[test]
    fn no_filters_returns_roster_in_order() {
        let roster = sample_roster();
        let visible = visible_characters(&roster, ActiveFilters::default(), "");
        assert_eq!(visible, roster);
    }

    #[test]
    fn element_filter_then_name_query_scenario() {
        let roster = sample_roster();
        let mut filters = ActiveFilters::default();
        filters.toggle_element(Element::Pyro);

        assert_eq!(ids(&visible_characters(&roster, filters, "")), vec!["a", "b"]);
        // Neither Pyro character's name contains "li".
        assert!(visible_characters(&roster, filters, "li").is_empty());

        // Clearing the element filter leaves only the name constraint.
        filters.toggle_element(Element::Pyro);
        assert_eq!(ids(&visible_characters(&roster, filters, "li")), vec!["c"]);
    }

    #[test]
    fn dimensions_combine_with_logical_and() {
        let roster = sample_roster();
        let filters = ActiveFilters {
            element: Some(Element::Pyro),
            weapon: None,
            rarity: Some(5),
        };
        assert_eq!(ids(&visible_characters(&roster, filters, "")), vec!["b"]);
    }

    #[test]
    fn name_query_is_case_insensitive() {
        let roster = sample_roster();
        let visible = visible_characters(&roster, ActiveFilters::default(), "KLEE");
        assert_eq!(ids(&visible), vec!["b"]);
    }

    #[test]
    fn name_query_never_widens_results() {
        let roster = sample_roster();
        for filters in [
            ActiveFilters::default(),
            ActiveFilters {
                element: Some(Element::Pyro),
                weapon: None,
                rarity: None,
            },
            ActiveFilters {
                element: None,
                weapon: None,
                rarity: Some(4),
            },
        ] {
            let unconstrained = visible_characters(&roster, filters, "");
            for query in ["a", "li", "amber", "zzz"] {
                let narrowed = visible_characters(&roster, filters, query);
                assert!(narrowed.iter().all(|c| unconstrained.contains(c)));
            }
        }
    }

    #[test]
    fn output_is_order_preserving_subsequence() {
        let roster = sample_roster();
        let filters = ActiveFilters {
            element: None,
            weapon: None,
            rarity: Some(4),
        };
        let visible = visible_characters(&roster, filters, "");
        let mut roster_iter = roster.iter();
        for kept in &visible {
            assert!(roster_iter.any(|c| c == kept));
        }
    }

    #[test]
    fn toggle_twice_restores_prior_state() {
        let mut filters = ActiveFilters::default();
        filters.toggle_weapon(WeaponKind::Bow);
        let snapshot = filters;
        filters.toggle_rarity(5);
        filters.toggle_rarity(5);
        assert_eq!(filters, snapshot);
    }

    #[test]
    fn toggle_different_value_replaces() {
        let mut filters = ActiveFilters::default();
        filters.toggle_element(Element::Pyro);
        filters.toggle_element(Element::Cryo);
        assert_eq!(filters.element, Some(Element::Cryo));
    }

    #[test]
    fn missing_fields_fail_concrete_filters_without_panicking() {
        let sparse = Character {
            id: "ghost".into(),
            name: None,
            element: None,
            weapon: None,
            rarity: None,
            icon_url: None,
            element_icon_url: None,
            title: None,
            description_bio: None,
            region: None,
            affiliation: Vec::new(),
            role: Vec::new(),
        };
        let roster = vec![sparse.clone()];

        // Included when nothing constrains it.
        assert_eq!(visible_characters(&roster, ActiveFilters::default(), "").len(), 1);

        // Excluded by any concrete dimension value.
        for filters in [
            ActiveFilters {
                element: Some(Element::Pyro),
                weapon: None,
                rarity: None,
            },
            ActiveFilters {
                element: None,
                weapon: Some(WeaponKind::Sword),
                rarity: None,
            },
            ActiveFilters {
                element: None,
                weapon: None,
                rarity: Some(4),
            },
        ] {
            assert!(visible_characters(&roster, filters, "").is_empty());
        }

        // Nameless records are excluded by any non-empty query.
        assert!(visible_characters(&roster, ActiveFilters::default(), "x").is_empty());
    }

    #[test]
    fn unknown_element_never_matches_concrete_filter() {
        let mut c = character("x", "Wanderer", Element::Pyro, 5);
        c.element = Some(Element::Unknown);
        let roster = vec![c];
        let filters = ActiveFilters {
            element: Some(Element::Pyro),
            weapon: None,
            rarity: None,
        };
        assert!(visible_characters(&roster, filters, "").is_empty());
    }

    #[test]
    fn empty_roster_is_fine() {
        assert!(visible_characters(&[], ActiveFilters::default(), "query").is_empty());
    }
}
