use serde::{Deserialize, Serialize};

/// The seven playable elements. API payloads occasionally carry placeholder
/// strings for unreleased characters; those deserialize to `Unknown` and never
/// match a concrete filter value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Element {
    Anemo,
    Geo,
    Electro,
    Dendro,
    Hydro,
    Pyro,
    Cryo,
    #[serde(other)]
    Unknown,
}

impl Element {
    /// Concrete elements offered as filter buttons, in display order.
    pub const ALL: [Element; 7] = [
        Element::Anemo,
        Element::Geo,
        Element::Electro,
        Element::Dendro,
        Element::Hydro,
        Element::Pyro,
        Element::Cryo,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Element::Anemo => "Anemo",
            Element::Geo => "Geo",
            Element::Electro => "Electro",
            Element::Dendro => "Dendro",
            Element::Hydro => "Hydro",
            Element::Pyro => "Pyro",
            Element::Cryo => "Cryo",
            Element::Unknown => "Unknown",
        }
    }

    pub fn icon_path(self) -> String {
        format!(
            "/assets/images/elements/element_{}.png",
            self.label().to_lowercase()
        )
    }

    /// Accent color used by profile page theming.
    pub fn accent_color(self) -> &'static str {
        match self {
            Element::Geo => "#FFCB68",
            Element::Pyro => "#FF7755",
            Element::Hydro => "#55DDFF",
            Element::Electro => "#C37BFF",
            Element::Cryo => "#A1E8FF",
            Element::Anemo => "#88FFD5",
            Element::Dendro => "#A2FF55",
            Element::Unknown => "#777788",
        }
    }
}

/// Weapon classes a character can wield.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WeaponKind {
    Sword,
    Claymore,
    Polearm,
    Bow,
    Catalyst,
    #[serde(other)]
    Unknown,
}

impl WeaponKind {
    pub const ALL: [WeaponKind; 5] = [
        WeaponKind::Sword,
        WeaponKind::Claymore,
        WeaponKind::Polearm,
        WeaponKind::Bow,
        WeaponKind::Catalyst,
    ];

    pub fn label(self) -> &'static str {
        match self {
            WeaponKind::Sword => "Sword",
            WeaponKind::Claymore => "Claymore",
            WeaponKind::Polearm => "Polearm",
            WeaponKind::Bow => "Bow",
            WeaponKind::Catalyst => "Catalyst",
            WeaponKind::Unknown => "Unknown",
        }
    }

    pub fn icon_path(self) -> String {
        format!(
            "/assets/images/weapons/weapon_{}.png",
            self.label().to_lowercase()
        )
    }
}

/// One roster entry as served by `/api/characters`. The filter/selection core
/// treats every field except `id` as optional; records scraped from partial
/// sources can miss any of them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Character {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub element: Option<Element>,
    #[serde(default)]
    pub weapon: Option<WeaponKind>,
    #[serde(default)]
    pub rarity: Option<u8>,
    // Presentation-only pass-through fields.
    #[serde(default)]
    pub icon_url: Option<String>,
    #[serde(default)]
    pub element_icon_url: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description_bio: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub affiliation: Vec<String>,
    #[serde(default)]
    pub role: Vec<String>,
}

impl Character {
    /// Display name with a stable fallback for records missing one.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_full_record() {
        let json = r#"{
            "id": "amber",
            "name": "Amber",
            "element": "Pyro",
            "weapon": "Bow",
            "rarity": 4,
            "icon_url": "/assets/images/characters/amber.png"
        }"#;
        let c: Character = serde_json::from_str(json).unwrap();
        assert_eq!(c.name.as_deref(), Some("Amber"));
        assert_eq!(c.element, Some(Element::Pyro));
        assert_eq!(c.weapon, Some(WeaponKind::Bow));
        assert_eq!(c.rarity, Some(4));
    }

    #[test]
    fn tolerates_missing_fields() {
        let c: Character = serde_json::from_str(r#"{"id": "mystery"}"#).unwrap();
        assert_eq!(c.name, None);
        assert_eq!(c.element, None);
        assert_eq!(c.weapon, None);
        assert_eq!(c.rarity, None);
        assert_eq!(c.display_name(), "mystery");
    }

    #[test]
    fn unrecognized_element_string_becomes_unknown() {
        let c: Character =
            serde_json::from_str(r#"{"id": "x", "element": "Quantum"}"#).unwrap();
        assert_eq!(c.element, Some(Element::Unknown));
    }

    #[test]
    fn element_icon_paths_are_lowercase() {
        assert_eq!(
            Element::Pyro.icon_path(),
            "/assets/images/elements/element_pyro.png"
        );
        assert_eq!(
            WeaponKind::Claymore.icon_path(),
            "/assets/images/weapons/weapon_claymore.png"
        );
    }
}
