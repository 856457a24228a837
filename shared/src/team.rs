use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// One team composition returned by `/api/suggest-team` and
/// `/api/teams-for-character/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuggestedTeam {
    pub name: String,
    #[serde(default)]
    pub strategy: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub characters_in_team: Vec<TeamSlot>,
}

/// A character slot within a suggested team, with its recommended build.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamSlot {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub icon_url: Option<String>,
    #[serde(default)]
    pub role_in_team: Option<String>,
    #[serde(default)]
    pub build_details: Option<Build>,
}

impl TeamSlot {
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.id)
    }
}

/// A recommended build: artifacts, main stats, substats, weapons, talents.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Build {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub notes_build: Option<String>,
    #[serde(default)]
    pub artifacts: Vec<ArtifactChoice>,
    #[serde(default)]
    pub main_stats: Option<MainStats>,
    #[serde(default)]
    pub sub_stats_priority: Vec<String>,
    #[serde(default)]
    pub weapons: Vec<WeaponChoice>,
    #[serde(default)]
    pub talent_priority: Vec<String>,
}

/// One artifact recommendation inside a build. A "combo" entry stands for a
/// 2pc+2pc mix and carries the ids of both contributing sets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtifactChoice {
    #[serde(default)]
    pub set_id: Option<String>,
    #[serde(default)]
    pub set_name: Option<String>,
    #[serde(default)]
    pub set_name_display: Option<String>,
    #[serde(default)]
    pub pieces: Option<u8>,
    #[serde(default)]
    pub pieces_display: Option<String>,
    #[serde(default)]
    pub is_combo: bool,
    #[serde(default)]
    pub combo_set_ids: Vec<String>,
    #[serde(default)]
    pub icon_url: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl ArtifactChoice {
    pub fn display_name(&self) -> &str {
        self.set_name_display
            .as_deref()
            .or(self.set_name.as_deref())
            .unwrap_or("Unknown set")
    }

    pub fn display_pieces(&self) -> String {
        self.pieces_display
            .clone()
            .or_else(|| self.pieces.map(|p| p.to_string()))
            .unwrap_or_default()
    }

    pub fn is_valid_combo(&self) -> bool {
        self.is_combo && !self.combo_set_ids.is_empty()
    }
}

/// Recommended main stats per artifact slot.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MainStats {
    #[serde(default)]
    pub sands: Option<String>,
    #[serde(default)]
    pub goblet: Option<String>,
    #[serde(default)]
    pub circlet: Option<String>,
}

/// One weapon recommendation inside a build.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeaponChoice {
    #[serde(default)]
    pub weapon_id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub rarity: Option<u8>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub icon_url: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Artifact set record from `/api/artifacts-database`, used for tooltips.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtifactSet {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub icon_url: Option<String>,
    #[serde(default)]
    pub bonus_1pc: Option<String>,
    #[serde(default)]
    pub bonus_2pc: Option<String>,
    #[serde(default)]
    pub bonus_4pc: Option<String>,
}

/// Weapon record from `/api/weapons-database`, used for tooltips.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeaponInfo {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub icon_url: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub rarity: Option<u8>,
    #[serde(default)]
    pub base_atk_lv90: Option<String>,
    #[serde(default)]
    pub secondary_stat_type: Option<String>,
    #[serde(default)]
    pub secondary_stat_lv90: Option<String>,
    #[serde(default)]
    pub passive_name: Option<String>,
    #[serde(default)]
    pub passive_description_r1: Option<String>,
    #[serde(default)]
    pub source_category: Option<String>,
}

/// Index a list of records by id for tooltip lookup. Later duplicates win,
/// matching the original database reduce.
pub fn index_by_id<T>(items: Vec<T>, id_of: impl Fn(&T) -> &str) -> HashMap<String, T> {
    items
        .into_iter()
        .map(|item| (id_of(&item).to_string(), item))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_tolerates_sparse_payload() {
        let json = r#"{
            "name": "Main DPS",
            "artifacts": [{"set_id": "crimson_witch", "set_name": "Crimson Witch of Flames", "pieces": 4}],
            "sub_stats_priority": ["Crit Rate", "Crit DMG"]
        }"#;
        let build: Build = serde_json::from_str(json).unwrap();
        assert_eq!(build.artifacts.len(), 1);
        assert_eq!(build.artifacts[0].display_name(), "Crimson Witch of Flames");
        assert_eq!(build.artifacts[0].display_pieces(), "4");
        assert!(!build.artifacts[0].is_valid_combo());
        assert!(build.weapons.is_empty());
        assert!(build.main_stats.is_none());
    }

    #[test]
    fn combo_requires_set_ids() {
        let lone: ArtifactChoice =
            serde_json::from_str(r#"{"is_combo": true}"#).unwrap();
        assert!(!lone.is_valid_combo());

        let combo: ArtifactChoice = serde_json::from_str(
            r#"{"is_combo": true, "combo_set_ids": ["a", "b"], "pieces_display": "2+2"}"#,
        )
        .unwrap();
        assert!(combo.is_valid_combo());
        assert_eq!(combo.display_pieces(), "2+2");
    }

    #[test]
    fn index_by_id_keys_records() {
        let sets = vec![
            ArtifactSet {
                id: "a".into(),
                name: Some("Alpha".into()),
                icon_url: None,
                bonus_1pc: None,
                bonus_2pc: None,
                bonus_4pc: None,
            },
            ArtifactSet {
                id: "b".into(),
                name: Some("Beta".into()),
                icon_url: None,
                bonus_1pc: None,
                bonus_2pc: None,
                bonus_4pc: None,
            },
        ];
        let indexed = index_by_id(sets, |s| &s.id);
        assert_eq!(indexed.len(), 2);
        assert_eq!(indexed["b"].name.as_deref(), Some("Beta"));
    }

    #[test]
    fn weapon_info_maps_type_field() {
        let w: WeaponInfo = serde_json::from_str(
            r#"{"id": "mistsplitter", "name": "Mistsplitter Reforged", "type": "Sword", "rarity": 5}"#,
        )
        .unwrap();
        assert_eq!(w.kind.as_deref(), Some("Sword"));
        assert_eq!(w.rarity, Some(5));
    }
}
