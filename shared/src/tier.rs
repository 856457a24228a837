use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Consolidated tier rank. Ordering is by strength: SS highest, D lowest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TierLevel {
    SS,
    S,
    A,
    B,
    C,
    D,
}

impl TierLevel {
    /// Display order on the tier list page, strongest first.
    pub const DISPLAY_ORDER: [TierLevel; 6] = [
        TierLevel::SS,
        TierLevel::S,
        TierLevel::A,
        TierLevel::B,
        TierLevel::C,
        TierLevel::D,
    ];

    /// Numeric rank used for sorting; higher is stronger.
    pub fn rank(self) -> u8 {
        match self {
            TierLevel::SS => 5,
            TierLevel::S => 4,
            TierLevel::A => 3,
            TierLevel::B => 2,
            TierLevel::C => 1,
            TierLevel::D => 0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TierLevel::SS => "SS",
            TierLevel::S => "S",
            TierLevel::A => "A",
            TierLevel::B => "B",
            TierLevel::C => "C",
            TierLevel::D => "D",
        }
    }

    /// Bucket an aggregated numeric score into a display tier.
    pub fn from_average(score: f64) -> TierLevel {
        if score >= 4.5 {
            TierLevel::SS
        } else if score >= 3.5 {
            TierLevel::S
        } else if score >= 2.5 {
            TierLevel::A
        } else if score >= 1.5 {
            TierLevel::B
        } else if score >= 0.5 {
            TierLevel::C
        } else {
            TierLevel::D
        }
    }
}

/// One character row from `/api/tierlist`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TierEntry {
    pub character_id: String,
    #[serde(default)]
    pub character_name: Option<String>,
    pub tier_level: TierLevel,
    #[serde(default)]
    pub element: Option<String>,
    #[serde(default)]
    pub rarity: Option<u8>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub average_numeric_tier: Option<f64>,
    #[serde(default)]
    pub original_scores_by_site: HashMap<String, String>,
    #[serde(default)]
    pub sources_contributing: Option<u32>,
}

impl TierEntry {
    pub fn display_name(&self) -> &str {
        self.character_name.as_deref().unwrap_or(&self.character_id)
    }
}

/// Sort entries for display: tier rank descending, then name ascending.
pub fn sort_entries(entries: &mut [TierEntry]) {
    entries.sort_by(|a, b| {
        b.tier_level
            .rank()
            .cmp(&a.tier_level.rank())
            .then_with(|| a.display_name().cmp(b.display_name()))
    });
}

/// Group sorted entries into non-empty tier sections in display order.
pub fn group_by_tier(entries: &[TierEntry]) -> Vec<(TierLevel, Vec<TierEntry>)> {
    TierLevel::DISPLAY_ORDER
        .iter()
        .filter_map(|&tier| {
            let members: Vec<TierEntry> = entries
                .iter()
                .filter(|e| e.tier_level == tier)
                .cloned()
                .collect();
            if members.is_empty() {
                None
            } else {
                Some((tier, members))
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: &str, name: &str, tier: TierLevel) -> TierEntry {
        TierEntry {
            character_id: id.into(),
            character_name: Some(name.into()),
            tier_level: tier,
            element: None,
            rarity: None,
            role: None,
            average_numeric_tier: None,
            original_scores_by_site: HashMap::new(),
            sources_contributing: None,
        }
    }

    #[test]
    fn sorts_by_rank_then_name() {
        let mut entries = vec![
            entry("c", "Lisa", TierLevel::A),
            entry("b", "Klee", TierLevel::SS),
            entry("a", "Amber", TierLevel::A),
        ];
        sort_entries(&mut entries);
        let names: Vec<&str> = entries.iter().map(|e| e.display_name()).collect();
        assert_eq!(names, vec!["Klee", "Amber", "Lisa"]);
    }

    #[test]
    fn grouping_skips_empty_tiers_and_keeps_order() {
        let mut entries = vec![
            entry("a", "Amber", TierLevel::C),
            entry("b", "Klee", TierLevel::SS),
            entry("c", "Lisa", TierLevel::C),
        ];
        sort_entries(&mut entries);
        let groups = group_by_tier(&entries);
        let tiers: Vec<TierLevel> = groups.iter().map(|(t, _)| *t).collect();
        assert_eq!(tiers, vec![TierLevel::SS, TierLevel::C]);
        assert_eq!(groups[1].1.len(), 2);
        assert_eq!(groups[1].1[0].display_name(), "Amber");
    }

    #[test]
    fn average_score_buckets() {
        assert_eq!(TierLevel::from_average(4.9), TierLevel::SS);
        assert_eq!(TierLevel::from_average(4.5), TierLevel::SS);
        assert_eq!(TierLevel::from_average(3.6), TierLevel::S);
        assert_eq!(TierLevel::from_average(2.5), TierLevel::A);
        assert_eq!(TierLevel::from_average(0.4), TierLevel::D);
    }

    #[test]
    fn deserializes_tier_row() {
        let json = r#"{
            "character_id": "klee",
            "character_name": "Klee",
            "tier_level": "SS",
            "element": "Pyro",
            "rarity": 5,
            "average_numeric_tier": 4.7,
            "original_scores_by_site": {"site_one": "SS", "site_two": "S"},
            "sources_contributing": 2
        }"#;
        let e: TierEntry = serde_json::from_str(json).unwrap();
        assert_eq!(e.tier_level, TierLevel::SS);
        assert_eq!(e.original_scores_by_site.len(), 2);
    }
}
