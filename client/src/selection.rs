use std::collections::HashSet;

use gloo_storage::Storage;
use leptos::prelude::*;

/// localStorage slot holding the persisted selection as a JSON array of ids.
pub(crate) const STORAGE_KEY: &str = "selectedCharacterIds";

/// Unordered set of selected character ids. Pure state; persistence is the
/// store's concern. Stale ids referencing removed characters are tolerated —
/// they simply never render.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    ids: HashSet<String>,
}

impl SelectionSet {
    pub fn from_ids(ids: impl IntoIterator<Item = String>) -> Self {
        Self {
            ids: ids.into_iter().collect(),
        }
    }

    /// Flip membership. Returns true when the id is now present.
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.ids.remove(id) {
            false
        } else {
            self.ids.insert(id.to_string());
            true
        }
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Snapshot for persistence and request payloads. Order is unspecified.
    pub fn to_vec(&self) -> Vec<String> {
        self.ids.iter().cloned().collect()
    }
}

/// Parse a persisted slot payload. `None` means the slot is malformed (not
/// JSON, or not an array of strings) and should be discarded.
pub fn decode_ids(raw: &str) -> Option<Vec<String>> {
    serde_json::from_str(raw).ok()
}

/// Process-wide selection state, built once at boot and shared via context.
/// Every mutation rewrites the full slot; writes are best-effort and the
/// in-memory set stays authoritative for the session when one fails.
/// Concurrent tabs writing the same slot are last-writer-wins.
#[derive(Clone, Copy)]
pub struct SelectionStore {
    selected: RwSignal<SelectionSet>,
}

impl SelectionStore {
    /// Initialize from the persisted slot. A missing slot starts empty; a
    /// malformed one is logged and removed so the same parse failure cannot
    /// recur on the next boot.
    pub fn load() -> Self {
        let ids = match gloo_storage::LocalStorage::raw().get_item(STORAGE_KEY) {
            Ok(Some(raw)) => match decode_ids(&raw) {
                Some(ids) => ids,
                None => {
                    web_sys::console::warn_1(
                        &format!("discarding corrupted '{STORAGE_KEY}' slot").into(),
                    );
                    gloo_storage::LocalStorage::delete(STORAGE_KEY);
                    Vec::new()
                }
            },
            _ => Vec::new(),
        };
        Self {
            selected: RwSignal::new(SelectionSet::from_ids(ids)),
        }
    }

    pub fn toggle(&self, id: &str) {
        self.selected.update(|set| {
            set.toggle(id);
        });
        self.persist();
    }

    pub fn clear(&self) {
        self.selected.update(SelectionSet::clear);
        self.persist();
    }

    /// Reactive membership query.
    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.with(|set| set.contains(id))
    }

    /// Reactive selection count.
    pub fn len(&self) -> usize {
        self.selected.with(|set| set.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Snapshot of the selected ids for request payloads.
    pub fn ids(&self) -> Vec<String> {
        self.selected.with_untracked(|set| set.to_vec())
    }

    fn persist(&self) {
        let ids = self.selected.with_untracked(|set| set.to_vec());
        let _ = gloo_storage::LocalStorage::set(STORAGE_KEY, &ids);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_membership() {
        let mut set = SelectionSet::default();
        assert!(set.toggle("x"));
        assert!(set.contains("x"));
        assert_eq!(set.len(), 1);
        assert!(!set.toggle("x"));
        assert!(!set.contains("x"));
        assert!(set.is_empty());
    }

    #[test]
    fn double_toggle_is_involution() {
        let mut set = SelectionSet::from_ids(["a".to_string(), "b".to_string()]);
        let before = set.clone();
        set.toggle("c");
        set.toggle("c");
        assert_eq!(set, before);
    }

    #[test]
    fn clear_empties_unconditionally() {
        let mut set = SelectionSet::from_ids(["a".to_string(), "b".to_string()]);
        set.clear();
        assert!(set.is_empty());
        set.clear();
        assert!(set.is_empty());
    }

    #[test]
    fn from_ids_deduplicates() {
        let set = SelectionSet::from_ids(["a".to_string(), "a".to_string()]);
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn persistence_round_trip_reproduces_set() {
        let mut set = SelectionSet::default();
        set.toggle("amber");
        set.toggle("klee");
        set.toggle("lisa");
        set.toggle("klee");

        let payload = serde_json::to_string(&set.to_vec()).unwrap();
        let reloaded = SelectionSet::from_ids(decode_ids(&payload).unwrap());
        assert_eq!(reloaded, set);
    }

    #[test]
    fn toggle_persists_exact_payload() {
        let mut set = SelectionSet::default();
        set.toggle("x");
        assert_eq!(serde_json::to_string(&set.to_vec()).unwrap(), r#"["x"]"#);
        set.toggle("x");
        assert_eq!(serde_json::to_string(&set.to_vec()).unwrap(), "[]");
    }

    #[test]
    fn malformed_slots_decode_to_none() {
        assert!(decode_ids("not-json").is_none());
        assert!(decode_ids(r#"{"a": 1}"#).is_none());
        assert!(decode_ids("[1, 2]").is_none());
        assert!(decode_ids("null").is_none());
    }

    #[test]
    fn well_formed_slots_decode() {
        assert_eq!(decode_ids("[]"), Some(Vec::new()));
        assert_eq!(
            decode_ids(r#"["a", "b"]"#),
            Some(vec!["a".to_string(), "b".to_string()])
        );
    }
}
