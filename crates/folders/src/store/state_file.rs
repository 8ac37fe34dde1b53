//! JSON seed file for the in-memory store

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::path::Path;

use crate::error::{FolderError, Result};
use crate::models::{FolderCounters, FolderId, FolderInvite, FolderRecord, PlanLimits};

/// Serialized folder state used to seed a store
///
/// ```json
/// {
///   "folders": [{ "id": 7, "title": { "text": "Work" }, "includedChatIds": [1] }],
///   "orderedIds": [0, 7],
///   "counters": { "7": { "chatsCount": 2, "notificationsCount": 1 } }
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StateFile {
    pub folders: Vec<FolderRecord>,
    pub ordered_ids: Option<Vec<FolderId>>,
    pub invites: BTreeMap<FolderId, Vec<FolderInvite>>,
    pub counters: BTreeMap<FolderId, FolderCounters>,
    pub limits: PlanLimits,
    pub active_folder: usize,
}

impl StateFile {
    /// Load and validate a state file
    pub fn load(path: &Path) -> Result<Self> {
        let state: StateFile = config::load_json_file(path)?;
        state.validate()?;
        Ok(state)
    }

    /// Parse and validate state from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        let state: StateFile =
            serde_json::from_str(json).map_err(|e| FolderError::InvalidState(e.to_string()))?;
        state.validate()?;
        Ok(state)
    }

    /// Check id uniqueness. Ordered ids may reference unknown folders.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for folder in &self.folders {
            if folder.id.is_all_chats() {
                return Err(FolderError::InvalidState(format!(
                    "folder id {} is reserved",
                    folder.id
                )));
            }
            if !seen.insert(folder.id) {
                return Err(FolderError::InvalidState(format!(
                    "duplicate folder id {}",
                    folder.id
                )));
            }
        }

        let mut ordered = HashSet::new();
        for id in self.ordered_ids.iter().flatten() {
            if !ordered.insert(*id) {
                return Err(FolderError::InvalidState(format!(
                    "folder id {} appears twice in the order",
                    id
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LimitKind;

    #[test]
    fn test_parse_state_file() {
        let json = r#"{
            "folders": [{ "id": 7, "title": { "text": "Work" } }],
            "orderedIds": [0, 7],
            "invites": { "7": [{ "url": "https://t.me/addlist/abc" }] },
            "counters": { "7": { "chatsCount": 3 } },
            "limits": { "isPremium": true }
        }"#;
        let state = StateFile::from_json(json).unwrap();
        assert_eq!(state.folders.len(), 1);
        assert_eq!(state.ordered_ids, Some(vec![FolderId(0), FolderId(7)]));
        assert_eq!(state.invites[&FolderId(7)].len(), 1);
        assert_eq!(state.counters[&FolderId(7)].chats_count, 3);
        assert_eq!(state.limits.current(LimitKind::DialogFilters), 30);
        assert_eq!(state.active_folder, 0);
    }

    #[test]
    fn test_missing_order_is_none() {
        let state = StateFile::from_json("{}").unwrap();
        assert!(state.ordered_ids.is_none());
    }

    #[test]
    fn test_duplicate_folder_rejected() {
        let json = r#"{ "folders": [{ "id": 7 }, { "id": 7 }] }"#;
        assert!(matches!(StateFile::from_json(json), Err(FolderError::InvalidState(_))));
    }

    #[test]
    fn test_duplicate_order_rejected() {
        let json = r#"{ "orderedIds": [0, 7, 7] }"#;
        assert!(matches!(StateFile::from_json(json), Err(FolderError::InvalidState(_))));
    }

    #[test]
    fn test_reserved_id_rejected() {
        let json = r#"{ "folders": [{ "id": 0, "title": { "text": "All" } }] }"#;
        assert!(StateFile::from_json(json).is_err());
    }

    #[test]
    fn test_load_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");
        std::fs::write(&path, r#"{ "orderedIds": [0] }"#).unwrap();
        let state = StateFile::load(&path).unwrap();
        assert_eq!(state.ordered_ids, Some(vec![FolderId(0)]));
    }
}
