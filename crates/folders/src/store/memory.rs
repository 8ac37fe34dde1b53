//! In-memory store implementation
//!
//! Backs the desktop app and the tests. State is seeded from a
//! [`StateFile`] or through the setters; dispatched actions are applied
//! in place and recorded.

use log::{debug, info};
use std::collections::BTreeMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::actions::{FolderAction, PendingModal};
use super::state_file::StateFile;
use super::traits::{ActionDispatcher, FolderState};
use crate::error::{FolderError, Result};
use crate::models::{FolderCounters, FolderId, FolderInvite, FolderRecord, PlanLimits};

/// In-memory implementation of [`FolderState`] and [`ActionDispatcher`]
///
/// Each field sits behind its own RwLock so readers of one part never
/// block writers of another.
pub struct InMemoryFolderStore {
    folders: RwLock<BTreeMap<FolderId, FolderRecord>>,
    ordered_ids: RwLock<Option<Vec<FolderId>>>,
    invites: RwLock<BTreeMap<FolderId, Vec<FolderInvite>>>,
    counters: RwLock<BTreeMap<FolderId, FolderCounters>>,
    limits: RwLock<PlanLimits>,
    active_folder: RwLock<usize>,
    /// Modal requested by the last dispatched action, until taken
    pending_modal: RwLock<Option<PendingModal>>,
    /// Every action dispatched so far, oldest first
    action_log: RwLock<Vec<FolderAction>>,
}

fn read<T>(lock: &RwLock<T>) -> Result<RwLockReadGuard<'_, T>> {
    lock.read().map_err(|_| FolderError::LockPoisoned)
}

fn write<T>(lock: &RwLock<T>) -> Result<RwLockWriteGuard<'_, T>> {
    lock.write().map_err(|_| FolderError::LockPoisoned)
}

impl InMemoryFolderStore {
    /// Create a new empty store with no folder order
    pub fn new() -> Self {
        Self {
            folders: RwLock::new(BTreeMap::new()),
            ordered_ids: RwLock::new(None),
            invites: RwLock::new(BTreeMap::new()),
            counters: RwLock::new(BTreeMap::new()),
            limits: RwLock::new(PlanLimits::default()),
            active_folder: RwLock::new(0),
            pending_modal: RwLock::new(None),
            action_log: RwLock::new(Vec::new()),
        }
    }

    /// Create a store seeded from a state file
    pub fn from_state(state: StateFile) -> Result<Self> {
        state.validate()?;
        let store = Self::new();
        *write(&store.folders)? = state.folders.into_iter().map(|f| (f.id, f)).collect();
        *write(&store.ordered_ids)? = state.ordered_ids;
        *write(&store.invites)? = state.invites;
        *write(&store.counters)? = state.counters;
        *write(&store.limits)? = state.limits;
        *write(&store.active_folder)? = state.active_folder;
        Ok(store)
    }

    /// Insert or replace a folder
    pub fn upsert_folder(&self, folder: FolderRecord) -> Result<()> {
        write(&self.folders)?.insert(folder.id, folder);
        Ok(())
    }

    /// Remove a folder and its order entry
    pub fn remove_folder(&self, id: FolderId) -> Result<Option<FolderRecord>> {
        let removed = write(&self.folders)?.remove(&id);
        if let Some(order) = write(&self.ordered_ids)?.as_mut() {
            order.retain(|&other| other != id);
        }
        write(&self.invites)?.remove(&id);
        write(&self.counters)?.remove(&id);
        Ok(removed)
    }

    pub fn set_ordered_ids(&self, ids: Option<Vec<FolderId>>) -> Result<()> {
        *write(&self.ordered_ids)? = ids;
        Ok(())
    }

    pub fn set_invites(&self, id: FolderId, invites: Vec<FolderInvite>) -> Result<()> {
        write(&self.invites)?.insert(id, invites);
        Ok(())
    }

    pub fn set_counters(&self, id: FolderId, counters: FolderCounters) -> Result<()> {
        write(&self.counters)?.insert(id, counters);
        Ok(())
    }

    pub fn set_limits(&self, limits: PlanLimits) -> Result<()> {
        *write(&self.limits)? = limits;
        Ok(())
    }

    /// Take the modal requested by the last action, clearing it
    pub fn take_modal(&self) -> Result<Option<PendingModal>> {
        Ok(write(&self.pending_modal)?.take())
    }

    /// Peek at the pending modal without clearing it
    pub fn pending_modal(&self) -> Result<Option<PendingModal>> {
        Ok(*read(&self.pending_modal)?)
    }

    /// All actions dispatched so far
    pub fn dispatched(&self) -> Result<Vec<FolderAction>> {
        Ok(read(&self.action_log)?.clone())
    }

    /// Export the current state
    pub fn to_state(&self) -> Result<StateFile> {
        Ok(StateFile {
            folders: read(&self.folders)?.values().cloned().collect(),
            ordered_ids: read(&self.ordered_ids)?.clone(),
            invites: read(&self.invites)?.clone(),
            counters: read(&self.counters)?.clone(),
            limits: read(&self.limits)?.clone(),
            active_folder: *read(&self.active_folder)?,
        })
    }
}

impl Default for InMemoryFolderStore {
    fn default() -> Self {
        Self::new()
    }
}

impl FolderState for InMemoryFolderStore {
    fn folders_by_id(&self) -> Result<BTreeMap<FolderId, FolderRecord>> {
        Ok(read(&self.folders)?.clone())
    }

    fn ordered_folder_ids(&self) -> Result<Option<Vec<FolderId>>> {
        Ok(read(&self.ordered_ids)?.clone())
    }

    fn invites_by_id(&self) -> Result<BTreeMap<FolderId, Vec<FolderInvite>>> {
        Ok(read(&self.invites)?.clone())
    }

    fn active_folder(&self) -> Result<usize> {
        Ok(*read(&self.active_folder)?)
    }

    fn counters_by_id(&self) -> Result<BTreeMap<FolderId, FolderCounters>> {
        Ok(read(&self.counters)?.clone())
    }

    fn plan_limits(&self) -> Result<PlanLimits> {
        Ok(read(&self.limits)?.clone())
    }
}

impl ActionDispatcher for InMemoryFolderStore {
    fn dispatch(&self, action: FolderAction) -> Result<()> {
        info!("Dispatching: {}", action);

        match &action {
            FolderAction::SetActiveFolder { index, .. } => {
                *write(&self.active_folder)? = *index;
            }
            other => {
                let modal = PendingModal::for_action(other);
                debug!("Pending modal: {:?}", modal);
                *write(&self.pending_modal)? = modal;
            }
        }

        write(&self.action_log)?.push(action);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ALL_FOLDER_ID, LimitKind};

    fn seeded() -> InMemoryFolderStore {
        let store = InMemoryFolderStore::new();
        store
            .upsert_folder(FolderRecord::new(7, "Work").with_included([1, 2]))
            .unwrap();
        store.upsert_folder(FolderRecord::new(8, "Bots")).unwrap();
        store
            .set_ordered_ids(Some(vec![ALL_FOLDER_ID, FolderId(7), FolderId(8)]))
            .unwrap();
        store
    }

    #[test]
    fn test_empty_store() {
        let store = InMemoryFolderStore::new();
        assert!(store.folders_by_id().unwrap().is_empty());
        assert!(store.ordered_folder_ids().unwrap().is_none());
        assert_eq!(store.active_folder().unwrap(), 0);
        assert_eq!(store.current_limit(LimitKind::DialogFilters).unwrap(), 10);
    }

    #[test]
    fn test_can_share_folder() {
        let store = seeded();
        assert!(store.can_share_folder(FolderId(7)).unwrap());
        assert!(!store.can_share_folder(FolderId(8)).unwrap());
        assert!(!store.can_share_folder(ALL_FOLDER_ID).unwrap());
        assert!(!store.can_share_folder(FolderId(99)).unwrap());
    }

    #[test]
    fn test_snapshot_collects_shareable() {
        let store = seeded();
        let snapshot = store.snapshot().unwrap();
        assert_eq!(snapshot.shareable.len(), 1);
        assert!(snapshot.shareable.contains(&FolderId(7)));
        assert_eq!(snapshot.max_folders, 10);
        assert_eq!(snapshot.max_chat_lists, 2);
        assert_eq!(snapshot.max_folder_invites, 3);
    }

    #[test]
    fn test_dispatch_set_active() {
        let store = seeded();
        store
            .dispatch(FolderAction::SetActiveFolder {
                index: 2,
                force_on_heavy_animation: true,
            })
            .unwrap();
        assert_eq!(store.active_folder().unwrap(), 2);
        assert!(store.pending_modal().unwrap().is_none());
    }

    #[test]
    fn test_dispatch_modal_is_taken_once() {
        let store = seeded();
        store
            .dispatch(FolderAction::OpenEditFolder {
                folder_id: FolderId(7),
            })
            .unwrap();
        assert_eq!(
            store.take_modal().unwrap(),
            Some(PendingModal::EditFolder(FolderId(7)))
        );
        assert_eq!(store.take_modal().unwrap(), None);
        assert_eq!(store.dispatched().unwrap().len(), 1);
    }

    #[test]
    fn test_remove_folder_updates_order() {
        let store = seeded();
        store.set_counters(FolderId(7), FolderCounters::new(1, 1)).unwrap();
        let removed = store.remove_folder(FolderId(7)).unwrap();
        assert!(removed.is_some());
        assert_eq!(
            store.ordered_folder_ids().unwrap(),
            Some(vec![ALL_FOLDER_ID, FolderId(8)])
        );
        assert!(store.counters_by_id().unwrap().is_empty());
    }

    #[test]
    fn test_state_roundtrip_through_store() {
        let store = seeded();
        let state = store.to_state().unwrap();
        let restored = InMemoryFolderStore::from_state(state.clone()).unwrap();
        assert_eq!(restored.to_state().unwrap(), state);
    }
}
