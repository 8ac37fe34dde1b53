//! Store trait definitions

use std::collections::{BTreeMap, BTreeSet};

use super::actions::FolderAction;
use crate::error::Result;
use crate::models::{FolderCounters, FolderId, FolderInvite, FolderRecord, LimitKind, PlanLimits};
use crate::projector::FolderSnapshot;

/// Read-only access to folder state
///
/// Implementations own the data; callers get per-call snapshots.
pub trait FolderState: Send + Sync {
    /// All known folders keyed by id
    fn folders_by_id(&self) -> Result<BTreeMap<FolderId, FolderRecord>>;

    /// Display order of folders, `None` until the order is known
    fn ordered_folder_ids(&self) -> Result<Option<Vec<FolderId>>>;

    /// Exported invite links per folder
    fn invites_by_id(&self) -> Result<BTreeMap<FolderId, Vec<FolderInvite>>>;

    /// Index of the active folder tab
    fn active_folder(&self) -> Result<usize>;

    /// Unread counters per folder
    fn counters_by_id(&self) -> Result<BTreeMap<FolderId, FolderCounters>>;

    /// Quotas for the current user
    fn plan_limits(&self) -> Result<PlanLimits>;

    /// Current value of one quota
    fn current_limit(&self, kind: LimitKind) -> Result<usize> {
        Ok(self.plan_limits()?.current(kind))
    }

    /// Whether the user may export this folder as a chat list
    fn can_share_folder(&self, id: FolderId) -> Result<bool> {
        Ok(self
            .folders_by_id()?
            .get(&id)
            .is_some_and(FolderRecord::is_shareable))
    }

    /// Gather everything the folder list projection depends on
    fn snapshot(&self) -> Result<FolderSnapshot> {
        let ordered_ids = self.ordered_folder_ids()?;
        let folders_by_id = self.folders_by_id()?;
        let shareable: BTreeSet<_> = ordered_ids
            .iter()
            .flatten()
            .copied()
            .filter(|id| folders_by_id.get(id).is_some_and(FolderRecord::is_shareable))
            .collect();

        Ok(FolderSnapshot {
            folders_by_id,
            ordered_ids,
            invites_by_id: self.invites_by_id()?,
            counters_by_id: self.counters_by_id()?,
            shareable,
            max_folders: self.current_limit(LimitKind::DialogFilters)?,
            max_chat_lists: self.current_limit(LimitKind::ChatlistJoined)?,
            max_folder_invites: self.current_limit(LimitKind::ChatlistInvites)?,
        })
    }
}

/// Sink for actions requested by the sidebar
pub trait ActionDispatcher: Send + Sync {
    fn dispatch(&self, action: FolderAction) -> Result<()>;
}
