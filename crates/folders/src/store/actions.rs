//! Actions the sidebar dispatches into the store

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::{FolderId, LimitKind};

/// A request from the sidebar to the store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FolderAction {
    /// Switch the visible folder tab
    SetActiveFolder {
        index: usize,
        /// Run the switch even while heavy animations are in progress
        force_on_heavy_animation: bool,
    },
    OpenShareFolderModal {
        folder_id: FolderId,
    },
    OpenDeleteFolderModal {
        folder_id: FolderId,
    },
    OpenEditFolder {
        folder_id: FolderId,
    },
    OpenLimitReachedModal {
        limit: LimitKind,
    },
}

impl fmt::Display for FolderAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FolderAction::SetActiveFolder { index, .. } => write!(f, "set active folder {}", index),
            FolderAction::OpenShareFolderModal { folder_id } => {
                write!(f, "open share modal for folder {}", folder_id)
            }
            FolderAction::OpenDeleteFolderModal { folder_id } => {
                write!(f, "open delete modal for folder {}", folder_id)
            }
            FolderAction::OpenEditFolder { folder_id } => write!(f, "edit folder {}", folder_id),
            FolderAction::OpenLimitReachedModal { limit } => {
                write!(f, "open limit reached modal ({})", limit)
            }
        }
    }
}

/// A modal surface requested by a dispatched action and not yet shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingModal {
    ShareFolder(FolderId),
    DeleteFolder(FolderId),
    EditFolder(FolderId),
    LimitReached(LimitKind),
}

impl PendingModal {
    /// Modal requested by an action, if any
    pub fn for_action(action: &FolderAction) -> Option<Self> {
        match *action {
            FolderAction::SetActiveFolder { .. } => None,
            FolderAction::OpenShareFolderModal { folder_id } => Some(Self::ShareFolder(folder_id)),
            FolderAction::OpenDeleteFolderModal { folder_id } => {
                Some(Self::DeleteFolder(folder_id))
            }
            FolderAction::OpenEditFolder { folder_id } => Some(Self::EditFolder(folder_id)),
            FolderAction::OpenLimitReachedModal { limit } => Some(Self::LimitReached(limit)),
        }
    }
}
