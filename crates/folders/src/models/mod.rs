//! Domain models for folder entities
//!
//! All of these are read-only snapshots from the sidebar's point of view;
//! the store owns and mutates them.

mod counters;
mod folder;
mod limits;

pub use counters::FolderCounters;
pub use folder::{
    ALL_FOLDER_ID, FolderId, FolderInvite, FolderRecord, FormattedText, TextEntity,
    TextEntityKind,
};
pub use limits::{LimitKind, PlanLimits};
