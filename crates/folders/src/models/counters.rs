//! Per-folder unread counters

use serde::{Deserialize, Serialize};

/// Unread counters for one folder
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FolderCounters {
    /// Number of chats with unread messages
    pub chats_count: u32,
    /// Number of unmuted unread notifications
    pub notifications_count: u32,
}

impl FolderCounters {
    pub fn new(chats_count: u32, notifications_count: u32) -> Self {
        Self {
            chats_count,
            notifications_count,
        }
    }

    /// Badge count, absent when there is nothing unread
    pub fn badge_count(&self) -> Option<u32> {
        (self.chats_count > 0).then_some(self.chats_count)
    }

    pub fn is_badge_active(&self) -> bool {
        self.notifications_count > 0
    }
}
