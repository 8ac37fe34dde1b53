//! Folder model representing a user-defined chat folder

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a folder
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FolderId(pub i32);

/// Reserved id of the synthesized "all chats" folder. Never persisted.
pub const ALL_FOLDER_ID: FolderId = FolderId(0);

impl FolderId {
    pub fn new(id: i32) -> Self {
        Self(id)
    }

    pub fn is_all_chats(self) -> bool {
        self == ALL_FOLDER_ID
    }
}

impl From<i32> for FolderId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

impl fmt::Display for FolderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Kind of an inline formatting span
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TextEntityKind {
    Bold,
    Italic,
    Underline,
    Strike,
    Code,
    Spoiler,
    CustomEmoji { document_id: String },
}

/// A formatting span over a piece of text
///
/// `offset` and `length` are measured in UTF-16 code units.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TextEntity {
    #[serde(flatten)]
    pub kind: TextEntityKind,
    pub offset: usize,
    pub length: usize,
}

impl TextEntity {
    pub fn new(kind: TextEntityKind, offset: usize, length: usize) -> Self {
        Self {
            kind,
            offset,
            length,
        }
    }

    /// End offset (exclusive), in UTF-16 code units
    pub fn end(&self) -> usize {
        self.offset.saturating_add(self.length)
    }
}

/// Text with inline formatting spans
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FormattedText {
    pub text: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub entities: Vec<TextEntity>,
}

impl FormattedText {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            entities: Vec::new(),
        }
    }

    pub fn with_entity(mut self, entity: TextEntity) -> Self {
        self.entities.push(entity);
        self
    }
}

impl From<&str> for FormattedText {
    fn from(text: &str) -> Self {
        Self::plain(text)
    }
}

/// A chat folder with its inclusion rules
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FolderRecord {
    pub id: FolderId,
    pub title: FormattedText,
    pub emoticon: Option<String>,
    pub included_chat_ids: Vec<i64>,
    pub excluded_chat_ids: Vec<i64>,
    pub pinned_chat_ids: Vec<i64>,
    pub contacts: bool,
    pub non_contacts: bool,
    pub groups: bool,
    pub channels: bool,
    pub bots: bool,
    pub exclude_muted: bool,
    pub exclude_read: bool,
    pub exclude_archived: bool,
    /// Folder is shared as a subscribable chat list
    pub is_chat_list: bool,
    pub has_my_invites: bool,
    /// Suppress custom emoji playback in the title
    pub no_title_animations: bool,
}

impl Default for FolderId {
    fn default() -> Self {
        ALL_FOLDER_ID
    }
}

impl FolderRecord {
    /// Create a folder with a plain title and no rules
    pub fn new(id: impl Into<FolderId>, title: impl Into<FormattedText>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            ..Default::default()
        }
    }

    /// The synthesized "all chats" folder with the given title
    pub fn all_chats(title: impl Into<String>) -> Self {
        Self::new(ALL_FOLDER_ID, FormattedText::plain(title))
    }

    pub fn with_included(mut self, chat_ids: impl IntoIterator<Item = i64>) -> Self {
        self.included_chat_ids = chat_ids.into_iter().collect();
        self
    }

    pub fn with_excluded(mut self, chat_ids: impl IntoIterator<Item = i64>) -> Self {
        self.excluded_chat_ids = chat_ids.into_iter().collect();
        self
    }

    pub fn with_pinned(mut self, chat_ids: impl IntoIterator<Item = i64>) -> Self {
        self.pinned_chat_ids = chat_ids.into_iter().collect();
        self
    }

    pub fn as_chat_list(mut self) -> Self {
        self.is_chat_list = true;
        self
    }

    /// Whether the folder selects chats by type rather than by explicit list
    pub fn has_type_filters(&self) -> bool {
        self.contacts || self.non_contacts || self.groups || self.channels || self.bots
    }

    /// Whether the folder hides chats by state
    pub fn has_exclude_flags(&self) -> bool {
        self.exclude_muted || self.exclude_read || self.exclude_archived
    }

    /// Whether this folder can be exported as a chat list link.
    ///
    /// Chat lists are always shareable. Other folders qualify only when they
    /// are defined purely by an explicit, non-empty set of chats.
    pub fn is_shareable(&self) -> bool {
        if self.id.is_all_chats() {
            return false;
        }
        if self.is_chat_list {
            return true;
        }
        !self.has_type_filters()
            && !self.has_exclude_flags()
            && self.excluded_chat_ids.is_empty()
            && (!self.pinned_chat_ids.is_empty() || !self.included_chat_ids.is_empty())
    }
}

/// An exported invite link for a shared folder
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FolderInvite {
    pub url: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub chat_ids: Vec<i64>,
}

impl FolderInvite {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            title: String::new(),
            chat_ids: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_chats_is_never_shareable() {
        let folder = FolderRecord::all_chats("All").with_included([1, 2]);
        assert!(!folder.is_shareable());
    }

    #[test]
    fn test_chat_list_is_shareable() {
        let mut folder = FolderRecord::new(3, "Team").as_chat_list();
        folder.bots = true;
        assert!(folder.is_shareable());
    }

    #[test]
    fn test_explicit_folder_is_shareable() {
        let folder = FolderRecord::new(4, "Work").with_included([10]);
        assert!(folder.is_shareable());

        let pinned_only = FolderRecord::new(5, "Pinned").with_pinned([11]);
        assert!(pinned_only.is_shareable());
    }

    #[test]
    fn test_rule_based_folder_is_not_shareable() {
        let empty = FolderRecord::new(6, "Empty");
        assert!(!empty.is_shareable());

        let mut typed = FolderRecord::new(7, "Bots").with_included([1]);
        typed.bots = true;
        assert!(!typed.is_shareable());

        let mut unread = FolderRecord::new(8, "Unread").with_included([1]);
        unread.exclude_read = true;
        assert!(!unread.is_shareable());

        let excluding = FolderRecord::new(9, "Some").with_included([1]).with_excluded([2]);
        assert!(!excluding.is_shareable());
    }

    #[test]
    fn test_parse_folder_json() {
        let json = r#"{
            "id": 7,
            "title": { "text": "Work", "entities": [{ "type": "bold", "offset": 0, "length": 4 }] },
            "includedChatIds": [1, 2],
            "isChatList": true
        }"#;
        let folder: FolderRecord = serde_json::from_str(json).unwrap();
        assert_eq!(folder.id, FolderId(7));
        assert_eq!(folder.title.entities[0].kind, TextEntityKind::Bold);
        assert_eq!(folder.included_chat_ids, vec![1, 2]);
        assert!(folder.is_chat_list);
        assert!(folder.excluded_chat_ids.is_empty());
    }
}
