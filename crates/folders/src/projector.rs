//! Folder list projection
//!
//! Turns a [`FolderSnapshot`] into the ordered tab view models the sidebar
//! renders: the synthesized "all chats" folder, titles with their emoji
//! pulled out, unread badges, plan-limit blocking and context actions.
//!
//! [`project_folders`] is pure. [`FolderListProjector`] adds a single-entry
//! cache in front of it; output is identical with or without the cache.

use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::hash::{DefaultHasher, Hash, Hasher};

use crate::error::Result;
use crate::lang::Lang;
use crate::models::{
    ALL_FOLDER_ID, FolderCounters, FolderId, FolderInvite, FolderRecord, LimitKind,
};
use crate::store::{ActionDispatcher, FolderAction};
use crate::text::{EmojiIcon, RenderOptions, TitleNode, render_text_with_entities, split_emoji};

/// Everything the projection reads from the store
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct FolderSnapshot {
    pub folders_by_id: BTreeMap<FolderId, FolderRecord>,
    pub ordered_ids: Option<Vec<FolderId>>,
    pub invites_by_id: BTreeMap<FolderId, Vec<FolderInvite>>,
    pub counters_by_id: BTreeMap<FolderId, FolderCounters>,
    /// Folders the user may export as chat lists
    pub shareable: BTreeSet<FolderId>,
    pub max_folders: usize,
    pub max_chat_lists: usize,
    pub max_folder_invites: usize,
}

impl FolderSnapshot {
    /// Number of folders already shared as chat lists
    pub fn chat_list_count(&self) -> usize {
        self.folders_by_id.values().filter(|f| f.is_chat_list).count()
    }

    /// Number of exported invite links for a folder
    pub fn invite_count(&self, id: FolderId) -> usize {
        self.invites_by_id.get(&id).map_or(0, Vec::len)
    }

    pub fn is_chat_list(&self, id: FolderId) -> bool {
        self.folders_by_id.get(&id).is_some_and(|f| f.is_chat_list)
    }

    fn cache_key(&self, lang: &Lang) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.hash(&mut hasher);
        lang.fingerprint().hash(&mut hasher);
        hasher.finish()
    }
}

/// Icon shown next to a context menu entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionIcon {
    Link,
    Edit,
    Delete,
}

/// What a context menu entry does when chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FolderCommand {
    Share { folder_id: FolderId },
    Edit { folder_id: FolderId },
    Delete { folder_id: FolderId },
}

/// An entry of a folder tab's context menu
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ContextAction {
    Separator {
        key: String,
    },
    Action {
        label: String,
        icon: ActionIcon,
        destructive: bool,
        /// `None` renders the entry disabled
        command: Option<FolderCommand>,
    },
}

impl ContextAction {
    /// Command to run when chosen, if the entry is actionable
    pub fn command(&self) -> Option<FolderCommand> {
        match self {
            ContextAction::Separator { .. } => None,
            ContextAction::Action { command, .. } => *command,
        }
    }
}

/// Display-ready state of one folder tab
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FolderViewModel {
    pub id: FolderId,
    /// Title nodes with the extracted emoji removed
    pub title: Vec<TitleNode>,
    pub emoji: EmojiIcon,
    pub badge_count: Option<u32>,
    pub is_badge_active: bool,
    /// Folder sits beyond the user's folder quota
    pub is_blocked: bool,
    /// `None` when the folder has no context actions
    pub context_actions: Option<Vec<ContextAction>>,
}

/// The synthesized "all chats" folder.
///
/// It takes the short label when it leads the order, the long one
/// otherwise.
pub fn all_chats_folder(ordered_ids: Option<&[FolderId]>, lang: &Lang) -> FolderRecord {
    let leads = ordered_ids.and_then(|ids| ids.first()) == Some(&ALL_FOLDER_ID);
    let key = if leads {
        "FilterAllChatsShort"
    } else {
        "FilterAllChats"
    };
    FolderRecord::all_chats(lang.get(key))
}

/// Project a snapshot into tab view models.
///
/// Returns `None` when no order is known or the order is empty. Ids
/// without a record become untitled placeholders with no actions.
pub fn project_folders(snapshot: &FolderSnapshot, lang: &Lang) -> Option<Vec<FolderViewModel>> {
    let ordered_ids = snapshot.ordered_ids.as_deref()?;
    if ordered_ids.is_empty() {
        return None;
    }

    let all_chats = all_chats_folder(Some(ordered_ids), lang);

    let folders = ordered_ids
        .iter()
        .enumerate()
        .map(|(position, &id)| {
            if id.is_all_chats() {
                return project_folder(&all_chats, position, snapshot, lang, true);
            }
            match snapshot.folders_by_id.get(&id) {
                Some(record) => project_folder(record, position, snapshot, lang, true),
                None => {
                    debug!("Folder {} missing from state, using placeholder", id);
                    let placeholder = FolderRecord::new(id, "");
                    project_folder(&placeholder, position, snapshot, lang, false)
                }
            }
        })
        .collect();

    Some(folders)
}

fn project_folder(
    folder: &FolderRecord,
    position: usize,
    snapshot: &FolderSnapshot,
    lang: &Lang,
    with_actions: bool,
) -> FolderViewModel {
    let id = folder.id;
    let is_blocked = !id.is_all_chats() && position >= snapshot.max_folders;

    let nodes = render_text_with_entities(
        &folder.title.text,
        &folder.title.entities,
        RenderOptions {
            no_custom_emoji_playback: folder.no_title_animations,
        },
    );
    let (emoji, title) = extract_emoji(nodes);
    let emoji = emoji
        .or_else(|| folder.emoticon.as_deref().and_then(emoticon_icon))
        .unwrap_or_default();

    let context_actions = if with_actions {
        Some(context_actions(id, snapshot, lang)).filter(|actions| !actions.is_empty())
    } else {
        None
    };

    let counters = snapshot.counters_by_id.get(&id);

    FolderViewModel {
        id,
        title,
        emoji,
        badge_count: counters.and_then(FolderCounters::badge_count),
        is_badge_active: counters.is_some_and(FolderCounters::is_badge_active),
        is_blocked,
        context_actions,
    }
}

fn context_actions(id: FolderId, snapshot: &FolderSnapshot, lang: &Lang) -> Vec<ContextAction> {
    let mut actions = Vec::new();

    if snapshot.shareable.contains(&id) {
        actions.push(ContextAction::Action {
            label: lang.get("FilterShare"),
            icon: ActionIcon::Link,
            destructive: false,
            command: Some(FolderCommand::Share { folder_id: id }),
        });
    }

    if !id.is_all_chats() {
        actions.push(ContextAction::Action {
            label: lang.get("FilterEdit"),
            icon: ActionIcon::Edit,
            destructive: false,
            command: Some(FolderCommand::Edit { folder_id: id }),
        });
        actions.push(ContextAction::Action {
            label: lang.get("FilterDelete"),
            icon: ActionIcon::Delete,
            destructive: true,
            command: Some(FolderCommand::Delete { folder_id: id }),
        });
    }

    actions
}

/// Remove the first emoji node (depth-first) from a title.
///
/// Formatting nodes left empty by the removal are dropped too.
pub fn extract_emoji(nodes: Vec<TitleNode>) -> (Option<EmojiIcon>, Vec<TitleNode>) {
    let mut found = None;
    let title = take_first_emoji(nodes, &mut found);
    (found, title)
}

fn take_first_emoji(nodes: Vec<TitleNode>, found: &mut Option<EmojiIcon>) -> Vec<TitleNode> {
    let mut out = Vec::with_capacity(nodes.len());
    for node in nodes {
        if found.is_some() {
            out.push(node);
            continue;
        }
        match node {
            TitleNode::Emoji(icon) => *found = Some(icon),
            TitleNode::Formatted { kind, children } => {
                let had_children = !children.is_empty();
                let children = take_first_emoji(children, found);
                if !had_children || !children.is_empty() {
                    out.push(TitleNode::Formatted { kind, children });
                }
            }
            other => out.push(other),
        }
    }
    out
}

fn emoticon_icon(emoticon: &str) -> Option<EmojiIcon> {
    match split_emoji(emoticon).as_slice() {
        [crate::text::EmojiSegment::Emoji(e)] => Some(EmojiIcon::from_native(e)),
        _ => None,
    }
}

/// Run a context menu command against the current state.
///
/// Sharing is guarded by two quotas: the number of shared chat lists
/// (only when this folder is not one yet) and the number of invite links
/// the folder already has. A breached quota opens the limit-reached modal
/// instead. Returns the action that was dispatched.
pub fn execute_command(
    command: FolderCommand,
    snapshot: &FolderSnapshot,
    dispatcher: &dyn ActionDispatcher,
) -> Result<FolderAction> {
    let action = match command {
        FolderCommand::Share { folder_id } => {
            if snapshot.chat_list_count() >= snapshot.max_chat_lists
                && !snapshot.is_chat_list(folder_id)
            {
                info!(
                    "Share of folder {} blocked: {} chat lists, limit {}",
                    folder_id,
                    snapshot.chat_list_count(),
                    snapshot.max_chat_lists
                );
                FolderAction::OpenLimitReachedModal {
                    limit: LimitKind::ChatlistJoined,
                }
            } else if snapshot.invite_count(folder_id) >= snapshot.max_folder_invites {
                // Counts above the limit are possible after a plan downgrade
                info!(
                    "Share of folder {} blocked: {} invites, limit {}",
                    folder_id,
                    snapshot.invite_count(folder_id),
                    snapshot.max_folder_invites
                );
                FolderAction::OpenLimitReachedModal {
                    limit: LimitKind::ChatlistInvites,
                }
            } else {
                FolderAction::OpenShareFolderModal { folder_id }
            }
        }
        FolderCommand::Edit { folder_id } => FolderAction::OpenEditFolder { folder_id },
        FolderCommand::Delete { folder_id } => FolderAction::OpenDeleteFolderModal { folder_id },
    };

    dispatcher.dispatch(action.clone())?;
    Ok(action)
}

/// Switch to the tab at `index`
pub fn switch_tab(index: usize, dispatcher: &dyn ActionDispatcher) -> Result<()> {
    dispatcher.dispatch(FolderAction::SetActiveFolder {
        index,
        force_on_heavy_animation: true,
    })
}

/// Caching front for [`project_folders`]
///
/// Keeps the last result with the snapshot and language pack it was
/// computed from. The hash only short-circuits the comparison; a hit
/// requires both inputs to be equal.
#[derive(Debug, Default)]
pub struct FolderListProjector {
    cached: Option<CachedProjection>,
    hits: u64,
    misses: u64,
}

#[derive(Debug)]
struct CachedProjection {
    key: u64,
    snapshot: FolderSnapshot,
    lang: Lang,
    folders: Option<Vec<FolderViewModel>>,
}

impl CachedProjection {
    fn matches(&self, key: u64, snapshot: &FolderSnapshot, lang: &Lang) -> bool {
        self.key == key && self.snapshot == *snapshot && self.lang == *lang
    }
}

impl FolderListProjector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn project(&mut self, snapshot: &FolderSnapshot, lang: &Lang) -> Option<Vec<FolderViewModel>> {
        let key = snapshot.cache_key(lang);
        if let Some(cached) = &self.cached {
            if cached.matches(key, snapshot, lang) {
                self.hits += 1;
                debug!("Folder projection cache hit ({} hits)", self.hits);
                return cached.folders.clone();
            }
        }

        self.misses += 1;
        debug!("Folder projection cache miss ({} misses)", self.misses);
        let folders = project_folders(snapshot, lang);
        self.cached = Some(CachedProjection {
            key,
            snapshot: snapshot.clone(),
            lang: lang.clone(),
            folders: folders.clone(),
        });
        folders
    }

    pub fn hits(&self) -> u64 {
        self.hits
    }

    pub fn misses(&self) -> u64 {
        self.misses
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::TextDirection;
    use crate::models::{TextEntity, TextEntityKind};
    use crate::text::plain_text;

    fn lang() -> Lang {
        Lang::from_strings(
            "en",
            TextDirection::Ltr,
            [
                ("FilterAllChatsShort", "All"),
                ("FilterAllChats", "All Chats"),
                ("FilterShare", "Share"),
                ("FilterEdit", "Edit Folder"),
                ("FilterDelete", "Delete Folder"),
            ],
        )
    }

    fn snapshot(order: &[i32], max_folders: usize) -> FolderSnapshot {
        let mut folders_by_id = BTreeMap::new();
        folders_by_id.insert(FolderId(7), FolderRecord::new(7, "Work"));
        FolderSnapshot {
            folders_by_id,
            ordered_ids: Some(order.iter().copied().map(FolderId).collect()),
            max_folders,
            max_chat_lists: 2,
            max_folder_invites: 3,
            ..Default::default()
        }
    }

    #[test]
    fn test_work_folder_scenario() {
        let folders = project_folders(&snapshot(&[0, 7], 2), &lang()).unwrap();
        assert_eq!(folders.len(), 2);
        assert_eq!(folders[0].id, ALL_FOLDER_ID);
        assert_eq!(plain_text(&folders[0].title), "All");
        assert!(!folders[0].is_blocked);
        assert_eq!(folders[1].id, FolderId(7));
        assert_eq!(plain_text(&folders[1].title), "Work");
        assert!(!folders[1].is_blocked);
    }

    #[test]
    fn test_folder_beyond_limit_is_blocked() {
        let folders = project_folders(&snapshot(&[0, 7], 1), &lang()).unwrap();
        assert!(!folders[0].is_blocked);
        assert!(folders[1].is_blocked);
    }

    #[test]
    fn test_all_chats_never_blocked() {
        let folders = project_folders(&snapshot(&[7, 0], 0), &lang()).unwrap();
        assert!(folders[0].is_blocked);
        assert!(!folders[1].is_blocked);
    }

    #[test]
    fn test_all_chats_long_label_when_not_first() {
        let folders = project_folders(&snapshot(&[7, 0], 10), &lang()).unwrap();
        assert_eq!(plain_text(&folders[1].title), "All Chats");
        assert_eq!(
            all_chats_folder(None, &lang()).title.text,
            "All Chats"
        );
    }

    #[test]
    fn test_no_order_yields_none() {
        let mut snap = snapshot(&[], 10);
        assert!(project_folders(&snap, &lang()).is_none());
        snap.ordered_ids = None;
        assert!(project_folders(&snap, &lang()).is_none());
    }

    #[test]
    fn test_missing_record_degrades_to_placeholder() {
        let folders = project_folders(&snapshot(&[0, 42], 10), &lang()).unwrap();
        assert_eq!(folders[1].id, FolderId(42));
        assert!(folders[1].title.is_empty());
        assert_eq!(folders[1].emoji, EmojiIcon::default_folder());
        assert!(folders[1].context_actions.is_none());
    }

    #[test]
    fn test_emoji_extracted_from_title() {
        let mut snap = snapshot(&[7], 10);
        snap.folders_by_id
            .insert(FolderId(7), FolderRecord::new(7, "💼 Work"));
        let folders = project_folders(&snap, &lang()).unwrap();
        assert_eq!(folders[0].emoji.alt, "💼");
        assert_eq!(folders[0].emoji.src, "./img-apple-64/1f4bc.png");
        assert_eq!(plain_text(&folders[0].title), " Work");
    }

    #[test]
    fn test_first_emoji_wins() {
        let nodes = render_text_with_entities("🔥a💼", &[], RenderOptions::default());
        let (emoji, rest) = extract_emoji(nodes);
        assert_eq!(emoji.unwrap().alt, "🔥");
        assert_eq!(plain_text(&rest), "a💼");
    }

    #[test]
    fn test_emoji_inside_formatting() {
        let nodes = render_text_with_entities(
            "💼 Work",
            &[TextEntity::new(TextEntityKind::Bold, 0, 2)],
            RenderOptions::default(),
        );
        let (emoji, rest) = extract_emoji(nodes);
        assert_eq!(emoji.unwrap().alt, "💼");
        // The bold node held only the emoji and is gone
        assert_eq!(rest, vec![TitleNode::text(" Work")]);
    }

    #[test]
    fn test_title_without_emoji_unchanged() {
        let nodes = render_text_with_entities("Work", &[], RenderOptions::default());
        let (emoji, rest) = extract_emoji(nodes.clone());
        assert!(emoji.is_none());
        assert_eq!(rest, nodes);
    }

    #[test]
    fn test_emoticon_fallback() {
        let mut snap = snapshot(&[7], 10);
        let mut folder = FolderRecord::new(7, "Work");
        folder.emoticon = Some("🤖".to_string());
        snap.folders_by_id.insert(FolderId(7), folder);
        let folders = project_folders(&snap, &lang()).unwrap();
        assert_eq!(folders[0].emoji.alt, "🤖");
    }

    #[test]
    fn test_context_actions() {
        let mut snap = snapshot(&[0, 7], 10);
        let folders = project_folders(&snap, &lang()).unwrap();
        assert!(folders[0].context_actions.is_none());
        let actions = folders[1].context_actions.as_ref().unwrap();
        assert_eq!(actions.len(), 2);
        assert!(matches!(
            &actions[1],
            ContextAction::Action { destructive: true, icon: ActionIcon::Delete, .. }
        ));

        snap.shareable.insert(FolderId(7));
        let folders = project_folders(&snap, &lang()).unwrap();
        let actions = folders[1].context_actions.as_ref().unwrap();
        assert_eq!(actions.len(), 3);
        assert_eq!(
            actions[0].command(),
            Some(FolderCommand::Share {
                folder_id: FolderId(7)
            })
        );
    }

    #[test]
    fn test_badges() {
        let mut snap = snapshot(&[0, 7], 10);
        snap.counters_by_id
            .insert(FolderId(7), FolderCounters::new(4, 0));
        snap.counters_by_id
            .insert(ALL_FOLDER_ID, FolderCounters::new(0, 2));
        let folders = project_folders(&snap, &lang()).unwrap();
        assert_eq!(folders[0].badge_count, None);
        assert!(folders[0].is_badge_active);
        assert_eq!(folders[1].badge_count, Some(4));
        assert!(!folders[1].is_badge_active);
    }

    #[test]
    fn test_projector_cache() {
        let mut projector = FolderListProjector::new();
        let snap = snapshot(&[0, 7], 10);
        let first = projector.project(&snap, &lang());
        let second = projector.project(&snap, &lang());
        assert_eq!(first, second);
        assert_eq!(projector.hits(), 1);
        assert_eq!(projector.misses(), 1);

        let changed = snapshot(&[0, 7], 1);
        let third = projector.project(&changed, &lang()).unwrap();
        assert!(third[1].is_blocked);
        assert_eq!(projector.misses(), 2);
        assert_eq!(Some(third), project_folders(&changed, &lang()));
    }

    #[test]
    fn test_projector_recomputes_on_language_change() {
        let mut projector = FolderListProjector::new();
        let snap = snapshot(&[0, 7], 10);
        projector.project(&snap, &lang());
        let other = Lang::from_strings("de", TextDirection::Ltr, [("FilterAllChatsShort", "Alle")]);
        let folders = projector.project(&snap, &other).unwrap();
        assert_eq!(plain_text(&folders[0].title), "Alle");
        assert_eq!(projector.misses(), 2);
    }

    #[test]
    fn test_colliding_key_is_not_a_hit() {
        let mut projector = FolderListProjector::new();
        projector.project(&snapshot(&[0, 7], 2), &lang());

        // Same hash, different snapshot
        let changed = snapshot(&[0, 7], 1);
        if let Some(cached) = projector.cached.as_mut() {
            cached.key = changed.cache_key(&lang());
        }

        let folders = projector.project(&changed, &lang());
        assert_eq!(projector.hits(), 0);
        assert_eq!(projector.misses(), 2);
        assert_eq!(folders, project_folders(&changed, &lang()));
    }
}
