//! Folders crate - presentation logic for the chat folder sidebar
//!
//! This crate provides platform-independent sidebar functionality including:
//! - Domain models (FolderRecord, FolderInvite, FolderCounters, PlanLimits)
//! - Read-only state queries and action dispatch traits, plus an in-memory store
//! - Text entity rendering with an explicit emoji channel
//! - Language packs with direction awareness
//! - Folder list projection into tab view models
//! - Tab interaction and context menu lifecycle
//! - Sidebar shell menu model
//!
//! This crate has zero UI dependencies; the desktop app renders what it
//! produces.

pub mod error;
pub mod lang;
pub mod modal;
pub mod models;
pub mod projector;
pub mod settings;
pub mod sidebar;
pub mod store;
pub mod tab;
pub mod text;

pub use error::{FolderError, Result};
pub use lang::{Lang, TextDirection};
pub use modal::{ModalConfirm, ModalContent, modal_content};
pub use models::{
    ALL_FOLDER_ID, FolderCounters, FolderId, FolderInvite, FolderRecord, FormattedText,
    LimitKind, PlanLimits, TextEntity, TextEntityKind,
};
pub use projector::{
    ActionIcon, ContextAction, FolderCommand, FolderListProjector, FolderSnapshot,
    FolderViewModel, execute_command, project_folders, switch_tab,
};
pub use settings::{LayoutMode, ReleaseChannel, Settings};
pub use sidebar::{
    APP_NAME, AppLayout, LeftColumnContent, MenuAlignment, MenuEntry, MenuIcon, SidebarShell,
    TriggerButton, VersionInfo, WindowChrome,
};
pub use store::{
    ActionDispatcher, FolderAction, FolderState, InMemoryFolderStore, PendingModal, StateFile,
};
pub use tab::{Badge, ContextMenu, ContextMenuPhase, FolderTab, MenuAnchor};
pub use text::{EmojiIcon, RenderOptions, TitleNode, plain_text, render_text_with_entities};
