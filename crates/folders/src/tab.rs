//! Folder tab interaction model
//!
//! A tab switches folders on click and offers a context menu on
//! right-click. The menu has a two-phase teardown: [`ContextMenu::close`]
//! starts the close animation, [`ContextMenu::on_close_animation_end`]
//! unmounts it and forgets the anchor.

use crate::projector::{ContextAction, FolderCommand, FolderViewModel};

/// Window position the context menu is anchored to
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MenuAnchor {
    pub x: f32,
    pub y: f32,
}

impl MenuAnchor {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Lifecycle phase of a context menu
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ContextMenuPhase {
    /// Not mounted
    #[default]
    Closed,
    /// Mounted and interactive
    Open,
    /// Still mounted while the close animation runs
    Closing,
}

/// Context menu state for one tab
#[derive(Debug, Clone, Default)]
pub struct ContextMenu {
    phase: ContextMenuPhase,
    anchor: Option<MenuAnchor>,
    actions: Vec<ContextAction>,
    highlighted: Option<usize>,
}

impl ContextMenu {
    pub fn new(actions: Option<Vec<ContextAction>>) -> Self {
        Self {
            actions: actions.unwrap_or_default(),
            ..Default::default()
        }
    }

    /// Whether the menu has anything to show
    pub fn is_enabled(&self) -> bool {
        !self.actions.is_empty()
    }

    pub fn phase(&self) -> ContextMenuPhase {
        self.phase
    }

    pub fn is_open(&self) -> bool {
        self.phase == ContextMenuPhase::Open
    }

    /// Whether the menu overlay exists, including during its close animation
    pub fn is_mounted(&self) -> bool {
        self.phase != ContextMenuPhase::Closed
    }

    pub fn anchor(&self) -> Option<MenuAnchor> {
        self.anchor
    }

    pub fn actions(&self) -> &[ContextAction] {
        &self.actions
    }

    pub fn highlighted(&self) -> Option<usize> {
        self.highlighted
    }

    /// Open at `anchor`. Inert without actions. Returns whether it opened.
    pub fn open(&mut self, anchor: MenuAnchor) -> bool {
        if !self.is_enabled() {
            return false;
        }
        self.phase = ContextMenuPhase::Open;
        self.anchor = Some(anchor);
        self.highlighted = None;
        true
    }

    /// Logical close: the menu stays mounted until its animation ends
    pub fn close(&mut self) {
        if self.phase == ContextMenuPhase::Open {
            self.phase = ContextMenuPhase::Closing;
            self.highlighted = None;
        }
    }

    /// Physical teardown after the close animation
    pub fn on_close_animation_end(&mut self) {
        if self.phase == ContextMenuPhase::Closing {
            self.phase = ContextMenuPhase::Closed;
            self.anchor = None;
        }
    }

    /// Choose the entry at `index`.
    ///
    /// Returns its command and closes the menu. Separators and disabled
    /// entries are ignored and leave the menu open.
    pub fn select(&mut self, index: usize) -> Option<FolderCommand> {
        if !self.is_open() {
            return None;
        }
        let command = self.actions.get(index).and_then(ContextAction::command)?;
        self.close();
        Some(command)
    }

    /// Choose the highlighted entry
    pub fn confirm(&mut self) -> Option<FolderCommand> {
        self.highlighted.and_then(|index| self.select(index))
    }

    /// Move the highlight to the next selectable entry, wrapping around
    pub fn highlight_next(&mut self) {
        self.move_highlight(true);
    }

    /// Move the highlight to the previous selectable entry, wrapping around
    pub fn highlight_prev(&mut self) {
        self.move_highlight(false);
    }

    fn move_highlight(&mut self, forward: bool) {
        if !self.is_open() {
            return;
        }
        let len = self.actions.len();
        let selectable = |i: usize| self.actions[i].command().is_some();
        let start = self.highlighted;
        for step in 1..=len {
            let index = match (start, forward) {
                (Some(current), true) => (current + step) % len,
                (Some(current), false) => (current + len - step % len) % len,
                (None, true) => step - 1,
                (None, false) => len - step,
            };
            if selectable(index) {
                self.highlighted = Some(index);
                return;
            }
        }
    }

    /// Replace the entries, closing the menu if none remain
    fn set_actions(&mut self, actions: Option<Vec<ContextAction>>) {
        self.actions = actions.unwrap_or_default();
        self.highlighted = None;
        if self.actions.is_empty() {
            self.close();
        }
    }
}

/// Badge drawn on a tab
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Badge {
    pub count: u32,
    pub is_active: bool,
}

/// One folder tab
#[derive(Debug, Clone)]
pub struct FolderTab {
    index: usize,
    folder: FolderViewModel,
    is_active: bool,
    menu: ContextMenu,
}

impl FolderTab {
    pub fn new(index: usize, folder: FolderViewModel, is_active: bool) -> Self {
        let menu = ContextMenu::new(folder.context_actions.clone());
        Self {
            index,
            folder,
            is_active,
            menu,
        }
    }

    /// Refresh from a new projection, keeping the menu state
    pub fn update(&mut self, index: usize, folder: FolderViewModel, is_active: bool) {
        if folder.context_actions != self.folder.context_actions {
            self.menu.set_actions(folder.context_actions.clone());
        }
        self.index = index;
        self.folder = folder;
        self.is_active = is_active;
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn folder(&self) -> &FolderViewModel {
        &self.folder
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    pub fn menu(&self) -> &ContextMenu {
        &self.menu
    }

    pub fn menu_mut(&mut self) -> &mut ContextMenu {
        &mut self.menu
    }

    /// Primary click: hand this tab's index to the switch callback
    pub fn click(&self, on_switch: impl FnOnce(usize)) {
        on_switch(self.index);
    }

    /// Right-click or long-press at `anchor`. Returns whether a menu opened.
    pub fn context_menu(&mut self, anchor: MenuAnchor) -> bool {
        self.menu.open(anchor)
    }

    /// Badge to draw, omitted when there is nothing unread
    pub fn badge(&self) -> Option<Badge> {
        self.folder
            .badge_count
            .filter(|&count| count > 0)
            .map(|count| Badge {
                count,
                is_active: self.folder.is_badge_active,
            })
    }
}
