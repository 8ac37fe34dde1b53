//! Folder tab strip
//!
//! Re-projects the folder list from the store on every render (the
//! projector caches unchanged snapshots), keeps per-tab context menu state
//! across projections and turns clicks into store actions.

use folders::{
    FolderAction, FolderCommand, FolderListProjector, FolderState, FolderTab,
    InMemoryFolderStore, Lang, MenuAnchor, execute_command, switch_tab,
};
use gpui::prelude::*;
use gpui::*;
use log::{debug, warn};
use std::collections::HashMap;
use std::rc::Rc;
use std::sync::Arc;

use crate::components::FolderContextMenu;
use crate::components::FolderTabItem;
use crate::components::context_menu::MENU_ANIMATION;
use crate::input::{Dismiss, MenuConfirm, MenuDown, MenuUp, NextFolder, PrevFolder};

/// Events emitted by the FolderTabsView
pub enum FolderTabsEvent {
    /// An action went into the store
    Dispatched(FolderAction),
}

impl EventEmitter<FolderTabsEvent> for FolderTabsView {}

pub struct FolderTabsView {
    store: Arc<InMemoryFolderStore>,
    lang: Lang,
    projector: FolderListProjector,
    tabs: Vec<FolderTab>,
    focus_handle: FocusHandle,
    menu_focus: FocusHandle,
    /// Pending unmount of a closing context menu
    close_task: Option<Task<()>>,
}

impl FolderTabsView {
    pub fn new(store: Arc<InMemoryFolderStore>, lang: Lang, cx: &mut Context<Self>) -> Self {
        let mut view = Self {
            store,
            lang,
            projector: FolderListProjector::new(),
            tabs: Vec::new(),
            focus_handle: cx.focus_handle(),
            menu_focus: cx.focus_handle(),
            close_task: None,
        };
        view.refresh();
        view
    }

    pub fn focus(&self, window: &mut Window, _cx: &mut Context<Self>) {
        window.focus(&self.focus_handle);
    }

    /// Rebuild tabs from the store, matching existing tabs by folder id
    fn refresh(&mut self) {
        let snapshot = match self.store.snapshot() {
            Ok(snapshot) => snapshot,
            Err(e) => {
                warn!("Failed to read folder state: {}", e);
                return;
            }
        };
        let active = self.store.active_folder().unwrap_or_default();

        let Some(folders) = self.projector.project(&snapshot, &self.lang) else {
            self.tabs.clear();
            return;
        };

        let mut previous: HashMap<_, _> = self
            .tabs
            .drain(..)
            .map(|tab| (tab.folder().id, tab))
            .collect();

        self.tabs = folders
            .into_iter()
            .enumerate()
            .map(|(index, folder)| match previous.remove(&folder.id) {
                Some(mut tab) => {
                    tab.update(index, folder, index == active);
                    tab
                }
                None => FolderTab::new(index, folder, index == active),
            })
            .collect();
    }

    fn switch_to(&mut self, index: usize, cx: &mut Context<Self>) {
        if index >= self.tabs.len() {
            return;
        }
        self.tabs[index].click(|index| {
            if let Err(e) = switch_tab(index, self.store.as_ref()) {
                warn!("Failed to switch folder: {}", e);
            }
        });
        cx.emit(FolderTabsEvent::Dispatched(FolderAction::SetActiveFolder {
            index,
            force_on_heavy_animation: true,
        }));
        cx.notify();
    }

    fn active_index(&self) -> usize {
        self.tabs.iter().position(FolderTab::is_active).unwrap_or(0)
    }

    fn open_context_menu(
        &mut self,
        index: usize,
        position: Point<Pixels>,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        self.close_context_menu(cx);
        let anchor = MenuAnchor::new(position.x / px(1.), position.y / px(1.));
        let Some(tab) = self.tabs.get_mut(index) else {
            return;
        };
        if tab.context_menu(anchor) {
            debug!("Opened context menu for folder {}", tab.folder().id);
            window.focus(&self.menu_focus);
            cx.notify();
        }
    }

    /// Start closing any open menu and unmount it once the fade has played
    fn close_context_menu(&mut self, cx: &mut Context<Self>) {
        let mut closing = false;
        for tab in &mut self.tabs {
            if tab.menu().is_open() {
                tab.menu_mut().close();
            }
            closing |= tab.menu().is_mounted();
        }
        if closing {
            self.schedule_unmount(cx);
        }
        cx.notify();
    }

    fn schedule_unmount(&mut self, cx: &mut Context<Self>) {
        self.close_task = Some(cx.spawn(async move |this, cx| {
            cx.background_executor().timer(MENU_ANIMATION).await;

            let _ = cx.update(|cx| {
                let _ = this.update(cx, |view, cx| {
                    for tab in &mut view.tabs {
                        tab.menu_mut().on_close_animation_end();
                    }
                    view.close_task = None;
                    cx.notify();
                });
            });
        }));
    }

    fn open_menu_index(&self) -> Option<usize> {
        self.tabs.iter().position(|tab| tab.menu().is_open())
    }

    /// Run the context menu entry `item` of tab `index`
    fn run_command(&mut self, index: usize, item: usize, cx: &mut Context<Self>) {
        let Some(command) = self
            .tabs
            .get_mut(index)
            .and_then(|tab| tab.menu_mut().select(item))
        else {
            return;
        };
        self.schedule_unmount(cx);
        self.execute(command, cx);
    }

    fn execute(&mut self, command: FolderCommand, cx: &mut Context<Self>) {
        // Limits are read now, not when the menu was built
        let result = self
            .store
            .snapshot()
            .and_then(|snapshot| execute_command(command, &snapshot, self.store.as_ref()));
        match result {
            Ok(action) => cx.emit(FolderTabsEvent::Dispatched(action)),
            Err(e) => warn!("Failed to run folder command: {}", e),
        }
        cx.notify();
    }

    /// Switch to the next tab, wrapping around
    pub fn next_folder(&mut self, cx: &mut Context<Self>) {
        if self.tabs.is_empty() {
            return;
        }
        let next = (self.active_index() + 1) % self.tabs.len();
        self.switch_to(next, cx);
    }

    /// Switch to the previous tab, wrapping around
    pub fn prev_folder(&mut self, cx: &mut Context<Self>) {
        if self.tabs.is_empty() {
            return;
        }
        let len = self.tabs.len();
        let prev = (self.active_index() + len - 1) % len;
        self.switch_to(prev, cx);
    }

    fn handle_next_folder(&mut self, _: &NextFolder, _window: &mut Window, cx: &mut Context<Self>) {
        self.next_folder(cx);
    }

    fn handle_prev_folder(&mut self, _: &PrevFolder, _window: &mut Window, cx: &mut Context<Self>) {
        self.prev_folder(cx);
    }

    fn handle_menu_up(&mut self, _: &MenuUp, _window: &mut Window, cx: &mut Context<Self>) {
        if let Some(index) = self.open_menu_index() {
            self.tabs[index].menu_mut().highlight_prev();
            cx.notify();
        }
    }

    fn handle_menu_down(&mut self, _: &MenuDown, _window: &mut Window, cx: &mut Context<Self>) {
        if let Some(index) = self.open_menu_index() {
            self.tabs[index].menu_mut().highlight_next();
            cx.notify();
        }
    }

    fn handle_menu_confirm(&mut self, _: &MenuConfirm, window: &mut Window, cx: &mut Context<Self>) {
        let Some(index) = self.open_menu_index() else {
            return;
        };
        if let Some(command) = self.tabs[index].menu_mut().confirm() {
            self.schedule_unmount(cx);
            self.focus(window, cx);
            self.execute(command, cx);
        }
    }

    fn handle_dismiss(&mut self, _: &Dismiss, window: &mut Window, cx: &mut Context<Self>) {
        if self.open_menu_index().is_none() {
            cx.propagate();
            return;
        }
        self.close_context_menu(cx);
        self.focus(window, cx);
    }

    fn render_menu(&self, index: usize, tab: &FolderTab, cx: &Context<Self>) -> FolderContextMenu {
        let view = cx.entity().downgrade();
        let on_select = Rc::new(move |item: usize, _window: &mut Window, cx: &mut App| {
            let _ = view.update(cx, |view, cx| view.run_command(index, item, cx));
        });
        let view = cx.entity().downgrade();
        let on_dismiss = Rc::new(move |_window: &mut Window, cx: &mut App| {
            let _ = view.update(cx, |view, cx| view.close_context_menu(cx));
        });

        FolderContextMenu::new(
            ("folder-menu", index),
            tab.menu().clone(),
            self.menu_focus.clone(),
            on_select,
            on_dismiss,
        )
    }
}

impl Render for FolderTabsView {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        self.refresh();

        // Menus render outside the tab rows so their clicks don't reach the tab
        let menus: Vec<_> = self
            .tabs
            .iter()
            .enumerate()
            .filter(|(_, tab)| tab.menu().is_mounted())
            .map(|(index, tab)| self.render_menu(index, tab, cx))
            .collect();

        let tabs: Vec<_> = self
            .tabs
            .iter()
            .enumerate()
            .map(|(index, tab)| {
                div()
                    .id(("folder-tab", index))
                    .w_full()
                    .on_click(cx.listener(move |view, _event, _window, cx| {
                        view.switch_to(index, cx);
                    }))
                    .on_mouse_down(
                        MouseButton::Right,
                        cx.listener(move |view, event: &MouseDownEvent, window, cx| {
                            view.open_context_menu(index, event.position, window, cx);
                        }),
                    )
                    .child(FolderTabItem::new(tab.clone()))
            })
            .collect();

        div()
            .id("folder-tabs")
            .key_context("FolderTabs")
            .track_focus(&self.focus_handle)
            .on_action(cx.listener(Self::handle_next_folder))
            .on_action(cx.listener(Self::handle_prev_folder))
            .on_action(cx.listener(Self::handle_menu_up))
            .on_action(cx.listener(Self::handle_menu_down))
            .on_action(cx.listener(Self::handle_menu_confirm))
            .on_action(cx.listener(Self::handle_dismiss))
            .flex()
            .flex_col()
            .gap_1()
            .p_1()
            .w_full()
            .flex_1()
            .overflow_y_scroll()
            .children(tabs)
            .children(menus)
    }
}
