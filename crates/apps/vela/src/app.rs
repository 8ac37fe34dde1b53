//! Root application component for Vela

use folders::{
    FolderAction, FolderState, InMemoryFolderStore, Lang, LeftColumnContent, ModalConfirm,
    PendingModal, Settings, VersionInfo, modal_content,
};
use gpui::prelude::*;
use gpui::*;
use gpui_component::button::{Button, ButtonVariants};
use gpui_component::{ActiveTheme, Icon, Sizable};
use log::{info, warn};
use std::rc::Rc;
use std::sync::Arc;

use crate::assets::icons::SidebarIcon;
use crate::components::{FolderTabsEvent, FolderTabsView, Modal, SidebarEvent, SidebarView};
use crate::input::{Dismiss, NextFolder, PrevFolder, ToggleMainMenu};

/// Root application state
pub struct VelaApp {
    store: Arc<InMemoryFolderStore>,
    lang: Lang,
    sidebar: Entity<SidebarView>,
    /// What the main column shows
    content: LeftColumnContent,
    modal: Option<PendingModal>,
    focus_handle: FocusHandle,
    _subscriptions: Vec<Subscription>,
}

impl VelaApp {
    pub fn new(
        store: Arc<InMemoryFolderStore>,
        settings: &Settings,
        lang: Lang,
        cx: &mut Context<Self>,
    ) -> Self {
        let version = VersionInfo::current(settings.release);
        let sidebar = cx.new(|cx| {
            SidebarView::new(
                store.clone(),
                lang.clone(),
                settings.layout,
                version,
                settings.reduce_motion,
                cx,
            )
        });
        let folder_tabs = sidebar.read(cx).folder_tabs().clone();

        let subscriptions = vec![
            cx.subscribe(&sidebar, Self::handle_sidebar_event),
            cx.subscribe(&folder_tabs, Self::handle_folder_tabs_event),
        ];

        Self {
            store,
            lang,
            sidebar,
            content: LeftColumnContent::ChatList,
            modal: None,
            focus_handle: cx.focus_handle(),
            _subscriptions: subscriptions,
        }
    }

    /// Focus the app so global shortcuts work before anything is clicked
    pub fn focus(&self, window: &mut Window, _cx: &mut Context<Self>) {
        window.focus(&self.focus_handle);
    }

    fn handle_sidebar_event(
        &mut self,
        _: Entity<SidebarView>,
        event: &SidebarEvent,
        cx: &mut Context<Self>,
    ) {
        match event {
            SidebarEvent::ContentChanged(content) => {
                self.content = *content;
                cx.notify();
            }
        }
    }

    fn handle_folder_tabs_event(
        &mut self,
        _: Entity<FolderTabsView>,
        event: &FolderTabsEvent,
        cx: &mut Context<Self>,
    ) {
        match event {
            FolderTabsEvent::Dispatched(action) => {
                if matches!(action, FolderAction::SetActiveFolder { .. }) {
                    self.content = LeftColumnContent::ChatList;
                }
                match self.store.take_modal() {
                    Ok(Some(modal)) => self.modal = Some(modal),
                    Ok(None) => {}
                    Err(e) => warn!("Failed to read pending modal: {}", e),
                }
                cx.notify();
            }
        }
    }

    fn close_modal(&mut self, cx: &mut Context<Self>) {
        self.modal = None;
        cx.notify();
    }

    fn confirm_modal(&mut self, confirm: ModalConfirm, cx: &mut Context<Self>) {
        match confirm {
            ModalConfirm::DeleteFolder(id) => match self.store.remove_folder(id) {
                Ok(Some(_)) => info!("Deleted folder {}", id),
                Ok(None) => warn!("Folder {} was already gone", id),
                Err(e) => warn!("Failed to delete folder {}: {}", id, e),
            },
        }
        self.close_modal(cx);
    }

    fn handle_dismiss(&mut self, _: &Dismiss, _window: &mut Window, cx: &mut Context<Self>) {
        if self.modal.is_some() {
            self.close_modal(cx);
        } else if self.sidebar.read(cx).is_menu_open() {
            self.sidebar.update(cx, |sidebar, cx| sidebar.close_menu(cx));
        } else if self.content != LeftColumnContent::ChatList {
            self.content = LeftColumnContent::ChatList;
            cx.notify();
        }
    }

    fn handle_toggle_main_menu(
        &mut self,
        _: &ToggleMainMenu,
        _window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        self.sidebar.update(cx, |sidebar, cx| sidebar.toggle_menu(cx));
    }

    /// Folder cycling from anywhere in the window
    fn handle_next_folder(&mut self, _: &NextFolder, _window: &mut Window, cx: &mut Context<Self>) {
        let folder_tabs = self.sidebar.read(cx).folder_tabs().clone();
        folder_tabs.update(cx, |tabs, cx| tabs.next_folder(cx));
    }

    fn handle_prev_folder(&mut self, _: &PrevFolder, _window: &mut Window, cx: &mut Context<Self>) {
        let folder_tabs = self.sidebar.read(cx).folder_tabs().clone();
        folder_tabs.update(cx, |tabs, cx| tabs.prev_folder(cx));
    }

    /// Title of the active folder for the chat list header
    fn active_folder_header(&self) -> (String, Option<String>) {
        let all_chats = || (self.lang.get("FilterAllChats"), None);
        let Ok(snapshot) = self.store.snapshot() else {
            return all_chats();
        };
        let active = self.store.active_folder().unwrap_or_default();
        let Some(id) = snapshot
            .ordered_ids
            .as_ref()
            .and_then(|ids| ids.get(active))
            .copied()
        else {
            return all_chats();
        };
        let Some(folder) = snapshot.folders_by_id.get(&id) else {
            return all_chats();
        };

        let title = folder.title.text.clone();
        let count = snapshot.counters_by_id.get(&id).map(|counters| {
            self.lang
                .format("FolderChatCount", &[("count", counters.chats_count.to_string())])
        });
        (title, count)
    }

    fn render_content(&self, cx: &mut Context<Self>) -> impl IntoElement + use<> {
        let theme = cx.theme();

        let (title, subtitle, show_back) = match self.content {
            LeftColumnContent::ChatList => {
                let (title, subtitle) = self.active_folder_header();
                (title, subtitle, false)
            }
            LeftColumnContent::Settings => (self.lang.get("Settings"), None, true),
            LeftColumnContent::Contacts => (self.lang.get("Contacts"), None, true),
            LeftColumnContent::Archived => (self.lang.get("ArchivedChats"), None, true),
        };

        div()
            .flex()
            .flex_col()
            .flex_1()
            .overflow_hidden()
            .child(
                div()
                    .w_full()
                    .h(px(48.))
                    .px_4()
                    .border_b_1()
                    .border_color(theme.border)
                    .flex()
                    .items_center()
                    .gap_2()
                    .when(show_back, |el| {
                        el.child(
                            Button::new("content-back")
                                .icon(Icon::new(SidebarIcon::ArrowLeft))
                                .ghost()
                                .small()
                                .tooltip(self.lang.get("Return"))
                                .on_click(cx.listener(|app, _event, _window, cx| {
                                    app.content = LeftColumnContent::ChatList;
                                    cx.notify();
                                })),
                        )
                    })
                    .child(
                        div()
                            .text_base()
                            .font_weight(FontWeight::SEMIBOLD)
                            .text_color(theme.foreground)
                            .child(title),
                    ),
            )
            .child(
                div()
                    .flex_1()
                    .flex()
                    .items_center()
                    .justify_center()
                    .text_sm()
                    .text_color(theme.muted_foreground)
                    .children(subtitle),
            )
    }

    fn render_modal(&self, modal: PendingModal, cx: &Context<Self>) -> Option<Modal> {
        let content = match modal_content(modal, self.store.as_ref(), &self.lang) {
            Ok(content) => content,
            Err(e) => {
                warn!("Failed to build modal: {}", e);
                return None;
            }
        };

        let view = cx.entity().downgrade();
        let on_close = Rc::new(move |_window: &mut Window, cx: &mut App| {
            let _ = view.update(cx, |app, cx| app.close_modal(cx));
        });
        let mut rendered = Modal::new(content.title, content.body, content.close_label, on_close);

        if let Some((label, confirm)) = content.confirm {
            let view = cx.entity().downgrade();
            let on_confirm = Rc::new(move |_window: &mut Window, cx: &mut App| {
                let _ = view.update(cx, |app, cx| app.confirm_modal(confirm, cx));
            });
            let destructive = matches!(confirm, ModalConfirm::DeleteFolder(_));
            rendered = rendered.action(label, destructive, on_confirm);
        }
        Some(rendered)
    }
}

impl Render for VelaApp {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let theme = cx.theme();
        let bg = theme.background;
        let fg = theme.foreground;

        let content = self.render_content(cx);
        let modal = self.modal.and_then(|modal| self.render_modal(modal, cx));

        div()
            .key_context("VelaApp")
            .track_focus(&self.focus_handle)
            .on_action(cx.listener(Self::handle_dismiss))
            .on_action(cx.listener(Self::handle_toggle_main_menu))
            .on_action(cx.listener(Self::handle_next_folder))
            .on_action(cx.listener(Self::handle_prev_folder))
            .relative()
            .flex()
            .when(self.lang.is_rtl(), |el| el.flex_row_reverse())
            .when(!self.lang.is_rtl(), |el| el.flex_row())
            .size_full()
            .bg(bg)
            .text_color(fg)
            // Left column
            .child(div().w(px(88.)).h_full().child(self.sidebar.clone()))
            .child(content)
            .children(modal)
    }
}
