//! Left column: main menu trigger above the folder tab strip

use folders::{
    AppLayout, InMemoryFolderStore, Lang, LayoutMode, LeftColumnContent, SidebarShell,
    VersionInfo, WindowChrome,
};
use gpui::prelude::*;
use gpui::*;
use gpui_component::button::{Button, ButtonVariants};
use gpui_component::{ActiveTheme, Icon, Selectable, Sizable};
use log::info;
use std::rc::Rc;
use std::sync::Arc;

use crate::assets::icons::SidebarIcon;
use crate::components::context_menu::MENU_ANIMATION;
use crate::components::{FolderTabsView, MainMenu};

/// Events emitted by the SidebarView
pub enum SidebarEvent {
    /// A main menu entry picked new left column content
    ContentChanged(LeftColumnContent),
}

impl EventEmitter<SidebarEvent> for SidebarView {}

pub struct SidebarView {
    shell: SidebarShell,
    lang: Lang,
    layout_mode: LayoutMode,
    version: VersionInfo,
    folder_tabs: Entity<FolderTabsView>,
}

impl SidebarView {
    pub fn new(
        store: Arc<InMemoryFolderStore>,
        lang: Lang,
        layout_mode: LayoutMode,
        version: VersionInfo,
        skip_transition: bool,
        cx: &mut Context<Self>,
    ) -> Self {
        let folder_tabs = cx.new(|cx| FolderTabsView::new(store, lang.clone(), cx));
        let shell = SidebarShell::new(skip_transition);

        Self {
            shell,
            lang,
            layout_mode,
            version,
            folder_tabs,
        }
    }

    /// Folder strip, for subscribing to dispatched actions
    pub fn folder_tabs(&self) -> &Entity<FolderTabsView> {
        &self.folder_tabs
    }

    pub fn is_menu_open(&self) -> bool {
        self.shell.is_menu_open()
    }

    pub fn toggle_menu(&mut self, cx: &mut Context<Self>) {
        self.shell.toggle_menu();
        cx.notify();
    }

    pub fn close_menu(&mut self, cx: &mut Context<Self>) {
        self.shell.close_menu();
        cx.notify();
    }

    fn dismiss_menu(&mut self, cx: &mut Context<Self>) {
        self.shell.dismiss_outside();
        cx.notify();
    }

    fn trigger_clicked(&mut self, cx: &mut Context<Self>) {
        self.shell.trigger_clicked();
        cx.notify();
    }

    fn select(&mut self, target: LeftColumnContent, cx: &mut Context<Self>) {
        let mut changed = None;
        self.shell.select(target, |content| changed = Some(content));
        if let Some(content) = changed {
            info!("Left column switched to {:?}", content);
            cx.emit(SidebarEvent::ContentChanged(content));
        }
        cx.notify();
    }

    fn render_menu(&self, window: &Window, cx: &Context<Self>) -> MainMenu {
        let chrome = WindowChrome {
            is_macos: cfg!(target_os = "macos"),
            is_fullscreen: window.is_fullscreen(),
        };

        let view = cx.entity().downgrade();
        let on_select = Rc::new(
            move |target: LeftColumnContent, _window: &mut Window, cx: &mut App| {
                let _ = view.update(cx, |view, cx| view.select(target, cx));
            },
        );
        let view = cx.entity().downgrade();
        let on_dismiss = Rc::new(move |_window: &mut Window, cx: &mut App| {
            let _ = view.update(cx, |view, cx| view.dismiss_menu(cx));
        });

        MainMenu::new(
            self.shell.menu_entries(&self.lang),
            self.shell.footer(&self.version),
            on_select,
            on_dismiss,
        )
        .alignment(self.shell.alignment(&self.lang))
        .origin_x(self.shell.transform_origin_x(chrome))
        .animated(!self.shell.disable_transition(&self.lang))
    }
}

impl Render for SidebarView {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let theme = cx.theme();
        let width = window.viewport_size().width / px(1.);
        let layout = AppLayout::from_width(width, self.layout_mode);
        let trigger = self.shell.trigger(&self.lang, layout);

        let icon = if layout.is_mobile {
            SidebarIcon::ArrowLeft
        } else {
            SidebarIcon::Menu
        };

        let button = Button::new("main-menu-trigger")
            .icon(Icon::new(icon))
            .ghost()
            .small()
            .selected(trigger.is_active)
            .tooltip(trigger.aria_label)
            .when(trigger.ripple, |button| button.cursor_pointer())
            .on_click(cx.listener(|view, _event, _window, cx| view.trigger_clicked(cx)));

        // Icon morph on open and close, restarted whenever the state flips
        let trigger_slot = div().child(button);
        let trigger_slot = if trigger.animated {
            trigger_slot
                .with_animation(
                    ("main-menu-trigger-morph", trigger.is_active as usize),
                    Animation::new(MENU_ANIMATION).with_easing(ease_in_out),
                    |el, delta| el.opacity(0.4 + 0.6 * delta),
                )
                .into_any_element()
        } else {
            trigger_slot.into_any_element()
        };

        let menu = self
            .shell
            .is_menu_open()
            .then(|| self.render_menu(window, cx));

        div()
            .relative()
            .flex()
            .flex_col()
            .h_full()
            .capture_any_mouse_down(cx.listener(|view, _event, _window, _cx| {
                view.shell.pointer_down();
            }))
            .bg(theme.secondary)
            .border_r_1()
            .border_color(theme.border)
            .child(
                div()
                    .h(px(48.))
                    .flex()
                    .items_center()
                    .justify_center()
                    .border_b_1()
                    .border_color(theme.border)
                    .child(trigger_slot),
            )
            .child(self.folder_tabs.clone())
            .children(menu)
    }
}
