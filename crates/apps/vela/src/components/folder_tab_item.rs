//! A single folder tab in the sidebar strip

use folders::{Badge, FolderTab};
use gpui::prelude::*;
use gpui::*;
use gpui_component::{ActiveTheme, Icon, Sizable, Size};

use crate::assets::icons::SidebarIcon;
use crate::components::{emoji_image, render_title};

/// Visual part of a folder tab; the owning view attaches click handlers
#[derive(IntoElement)]
pub struct FolderTabItem {
    tab: FolderTab,
}

impl FolderTabItem {
    pub fn new(tab: FolderTab) -> Self {
        Self { tab }
    }
}

impl RenderOnce for FolderTabItem {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let theme = cx.theme();
        let is_active = self.tab.is_active();
        let folder = self.tab.folder();
        let badge = self.tab.badge();
        let menu_open = self.tab.menu().is_mounted();

        let bg_color = if is_active || menu_open {
            theme.list_active
        } else {
            theme.transparent
        };

        let text_color = if is_active {
            theme.foreground
        } else {
            theme.muted_foreground
        };

        div()
            .relative()
            .w_full()
            .px_1()
            .py_2()
            .rounded_md()
            .bg(bg_color)
            .cursor_pointer()
            .hover(|style| style.bg(theme.list_hover))
            .flex()
            .flex_col()
            .items_center()
            .gap_1()
            .when(folder.is_blocked, |el| el.opacity(0.5))
            // Icon with optional badge
            .child(
                div()
                    .relative()
                    .size(px(28.))
                    .flex()
                    .items_center()
                    .justify_center()
                    .text_xl()
                    .child(emoji_image(&folder.emoji, px(28.)))
                    .when(folder.is_blocked, |el| {
                        el.child(
                            div().absolute().bottom_0().right_0().child(
                                Icon::new(SidebarIcon::Lock)
                                    .with_size(Size::XSmall)
                                    .text_color(theme.muted_foreground),
                            ),
                        )
                    })
                    .when_some(badge, |el, badge| el.child(render_badge(badge, cx))),
            )
            // Label
            .child(
                render_title(&folder.title, theme.muted)
                    .max_w_full()
                    .justify_center()
                    .text_xs()
                    .text_color(text_color)
                    .font_weight(if is_active {
                        FontWeight::MEDIUM
                    } else {
                        FontWeight::NORMAL
                    }),
            )
    }
}

fn render_badge(badge: Badge, cx: &App) -> impl IntoElement {
    let theme = cx.theme();
    let (bg, fg) = if badge.is_active {
        (theme.primary, theme.primary_foreground)
    } else {
        (theme.muted, theme.muted_foreground)
    };

    div()
        .absolute()
        .top(px(-6.))
        .right(px(-10.))
        .min_w(px(18.))
        .px_1()
        .rounded_full()
        .bg(bg)
        .text_xs()
        .text_color(fg)
        .font_weight(FontWeight::MEDIUM)
        .flex()
        .justify_center()
        .child(format!("{}", badge.count))
}
