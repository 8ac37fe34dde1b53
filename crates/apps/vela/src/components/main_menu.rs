//! Main navigation dropdown opened from the sidebar trigger

use folders::{LeftColumnContent, MenuAlignment, MenuEntry};
use gpui::prelude::*;
use gpui::*;
use gpui_component::{ActiveTheme, Icon, Sizable, Size};
use std::rc::Rc;
use std::time::Duration;

use crate::assets::icons::SidebarIcon;

type SelectHandler = Rc<dyn Fn(LeftColumnContent, &mut Window, &mut App)>;
type DismissHandler = Rc<dyn Fn(&mut Window, &mut App)>;

#[derive(IntoElement)]
pub struct MainMenu {
    entries: Vec<MenuEntry>,
    footer: String,
    alignment: MenuAlignment,
    /// Left inset clearing the window controls
    origin_x: Option<f32>,
    animated: bool,
    on_select: SelectHandler,
    on_dismiss: DismissHandler,
}

impl MainMenu {
    pub fn new(
        entries: Vec<MenuEntry>,
        footer: String,
        on_select: SelectHandler,
        on_dismiss: DismissHandler,
    ) -> Self {
        Self {
            entries,
            footer,
            alignment: MenuAlignment::Left,
            origin_x: None,
            animated: true,
            on_select,
            on_dismiss,
        }
    }

    pub fn alignment(mut self, alignment: MenuAlignment) -> Self {
        self.alignment = alignment;
        self
    }

    pub fn origin_x(mut self, origin_x: Option<f32>) -> Self {
        self.origin_x = origin_x;
        self
    }

    pub fn animated(mut self, animated: bool) -> Self {
        self.animated = animated;
        self
    }
}

impl RenderOnce for MainMenu {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let theme = cx.theme();
        let on_dismiss = self.on_dismiss.clone();

        let items = self.entries.into_iter().enumerate().map(|(index, entry)| {
            let on_select = self.on_select.clone();
            let target = entry.target;
            div()
                .id(("main-menu-item", index))
                .px_3()
                .py_2()
                .rounded_md()
                .flex()
                .items_center()
                .gap_3()
                .text_sm()
                .text_color(theme.popover_foreground)
                .cursor_pointer()
                .hover(|style| style.bg(theme.list_hover))
                .on_click(move |_event, window, cx| on_select(target, window, cx))
                .child(
                    Icon::new(SidebarIcon::from(entry.icon))
                        .with_size(Size::Small)
                        .text_color(theme.muted_foreground),
                )
                .child(entry.label)
        });

        let panel = div()
            .id("main-menu")
            .occlude()
            .w(px(240.))
            .p_1()
            .flex()
            .flex_col()
            .bg(theme.popover)
            .border_1()
            .border_color(theme.border)
            .rounded_lg()
            .shadow_lg()
            .on_mouse_down_out(move |_event, window, cx| on_dismiss(window, cx))
            .children(items)
            // Version footer
            .child(
                div()
                    .mt_1()
                    .pt_2()
                    .pb_1()
                    .px_3()
                    .border_t_1()
                    .border_color(theme.border)
                    .text_xs()
                    .text_color(theme.muted_foreground)
                    .child(self.footer),
            );

        let panel = if self.animated {
            panel
                .with_animation(
                    "main-menu-open",
                    Animation::new(Duration::from_millis(150)).with_easing(ease_in_out),
                    |el, delta| el.opacity(delta),
                )
                .into_any_element()
        } else {
            panel.into_any_element()
        };

        let inset = px(self.origin_x.unwrap_or(0.));
        let container = div().absolute().top(px(48.)).w_full().flex();
        let container = match self.alignment {
            MenuAlignment::Left => container.justify_start().pl(inset + px(8.)),
            MenuAlignment::Right => container.justify_end().pr(px(8.)),
        };

        deferred(container.child(panel)).with_priority(1)
    }
}
