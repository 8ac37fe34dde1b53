//! Context menu overlay for a folder tab
//!
//! Drawn in a deferred layer anchored at the right-click position. While
//! the menu is closing it stays mounted and fades out; the owner unmounts
//! it once the fade completes.

use folders::{ContextAction, ContextMenu, ContextMenuPhase};
use gpui::prelude::*;
use gpui::*;
use gpui_component::{ActiveTheme, Icon, Sizable, Size};
use std::rc::Rc;
use std::time::Duration;

use crate::assets::icons::SidebarIcon;

/// How long the open and close fades take
pub const MENU_ANIMATION: Duration = Duration::from_millis(150);

type SelectHandler = Rc<dyn Fn(usize, &mut Window, &mut App)>;
type DismissHandler = Rc<dyn Fn(&mut Window, &mut App)>;

#[derive(IntoElement)]
pub struct FolderContextMenu {
    id: ElementId,
    menu: ContextMenu,
    focus_handle: FocusHandle,
    on_select: SelectHandler,
    on_dismiss: DismissHandler,
}

impl FolderContextMenu {
    pub fn new(
        id: impl Into<ElementId>,
        menu: ContextMenu,
        focus_handle: FocusHandle,
        on_select: SelectHandler,
        on_dismiss: DismissHandler,
    ) -> Self {
        Self {
            id: id.into(),
            menu,
            focus_handle,
            on_select,
            on_dismiss,
        }
    }
}

impl RenderOnce for FolderContextMenu {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let theme = cx.theme();
        let Some(anchor) = self.menu.anchor() else {
            return div().into_any_element();
        };
        let is_closing = self.menu.phase() == ContextMenuPhase::Closing;
        let highlighted = self.menu.highlighted();

        let on_dismiss = self.on_dismiss.clone();
        let items = self
            .menu
            .actions()
            .iter()
            .enumerate()
            .map(|(index, action)| match action {
                ContextAction::Separator { key } => div()
                    .id(SharedString::from(format!("separator-{}", key)))
                    .my_1()
                    .h_px()
                    .bg(theme.border)
                    .into_any_element(),
                ContextAction::Action {
                    label,
                    icon,
                    destructive,
                    command,
                } => {
                    let disabled = command.is_none();
                    let text_color = if *destructive {
                        theme.danger
                    } else if disabled {
                        theme.muted_foreground
                    } else {
                        theme.popover_foreground
                    };
                    let on_select = self.on_select.clone();

                    div()
                        .id(SharedString::from(format!("menu-item-{}", index)))
                        .px_3()
                        .py_1p5()
                        .rounded_md()
                        .flex()
                        .items_center()
                        .gap_2()
                        .text_sm()
                        .text_color(text_color)
                        .when(highlighted == Some(index), |el| el.bg(theme.list_hover))
                        .when(!disabled, |el| {
                            el.cursor_pointer()
                                .hover(|style| style.bg(theme.list_hover))
                                .on_click(move |_event, window, cx| on_select(index, window, cx))
                        })
                        .child(
                            Icon::new(SidebarIcon::from(*icon))
                                .with_size(Size::Small)
                                .text_color(text_color),
                        )
                        .child(label.clone())
                        .into_any_element()
                }
            });

        let panel = div()
            .id(self.id.clone())
            .key_context("FolderContextMenu")
            .track_focus(&self.focus_handle)
            .occlude()
            .min_w(px(180.))
            .p_1()
            .flex()
            .flex_col()
            .bg(theme.popover)
            .border_1()
            .border_color(theme.border)
            .rounded_lg()
            .shadow_lg()
            .on_mouse_down_out(move |_event, window, cx| on_dismiss(window, cx))
            .children(items);

        // Fade in on open, fade out while closing
        let panel = if is_closing {
            panel
                .with_animation(
                    SharedString::from(format!("{}-out", self.id)),
                    Animation::new(MENU_ANIMATION),
                    |el, delta| el.opacity(1.0 - delta),
                )
                .into_any_element()
        } else {
            panel
                .with_animation(
                    SharedString::from(format!("{}-in", self.id)),
                    Animation::new(MENU_ANIMATION),
                    |el, delta| el.opacity(delta),
                )
                .into_any_element()
        };

        deferred(
            anchored()
                .position(point(px(anchor.x), px(anchor.y)))
                .snap_to_window_with_margin(px(8.))
                .child(panel),
        )
        .with_priority(1)
        .into_any_element()
    }
}
