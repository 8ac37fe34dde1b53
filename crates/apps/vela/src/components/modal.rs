//! Modal overlay for folder actions (share, edit, delete, limit reached)

use gpui::prelude::*;
use gpui::*;
use gpui_component::ActiveTheme;
use gpui_component::button::{Button, ButtonVariants};
use std::rc::Rc;

type ClickHandler = Rc<dyn Fn(&mut Window, &mut App)>;

/// Confirmation button of a modal
struct ModalAction {
    label: SharedString,
    destructive: bool,
    on_click: ClickHandler,
}

#[derive(IntoElement)]
pub struct Modal {
    title: SharedString,
    body: SharedString,
    close_label: SharedString,
    on_close: ClickHandler,
    action: Option<ModalAction>,
}

impl Modal {
    pub fn new(
        title: impl Into<SharedString>,
        body: impl Into<SharedString>,
        close_label: impl Into<SharedString>,
        on_close: ClickHandler,
    ) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            close_label: close_label.into(),
            on_close,
            action: None,
        }
    }

    /// Add a confirm button next to the close button
    pub fn action(
        mut self,
        label: impl Into<SharedString>,
        destructive: bool,
        on_click: ClickHandler,
    ) -> Self {
        self.action = Some(ModalAction {
            label: label.into(),
            destructive,
            on_click,
        });
        self
    }
}

impl RenderOnce for Modal {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let theme = cx.theme();
        let on_close = self.on_close.clone();
        let on_backdrop = self.on_close;

        let confirm = self.action.map(|action| {
            let on_click = action.on_click;
            let button = Button::new("modal-confirm")
                .label(action.label)
                .on_click(move |_event, window, cx| on_click(window, cx));
            if action.destructive {
                button.danger()
            } else {
                button.primary()
            }
        });

        // Full-screen overlay with centered modal
        div()
            .absolute()
            .inset_0()
            .flex()
            .items_center()
            .justify_center()
            // Semi-transparent backdrop
            .child(
                div()
                    .id("modal-backdrop")
                    .absolute()
                    .inset_0()
                    .bg(hsla(0., 0., 0., 0.5))
                    .on_click(move |_event, window, cx| on_backdrop(window, cx)),
            )
            .child(
                div()
                    .id("modal")
                    .occlude()
                    .relative()
                    .w(px(360.))
                    .bg(theme.background)
                    .border_1()
                    .border_color(theme.border)
                    .rounded_lg()
                    .shadow_lg()
                    .p_4()
                    .flex()
                    .flex_col()
                    .gap_3()
                    .child(
                        div()
                            .text_lg()
                            .font_weight(FontWeight::BOLD)
                            .text_color(theme.foreground)
                            .child(self.title),
                    )
                    .child(
                        div()
                            .text_sm()
                            .text_color(theme.muted_foreground)
                            .child(self.body),
                    )
                    .child(
                        div()
                            .flex()
                            .justify_end()
                            .gap_2()
                            .child(
                                Button::new("modal-close")
                                    .label(self.close_label)
                                    .ghost()
                                    .on_click(move |_event, window, cx| on_close(window, cx)),
                            )
                            .children(confirm),
                    ),
            )
    }
}
