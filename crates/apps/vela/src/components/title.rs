//! Rendering of folder titles and emoji icons

use folders::{EmojiIcon, TextEntityKind, TitleNode};
use gpui::prelude::*;
use gpui::*;

/// Draw an emoji image, falling back to the native glyph when the image
/// is not bundled
pub fn emoji_image(icon: &EmojiIcon, size: Pixels) -> impl IntoElement {
    let alt = icon.alt.clone();
    let path = SharedString::from(icon.src.trim_start_matches("./").to_string());

    img(path).size(size).with_fallback(move || {
        div()
            .flex()
            .items_center()
            .justify_center()
            .child(alt.clone())
            .into_any_element()
    })
}

/// Render title nodes as an inline row
pub fn render_title(nodes: &[TitleNode], spoiler_bg: Hsla) -> Div {
    div()
        .flex()
        .flex_row()
        .items_center()
        .overflow_hidden()
        .children(nodes.iter().map(|node| render_node(node, spoiler_bg)))
}

fn render_node(node: &TitleNode, spoiler_bg: Hsla) -> AnyElement {
    match node {
        TitleNode::Text(text) => div().child(text.clone()).into_any_element(),
        TitleNode::Emoji(icon) => emoji_image(icon, px(14.)).into_any_element(),
        TitleNode::CustomEmoji { alt, .. } => div().child(alt.clone()).into_any_element(),
        TitleNode::Formatted { kind, children } => {
            let inner = div()
                .flex()
                .flex_row()
                .children(children.iter().map(|child| render_node(child, spoiler_bg)));
            match kind {
                TextEntityKind::Bold => inner.font_weight(FontWeight::BOLD),
                TextEntityKind::Italic => inner.italic(),
                TextEntityKind::Underline => inner.underline(),
                TextEntityKind::Strike => inner.line_through(),
                TextEntityKind::Code => inner.font_family("monospace"),
                TextEntityKind::Spoiler => inner.bg(spoiler_bg).rounded_sm(),
                TextEntityKind::CustomEmoji { .. } => inner,
            }
            .into_any_element()
        }
    }
}
