//! Formatted text to title node conversion

use serde::{Deserialize, Serialize};

use super::emoji::{EmojiIcon, EmojiSegment, split_emoji};
use crate::models::{TextEntity, TextEntityKind};

/// An inline node of a rendered title
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TitleNode {
    Text(String),
    Formatted {
        kind: TextEntityKind,
        children: Vec<TitleNode>,
    },
    Emoji(EmojiIcon),
    CustomEmoji {
        document_id: String,
        alt: String,
        animated: bool,
    },
}

impl TitleNode {
    pub fn text(text: impl Into<String>) -> Self {
        TitleNode::Text(text.into())
    }
}

/// Options controlling how entities are rendered
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Render custom emoji as static images
    pub no_custom_emoji_playback: bool,
}

/// Render text and its formatting spans into a sequence of title nodes.
///
/// Unicode emoji in the text become [`TitleNode::Emoji`] nodes. Entities
/// that overlap a preceding sibling are clipped to the parent range; spans
/// pointing past the end of the text are clamped.
pub fn render_text_with_entities(
    text: &str,
    entities: &[TextEntity],
    options: RenderOptions,
) -> Vec<TitleNode> {
    let mut spans: Vec<Span<'_>> = entities
        .iter()
        .filter_map(|entity| {
            let start = utf16_to_byte(text, entity.offset);
            let end = utf16_to_byte(text, entity.end());
            (start < end).then_some(Span {
                kind: &entity.kind,
                start,
                end,
            })
        })
        .collect();
    // Outer spans first when two start at the same position
    spans.sort_by(|a, b| a.start.cmp(&b.start).then(b.end.cmp(&a.end)));

    render_range(text, 0, text.len(), &spans, options)
}

/// Flatten rendered nodes back to their text content
pub fn plain_text(nodes: &[TitleNode]) -> String {
    let mut out = String::new();
    collect_text(nodes, &mut out);
    out
}

fn collect_text(nodes: &[TitleNode], out: &mut String) {
    for node in nodes {
        match node {
            TitleNode::Text(text) => out.push_str(text),
            TitleNode::Formatted { children, .. } => collect_text(children, out),
            TitleNode::Emoji(icon) => out.push_str(&icon.alt),
            TitleNode::CustomEmoji { alt, .. } => out.push_str(alt),
        }
    }
}

struct Span<'a> {
    kind: &'a TextEntityKind,
    start: usize,
    end: usize,
}

fn render_range(
    text: &str,
    start: usize,
    end: usize,
    spans: &[Span<'_>],
    options: RenderOptions,
) -> Vec<TitleNode> {
    let mut nodes = Vec::new();
    let mut cursor = start;
    let mut i = 0;

    while i < spans.len() {
        let span = &spans[i];
        let span_start = span.start.max(cursor);
        let span_end = span.end.min(end);
        if span_start >= span_end {
            i += 1;
            continue;
        }

        push_plain(&text[cursor..span_start], &mut nodes);

        // Spans nested inside this one are rendered as its children
        let nested_end = spans[i + 1..]
            .iter()
            .position(|s| s.start >= span_end)
            .map_or(spans.len(), |p| i + 1 + p);
        let nested = &spans[i + 1..nested_end];

        let node = match span.kind {
            TextEntityKind::CustomEmoji { document_id } => TitleNode::CustomEmoji {
                document_id: document_id.clone(),
                alt: text[span_start..span_end].to_string(),
                animated: !options.no_custom_emoji_playback,
            },
            kind => TitleNode::Formatted {
                kind: kind.clone(),
                children: render_range(text, span_start, span_end, nested, options),
            },
        };
        nodes.push(node);

        cursor = span_end;
        i = nested_end;
    }

    push_plain(&text[cursor..end], &mut nodes);
    nodes
}

fn push_plain(text: &str, nodes: &mut Vec<TitleNode>) {
    for segment in split_emoji(text) {
        nodes.push(match segment {
            EmojiSegment::Text(t) => TitleNode::text(t),
            EmojiSegment::Emoji(e) => TitleNode::Emoji(EmojiIcon::from_native(e)),
        });
    }
}

/// Convert a UTF-16 offset to a byte offset, clamped to the text length
fn utf16_to_byte(text: &str, offset: usize) -> usize {
    let mut units = 0;
    for (idx, c) in text.char_indices() {
        if units >= offset {
            return idx;
        }
        units += c.len_utf16();
    }
    text.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bold(offset: usize, length: usize) -> TextEntity {
        TextEntity::new(TextEntityKind::Bold, offset, length)
    }

    #[test]
    fn test_plain_text_is_single_node() {
        let nodes = render_text_with_entities("Work", &[], RenderOptions::default());
        assert_eq!(nodes, vec![TitleNode::text("Work")]);
    }

    #[test]
    fn test_empty_text_has_no_nodes() {
        assert!(render_text_with_entities("", &[], RenderOptions::default()).is_empty());
    }

    #[test]
    fn test_bold_span() {
        let nodes = render_text_with_entities("My Work", &[bold(3, 4)], RenderOptions::default());
        assert_eq!(
            nodes,
            vec![
                TitleNode::text("My "),
                TitleNode::Formatted {
                    kind: TextEntityKind::Bold,
                    children: vec![TitleNode::text("Work")],
                },
            ]
        );
    }

    #[test]
    fn test_nested_spans() {
        let entities = [bold(0, 6), TextEntity::new(TextEntityKind::Italic, 2, 2)];
        let nodes = render_text_with_entities("abcdef", &entities, RenderOptions::default());
        assert_eq!(
            nodes,
            vec![TitleNode::Formatted {
                kind: TextEntityKind::Bold,
                children: vec![
                    TitleNode::text("ab"),
                    TitleNode::Formatted {
                        kind: TextEntityKind::Italic,
                        children: vec![TitleNode::text("cd")],
                    },
                    TitleNode::text("ef"),
                ],
            }]
        );
    }

    #[test]
    fn test_offsets_are_utf16() {
        // The emoji is two UTF-16 code units
        let nodes = render_text_with_entities("💼 Work", &[bold(3, 4)], RenderOptions::default());
        assert_eq!(nodes.len(), 3);
        assert!(matches!(&nodes[0], TitleNode::Emoji(icon) if icon.alt == "💼"));
        assert_eq!(nodes[1], TitleNode::text(" "));
        assert_eq!(plain_text(&nodes), "💼 Work");
    }

    #[test]
    fn test_custom_emoji_playback() {
        let entity = TextEntity::new(
            TextEntityKind::CustomEmoji {
                document_id: "42".to_string(),
            },
            0,
            2,
        );
        let nodes = render_text_with_entities(
            "🔥 Hot",
            std::slice::from_ref(&entity),
            RenderOptions {
                no_custom_emoji_playback: true,
            },
        );
        assert_eq!(
            nodes[0],
            TitleNode::CustomEmoji {
                document_id: "42".to_string(),
                alt: "🔥".to_string(),
                animated: false,
            }
        );
    }

    #[test]
    fn test_out_of_range_entity_is_clamped() {
        let nodes = render_text_with_entities("Hi", &[bold(1, 10)], RenderOptions::default());
        assert_eq!(plain_text(&nodes), "Hi");
        assert_eq!(nodes.len(), 2);
    }

    #[test]
    fn test_huge_entity_offset_is_ignored() {
        let nodes =
            render_text_with_entities("Hi", &[bold(usize::MAX, 1)], RenderOptions::default());
        assert_eq!(plain_text(&nodes), "Hi");
    }
}
