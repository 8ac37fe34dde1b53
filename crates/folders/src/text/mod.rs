//! Rendering of formatted text into inline title nodes
//!
//! Emoji are surfaced as their own node variant so that consumers can
//! pick them out without inspecting how a node would be drawn.

mod emoji;
mod render;

pub use emoji::{EMOJI_IMAGE_DIR, EmojiIcon, EmojiSegment, emoji_image_path, split_emoji};
pub use render::{RenderOptions, TitleNode, plain_text, render_text_with_entities};
