//! Unicode emoji detection and image naming

use serde::{Deserialize, Serialize};

/// Directory holding the 64px emoji images, relative to the asset root
pub const EMOJI_IMAGE_DIR: &str = "./img-apple-64";

const VARIATION_SELECTOR: char = '\u{FE0F}';
const ZERO_WIDTH_JOINER: char = '\u{200D}';
const KEYCAP: char = '\u{20E3}';

/// An emoji image drawn in place of the emoji text
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EmojiIcon {
    pub src: String,
    pub alt: String,
    pub draggable: bool,
}

impl EmojiIcon {
    /// Icon for a native emoji sequence such as "💼" or "👩‍💻"
    pub fn from_native(emoji: &str) -> Self {
        Self {
            src: emoji_image_path(emoji),
            alt: emoji.to_string(),
            draggable: false,
        }
    }

    /// Folder icon used when a title carries no emoji
    pub fn default_folder() -> Self {
        Self::from_native("📁")
    }
}

impl Default for EmojiIcon {
    fn default() -> Self {
        Self::default_folder()
    }
}

/// Image path for an emoji: lowercase hex code points joined by '-',
/// with variation selectors dropped.
pub fn emoji_image_path(emoji: &str) -> String {
    let code = emoji
        .chars()
        .filter(|&c| c != VARIATION_SELECTOR)
        .map(|c| format!("{:x}", c as u32))
        .collect::<Vec<_>>()
        .join("-");
    format!("{EMOJI_IMAGE_DIR}/{code}.png")
}

fn is_pictographic(c: char) -> bool {
    matches!(c as u32,
        0x1F000..=0x1F0FF
        | 0x1F10D..=0x1F1E5
        | 0x1F200..=0x1F2FF
        | 0x1F300..=0x1F5FF
        | 0x1F600..=0x1F64F
        | 0x1F680..=0x1F6FF
        | 0x1F700..=0x1F77F
        | 0x1F780..=0x1F7FF
        | 0x1F800..=0x1F8FF
        | 0x1F900..=0x1F9FF
        | 0x1FA00..=0x1FAFF
        | 0x2600..=0x27BF
        | 0x2300..=0x23FF
        | 0x2B05..=0x2B07
        | 0x2B1B..=0x2B1C
        | 0x2B50
        | 0x2B55
        | 0x3030
        | 0x303D
        | 0x3297
        | 0x3299)
}

/// Symbols in the older blocks that render as emoji without a selector.
/// The rest of those blocks default to text presentation.
fn has_emoji_presentation(c: char) -> bool {
    match c as u32 {
        0x2300..=0x27BF | 0x2B05..=0x2B07 | 0x2B1B..=0x2B1C | 0x2B50 | 0x2B55 | 0x3030
        | 0x303D | 0x3297 | 0x3299 => matches!(c as u32,
            0x231A..=0x231B
            | 0x23E9..=0x23EC
            | 0x23F0
            | 0x23F3
            | 0x2614..=0x2615
            | 0x2648..=0x2653
            | 0x267F
            | 0x2693
            | 0x26A1
            | 0x26AA..=0x26AB
            | 0x26BD..=0x26BE
            | 0x26C4..=0x26C5
            | 0x26CE
            | 0x26D4
            | 0x26EA
            | 0x26F2..=0x26F3
            | 0x26F5
            | 0x26FA
            | 0x26FD
            | 0x2705
            | 0x270A..=0x270B
            | 0x2728
            | 0x274C
            | 0x274E
            | 0x2753..=0x2755
            | 0x2757
            | 0x2795..=0x2797
            | 0x27B0
            | 0x27BF
            | 0x2B1B..=0x2B1C
            | 0x2B50
            | 0x2B55),
        _ => is_pictographic(c),
    }
}

fn is_regional_indicator(c: char) -> bool {
    matches!(c as u32, 0x1F1E6..=0x1F1FF)
}

fn is_skin_tone(c: char) -> bool {
    matches!(c as u32, 0x1F3FB..=0x1F3FF)
}

fn is_tag(c: char) -> bool {
    matches!(c as u32, 0xE0020..=0xE007F)
}

fn is_keycap_base(c: char) -> bool {
    c.is_ascii_digit() || c == '#' || c == '*'
}

/// Length in bytes of the emoji sequence starting at `s`, if any
fn emoji_len(s: &str) -> Option<usize> {
    let mut chars = s.char_indices().peekable();
    let (_, first) = chars.next()?;

    if is_keycap_base(first) {
        let mut end = first.len_utf8();
        let mut rest = s[end..].chars();
        let mut next = rest.next();
        if next == Some(VARIATION_SELECTOR) {
            end += VARIATION_SELECTOR.len_utf8();
            next = rest.next();
        }
        return (next == Some(KEYCAP)).then_some(end + KEYCAP.len_utf8());
    }

    if is_regional_indicator(first) {
        let second = s[first.len_utf8()..].chars().next();
        return match second {
            Some(c) if is_regional_indicator(c) => Some(first.len_utf8() + c.len_utf8()),
            _ => None,
        };
    }

    if !is_pictographic(first) {
        return None;
    }
    let mut end = first.len_utf8();
    // Text-style symbols (★, ✓, ⌘) only count when explicitly selected
    if !has_emoji_presentation(first) && s[end..].chars().next() != Some(VARIATION_SELECTOR) {
        return None;
    }

    while let Some(&(idx, c)) = chars.peek() {
        if c == VARIATION_SELECTOR || is_skin_tone(c) || is_tag(c) || c == KEYCAP {
            chars.next();
            end = idx + c.len_utf8();
        } else if c == ZERO_WIDTH_JOINER {
            let joined = s[idx + c.len_utf8()..].chars().next();
            match joined {
                Some(j) if is_pictographic(j) => {
                    chars.next();
                    chars.next();
                    end = idx + c.len_utf8() + j.len_utf8();
                }
                _ => break,
            }
        } else {
            break;
        }
    }
    Some(end)
}

/// A piece of plain text: either ordinary text or one emoji sequence
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmojiSegment<'a> {
    Text(&'a str),
    Emoji(&'a str),
}

/// Split text into runs of ordinary text and individual emoji sequences
pub fn split_emoji(text: &str) -> Vec<EmojiSegment<'_>> {
    let mut segments = Vec::new();
    let mut text_start = 0;
    let mut pos = 0;

    while pos < text.len() {
        if let Some(len) = emoji_len(&text[pos..]) {
            if text_start < pos {
                segments.push(EmojiSegment::Text(&text[text_start..pos]));
            }
            segments.push(EmojiSegment::Emoji(&text[pos..pos + len]));
            pos += len;
            text_start = pos;
        } else {
            pos += text[pos..].chars().next().map_or(1, char::len_utf8);
        }
    }

    if text_start < text.len() {
        segments.push(EmojiSegment::Text(&text[text_start..]));
    }
    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_folder_icon() {
        let icon = EmojiIcon::default_folder();
        assert_eq!(icon.src, "./img-apple-64/1f4c1.png");
        assert_eq!(icon.alt, "📁");
        assert!(!icon.draggable);
    }

    #[test]
    fn test_image_path_drops_variation_selector() {
        assert_eq!(emoji_image_path("❤️"), "./img-apple-64/2764.png");
        assert_eq!(emoji_image_path("👩‍💻"), "./img-apple-64/1f469-200d-1f4bb.png");
    }

    #[test]
    fn test_split_plain_text() {
        assert_eq!(split_emoji("Work"), vec![EmojiSegment::Text("Work")]);
        assert!(split_emoji("").is_empty());
    }

    #[test]
    fn test_split_leading_emoji() {
        assert_eq!(
            split_emoji("💼 Work"),
            vec![EmojiSegment::Emoji("💼"), EmojiSegment::Text(" Work")]
        );
    }

    #[test]
    fn test_split_sequences() {
        assert_eq!(
            split_emoji("a👍🏽b"),
            vec![
                EmojiSegment::Text("a"),
                EmojiSegment::Emoji("👍🏽"),
                EmojiSegment::Text("b"),
            ]
        );
        assert_eq!(split_emoji("🇺🇦"), vec![EmojiSegment::Emoji("🇺🇦")]);
        assert_eq!(split_emoji("1️⃣"), vec![EmojiSegment::Emoji("1️⃣")]);
        assert_eq!(split_emoji("👩‍💻"), vec![EmojiSegment::Emoji("👩‍💻")]);
    }

    #[test]
    fn test_text_style_symbols_need_selector() {
        assert_eq!(split_emoji("★ Favorites"), vec![EmojiSegment::Text("★ Favorites")]);
        assert_eq!(split_emoji("✓⌘"), vec![EmojiSegment::Text("✓⌘")]);
        assert_eq!(
            split_emoji("❤️ Love"),
            vec![EmojiSegment::Emoji("❤️"), EmojiSegment::Text(" Love")]
        );
        assert_eq!(split_emoji("⚡"), vec![EmojiSegment::Emoji("⚡")]);
        assert_eq!(split_emoji("👩‍❤️‍👨"), vec![EmojiSegment::Emoji("👩‍❤️‍👨")]);
    }

    #[test]
    fn test_digits_are_not_emoji() {
        assert_eq!(split_emoji("2024"), vec![EmojiSegment::Text("2024")]);
    }
}
