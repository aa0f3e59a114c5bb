//! Card layout emitted as SVG markup
//!
//! The card is laid out on a fixed 448px-wide canvas:
//!
//! ```text
//! +---------------------------------------+
//! |           Eid Mubarak 1445            |
//! |              সালামি QR                 |
//! |   সালামি QR - সালামি দেন, সহজায় স্ক্যান     |
//! |                                       |
//! |   [ profile ]          [ QR code ]    |
//! |     name                 phone        |
//! |                                       |
//! |   [        "message" (optional)   ]   |
//! |                                       |
//! |          Created by ...               |
//! +---------------------------------------+
//! ```

use crate::state::{CardDraft, ImagePayload, ImageSlot};
use quick_xml::escape::escape;
use std::fmt::Write;

/// Logical card width in px
pub const CARD_WIDTH: f32 = 448.0;
const PADDING: f32 = 24.0;
const INNER_WIDTH: f32 = CARD_WIDTH - 2.0 * PADDING;
const COLUMN_GAP: f32 = 16.0;
const IMAGE_BOX: f32 = 128.0;
const MESSAGE_PADDING: f32 = 12.0;
const MESSAGE_LINE_HEIGHT: f32 = 20.0;
/// Characters per message line at 14px italic inside the message panel
const MESSAGE_WRAP_CHARS: usize = 48;
/// Characters that fit under an image column
const CAPTION_MAX_CHARS: usize = 26;

pub const EID_GREETING: &str = "Eid Mubarak 1445";
pub const CARD_TITLE: &str = "সালামি QR";
pub const CARD_TAGLINE: &str = "সালামি QR - সালামি দেন, সহজায় স্ক্যান";
pub const NAME_PLACEHOLDER: &str = "Your Name";
pub const PHONE_PLACEHOLDER: &str = "+880 1X XXX XXX XX";

const FONT_FAMILY: &str = "'Noto Sans Bengali', 'Noto Sans', 'DejaVu Sans', sans-serif";

const AMBER_500: &str = "#f59e0b";
const AMBER_200: &str = "#fde68a";
const RED_500: &str = "#ef4444";
const GRAY_50: &str = "#f9fafb";
const GRAY_300: &str = "#d1d5db";
const GRAY_400: &str = "#9ca3af";
const GRAY_500: &str = "#6b7280";
const GRAY_600: &str = "#4b5563";
const GRAY_900: &str = "#111827";

/// Render the card for `draft` as a standalone SVG document
pub fn card_svg(draft: &CardDraft, footer: &str) -> String {
    let message_lines = if draft.message.is_empty() {
        Vec::new()
    } else {
        wrap_text(&format!("\"{}\"", draft.message), MESSAGE_WRAP_CHARS)
    };
    let height = card_height(message_lines.len(), !footer.is_empty());

    let mut svg = String::with_capacity(4096);
    let _ = write!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{CARD_WIDTH}" height="{height}" viewBox="0 0 {CARD_WIDTH} {height}" font-family="{FONT_FAMILY}">"#
    );
    let _ = write!(
        svg,
        r#"<rect x="1" y="1" width="{}" height="{}" rx="8" fill="white" stroke="{AMBER_200}" stroke-width="2"/>"#,
        CARD_WIDTH - 2.0,
        height - 2.0
    );

    let center = CARD_WIDTH / 2.0;
    let mut y = PADDING;

    // Header
    push_text(&mut svg, center, y + 17.0, 16.0, "500", AMBER_500, false, EID_GREETING);
    y += 24.0 + 8.0;
    push_text(&mut svg, center, y + 32.0, 36.0, "700", RED_500, false, CARD_TITLE);
    y += 40.0 + 4.0;
    push_text(&mut svg, center, y + 15.0, 14.0, "400", GRAY_600, false, CARD_TAGLINE);
    y += 20.0 + 24.0;

    // Image row
    let column_width = (INNER_WIDTH - COLUMN_GAP) / 2.0;
    let left_center = PADDING + column_width / 2.0;
    let right_center = PADDING + column_width + COLUMN_GAP + column_width / 2.0;

    push_image_slot(&mut svg, ImageSlot::Profile, draft.image(ImageSlot::Profile), left_center, y);
    push_image_slot(&mut svg, ImageSlot::Qr, draft.image(ImageSlot::Qr), right_center, y);
    y += IMAGE_BOX + 8.0;

    let name = caption(&draft.name, NAME_PLACEHOLDER);
    let phone = caption(&draft.phone_number, PHONE_PLACEHOLDER);
    push_text(&mut svg, left_center, y + 15.0, 14.0, "500", GRAY_900, false, &name);
    push_text(&mut svg, right_center, y + 15.0, 14.0, "500", GRAY_900, false, &phone);
    y += 20.0;

    // Message panel
    if !message_lines.is_empty() {
        y += 16.0;
        let panel_height = message_panel_height(message_lines.len());
        let _ = write!(
            svg,
            r#"<rect x="{PADDING}" y="{y}" width="{INNER_WIDTH}" height="{panel_height}" rx="6" fill="{GRAY_50}"/>"#
        );
        for (i, line) in message_lines.iter().enumerate() {
            let baseline = y + MESSAGE_PADDING + 15.0 + i as f32 * MESSAGE_LINE_HEIGHT;
            push_text(&mut svg, center, baseline, 14.0, "400", GRAY_900, true, line);
        }
        y += panel_height;
    }

    // Footer
    if !footer.is_empty() {
        y += 24.0;
        push_text(&mut svg, center, y + 12.0, 12.0, "400", GRAY_500, false, footer);
    }

    svg.push_str("</svg>");
    svg
}

/// Total card height for a given number of message lines
pub fn card_height(message_lines: usize, has_footer: bool) -> f32 {
    // header block + image row + captions
    let mut height = PADDING + 32.0 + 44.0 + 44.0 + IMAGE_BOX + 8.0 + 20.0;
    if message_lines > 0 {
        height += 16.0 + message_panel_height(message_lines);
    }
    if has_footer {
        height += 24.0 + 16.0;
    }
    height + PADDING
}

fn message_panel_height(lines: usize) -> f32 {
    2.0 * MESSAGE_PADDING + lines as f32 * MESSAGE_LINE_HEIGHT
}

#[allow(clippy::too_many_arguments)]
fn push_text(
    svg: &mut String,
    x: f32,
    baseline: f32,
    size: f32,
    weight: &str,
    fill: &str,
    italic: bool,
    text: &str,
) {
    let style = if italic { "italic" } else { "normal" };
    let _ = write!(
        svg,
        r#"<text x="{x}" y="{baseline}" font-size="{size}" font-weight="{weight}" font-style="{style}" fill="{fill}" text-anchor="middle">{}</text>"#,
        escape(&xml_chars(text))
    );
}

/// Drop characters XML 1.0 does not allow in a document
fn xml_chars(text: &str) -> String {
    text.chars()
        .filter(|&c| {
            !matches!(c, '\u{FFFE}' | '\u{FFFF}')
                && (!c.is_control() || matches!(c, '\t' | '\n' | '\r'))
        })
        .collect()
}

fn push_image_slot(
    svg: &mut String,
    slot: ImageSlot,
    payload: Option<&ImagePayload>,
    center_x: f32,
    top: f32,
) {
    let x = center_x - IMAGE_BOX / 2.0;
    match payload {
        Some(payload) => {
            let clip_id = match slot {
                ImageSlot::Profile => "clip-profile",
                ImageSlot::Qr => "clip-qr",
            };
            let _ = write!(
                svg,
                r#"<clipPath id="{clip_id}"><rect x="{x}" y="{top}" width="{IMAGE_BOX}" height="{IMAGE_BOX}" rx="6"/></clipPath>"#
            );
            // Profile pictures fill the box, QR codes must stay whole
            let (inset, aspect) = match slot {
                ImageSlot::Profile => (0.0, "xMidYMid slice"),
                ImageSlot::Qr => (4.0, "xMidYMid meet"),
            };
            if inset > 0.0 {
                let _ = write!(
                    svg,
                    r#"<rect x="{x}" y="{top}" width="{IMAGE_BOX}" height="{IMAGE_BOX}" rx="6" fill="white"/>"#
                );
            }
            let size = IMAGE_BOX - 2.0 * inset;
            let _ = write!(
                svg,
                r#"<image x="{}" y="{}" width="{size}" height="{size}" preserveAspectRatio="{aspect}" clip-path="url(#{clip_id})" href="{}"/>"#,
                x + inset,
                top + inset,
                payload.to_data_url()
            );
        }
        None => {
            let _ = write!(
                svg,
                r#"<rect x="{}" y="{}" width="{}" height="{}" rx="6" fill="none" stroke="{GRAY_300}" stroke-width="2" stroke-dasharray="6 4"/>"#,
                x + 1.0,
                top + 1.0,
                IMAGE_BOX - 2.0,
                IMAGE_BOX - 2.0
            );
            push_text(
                svg,
                center_x,
                top + IMAGE_BOX / 2.0 + 4.0,
                12.0,
                "400",
                GRAY_400,
                false,
                slot.label(),
            );
        }
    }
}

/// Caption text under an image column, with placeholder and truncation
pub fn caption(value: &str, placeholder: &str) -> String {
    if value.is_empty() {
        return placeholder.to_string();
    }
    if value.chars().count() <= CAPTION_MAX_CHARS {
        value.to_string()
    } else {
        let kept: String = value.chars().take(CAPTION_MAX_CHARS - 1).collect();
        format!("{kept}…")
    }
}

/// Word-wrap text to at most `max_chars` characters per line.
/// Explicit newlines are kept; words longer than a line are split.
pub fn wrap_text(text: &str, max_chars: usize) -> Vec<String> {
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        let mut current = String::new();
        let mut current_len = 0;
        for word in paragraph.split_whitespace() {
            let mut word: Vec<char> = word.chars().collect();
            while word.len() > max_chars {
                if current_len > 0 {
                    lines.push(std::mem::take(&mut current));
                    current_len = 0;
                }
                let rest = word.split_off(max_chars);
                lines.push(word.into_iter().collect());
                word = rest;
            }
            if current_len > 0 && current_len + 1 + word.len() > max_chars {
                lines.push(std::mem::take(&mut current));
                current_len = 0;
            }
            if current_len > 0 {
                current.push(' ');
                current_len += 1;
            }
            current_len += word.len();
            current.extend(word);
        }
        if current_len > 0 || paragraph.trim().is_empty() {
            lines.push(current);
        }
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::ImageEncoding;

    fn draft(name: &str, phone: &str, message: &str) -> CardDraft {
        CardDraft {
            name: name.to_string(),
            phone_number: phone.to_string(),
            message: message.to_string(),
            ..Default::default()
        }
    }

    mod svg {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_empty_draft_shows_placeholders() {
            let svg = card_svg(&CardDraft::default(), "Created by Monsur Alam");
            assert!(svg.starts_with("<svg"));
            assert!(svg.ends_with("</svg>"));
            assert!(svg.contains(NAME_PLACEHOLDER));
            assert!(svg.contains(PHONE_PLACEHOLDER));
            assert!(svg.contains("Profile Picture"));
            assert!(svg.contains("bKash QR Code"));
            assert!(svg.contains(CARD_TITLE));
            assert!(!svg.contains("<image"));
        }

        #[test]
        fn test_text_is_escaped() {
            let svg = card_svg(&draft("<Tom & Jerry>", "017", ""), "");
            assert!(svg.contains("&lt;Tom &amp; Jerry&gt;"));
            assert!(!svg.contains("<Tom"));
        }

        #[test]
        fn test_control_characters_are_dropped() {
            let svg = card_svg(&draft("Ali\u{1}ce\u{0}", "017\u{FFFF}", "a\u{7f}b"), "");
            assert!(svg.contains(">Alice</text>"));
            assert!(svg.contains(">017</text>"));
            assert!(!svg.chars().any(|c| c.is_control() && c != '\n'));
            assert!(!svg.contains('\u{FFFF}'));
        }

        #[test]
        fn test_message_panel_only_when_message_present() {
            let without = card_svg(&draft("Alice", "017", ""), "");
            let with = card_svg(&draft("Alice", "017", "Eid Mubarak"), "");
            assert!(!without.contains("font-style=\"italic\""));
            assert!(with.contains("font-style=\"italic\""));
            assert!(with.contains("&quot;Eid Mubarak&quot;"));
        }

        #[test]
        fn test_images_embedded_as_data_urls() {
            let mut d = draft("Alice", "017", "");
            d.qr_image = Some(ImagePayload {
                bytes: b"png".to_vec(),
                encoding: ImageEncoding::Png,
                file_name: "qr.png".to_string(),
                width: 1,
                height: 1,
            });
            let svg = card_svg(&d, "");
            assert!(svg.contains("href=\"data:image/png;base64,cG5n\""));
            assert!(svg.contains("xMidYMid meet"));
            assert!(svg.contains("Profile Picture"));
        }

        #[test]
        fn test_height_matches_document() {
            let svg = card_svg(&draft("Alice", "017", "hello"), "footer");
            let expected = card_height(1, true);
            assert!(svg.contains(&format!("height=\"{expected}\"")));
        }
    }

    mod heights {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_message_adds_height() {
            assert!(card_height(1, true) > card_height(0, true));
            assert!(card_height(3, true) > card_height(1, true));
        }

        #[test]
        fn test_footer_adds_height() {
            assert!(card_height(0, true) > card_height(0, false));
        }
    }

    mod captions {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_placeholder_when_empty() {
            assert_eq!(caption("", NAME_PLACEHOLDER), "Your Name");
        }

        #[test]
        fn test_short_value_kept() {
            assert_eq!(caption("Alice", NAME_PLACEHOLDER), "Alice");
        }

        #[test]
        fn test_long_value_truncated() {
            let long = "A".repeat(40);
            let out = caption(&long, NAME_PLACEHOLDER);
            assert_eq!(out.chars().count(), CAPTION_MAX_CHARS);
            assert!(out.ends_with('…'));
        }
    }

    mod wrapping {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_short_text_single_line() {
            assert_eq!(wrap_text("Eid Mubarak", 20), vec!["Eid Mubarak"]);
        }

        #[test]
        fn test_wraps_on_word_boundary() {
            assert_eq!(
                wrap_text("one two three four", 9),
                vec!["one two", "three", "four"]
            );
        }

        #[test]
        fn test_keeps_explicit_newlines() {
            assert_eq!(wrap_text("a\n\nb", 10), vec!["a", "", "b"]);
        }

        #[test]
        fn test_splits_long_words() {
            assert_eq!(wrap_text("abcdefgh", 3), vec!["abc", "def", "gh"]);
        }

        #[test]
        fn test_counts_chars_not_bytes() {
            // Each Bangla word here is several bytes per char
            let lines = wrap_text("ঈদ মোবারক", 9);
            assert_eq!(lines, vec!["ঈদ মোবারক"]);
        }
    }
}
