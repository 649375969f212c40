//! Generated placeholder images for entities with no resolvable artwork
//!
//! The placeholder is a self-contained data URI: a square SVG with the
//! entity's first letter centered on a fixed gray background. Pure string
//! formatting, no I/O, so the terminal rung of the fallback ladder can
//! never itself fail to load.

use base64::{engine::general_purpose::STANDARD, Engine as _};

/// Fill color behind the letter.
pub const BACKGROUND: &str = "#808080";
/// Letter color.
pub const FOREGROUND: &str = "#FFFFFF";

/// First displayable character of `text`, uppercased. Empty or
/// whitespace-only input yields `?`.
pub fn display_letter(text: &str) -> char {
    text.trim().chars().flat_map(char::to_uppercase).next().unwrap_or('?')
}

/// Generate a placeholder image locator for `text` at `size` pixels square.
///
/// Deterministic: identical inputs produce an identical data URI. The SVG
/// is base64-encoded so the result is safe to drop into any `src`
/// attribute without further escaping.
pub fn placeholder(text: &str, size: u32) -> String {
    let letter = display_letter(text);
    let font_size = (size / 2).max(1);

    let glyph = match letter {
        '&' => "&amp;".to_string(),
        '<' => "&lt;".to_string(),
        '>' => "&gt;".to_string(),
        c => c.to_string(),
    };

    let svg = format!(
        concat!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{0}" height="{0}" viewBox="0 0 {0} {0}">"#,
            r#"<rect width="{0}" height="{0}" fill="{1}"/>"#,
            r#"<text x="50%" y="50%" dy=".35em" text-anchor="middle" font-family="sans-serif" font-size="{2}" fill="{3}">{4}</text>"#,
            r#"</svg>"#
        ),
        size, BACKGROUND, font_size, FOREGROUND, glyph
    );

    format!("data:image/svg+xml;base64,{}", STANDARD.encode(svg))
}
