//! Emoji names
//!
//! Lookup from an emoji glyph to its GitHub shortcode name, used to phrase
//! matches such as "a construction emoji". Glyphs without a shortcode are
//! rendered as quoted text instead.

const VARIATION_SELECTOR: char = '\u{FE0F}';

/// Shortcode name of an emoji glyph, if it has one
///
/// Glyphs written with or without the emoji variation selector resolve to
/// the same name.
#[must_use]
pub fn emoji_name(glyph: &str) -> Option<&'static str> {
    if glyph.is_empty() {
        return None;
    }
    lookup(glyph)
        .or_else(|| lookup(glyph.trim_end_matches(VARIATION_SELECTOR)))
        .or_else(|| lookup(&format!("{glyph}{VARIATION_SELECTOR}")))
}

fn lookup(glyph: &str) -> Option<&'static str> {
    emojis::get(glyph).and_then(emojis::Emoji::shortcode)
}
