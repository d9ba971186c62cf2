//! Formatting utilities for terminal output

use crate::core::char_len;

/// Circled length marker shown next to each found word, e.g. `④`
///
/// Falls back to `(n)` past 20.
#[must_use]
pub fn length_badge(word: &str) -> String {
    let length = char_len(word);
    match length {
        // U+2460 CIRCLED DIGIT ONE through U+2473 CIRCLED NUMBER TWENTY
        1..=20 => char::from_u32(0x245F + length as u32)
            .map_or_else(|| format!("({length})"), String::from),
        _ => format!("({length})"),
    }
}

/// Text bar `width` cells wide, filled in proportion to `value / max`
#[must_use]
pub fn create_progress_bar(value: usize, max: usize, width: usize) -> String {
    let filled = if max == 0 { 0 } else { value * width / max };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// "found / total" progress for a round
#[must_use]
pub fn words_progress(found: usize, total: usize) -> String {
    format!("Words: {found} / {total}")
}
