//! Shared rendering utilities and helpers.
//!
//! Low-level text layout used by the view model and the components. Widths
//! are terminal columns as reported by `unicode-width`, so double-width text
//! (the Korean locale, for one) is padded and wrapped by how much of the
//! screen it takes, never split inside a code point.
//!
//! # Example
//!
//! ```rust
//! use biztone::ui::helpers::{display_width, wrap_text};
//!
//! assert_eq!(wrap_text("abcdef\ngh", 4), vec!["abcd", "ef", "gh"]);
//! assert_eq!(display_width("안녕"), 4);
//! ```

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Positions the cursor at a specific row and column.
///
/// Uses ANSI escape sequence `\u{1b}[{row};{col}H`. Coordinates are
/// 1-indexed.
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Number of terminal columns `text` occupies.
#[must_use]
pub fn display_width(text: &str) -> usize {
    text.width()
}

fn char_width(c: char) -> usize {
    c.width().unwrap_or(0)
}

/// Cuts `text` to at most `width` columns.
///
/// A cut string ends in `…` so the user can tell something is hidden.
#[must_use]
pub fn truncate_to_width(text: &str, width: usize) -> String {
    if display_width(text) <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let budget = width - 1;
    let mut used = 0;
    let mut cut = String::new();
    for c in text.chars() {
        let w = char_width(c);
        if used + w > budget {
            break;
        }
        used += w;
        cut.push(c);
    }
    cut.push('…');
    cut
}

/// Splits `text` into display lines no wider than `width` columns.
///
/// Explicit line breaks are kept (an empty line stays an empty line) and
/// longer lines are hard-wrapped. A character wider than `width` still gets
/// a line of its own. Always returns at least one line.
#[must_use]
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();

    for segment in text.split('\n') {
        let mut line = String::new();
        let mut used = 0;
        for c in segment.chars() {
            let w = char_width(c);
            if used + w > width && !line.is_empty() {
                lines.push(std::mem::take(&mut line));
                used = 0;
            }
            line.push(c);
            used += w;
        }
        lines.push(line);
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_keeps_blank_lines() {
        assert_eq!(wrap_text("a\n\nb", 10), vec!["a", "", "b"]);
        assert_eq!(wrap_text("", 10), vec![""]);
        assert_eq!(wrap_text("a\n", 10), vec!["a", ""]);
    }

    #[test]
    fn wrap_counts_columns_not_bytes() {
        let lines = wrap_text("안녕하세요", 4);
        assert_eq!(lines, vec!["안녕", "하세", "요"]);
        assert_eq!(wrap_text("ab안녕", 3), vec!["ab", "안", "녕"]);
    }

    #[test]
    fn wrap_zero_width_does_not_loop() {
        assert_eq!(wrap_text("ab", 0), vec!["a", "b"]);
        assert_eq!(wrap_text("안녕", 1), vec!["안", "녕"]);
    }

    #[test]
    fn truncate_marks_cut_text() {
        assert_eq!(truncate_to_width("hello", 10), "hello");
        assert_eq!(truncate_to_width("hello", 5), "hello");
        assert_eq!(truncate_to_width("hello world", 5), "hell…");
        assert_eq!(truncate_to_width("hello", 0), "");
    }

    #[test]
    fn truncate_fits_wide_text_in_columns() {
        let cut = truncate_to_width("변환할 내용을 입력해주세요.", 8);
        assert_eq!(cut, "변환할 …");
        assert!(display_width(&cut) <= 8);
        assert_eq!(display_width("복사 done"), 9);
    }
}
