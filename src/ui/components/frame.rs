//! Bordered box primitives shared by the input and output components.
//!
//! ```text
//! [margin] ┌─ Title ──────────────┐ [margin]
//! [margin] │ content              │ [margin]
//! [margin] └──────────── 12 / 500 ┘ [margin]
//! ```

use crate::app::state::BOX_MARGIN;
use crate::ui::helpers::{display_width, position_cursor, truncate_to_width};
use crate::ui::theme::Theme;

/// Width between the two vertical borders.
fn inner_width(cols: usize) -> usize {
    cols.saturating_sub(BOX_MARGIN * 2 + 2)
}

/// Renders the top border with a title. Returns the next row.
pub fn render_top(row: usize, title: &str, border: &str, cols: usize) -> usize {
    let inner = inner_width(cols);
    let title = truncate_to_width(&format!(" {title} "), inner.saturating_sub(1));
    let fill = inner.saturating_sub(display_width(&title) + 1);

    position_cursor(row, 1);
    print!("{}", " ".repeat(BOX_MARGIN));
    print!("{}", Theme::fg(border));
    print!("┌─{title}{}┐", "─".repeat(fill));
    print!("{}", Theme::reset());
    print!("{}", " ".repeat(BOX_MARGIN));
    row + 1
}

/// Renders one content line in `text_color`, padded to the box width.
/// Returns the next row.
pub fn render_line(row: usize, line: &str, border: &str, text_color: &str, cols: usize) -> usize {
    let content_width = inner_width(cols).saturating_sub(2);
    let line = truncate_to_width(line, content_width);
    let padding = content_width.saturating_sub(display_width(&line));

    position_cursor(row, 1);
    print!("{}", " ".repeat(BOX_MARGIN));
    print!("{}│ ", Theme::fg(border));
    print!("{}{line}", Theme::fg(text_color));
    print!("{}", " ".repeat(padding));
    print!("{} │", Theme::fg(border));
    print!("{}", Theme::reset());
    print!("{}", " ".repeat(BOX_MARGIN));
    row + 1
}

/// Renders the bottom border, optionally with a right-aligned label in
/// `label_color`. Returns the next row.
pub fn render_bottom(
    row: usize,
    label: Option<(&str, &str)>,
    border: &str,
    cols: usize,
) -> usize {
    let inner = inner_width(cols);

    position_cursor(row, 1);
    print!("{}", " ".repeat(BOX_MARGIN));
    print!("{}└", Theme::fg(border));
    match label {
        Some((text, color)) if display_width(text) + 3 <= inner => {
            let text = format!(" {text} ");
            print!("{}", "─".repeat(inner - display_width(&text) - 1));
            print!("{}{text}", Theme::fg(color));
            print!("{}─", Theme::fg(border));
        }
        _ => print!("{}", "─".repeat(inner)),
    }
    print!("┘{}", Theme::reset());
    print!("{}", " ".repeat(BOX_MARGIN));
    row + 1
}
