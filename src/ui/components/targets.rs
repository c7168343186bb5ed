//! Conversion target selector renderer.

use crate::ui::helpers::{display_width, position_cursor};
use crate::app::state::BOX_MARGIN;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::TargetBarInfo;

/// Renders the target chips on one row.
///
/// ```text
///   Target:  1 Boss   2 Colleague   3 Customer
/// ```
///
/// The selected chip uses the selection colors; chips that do not fit are
/// dropped from the right. Returns the next available row.
pub fn render_targets(row: usize, targets: &TargetBarInfo, theme: &Theme, cols: usize) -> usize {
    let margin = BOX_MARGIN;
    let prefix = "Target: ";

    position_cursor(row, 1);
    print!("{}", " ".repeat(margin));
    print!("{}{prefix}", Theme::fg(&theme.colors.text_dim));
    let mut used = margin + display_width(prefix);

    for chip in &targets.chips {
        let text = match chip.shortcut {
            Some(n) => format!(" {n} {} ", chip.label),
            None => format!(" {} ", chip.label),
        };
        let width = display_width(&text) + 1;
        if used + width > cols {
            break;
        }

        if chip.is_selected {
            print!("{}", Theme::bold());
            print!("{}", Theme::fg(&theme.colors.selection_fg));
            print!("{}", Theme::bg(&theme.colors.selection_bg));
        } else {
            print!("{}", Theme::fg(&theme.colors.text_normal));
        }
        print!("{text}");
        print!("{} ", Theme::reset());
        used += width;
    }

    print!("{}", " ".repeat(cols.saturating_sub(used)));
    print!("{}", Theme::reset());
    row + 1
}
