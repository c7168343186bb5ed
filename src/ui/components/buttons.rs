//! Convert and copy trigger renderer.

use crate::app::state::BOX_MARGIN;
use crate::ui::helpers::{display_width, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{ButtonBarInfo, ButtonInfo};

fn render_button(button: &ButtonInfo, theme: &Theme) -> usize {
    let text = format!(" {} ", button.label);
    if button.enabled {
        print!("{}", Theme::bold());
        print!("{}", Theme::fg(&theme.colors.button_fg));
        print!("{}", Theme::bg(&theme.colors.button_bg));
    } else {
        print!("{}", Theme::fg(&theme.colors.disabled_fg));
    }
    print!("{text}");
    print!("{}", Theme::reset());
    display_width(&text)
}

/// Renders both triggers on one row, Convert first.
///
/// While busy the convert trigger shows its in-progress label in the
/// disabled style. Returns the next available row.
pub fn render_buttons(row: usize, buttons: &ButtonBarInfo, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", " ".repeat(BOX_MARGIN));

    let mut used = BOX_MARGIN;
    used += render_button(&buttons.convert, theme);
    print!("  ");
    used += 2;
    used += render_button(&buttons.copy, theme);

    print!("{}", " ".repeat(cols.saturating_sub(used)));
    row + 1
}
