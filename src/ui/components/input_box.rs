//! Input box renderer.

use super::frame::{render_bottom, render_line, render_top};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::InputBoxInfo;

/// Renders the text field: a titled frame holding exactly `rows` lines and
/// the live counter in the bottom border.
///
/// The counter switches to the disabled color once the field is full.
/// Returns the next available row.
pub fn render_input_box(
    row: usize,
    input: &InputBoxInfo,
    rows: usize,
    theme: &Theme,
    cols: usize,
) -> usize {
    let border = &theme.colors.input_border;
    let mut current_row = render_top(row, "Text", border, cols);

    for i in 0..rows {
        let line = input.lines.get(i).map_or("", String::as_str);
        current_row = render_line(current_row, line, border, &theme.colors.text_normal, cols);
    }

    let counter_color = if input.at_capacity {
        &theme.colors.disabled_fg
    } else {
        &theme.colors.text_dim
    };
    render_bottom(
        current_row,
        Some((input.counter.as_str(), counter_color.as_str())),
        border,
        cols,
    )
}
