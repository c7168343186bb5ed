//! Output box renderer.

use super::frame::{render_bottom, render_line, render_top};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{OutputInfo, OutputKind};

/// Renders the output surface in a frame of exactly `rows` content lines.
///
/// The placeholder is dimmed and a failure render uses the error color.
/// Returns the next available row.
pub fn render_output(
    row: usize,
    output: &OutputInfo,
    rows: usize,
    theme: &Theme,
    cols: usize,
) -> usize {
    let border = &theme.colors.border;
    let text_color = match output.kind {
        OutputKind::Placeholder => &theme.colors.placeholder_fg,
        OutputKind::Converted => &theme.colors.text_normal,
        OutputKind::Failed => &theme.colors.error_fg,
    };

    let mut current_row = render_top(row, "Result", border, cols);
    for i in 0..rows {
        let line = output.lines.get(i).map_or("", String::as_str);
        current_row = render_line(current_row, line, border, text_color, cols);
    }
    render_bottom(current_row, None, border, cols)
}
