//! Composable UI component renderers.
//!
//! Each component draws one part of the pane at a given row and returns the
//! next free row, so the layout reads top to bottom.
//!
//! # Components
//!
//! - [`header`]: Title bar
//! - [`targets`]: Conversion target chips
//! - [`input_box`]: Text field with live counter
//! - [`buttons`]: Convert and copy triggers
//! - [`output`]: Converted text, placeholder, or failure render
//! - [`toast`]: Transient notification line
//! - [`footer`]: Keybinding hints
//!
//! # Layout
//!
//! ```text
//! [blank line]
//! [Header]
//! [Border]
//! [Targets]
//! [Input box: border, input_rows lines, border + counter]
//! [Buttons]
//! [Output box: border, output_rows lines, border]
//! [Toast]
//! [Border]
//! [Footer]
//! ```

mod buttons;
mod footer;
mod frame;
mod header;
mod input_box;
mod output;
mod targets;
mod toast;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

use buttons::render_buttons;
use footer::render_footer;
use header::render_header;
use input_box::render_input_box;
use output::render_output;
use targets::render_targets;
use toast::render_toast;

/// Renders a horizontal separator at `row`. Returns the next row.
fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders the whole pane from a view model.
pub fn render_layout(vm: &UIViewModel, theme: &Theme, cols: usize) {
    let mut current_row = 2;

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    current_row = render_targets(current_row, &vm.targets, theme, cols);
    current_row = render_input_box(current_row, &vm.input, vm.input_rows, theme, cols);
    current_row = render_buttons(current_row, &vm.buttons, theme, cols);
    current_row = render_output(current_row, &vm.output, vm.output_rows, theme, cols);
    current_row = render_toast(current_row, vm.toast.as_ref(), theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    render_footer(current_row, &vm.footer, theme, cols);
}
