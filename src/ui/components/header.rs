//! Header component renderer.

use crate::app::state::BOX_MARGIN;
use crate::ui::helpers::{display_width, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;

/// Renders the title bar at `row`: title centered, status (if any)
/// right-aligned inside the box margin.
///
/// ```text
///                 BizTone Converter             ● converting
/// ```
///
/// The status is dropped when it would overlap the title. Returns the next
/// available row.
pub fn render_header(row: usize, header: &HeaderInfo, theme: &Theme, cols: usize) -> usize {
    let title_len = display_width(&header.title);
    let padding = (cols.saturating_sub(title_len)) / 2;
    let status = header
        .status
        .as_deref()
        .filter(|s| padding + title_len + 1 + display_width(s) + BOX_MARGIN <= cols);

    position_cursor(row, 1);
    if let Some(bg) = &theme.colors.header_bg {
        print!("{}", Theme::bg(bg));
    }
    print!("{}", " ".repeat(padding));
    print!("{}{}", Theme::bold(), Theme::fg(&theme.colors.header_fg));
    print!("{}", header.title);

    let mut used = padding + title_len;
    if let Some(status) = status {
        let gap = cols - used - display_width(status) - BOX_MARGIN;
        print!("{}", " ".repeat(gap));
        print!("{}", Theme::fg(&theme.colors.info_fg));
        print!("{status}");
        used += gap + display_width(status);
    }
    print!("{}", " ".repeat(cols.saturating_sub(used)));

    print!("{}", Theme::reset());
    row + 1
}
