//! Notification line renderer.

use crate::app::state::BOX_MARGIN;
use crate::domain::NotificationKind;
use crate::ui::helpers::{display_width, position_cursor, truncate_to_width};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::ToastInfo;

/// Renders the visible notification, or clears the row when there is none.
/// Returns the next available row.
pub fn render_toast(row: usize, toast: Option<&ToastInfo>, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);

    let Some(toast) = toast else {
        print!("{}", " ".repeat(cols));
        return row + 1;
    };

    let (icon, color) = match toast.kind {
        NotificationKind::Success => ("✓", &theme.colors.success_fg),
        NotificationKind::Error => ("✗", &theme.colors.error_fg),
        NotificationKind::Info => ("•", &theme.colors.info_fg),
    };
    let text = truncate_to_width(
        &format!("{icon} {}", toast.message),
        cols.saturating_sub(BOX_MARGIN * 2),
    );

    print!("{}", " ".repeat(BOX_MARGIN));
    print!("{}{}", Theme::bold(), Theme::fg(color));
    print!("{text}");
    print!("{}", Theme::reset());
    print!("{}", " ".repeat(cols.saturating_sub(BOX_MARGIN + display_width(&text))));
    row + 1
}
