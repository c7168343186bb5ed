//! Application state and view model computation.
//!
//! [`AppState`] is the single owner of every surface: the input tracker owns
//! the text field and counter, the orchestrator owns the busy state and the
//! output pane, the notification queue owns the toast slot, and the copy
//! handler tracks clipboard writes. No component reaches into another's
//! surface; the handler passes each one only what it needs.
//!
//! # Example
//!
//! ```rust
//! use biztone::{AppState, Config, Theme};
//!
//! let state = AppState::new(&Config::default(), Theme::default());
//! let vm = state.compute_viewmodel(24, 80);
//! assert_eq!(vm.input.counter, "0 / 500");
//! assert!(vm.buttons.convert.enabled);
//! ```

use super::clipboard::CopyHandler;
use super::input::InputTracker;
use super::notifications::NotificationQueue;
use super::orchestrator::{ConversionOrchestrator, OutputPane};
use crate::domain::Messages;
use crate::ui::helpers::wrap_text;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    ButtonBarInfo, ButtonInfo, FooterInfo, HeaderInfo, InputBoxInfo, OutputInfo, OutputKind,
    TargetBarInfo, TargetChip, ToastInfo, UIViewModel,
};
use crate::Config;

/// Horizontal margin around the boxes.
pub const BOX_MARGIN: usize = 2;

/// Rows taken by everything except box content.
///
/// blank, header, border, targets, input borders (2), buttons,
/// output borders (2), toast, border, footer.
const CHROME_ROWS: usize = 12;

const CURSOR: char = '▏';

/// Central application state container.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Text field, counter, and target selector.
    pub input: InputTracker,

    /// Busy state and output pane.
    pub orchestrator: ConversionOrchestrator,

    /// Single-slot toast surface.
    pub notifications: NotificationQueue,

    /// Outstanding clipboard writes.
    pub copier: CopyHandler,

    /// Localized user-facing strings.
    pub messages: Messages,

    /// Color scheme for rendering.
    pub theme: Theme,
}

impl AppState {
    /// Creates the startup state: empty input, no target, `Idle`, placeholder
    /// output, no notification.
    #[must_use]
    pub fn new(config: &Config, theme: Theme) -> Self {
        Self {
            input: InputTracker::new(config.max_length, config.targets.clone()),
            orchestrator: ConversionOrchestrator::new(config.request_timeout()),
            notifications: NotificationQueue::new(),
            copier: CopyHandler::new(),
            messages: Messages::for_language(&config.language),
            theme,
        }
    }

    /// Computes the view model for a pane of `rows` x `cols`.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        let content_rows = rows.saturating_sub(CHROME_ROWS).max(2);
        let input_rows = (content_rows / 3).max(1);
        let output_rows = content_rows.saturating_sub(input_rows).max(1);
        let inner_width = cols.saturating_sub(BOX_MARGIN * 2 + 4).max(1);

        UIViewModel {
            header: HeaderInfo {
                title: "BizTone Converter".to_string(),
                status: self
                    .orchestrator
                    .is_busy()
                    .then(|| "● converting".to_string()),
            },
            targets: self.compute_targets(),
            input: self.compute_input(input_rows, inner_width),
            buttons: self.compute_buttons(),
            output: self.compute_output(output_rows, inner_width),
            toast: self.notifications.visible().map(|n| ToastInfo {
                message: n.message.clone(),
                kind: n.kind,
            }),
            footer: FooterInfo {
                keybindings: "Enter: convert | Tab: target | Alt+Enter: newline | Ctrl+y: copy | Ctrl+u: clear | Esc: hide".to_string(),
            },
            input_rows,
            output_rows,
        }
    }

    fn compute_targets(&self) -> TargetBarInfo {
        let selected = self.input.selected_index();
        let chips = self
            .input
            .targets()
            .iter()
            .enumerate()
            .map(|(i, target)| TargetChip {
                label: target.label.clone(),
                shortcut: (i < 9).then_some(i + 1),
                is_selected: selected == Some(i),
            })
            .collect();

        TargetBarInfo { chips }
    }

    fn compute_input(&self, visible_rows: usize, width: usize) -> InputBoxInfo {
        let mut text = self.input.current_input().to_string();
        text.push(CURSOR);

        let mut lines = wrap_text(&text, width);
        if lines.len() > visible_rows {
            lines.drain(..lines.len() - visible_rows);
        }

        InputBoxInfo {
            lines,
            counter: self.input.counter_label().to_string(),
            at_capacity: self.input.len() >= self.input.max_length(),
        }
    }

    fn compute_buttons(&self) -> ButtonBarInfo {
        let busy = self.orchestrator.is_busy();
        let convert_label = if busy { "Converting..." } else { "Convert" };

        ButtonBarInfo {
            convert: ButtonInfo {
                label: convert_label.to_string(),
                enabled: self.orchestrator.ui_state().accepts_convert(),
            },
            copy: ButtonInfo {
                label: "Copy".to_string(),
                enabled: self.orchestrator.output().copyable_text().is_some(),
            },
            busy,
        }
    }

    fn compute_output(&self, visible_rows: usize, width: usize) -> OutputInfo {
        let (text, kind) = match self.orchestrator.output() {
            OutputPane::Placeholder => (self.messages.placeholder.as_str(), OutputKind::Placeholder),
            OutputPane::Converted(text) => (text.as_str(), OutputKind::Converted),
            OutputPane::Failed(message) => (message.as_str(), OutputKind::Failed),
        };

        let mut lines = wrap_text(text, width);
        if lines.len() > visible_rows {
            lines.truncate(visible_rows);
            if let Some(last) = lines.last_mut() {
                last.pop();
                last.push('…');
            }
        }

        OutputInfo { lines, kind }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ConversionResult, NotificationKind};
    use chrono::{TimeZone, Utc};

    fn state() -> AppState {
        AppState::new(&Config::default(), Theme::default())
    }

    #[test]
    fn startup_viewmodel() {
        let vm = state().compute_viewmodel(24, 80);

        assert_eq!(vm.input.counter, "0 / 500");
        assert_eq!(vm.input.lines, vec![CURSOR.to_string()]);
        assert_eq!(vm.targets.chips.len(), 3);
        assert!(vm.targets.chips.iter().all(|c| !c.is_selected));
        assert!(vm.buttons.convert.enabled);
        assert!(!vm.buttons.copy.enabled);
        assert!(!vm.buttons.busy);
        assert_eq!(vm.output.kind, OutputKind::Placeholder);
        assert!(vm.toast.is_none());
        assert_eq!(vm.input_rows + vm.output_rows, 24 - CHROME_ROWS);
    }

    #[test]
    fn input_shows_tail_of_long_text() {
        let mut s = state();
        for c in "one\ntwo\nthree\nfour\nfive\nsix".chars() {
            s.input.insert_char(c);
        }
        let vm = s.compute_viewmodel(CHROME_ROWS + 6, 40);
        assert_eq!(vm.input_rows, 2);
        assert_eq!(vm.input.lines, vec!["five".to_string(), format!("six{CURSOR}")]);
    }

    #[test]
    fn busy_state_disables_convert() {
        let mut s = state();
        let now = Utc.timestamp_opt(1_700_000_000, 0).single().unwrap_or_default();
        s.input.insert_char('x');
        s.input.select_next_target();
        s.orchestrator
            .handle_convert_requested(&s.input, &mut s.notifications, &s.messages, now)
            .unwrap();

        let vm = s.compute_viewmodel(24, 80);
        assert!(vm.buttons.busy);
        assert!(!vm.buttons.convert.enabled);
        assert_eq!(vm.buttons.convert.label, "Converting...");
        assert!(vm.header.status.is_some());
        assert!(vm.targets.chips[0].is_selected);
    }

    #[test]
    fn converted_output_enables_copy_and_truncates() {
        let mut s = state();
        let now = Utc.timestamp_opt(1_700_000_000, 0).single().unwrap_or_default();
        s.input.insert_char('x');
        s.input.select_next_target();
        s.orchestrator
            .handle_convert_requested(&s.input, &mut s.notifications, &s.messages, now)
            .unwrap();
        let text = "a\nb\nc\nd\ne\nf\ng\nh\ni\nj".to_string();
        s.orchestrator
            .handle_settled(
                1,
                Ok(ConversionResult {
                    converted_text: text,
                }),
                &mut s.notifications,
                &s.messages,
                now,
            )
            .unwrap();

        let vm = s.compute_viewmodel(CHROME_ROWS + 6, 40);
        assert_eq!(vm.output.kind, OutputKind::Converted);
        assert!(vm.buttons.copy.enabled);
        assert_eq!(vm.output.lines.len(), vm.output_rows);
        assert_eq!(vm.output.lines.last().map(String::as_str), Some("…"));
    }

    #[test]
    fn toast_mirrors_visible_notification() {
        let mut s = state();
        let now = Utc.timestamp_opt(1_700_000_000, 0).single().unwrap_or_default();
        let _ = s.notifications.show("hey", NotificationKind::Success, now);

        let toast = s.compute_viewmodel(24, 80).toast.unwrap();
        assert_eq!(toast.message, "hey");
        assert_eq!(toast.kind, NotificationKind::Success);
    }
}
