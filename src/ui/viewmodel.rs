//! View model types representing renderable UI state.
//!
//! View models are computed from application state via
//! `AppState::compute_viewmodel()` and consumed by the renderer. They hold
//! display-ready data only: wrapped lines, labels, and enabled flags.

use crate::domain::NotificationKind;

/// Complete UI view model for rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct UIViewModel {
    /// Title bar.
    pub header: HeaderInfo,

    /// Conversion target selector.
    pub targets: TargetBarInfo,

    /// Text field and its counter.
    pub input: InputBoxInfo,

    /// Convert and copy triggers.
    pub buttons: ButtonBarInfo,

    /// Output surface.
    pub output: OutputInfo,

    /// Visible notification, if any.
    pub toast: Option<ToastInfo>,

    /// Keybinding hints.
    pub footer: FooterInfo,

    /// Rows available to the input box content.
    pub input_rows: usize,

    /// Rows available to the output box content.
    pub output_rows: usize,
}

/// Header display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    pub title: String,
    /// Right-aligned status, shown while a conversion is in flight.
    pub status: Option<String>,
}

/// One selectable conversion target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetChip {
    /// Label shown to the user.
    pub label: String,
    /// 1-based `Alt+<n>` shortcut, if within 1..=9.
    pub shortcut: Option<usize>,
    pub is_selected: bool,
}

/// Target selector row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetBarInfo {
    pub chips: Vec<TargetChip>,
}

/// Input box content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputBoxInfo {
    /// Wrapped lines, already cut to the visible tail.
    pub lines: Vec<String>,
    /// `"<len> / <max>"` counter label.
    pub counter: String,
    /// Whether the field has reached its maximum length.
    pub at_capacity: bool,
}

/// A trigger control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonInfo {
    pub label: String,
    pub enabled: bool,
}

/// Convert and copy triggers plus the busy indicator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonBarInfo {
    pub convert: ButtonInfo,
    pub copy: ButtonInfo,
    pub busy: bool,
}

/// What the output surface currently holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputKind {
    Placeholder,
    Converted,
    Failed,
}

/// Output box content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputInfo {
    /// Wrapped lines, already cut to the visible head.
    pub lines: Vec<String>,
    pub kind: OutputKind,
}

/// Notification line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastInfo {
    pub message: String,
    pub kind: NotificationKind,
}

/// Footer display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    /// Keybinding help text.
    pub keybindings: String,
}
