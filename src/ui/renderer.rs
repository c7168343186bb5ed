//! Top-level rendering coordinator.
//!
//! Rendering is two steps: compute the [`UIViewModel`] from `AppState`, then
//! hand it to the components. Nothing here mutates state.
//!
//! # Example
//!
//! ```rust
//! use biztone::{ui::render, AppState, Config, Theme};
//!
//! let state = AppState::new(&Config::default(), Theme::default());
//! render(&state, 24, 80); // Renders to stdout
//! ```

use crate::app::AppState;
use crate::ui::components;
use crate::ui::viewmodel::UIViewModel;

/// Renders the plugin UI to stdout for a pane of `rows` x `cols`.
///
/// Does not clear the screen; every row of the layout is padded to the full
/// width instead.
pub fn render(state: &AppState, rows: usize, cols: usize) {
    let viewmodel: UIViewModel = state.compute_viewmodel(rows, cols);

    components::render_layout(&viewmodel, &state.theme, cols);
}
