//! Theme management and ANSI escape sequence generation.
//!
//! Color schemes come either built in (embedded TOML) or from a user TOML
//! file named by the `theme_file` config key.
//!
//! # Built-in Themes
//!
//! - `catppuccin-mocha`: Dark theme with warm tones (default)
//! - `catppuccin-latte`: Light theme with soft pastels
//! - `biztone-light`: The converter's original web palette
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! header_fg = "#cdd6f4"
//! text_normal = "#cdd6f4"
//! text_dim = "#6c7086"
//! border = "#45475a"
//! input_border = "#89b4fa"
//! selection_fg = "#1e1e2e"
//! selection_bg = "#89b4fa"
//! button_fg = "#1e1e2e"
//! button_bg = "#a6e3a1"
//! disabled_fg = "#585b70"
//! placeholder_fg = "#7f849c"
//! success_fg = "#a6e3a1"
//! error_fg = "#f38ba8"
//! info_fg = "#89dceb"
//! ```
//!
//! # Example
//!
//! ```rust
//! use biztone::ui::Theme;
//!
//! let theme = Theme::from_name("catppuccin-latte").unwrap();
//! print!("{}Bold{}", Theme::bold(), Theme::reset());
//! assert_eq!(theme.name, "catppuccin-latte");
//! ```

use crate::domain::error::{BizToneError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Theme used when the config names none.
pub const DEFAULT_THEME: &str = "catppuccin-mocha";

/// Color scheme configuration for UI rendering.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Theme {
    /// Human-readable theme name.
    pub name: String,
    /// Color palette for all UI elements.
    pub colors: ThemeColors,
}

/// Color definitions for all UI elements, as hex strings (`"#cdd6f4"`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeColors {
    /// Header text color.
    pub header_fg: String,
    /// Optional header background color.
    #[serde(default)]
    pub header_bg: Option<String>,

    /// Normal text color.
    pub text_normal: String,
    /// Dimmed text color (footer, counter, hints).
    pub text_dim: String,

    /// Separator and output box border color.
    pub border: String,
    /// Input box border color.
    pub input_border: String,

    /// Selected target chip foreground.
    pub selection_fg: String,
    /// Selected target chip background.
    pub selection_bg: String,

    /// Enabled button foreground.
    pub button_fg: String,
    /// Enabled button background.
    pub button_bg: String,
    /// Disabled button and at-capacity counter color.
    pub disabled_fg: String,

    /// Output placeholder color.
    pub placeholder_fg: String,

    /// Success notification color.
    pub success_fg: String,
    /// Error notification and failed output color.
    pub error_fg: String,
    /// Informational notification color.
    pub info_fg: String,
}

impl ThemeColors {
    /// Plain grey palette, used only if a built-in theme cannot be parsed.
    fn monochrome() -> Self {
        let light = "#d0d0d0".to_string();
        let dim = "#808080".to_string();
        let dark = "#202020".to_string();
        Self {
            header_fg: light.clone(),
            header_bg: None,
            text_normal: light.clone(),
            text_dim: dim.clone(),
            border: dim.clone(),
            input_border: light.clone(),
            selection_fg: dark.clone(),
            selection_bg: light.clone(),
            button_fg: dark,
            button_bg: light.clone(),
            disabled_fg: dim.clone(),
            placeholder_fg: dim,
            success_fg: light.clone(),
            error_fg: light.clone(),
            info_fg: light,
        }
    }
}

impl Theme {
    /// Loads a built-in theme by name, or `None` if the name is unknown.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "catppuccin-mocha" => include_str!("../../themes/catppuccin-mocha.toml"),
            "catppuccin-latte" => include_str!("../../themes/catppuccin-latte.toml"),
            "biztone-light" => include_str!("../../themes/biztone-light.toml"),
            _ => return None,
        };

        match toml::from_str(toml_str) {
            Ok(theme) => Some(theme),
            Err(e) => {
                tracing::error!(theme = name, error = %e, "built-in theme failed to parse");
                None
            }
        }
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`BizToneError::Theme`] if the file cannot be read or its TOML
    /// does not describe a complete theme.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| {
            BizToneError::Theme(format!("failed to read {}: {e}", path.display()))
        })?;

        toml::from_str(&contents)
            .map_err(|e| BizToneError::Theme(format!("failed to parse {}: {e}", path.display())))
    }

    /// Converts a hex color to RGB, falling back to white on bad input.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim().trim_start_matches('#');

        if hex.len() != 6 || !hex.is_ascii() {
            return (255, 255, 255);
        }

        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(255);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(255);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(255);

        (r, g, b)
    }

    /// ANSI 24-bit foreground escape (`\x1b[38;2;r;g;bm`).
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// ANSI 24-bit background escape (`\x1b[48;2;r;g;bm`).
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[48;2;{r};{g};{b}m")
    }

    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{001b}[2m"
    }

    /// Clears all styling.
    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}

impl Default for Theme {
    /// Catppuccin Mocha.
    fn default() -> Self {
        Self::from_name(DEFAULT_THEME).unwrap_or_else(|| Self {
            name: "monochrome".to_string(),
            colors: ThemeColors::monochrome(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn builtin_themes_parse() {
        for name in ["catppuccin-mocha", "catppuccin-latte", "biztone-light"] {
            let theme = Theme::from_name(name).unwrap();
            assert_eq!(theme.name, name);
        }
        assert!(Theme::from_name("solarized").is_none());
    }

    #[test]
    fn default_is_mocha() {
        assert_eq!(Theme::default().name, DEFAULT_THEME);
    }

    #[test]
    fn hex_conversion() {
        assert_eq!(Theme::fg("#4A90E2"), "\u{1b}[38;2;74;144;226m");
        assert_eq!(Theme::bg("d0021b"), "\u{1b}[48;2;208;2;27m");
        assert_eq!(Theme::fg("nope"), "\u{1b}[38;2;255;255;255m");
        assert_eq!(Theme::fg("#éééé"), "\u{1b}[38;2;255;255;255m");
    }

    #[test]
    fn from_file_round_trips_builtin() {
        let mocha = Theme::default();
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{}", toml::to_string(&mocha).unwrap()).unwrap();

        assert_eq!(Theme::from_file(file.path()).unwrap(), mocha);
    }

    #[test]
    fn from_file_reports_problems() {
        let err = Theme::from_file("/nonexistent/theme.toml").unwrap_err();
        assert!(matches!(err, BizToneError::Theme(_)));

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "name = \"half\"\n[colors]\nheader_fg = \"#ffffff\"\n").unwrap();
        let err = Theme::from_file(file.path()).unwrap_err();
        assert!(err.to_string().contains("failed to parse"));
    }
}
