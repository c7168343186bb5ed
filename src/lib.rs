//! BizTone: a Zellij plugin that rewrites text into a business tone.
//!
//! The user types a message, picks who it is for (boss, colleague,
//! customer), and the plugin asks a remote conversion service to rewrite it.
//! The result lands in an output pane and can be copied to the system
//! clipboard. The plugin never converts anything itself; it is a client.

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Host calls
//! └─────────────────────────────────────────────────────┘
//!                        │ Event ↓   ↑ Action
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │
//! │  - Input tracker, orchestrator, notifications       │
//! │  - Copy handler, view model computation             │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Client Layer  │   │ Observability │
//! │ (ui/)         │   │ (client/)     │   │ (observ...)   │
//! │ - Rendering   │   │ - HTTP codec  │   │ - OTLP export │
//! │ - Theming     │   │ - Clipboard   │   │ - Rotation    │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain & Infrastructure                            │
//! │  - Requests, results, errors, messages (domain/)    │
//! │  - Sandbox paths (infrastructure/)                  │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! The library never calls the Zellij host. Events go in through
//! [`handle_event`] and side effects come out as [`Action`]s, so the whole
//! interaction loop runs in native unit tests.
//!
//! # Example
//!
//! ```rust
//! use biztone::{handle_event, Action, Config, Event};
//!
//! let mut state = biztone::initialize(&Config::default());
//! let now = chrono::Utc::now();
//!
//! for c in "see you".chars() {
//!     handle_event(&mut state, &Event::InsertChar(c), now)?;
//! }
//! handle_event(&mut state, &Event::SelectTarget(0), now)?;
//!
//! let (_, actions) = handle_event(&mut state, &Event::ConvertRequested, now)?;
//! assert!(matches!(&actions[0], Action::SendConversion { request, .. } if request.text() == "see you"));
//! # Ok::<(), biztone::BizToneError>(())
//! ```

pub mod app;
pub mod client;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod ui;

pub use app::{handle_event, Action, AppState, Event};
pub use domain::{BizToneError, Result, Target};
pub use ui::Theme;

use chrono::Duration;
use std::collections::BTreeMap;

/// Service endpoint used when none is configured.
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:5000/api/convert";

/// Targets offered when none are configured.
pub const DEFAULT_TARGETS: &str = "boss:Boss,colleague:Colleague,customer:Customer";

/// Input limit used when none is configured.
pub const DEFAULT_MAX_LENGTH: usize = 500;

/// Request deadline used when none is configured.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Plugin configuration parsed from Zellij's configuration system.
///
/// # Example
///
/// ```kdl
/// plugin location="file:/path/to/biztone.wasm" {
///     endpoint "http://127.0.0.1:5000/api/convert"
///     targets "boss:Boss,colleague:Colleague,customer:Customer"
///     max_length "500"
///     request_timeout_secs "30"
///     clipboard_command "wl-copy"
///     language "ko"
///     theme "catppuccin-mocha"
///     trace_level "debug"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// URL the conversion request is POSTed to.
    pub endpoint: String,

    /// Selectable targets, in display order.
    pub targets: Vec<Target>,

    /// Maximum input length in characters.
    pub max_length: usize,

    /// Seconds to wait for the service before failing locally. `0` waits
    /// forever.
    pub request_timeout_secs: u64,

    /// Program that reads the text to copy from stdin.
    ///
    /// Run through `sh -c`, so `xclip -selection clipboard` or `pbcopy` work.
    pub clipboard_command: String,

    /// User-facing language: `en` or `ko`.
    pub language: String,

    /// Built-in theme name. Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file. Takes precedence over `theme_name`.
    pub theme_file: Option<String>,

    /// Filter directive for tracing, e.g. `debug` or `biztone=trace`.
    pub trace_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            targets: parse_targets(DEFAULT_TARGETS),
            max_length: DEFAULT_MAX_LENGTH,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            clipboard_command: client::DEFAULT_CLIPBOARD_COMMAND.to_string(),
            language: "en".to_string(),
            theme_name: None,
            theme_file: None,
            trace_level: "info".to_string(),
        }
    }
}

fn parse_targets(list: &str) -> Vec<Target> {
    list.split(',').filter_map(Target::parse).collect()
}

fn non_blank(config: &BTreeMap<String, String>, key: &str) -> Option<String> {
    config
        .get(key)
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(String::from)
}

/// Reads `key` as a number accepted by `valid`.
///
/// `Ok(None)` means the key is absent or blank.
fn number_setting<T>(
    config: &BTreeMap<String, String>,
    key: &str,
    valid: impl Fn(&T) -> bool,
) -> Result<Option<T>>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    let Some(raw) = non_blank(config, key) else {
        return Ok(None);
    };
    let value = raw
        .parse::<T>()
        .map_err(|e| BizToneError::Config(format!("{key} = {raw:?}: {e}")))?;
    if valid(&value) {
        Ok(Some(value))
    } else {
        Err(BizToneError::Config(format!("{key} = {raw:?} is out of range")))
    }
}

/// Largest accepted `request_timeout_secs` (one week).
const MAX_REQUEST_TIMEOUT_SECS: u64 = 7 * 24 * 60 * 60;

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// Every key is optional. Missing, blank, or unparseable values fall back
    /// to the defaults; an empty target list falls back to the default
    /// targets and a `max_length` of `0` is treated as unparseable.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use biztone::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("targets".to_string(), "boss,client:Client".to_string());
    /// map.insert("max_length".to_string(), "280".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.targets.len(), 2);
    /// assert_eq!(config.targets[1].label, "Client");
    /// assert_eq!(config.max_length, 280);
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let defaults = Self::default();

        let targets = non_blank(config, "targets")
            .map(|s| parse_targets(&s))
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| {
                if config.contains_key("targets") {
                    tracing::debug!("no usable targets configured, using defaults");
                }
                defaults.targets.clone()
            });

        let max_length = number_setting(config, "max_length", |n: &usize| *n > 0)
            .unwrap_or_else(|e| {
                tracing::debug!(error = %e, "invalid max_length, using default");
                None
            })
            .unwrap_or(defaults.max_length);

        let request_timeout_secs = number_setting(config, "request_timeout_secs", |n: &u64| {
            *n <= MAX_REQUEST_TIMEOUT_SECS
        })
        .unwrap_or_else(|e| {
            tracing::debug!(error = %e, "invalid request_timeout_secs, using default");
            None
        })
        .unwrap_or(defaults.request_timeout_secs);

        Self {
            endpoint: non_blank(config, "endpoint").unwrap_or(defaults.endpoint),
            targets,
            max_length,
            request_timeout_secs,
            clipboard_command: non_blank(config, "clipboard_command")
                .unwrap_or(defaults.clipboard_command),
            language: non_blank(config, "language").unwrap_or(defaults.language),
            theme_name: non_blank(config, "theme"),
            theme_file: non_blank(config, "theme_file"),
            trace_level: non_blank(config, "trace_level").unwrap_or(defaults.trace_level),
        }
    }

    /// The request deadline, or `None` when timeouts are disabled.
    #[must_use]
    pub fn request_timeout(&self) -> Option<Duration> {
        if self.request_timeout_secs == 0 {
            return None;
        }
        i64::try_from(self.request_timeout_secs)
            .ok()
            .and_then(Duration::try_seconds)
    }

    /// Loads the configured theme: file first, then name, then the default.
    ///
    /// Failures are logged and fall back to [`Theme::default`].
    #[must_use]
    pub fn load_theme(&self) -> Theme {
        if let Some(theme_file) = &self.theme_file {
            let path = infrastructure::paths::expand_tilde(theme_file);
            return Theme::from_file(&path).unwrap_or_else(|e| {
                tracing::debug!(theme_file = %theme_file, error = %e, "failed to load theme from file, using default");
                Theme::default()
            });
        }

        self.theme_name.as_ref().map_or_else(Theme::default, |theme_name| {
            Theme::from_name(theme_name).unwrap_or_else(|| {
                tracing::debug!(theme_name = %theme_name, "unknown theme, using default");
                Theme::default()
            })
        })
    }
}

/// Builds the startup state for `config`.
///
/// The result has an empty input, no target selected, `Idle` orchestrator,
/// placeholder output, and no notification.
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!(
        endpoint = %config.endpoint,
        targets = config.targets.len(),
        max_length = config.max_length,
        "initializing biztone plugin"
    );

    AppState::new(config, config.load_theme())
}
