//! Clipboard writes through a host command.
//!
//! The plugin sandbox has no clipboard of its own, so text is piped into a
//! configurable program (`wl-copy`, `pbcopy`, `xclip -selection clipboard`, ...)
//! via `run_command`. The text is passed as a positional argument to `sh`, never
//! spliced into the script, so its content is not subject to shell parsing.

use super::context::CallContext;
use std::collections::BTreeMap;

/// Default clipboard program.
pub const DEFAULT_CLIPBOARD_COMMAND: &str = "wl-copy";

/// A fully encoded clipboard write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandCall {
    pub argv: Vec<String>,
    pub context: BTreeMap<String, String>,
}

/// Builds the command line that writes `text` to the clipboard.
#[must_use]
pub fn encode_write(clipboard_command: &str, copy_id: u64, text: &str) -> CommandCall {
    let script = format!("printf '%s' \"$1\" | {clipboard_command}");

    CommandCall {
        argv: vec![
            "sh".to_string(),
            "-c".to_string(),
            script,
            "biztone".to_string(),
            text.to_string(),
        ],
        context: CallContext::clipboard(copy_id).to_map(),
    }
}

/// Maps a finished clipboard command onto success or a failure description.
///
/// # Errors
///
/// Returns the trimmed stderr (or the exit code when stderr is empty) for any
/// exit other than 0. A missing exit code means the command never ran.
pub fn decode_result(exit_code: Option<i32>, stderr: &[u8]) -> Result<(), String> {
    match exit_code {
        Some(0) => Ok(()),
        Some(code) => {
            let detail = String::from_utf8_lossy(stderr).trim().to_string();
            if detail.is_empty() {
                Err(format!("clipboard command exited with status {code}"))
            } else {
                Err(detail)
            }
        }
        None => Err("clipboard command could not be started".to_string()),
    }
}
