//! Path helpers for the Zellij plugin sandbox.
//!
//! Inside the sandbox the host filesystem is reachable under `/host`, which
//! Zellij points at the cwd of the last focused terminal (usually the home
//! directory).

use std::path::PathBuf;

/// Sandbox prefix that maps to the host's home directory.
const HOST_ROOT: &str = "/host";

/// Returns the directory BizTone writes its trace file to:
/// `/host/.local/share/zellij/biztone`.
///
/// ```
/// use biztone::infrastructure::get_data_dir;
///
/// assert_eq!(get_data_dir().to_str(), Some("/host/.local/share/zellij/biztone"));
/// ```
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from(HOST_ROOT)
        .join(".local/share/zellij")
        .join("biztone")
}

/// Rewrites a `~`-prefixed path (such as a configured `theme_file`) to its
/// sandbox location. Other paths are returned as is.
///
/// ```
/// use biztone::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/themes/dark.toml"), "/host/themes/dark.toml");
/// assert_eq!(expand_tilde("~"), "/host");
/// assert_eq!(expand_tilde("/etc/biztone.toml"), "/etc/biztone.toml");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    match path.strip_prefix('~') {
        Some("") => HOST_ROOT.to_string(),
        Some(rest) if rest.starts_with('/') => format!("{HOST_ROOT}{rest}"),
        _ => path.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tilde_user_paths_are_left_alone() {
        assert_eq!(expand_tilde("~alice/theme.toml"), "~alice/theme.toml");
        assert_eq!(expand_tilde("themes/~/x"), "themes/~/x");
    }
}
