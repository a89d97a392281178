//! XDG-compliant path helpers.
//!
//! Respects the `XDG_CONFIG_HOME` environment variable, falling back to
//! `~/.config`. The authinfo path is fixed at `~/.authinfo`, matching the
//! netrc convention the credentials file follows.

use std::path::PathBuf;

/// Returns the XDG config base directory.
///
/// Uses `XDG_CONFIG_HOME` if set, otherwise `~/.config`.
pub fn config_dir() -> Option<PathBuf> {
    std::env::var_os("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|| dirs::home_dir().map(|h| h.join(".config")))
}

/// Returns the default prompt library location,
/// `$XDG_CONFIG_HOME/redline/prompts.json`.
pub fn prompts_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("redline").join("prompts.json"))
}

/// Returns the credentials file location, `~/.authinfo`.
pub fn authinfo_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".authinfo"))
}
