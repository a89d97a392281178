//! Credential lookup from an authinfo/netrc-style file.
//!
//! The plugin reads one entry of the form
//!
//! ```text
//! machine api.openai.com login apikey password sk-...
//! ```
//!
//! from a plaintext, user-permission-protected file (`~/.authinfo` by
//! default). The file is re-read on every lookup; the captured token is
//! wrapped in a [`SecretString`] so it is redacted from debug output and
//! zeroed on drop. This module never writes the file and never raises: every
//! failure mode reports absence.

use std::fs;
use std::path::Path;

use log::{debug, warn};
use regex::Regex;
use secrecy::SecretString;

/// Looks up the API key for `machine` in the authinfo file at `path`.
///
/// Returns `None` when the file is absent, unreadable, or contains no
/// matching entry. Errors are logged, not propagated.
#[must_use]
pub fn lookup_api_key(path: &Path, machine: &str) -> Option<SecretString> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!("Authinfo file {} not found", path.display());
            return None;
        }
        Err(e) => {
            warn!("Error reading authinfo file {}: {e}", path.display());
            return None;
        }
    };

    extract_api_key(&content, machine)
}

/// Extracts the API key for `machine` from authinfo file contents.
///
/// Pure string-to-optional-string match; the line format is
/// `machine <machine> login apikey password <token>`.
#[must_use]
pub fn extract_api_key(content: &str, machine: &str) -> Option<SecretString> {
    let pattern = format!(
        r"(?m)^\s*machine {} login apikey password (\S+)",
        regex::escape(machine)
    );
    // The pattern is built from an escaped literal, so compilation can only
    // fail on a pathological machine string.
    let re = match Regex::new(&pattern) {
        Ok(re) => re,
        Err(e) => {
            warn!("Invalid authinfo machine pattern for {machine}: {e}");
            return None;
        }
    };

    re.captures(content)
        .and_then(|caps| caps.get(1))
        .map(|token| SecretString::new(token.as_str().into()))
}
