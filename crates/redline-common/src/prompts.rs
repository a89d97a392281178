//! Named prompt library.
//!
//! Prompts are loaded from a JSON array of `{"name": ..., "prompt": ...}`
//! objects, by default at `~/.config/redline/prompts.json`. Each entry
//! supplies a system message for one proofreading action; the default
//! "AI Proofread" button does not require any library to be present.
//!
//! ## Example file
//!
//! ```json
//! [
//!   {"name": "formal", "prompt": "Rewrite the following email formally."},
//!   {"name": "concise", "prompt": "Shorten the following email."}
//! ]
//! ```

use std::fs;
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::paths;

/// Errors raised while loading a prompt library.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum PromptsError {
    /// The prompt file could not be read.
    #[error("Failed to read prompt file: {0}")]
    Io(#[from] std::io::Error),

    /// The prompt file is not a valid JSON array of prompts.
    #[error("Failed to parse prompt file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// A single named prompt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Prompt {
    /// Short identifier used to select this prompt.
    pub name: String,
    /// The system-message text sent ahead of the composed message.
    pub prompt: String,
}

/// An ordered collection of named prompts.
///
/// A missing file yields an empty library rather than an error: the plugin
/// degrades to the built-in proofread action when no prompts are configured.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PromptLibrary {
    prompts: Vec<Prompt>,
}

impl PromptLibrary {
    /// Loads a prompt library from the given path.
    ///
    /// A missing file is treated as an empty library.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, PromptsError> {
        if !path.exists() {
            debug!("Prompt file {} not found, using empty library", path.display());
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        let prompts: Vec<Prompt> = serde_json::from_str(&content)?;
        debug!("Loaded {} prompt(s) from {}", prompts.len(), path.display());
        Ok(Self { prompts })
    }

    /// Loads the library from the default location.
    ///
    /// Returns an empty library when the config directory cannot be resolved.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_default() -> Result<Self, PromptsError> {
        paths::prompts_path().map_or_else(|| Ok(Self::default()), |path| Self::load(&path))
    }

    /// Looks up the prompt text for the given name.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&str> {
        self.prompts
            .iter()
            .find(|p| p.name == name)
            .map(|p| p.prompt.as_str())
    }

    /// Returns the prompt names in file order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.prompts.iter().map(|p| p.name.as_str())
    }

    /// Returns whether the library contains no prompts.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.prompts.is_empty()
    }

    /// Returns the number of prompts in the library.
    #[must_use]
    pub fn len(&self) -> usize {
        self.prompts.len()
    }
}

impl FromIterator<Prompt> for PromptLibrary {
    fn from_iter<T: IntoIterator<Item = Prompt>>(iter: T) -> Self {
        Self {
            prompts: iter.into_iter().collect(),
        }
    }
}
