//! # redline-common
//!
//! Shared types for the redline proofreading plugin: client configuration,
//! the optional prompt library, and path helpers for the files the plugin
//! reads (`~/.authinfo`, `~/.config/redline/prompts.json`).
//!
//! ## Example
//!
//! ```
//! use redline_common::ProofreadConfig;
//!
//! let config = ProofreadConfig::new("gpt-4")
//!     .with_base_url("https://api.openai.com/v1")
//!     .with_max_tokens(2048);
//!
//! assert_eq!(config.model, "gpt-4");
//! ```

/// Proofreading request configuration.
pub mod config;
/// Well-known file locations, XDG-aware.
pub mod paths;
/// Named prompt library loaded from the user's config directory.
pub mod prompts;

pub use config::ProofreadConfig;
pub use prompts::{Prompt, PromptLibrary, PromptsError};
