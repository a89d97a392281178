//! # redline
//!
//! Plugin core for an AI proofreading extension to a mail composer.
//!
//! The host application owns the window, toolbar, and editor buffer; this
//! crate sees them only through the [`HostWindow`] and [`EditorBuffer`]
//! seams. On activation the plugin asks the host for one toolbar button; on
//! each click it reads the composed text, loads the API key from the user's
//! authinfo file, sends the text to a chat-completions endpoint, and
//! overwrites the buffer with the revision. Every failure along that path
//! degrades to "do nothing" - the user never sees a crash or an error
//! dialog, only an unchanged message.
//!
//! ## Example
//!
//! ```no_run
//! use redline::ProofreadPlugin;
//! use redline_common::ProofreadConfig;
//!
//! # fn attach(window: &mut dyn redline::HostWindow) -> anyhow::Result<()> {
//! let mut plugin = ProofreadPlugin::from_config(ProofreadConfig::default())?;
//! plugin.attach(window);
//! // ... host dispatches clicks to plugin.on_proofread_clicked(window) ...
//! plugin.detach(window);
//! # Ok(())
//! # }
//! ```

pub mod editor;
pub mod host;
pub mod plugin;

pub use editor::EditorBuffer;
pub use host::{ButtonHandle, HostWindow};
pub use plugin::{BUTTON_LABEL, ProofreadPlugin};

pub use redline_client::{OpenAIProofreader, Proofreader};
pub use redline_common::{ProofreadConfig, PromptLibrary};
