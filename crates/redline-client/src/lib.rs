//! # redline-client
//!
//! Credential loading and the chat-completions proofreading client.
//!
//! The [`Proofreader`] trait is the seam between the plugin surface and the
//! network: the production implementation ([`OpenAIProofreader`]) speaks the
//! OpenAI chat-completions protocol, while tests substitute in-memory fakes.
//!
//! The API key is never held by the client. It is looked up from the
//! credentials file immediately before each request (see [`authinfo`]) and
//! passed per call, so nothing is cached between invocations.
//!
//! ## Example
//!
//! ```no_run
//! use redline_client::{OpenAIProofreader, Proofreader, authinfo};
//! use redline_common::{ProofreadConfig, paths};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let config = ProofreadConfig::default();
//! let client = OpenAIProofreader::new(config.clone())?;
//!
//! let path = paths::authinfo_path().ok_or_else(|| anyhow::anyhow!("no home dir"))?;
//! if let Some(api_key) = authinfo::lookup_api_key(&path, &config.machine) {
//!     let revised = client.proofread(&api_key, "Teh cat sat.").await?;
//!     println!("{revised}");
//! }
//! # Ok(())
//! # }
//! ```

use anyhow::Result;
use async_trait::async_trait;
use secrecy::SecretString;

pub mod authinfo;
pub mod error;
pub mod openai;

pub use error::ClientError;
pub use openai::OpenAIProofreader;

/// Trait for proofreading service implementations.
///
/// Implementations take the credential per call rather than at construction,
/// so the caller controls how long the secret stays in memory.
#[must_use = "Proofreader must be used to make requests"]
#[async_trait]
pub trait Proofreader: Send + Sync {
    /// Proofreads `text` using the service's built-in instruction.
    ///
    /// Returns the revised text.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, a non-success HTTP status, or a
    /// malformed response. Callers are expected to treat any error as
    /// "no change".
    async fn proofread(&self, api_key: &SecretString, text: &str) -> Result<String>;

    /// Proofreads `text` under a caller-supplied system prompt.
    ///
    /// The prompt is sent as a system message ahead of the unmodified text.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`Proofreader::proofread`].
    async fn proofread_with_prompt(
        &self,
        api_key: &SecretString,
        system_prompt: &str,
        text: &str,
    ) -> Result<String>;
}
