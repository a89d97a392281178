//! Proofreading client for OpenAI-compatible chat-completions endpoints.
//!
//! One blocking point of contact with the network: build a request from the
//! composed text, POST it, extract the first completion's message content.
//! There is no retry loop, no streaming, and no caching; each call is
//! independent and carries the credential the caller just loaded.
//!
//! # Security
//!
//! The API key is accepted as a [`SecretString`] and only materialized into
//! the `Authorization` header at send time. The client itself never stores
//! it, so a long-lived client cannot leak a stale credential.

use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use log::{debug, error, warn};
use secrecy::{ExposeSecret, SecretString};

use redline_common::ProofreadConfig;

use crate::Proofreader;
use crate::error::{ClientError, ErrorResponse};
use crate::openai::{ChatCompletionRequest, ChatCompletionResponse, ChatMessage};

/// Client for OpenAI-compatible chat-completions APIs, specialized for
/// proofreading.
///
/// Works against any endpoint implementing the chat-completions
/// specification; point `base_url` at a self-hosted model or a test server
/// to avoid the public API.
#[derive(Debug, Clone)]
pub struct OpenAIProofreader {
    client: reqwest::Client,
    base_url: String,
    config: ProofreadConfig,
}

impl OpenAIProofreader {
    /// Create a new proofreading client from a configuration.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use redline_client::OpenAIProofreader;
    /// use redline_common::ProofreadConfig;
    ///
    /// let config = ProofreadConfig::default().with_timeout_seconds(60);
    /// let client = OpenAIProofreader::new(config)?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is invalid or HTTP client creation
    /// fails.
    pub fn new(config: ProofreadConfig) -> Result<Self> {
        let base_url = config.base_url.trim_end_matches('/').to_string();

        url::Url::parse(&base_url).map_err(|e| {
            ClientError::ConfigurationError(format!("Invalid base URL '{base_url}': {e}"))
        })?;

        // None means the HTTP client's own defaults apply.
        let client = match config.timeout_seconds {
            Some(timeout) => reqwest::Client::builder()
                .timeout(Duration::from_secs(timeout))
                .build()?,
            None => reqwest::Client::builder().build()?,
        };

        Ok(Self {
            client,
            base_url,
            config,
        })
    }

    /// Get the client's configuration.
    #[must_use]
    pub const fn config(&self) -> &ProofreadConfig {
        &self.config
    }

    async fn complete(
        &self,
        api_key: &SecretString,
        messages: Vec<ChatMessage>,
    ) -> Result<String, ClientError> {
        let url = format!("{}/chat/completions", self.base_url);

        let request = ChatCompletionRequest::builder()
            .model(self.config.model.clone())
            .messages(messages)
            .max_tokens(Some(self.config.max_tokens))
            .build();

        let response = self
            .client
            .post(&url)
            .header(
                "Authorization",
                format!("Bearer {}", api_key.expose_secret()),
            )
            .header("Content-Type", "application/json")
            .body(serde_json::to_string(&request).map_err(ClientError::SerializationError)?)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.map_err(|e| {
                warn!("Failed to read error response body: {e}");
                ClientError::NetworkError(e)
            })?;

            // Prefer the structured error message; fall back to the raw body.
            let error_message = match serde_json::from_str::<ErrorResponse>(&error_text) {
                Ok(parsed) => parsed.error.message,
                Err(parse_err) => {
                    debug!("Failed to parse error response as JSON: {parse_err}");
                    error_text
                }
            };

            error!(
                "Proofread request failed with status {}: {}",
                status.as_u16(),
                error_message
            );

            return Err(if status.as_u16() == 401 {
                ClientError::AuthenticationError(error_message)
            } else {
                ClientError::RequestError(error_message)
            });
        }

        let response_text = response.text().await?;
        let parsed: ChatCompletionResponse =
            serde_json::from_str(&response_text).map_err(ClientError::SerializationError)?;

        let choice = parsed.choices.first().ok_or_else(|| {
            warn!(
                "Received empty choices array. Response ID: {}, Model: {}",
                parsed.id, parsed.model
            );
            ClientError::InvalidResponse("API returned no choices in response".to_string())
        })?;

        choice.message.content.clone().ok_or_else(|| {
            ClientError::InvalidResponse("First choice has no message content".to_string())
        })
    }
}

#[async_trait]
impl Proofreader for OpenAIProofreader {
    async fn proofread(&self, api_key: &SecretString, text: &str) -> Result<String> {
        let prompt = format!("{}{text}", self.config.instruction);
        let revised = self.complete(api_key, vec![ChatMessage::user(prompt)]).await?;
        Ok(revised)
    }

    async fn proofread_with_prompt(
        &self,
        api_key: &SecretString,
        system_prompt: &str,
        text: &str,
    ) -> Result<String> {
        let messages = vec![ChatMessage::system(system_prompt), ChatMessage::user(text)];
        let revised = self.complete(api_key, messages).await?;
        Ok(revised)
    }
}
