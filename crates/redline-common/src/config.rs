use serde::{Deserialize, Serialize};

/// Default chat-completions endpoint base.
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Default authinfo machine entry that supplies the API key.
pub const DEFAULT_MACHINE: &str = "api.openai.com";

/// Default instruction prepended to the message text.
pub const DEFAULT_INSTRUCTION: &str = "Please proofread the following text: ";

/// Configuration for the proofreading client.
///
/// Holds the model identifier, endpoint, and request defaults. The API key is
/// deliberately not part of the configuration: it is re-read from the
/// credentials file on every invocation and passed to the client per call, so
/// it is never cached across requests.
///
/// # Examples
///
/// ```
/// use redline_common::ProofreadConfig;
///
/// let config = ProofreadConfig::default();
/// assert_eq!(config.model, "gpt-3.5-turbo");
/// assert_eq!(config.max_tokens, 1024);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProofreadConfig {
    /// The model identifier sent with every request.
    pub model: String,
    /// Base URL for the chat-completions API.
    ///
    /// Override this for OpenAI-compatible services or test servers.
    pub base_url: String,
    /// The `machine` entry looked up in the authinfo file.
    pub machine: String,
    /// Instruction prefix concatenated with the message text.
    pub instruction: String,
    /// Output-length cap sent as `max_tokens`.
    pub max_tokens: u32,
    /// Request timeout in seconds.
    ///
    /// `None` relies on the HTTP client's defaults.
    pub timeout_seconds: Option<u64>,
}

impl Default for ProofreadConfig {
    fn default() -> Self {
        Self {
            model: "gpt-3.5-turbo".to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            machine: DEFAULT_MACHINE.to_string(),
            instruction: DEFAULT_INSTRUCTION.to_string(),
            max_tokens: 1024,
            timeout_seconds: None,
        }
    }
}

impl ProofreadConfig {
    /// Creates a configuration for the given model with default settings.
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            ..Default::default()
        }
    }

    /// Sets a custom base URL for API requests.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Sets the authinfo machine entry to look up.
    #[must_use]
    pub fn with_machine(mut self, machine: impl Into<String>) -> Self {
        self.machine = machine.into();
        self
    }

    /// Sets the instruction prefix for the default proofread action.
    #[must_use]
    pub fn with_instruction(mut self, instruction: impl Into<String>) -> Self {
        self.instruction = instruction.into();
        self
    }

    /// Sets the output-length cap.
    #[must_use]
    pub const fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    /// Sets the request timeout in seconds.
    #[must_use]
    pub const fn with_timeout_seconds(mut self, timeout_seconds: u64) -> Self {
        self.timeout_seconds = Some(timeout_seconds);
        self
    }
}
