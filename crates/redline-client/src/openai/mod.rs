//! OpenAI chat-completions types and client implementation.
//!
//! Only the subset of the protocol the proofreading flow exercises is
//! modeled: plain user/system messages in, one choice out. Tool calling and
//! streaming are out of scope for this plugin.

use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

pub mod client;
pub use client::OpenAIProofreader;

/// Role of a chat message author.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    /// Instruction framing (the prompt-library path uses this).
    System,
    /// The composed message text.
    User,
    /// The model's revision.
    Assistant,
}

/// A single chat message in the wire format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    /// The role of the message author.
    pub role: MessageRole,
    /// The text content of the message.
    ///
    /// Nullable in responses; requests always set it.
    pub content: Option<String>,
}

impl ChatMessage {
    /// Creates a system message.
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::System,
            content: Some(content.into()),
        }
    }

    /// Creates a user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: Some(content.into()),
        }
    }
}

/// Request body for a chat completion.
///
/// # Examples
///
/// ```
/// use redline_client::openai::{ChatCompletionRequest, ChatMessage};
///
/// let request = ChatCompletionRequest::builder()
///     .model("gpt-3.5-turbo".to_string())
///     .messages(vec![ChatMessage::user("Please proofread the following text: hi")])
///     .max_tokens(Some(1024))
///     .build();
/// ```
#[derive(Debug, Clone, Serialize, TypedBuilder)]
pub struct ChatCompletionRequest {
    /// The model identifier to use.
    pub model: String,
    /// The messages to send, in order.
    pub messages: Vec<ChatMessage>,
    /// Maximum tokens to generate (optional).
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
}

/// A single choice from a chat completion response.
#[derive(Debug, Deserialize)]
pub struct ChatChoice {
    /// The index of this choice in the response array.
    pub index: u32,
    /// The generated message for this choice.
    pub message: ChatMessage,
    /// Why generation stopped for this choice.
    ///
    /// Common values: "stop", "length", "content_filter"
    pub finish_reason: Option<String>,
}

/// Token usage statistics reported by the provider.
#[derive(Debug, Clone, Deserialize)]
pub struct Usage {
    /// Number of tokens in the input prompt.
    pub prompt_tokens: u32,
    /// Number of tokens generated in the completion.
    pub completion_tokens: u32,
    /// Total tokens used (prompt + completion).
    pub total_tokens: u32,
}

/// Response from a chat completion request.
#[derive(Debug, Deserialize)]
pub struct ChatCompletionResponse {
    /// Unique identifier for this completion.
    pub id: String,
    /// Object type, typically "chat.completion".
    pub object: String,
    /// Unix timestamp of when the completion was created.
    pub created: u64,
    /// The model that generated this completion.
    pub model: String,
    /// Array of generated completions.
    pub choices: Vec<ChatChoice>,
    /// Token usage statistics (if available).
    pub usage: Option<Usage>,
}
