//! Anthropic Messages API request and response types.

use serde::{Deserialize, Serialize};

/// API version header value required by the Messages endpoint.
pub const ANTHROPIC_VERSION: &str = "2023-06-01";

/// An input message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageParam {
    /// Role: "user" or "assistant"
    pub role: String,
    /// Message content
    pub content: String,
}

impl MessageParam {
    /// Create a user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Messages request to the Anthropic API.
#[derive(Debug, Clone, Serialize)]
pub struct MessagesRequest {
    /// Model to use
    pub model: String,
    /// Maximum tokens to generate
    pub max_tokens: u32,
    /// Temperature for generation
    pub temperature: f32,
    /// System prompt
    pub system: String,
    /// Messages in the conversation
    pub messages: Vec<MessageParam>,
}

/// Messages response from the Anthropic API.
#[derive(Debug, Clone, Deserialize)]
pub struct MessagesResponse {
    /// Response ID
    pub id: String,
    /// Object type (always "message")
    #[serde(rename = "type")]
    pub kind: String,
    /// Role of the completion (always "assistant")
    pub role: String,
    /// Model that produced the completion
    pub model: String,
    /// Content blocks
    pub content: Vec<ContentBlock>,
    /// Why generation stopped
    pub stop_reason: Option<String>,
    /// Token usage
    pub usage: Option<Usage>,
}

impl MessagesResponse {
    /// Text of the first content block, if any.
    pub fn text(&self) -> Option<&str> {
        self.content.first().and_then(|block| block.text.as_deref())
    }
}

/// A response content block.
#[derive(Debug, Clone, Deserialize)]
pub struct ContentBlock {
    /// Block type ("text" for completions)
    #[serde(rename = "type")]
    pub block_type: String,
    /// Text content (absent for non-text blocks)
    pub text: Option<String>,
}

/// Token usage information.
#[derive(Debug, Clone, Deserialize)]
pub struct Usage {
    /// Input tokens
    pub input_tokens: u32,
    /// Output tokens
    pub output_tokens: u32,
}

/// API error response.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiError {
    /// Error details
    pub error: ApiErrorDetails,
}

/// API error details.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorDetails {
    /// Error message
    pub message: String,
    /// Error type
    #[serde(rename = "type")]
    pub error_type: Option<String>,
}
