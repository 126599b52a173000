//! Completion proxy
//!
//! Forwards a caller-supplied conversation to an external chat-completion
//! service and hands back the provider's response body untouched. No state is
//! kept between calls; the caller sends the full history every time.

pub mod error;
pub mod openai;

use async_trait::async_trait;
use bytes::Bytes;
use serde::Serialize;
use serde_json::value::RawValue;

pub use error::CompletionError;
pub use openai::{OpenAiClient, OpenAiConfig};

/// Model attached to every forwarded conversation
pub const MODEL: &str = "gpt-4o-mini";

/// Output token budget attached to every forwarded conversation
pub const MAX_TOKENS: u32 = 500;

/// Body sent to the provider's chat completions endpoint
#[derive(Debug, Clone, Serialize)]
pub struct CompletionRequest {
    pub model: String,
    /// Conversation entries, serialized exactly as the caller sent them
    pub messages: Vec<Box<RawValue>>,
    pub max_tokens: u32,
}

impl CompletionRequest {
    /// Wrap a conversation with the fixed model and token budget
    pub fn new(messages: Vec<Box<RawValue>>) -> Self {
        Self {
            model: MODEL.to_string(),
            messages,
            max_tokens: MAX_TOKENS,
        }
    }
}

/// Interface for chat-completion backends
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Issue one completion call and return the raw response body
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, timeout, or a non-success status.
    async fn complete(&self, request: CompletionRequest) -> Result<Bytes, CompletionError>;
}
