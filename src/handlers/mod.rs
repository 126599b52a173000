// Handlers module

pub mod chat;
pub mod create_message;
pub mod list_messages;

use serde::de::DeserializeOwned;

use crate::error::ApiError;

pub use chat::chat_handler;
pub use create_message::create_message_handler;
pub use list_messages::list_messages_handler;

/// Parse a JSON request body; an empty body reads as the default value
pub(crate) fn parse_body<T>(body: &[u8]) -> Result<T, ApiError>
where
    T: DeserializeOwned + Default,
{
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }

    serde_json::from_slice(body)
        .map_err(|e| ApiError::Validation(format!("invalid JSON body: {}", e)))
}
