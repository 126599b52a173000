// Data structures (Message, request and response bodies)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::value::RawValue;
use uuid::Uuid;

// Stored chat message
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Message {
    pub id: Uuid,
    pub sender: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

// Validated input for a store insert
#[derive(Debug, Clone, PartialEq)]
pub struct NewMessage {
    pub sender: String,
    pub content: String,
}

// Request Types

// POST /messages body. Fields are optional so that a missing field is a
// validation failure rather than a parse failure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewMessageRequest {
    #[serde(default)]
    pub sender: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

impl NewMessageRequest {
    /// Require both fields to be present and non-empty
    pub fn validate(self) -> Result<NewMessage, String> {
        match (non_empty(self.sender), non_empty(self.content)) {
            (Some(sender), Some(content)) => Ok(NewMessage { sender, content }),
            (None, Some(_)) => Err("sender is required".to_string()),
            (Some(_), None) => Err("content is required".to_string()),
            (None, None) => Err("sender and content are required".to_string()),
        }
    }
}

fn non_empty(field: Option<String>) -> Option<String> {
    field.filter(|value| !value.is_empty())
}

// POST /api/chat body. Each entry keeps its original JSON text and is
// forwarded to the provider untouched.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub messages: Option<Vec<Box<RawValue>>>,
}

// Response Types

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StatusResponse {
    pub status: String,
}

impl StatusResponse {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_serialization() {
        let message = Message {
            id: Uuid::new_v4(),
            sender: "alice".to_string(),
            content: "hi".to_string(),
            created_at: Utc::now(),
        };
        let value = serde_json::to_value(&message).unwrap();
        assert_eq!(value["sender"], "alice");
        assert_eq!(value["content"], "hi");
        assert!(value["created_at"].is_string());
        assert!(value["id"].is_string());

        let deserialized: Message = serde_json::from_value(value).unwrap();
        assert_eq!(deserialized, message);
    }

    #[test]
    fn test_new_message_request_valid() {
        let request: NewMessageRequest =
            serde_json::from_str(r#"{"sender":"alice","content":"hi"}"#).unwrap();
        let message = request.validate().unwrap();
        assert_eq!(message.sender, "alice");
        assert_eq!(message.content, "hi");
    }

    #[test]
    fn test_new_message_request_ignores_client_timestamp() {
        let request: NewMessageRequest = serde_json::from_str(
            r#"{"sender":"alice","content":"hi","created_at":"2000-01-01T00:00:00Z"}"#,
        )
        .unwrap();
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_new_message_request_missing_fields() {
        let request: NewMessageRequest = serde_json::from_str(r#"{"content":"hi"}"#).unwrap();
        assert_eq!(request.validate().unwrap_err(), "sender is required");

        let request: NewMessageRequest = serde_json::from_str(r#"{"sender":"alice"}"#).unwrap();
        assert_eq!(request.validate().unwrap_err(), "content is required");

        let request: NewMessageRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(
            request.validate().unwrap_err(),
            "sender and content are required"
        );
    }

    #[test]
    fn test_new_message_request_empty_and_null_fields() {
        let request: NewMessageRequest =
            serde_json::from_str(r#"{"sender":"","content":"hi"}"#).unwrap();
        assert!(request.validate().is_err());

        let request: NewMessageRequest =
            serde_json::from_str(r#"{"sender":"alice","content":null}"#).unwrap();
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_chat_request_deserialization() {
        let request: ChatRequest = serde_json::from_str(
            r#"{"messages":[{"role":"system","content":"be brief"},{"content":"hello","role":"user","name":"alice"}]}"#,
        )
        .unwrap();

        let messages = request.messages.unwrap();
        assert_eq!(messages.len(), 2);
        // Key order and spelling are kept as sent
        assert_eq!(
            messages[1].get(),
            r#"{"content":"hello","role":"user","name":"alice"}"#
        );
    }

    #[test]
    fn test_chat_request_without_messages() {
        let request: ChatRequest = serde_json::from_str("{}").unwrap();
        assert!(request.messages.is_none());

        let request: ChatRequest = serde_json::from_str(r#"{"messages":null}"#).unwrap();
        assert!(request.messages.is_none());
    }

    #[test]
    fn test_status_response_serialization() {
        let serialized = serde_json::to_string(&StatusResponse::ok()).unwrap();
        assert_eq!(serialized, r#"{"status":"ok"}"#);
    }

    #[test]
    fn test_error_response_serialization() {
        let response = ErrorResponse {
            error: "content is required".to_string(),
        };
        let serialized = serde_json::to_string(&response).unwrap();
        assert_eq!(serialized, r#"{"error":"content is required"}"#);
    }
}
