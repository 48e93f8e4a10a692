//! Request and response bodies for the console API.
//!
//! Mirrors the backend's JSON schemas; unknown or absent fields are tolerated
//! so the frontend keeps working across minor backend revisions.

use serde::{Deserialize, Serialize};

/// One knowledge base, as listed and created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KnowledgeBase {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub created_at: String,
}

/// Body for `POST /kb/create`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateKbRequest {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// One document inside a knowledge base.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KbFile {
    pub id: i64,
    pub filename: String,
    #[serde(default)]
    pub status: Option<String>,
    pub upload_time: String,
}

/// Body of a successful `POST /upload`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadResponse {
    pub status: String,
    pub message: String,
}

/// Body for `POST /chat`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub question: String,
    /// Knowledge base to search in.
    pub kb_id: i64,
    /// Absent for the first message of a new conversation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
    /// How many prior turns of the session to carry as context.
    #[serde(default = "default_history_len")]
    pub history_len: u32,
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    /// How many document fragments to cite.
    #[serde(default = "default_top_k")]
    pub top_k: u32,
}

impl ChatRequest {
    /// A question against one knowledge base with the backend's defaults.
    pub fn new(question: impl Into<String>, kb_id: i64) -> Self {
        Self {
            question: question.into(),
            kb_id,
            session_id: None,
            history_len: default_history_len(),
            temperature: default_temperature(),
            top_k: default_top_k(),
        }
    }
}

fn default_history_len() -> u32 {
    10
}

fn default_temperature() -> f32 {
    0.1
}

fn default_top_k() -> u32 {
    3
}

/// Body of `POST /chat`: the answer plus the session the exchange was
/// recorded under (newly created when the request carried no session id).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatResponse {
    pub answer: String,
    pub session_id: String,
}

/// One recorded message. Session message listings omit the generation
/// parameters, so everything beyond role and content is optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
    #[serde(default)]
    pub kb_id: Option<i64>,
    #[serde(default)]
    pub temperature: Option<f32>,
    #[serde(default)]
    pub top_k: Option<u32>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// One conversation in the session list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub id: String,
    pub title: String,
    pub created_at: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_request_defaults() {
        let request = ChatRequest::new("what is rust", 7);
        assert_eq!(request.history_len, 10);
        assert_eq!(request.temperature, 0.1);
        assert_eq!(request.top_k, 3);
        assert!(request.session_id.is_none());
    }

    #[test]
    fn test_new_conversation_omits_session_id() {
        let body = serde_json::to_value(ChatRequest::new("hi", 1)).unwrap();
        assert!(body.get("session_id").is_none());
        assert_eq!(body["kb_id"], 1);
    }

    #[test]
    fn test_session_messages_decode_without_parameters() {
        let message: ChatMessage =
            serde_json::from_str(r#"{"role": "user", "content": "hi"}"#).unwrap();
        assert_eq!(message.role, "user");
        assert!(message.kb_id.is_none());
        assert!(message.created_at.is_none());
    }
}
