//! Typed wrappers for the console's backend endpoints.
//!
//! Each call goes through the client's response interceptor, so failures are
//! logged once and re-raised here untouched.

use reqwest::multipart::{Form, Part};

use crate::api::client::{ApiClient, ApiError};
use crate::api::types::{
    ChatMessage, ChatRequest, ChatResponse, CreateKbRequest, KbFile, KnowledgeBase, Session,
    UploadResponse,
};

impl ApiClient {
    /// `GET /kb/list` — all knowledge bases, newest first.
    pub async fn list_kbs(&self) -> Result<Vec<KnowledgeBase>, ApiError> {
        Ok(self.get("/kb/list").await?.json().await?)
    }

    /// `POST /kb/create` — create a knowledge base.
    pub async fn create_kb(&self, request: &CreateKbRequest) -> Result<KnowledgeBase, ApiError> {
        Ok(self.post_json("/kb/create", request).await?.json().await?)
    }

    /// `GET /kb/{id}/files` — documents in one knowledge base, newest first.
    pub async fn kb_files(&self, kb_id: i64) -> Result<Vec<KbFile>, ApiError> {
        Ok(self
            .get(&format!("/kb/{kb_id}/files"))
            .await?
            .json()
            .await?)
    }

    /// `POST /upload` — upload a document into a knowledge base for ingestion.
    pub async fn upload_document(
        &self,
        kb_id: i64,
        filename: &str,
        bytes: Vec<u8>,
    ) -> Result<UploadResponse, ApiError> {
        let form = Form::new()
            .text("kb_id", kb_id.to_string())
            .part("file", Part::bytes(bytes).file_name(filename.to_string()));
        Ok(self.post_multipart("/upload", form).await?.json().await?)
    }

    /// `POST /chat` — ask a question; the backend creates a session when the
    /// request carries none and returns its id either way.
    pub async fn chat(&self, request: &ChatRequest) -> Result<ChatResponse, ApiError> {
        Ok(self.post_json("/chat", request).await?.json().await?)
    }

    /// `GET /chat/history` — recent messages across all sessions.
    pub async fn chat_history(&self) -> Result<Vec<ChatMessage>, ApiError> {
        Ok(self.get("/chat/history").await?.json().await?)
    }

    /// `GET /sessions` — the conversation list, most recently active first.
    pub async fn sessions(&self) -> Result<Vec<Session>, ApiError> {
        Ok(self.get("/sessions").await?.json().await?)
    }

    /// `GET /sessions/{id}/messages` — one conversation's messages in order.
    pub async fn session_messages(&self, session_id: &str) -> Result<Vec<ChatMessage>, ApiError> {
        Ok(self
            .get(&format!("/sessions/{session_id}/messages"))
            .await?
            .json()
            .await?)
    }
}
