//! Application error type mapping to HTTP status codes.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use murmur_types::error::{ChatError, ConversationError};
use murmur_types::llm::LlmError;

/// Application-level error that maps to HTTP responses.
#[derive(Debug)]
pub enum AppError {
    /// Conversation CRUD errors.
    Conversation(ConversationError),
    /// Message workflow errors.
    Chat(ChatError),
    /// Direct collaborator errors (title generation).
    Llm(LlmError),
    /// Validation error.
    Validation(String),
    /// Generic internal error.
    Internal(String),
}

impl From<ConversationError> for AppError {
    fn from(e: ConversationError) -> Self {
        AppError::Conversation(e)
    }
}

impl From<ChatError> for AppError {
    fn from(e: ChatError) -> Self {
        AppError::Chat(e)
    }
}

impl From<LlmError> for AppError {
    fn from(e: LlmError) -> Self {
        AppError::Llm(e)
    }
}

impl AppError {
    fn status_code_and_message(&self) -> (StatusCode, &'static str, String) {
        match self {
            AppError::Conversation(ConversationError::NotFound)
            | AppError::Chat(ChatError::ConversationNotFound) => (
                StatusCode::NOT_FOUND,
                "CONVERSATION_NOT_FOUND",
                "Conversation not found".to_string(),
            ),
            AppError::Conversation(ConversationError::InvalidTitle(msg)) => {
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
            }
            AppError::Chat(ChatError::EmptyContent) => (
                StatusCode::BAD_REQUEST,
                "VALIDATION_ERROR",
                ChatError::EmptyContent.to_string(),
            ),
            AppError::Chat(ChatError::Llm(e)) | AppError::Llm(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "LLM_ERROR",
                e.to_string(),
            ),
            AppError::Conversation(ConversationError::Repository(e))
            | AppError::Chat(ChatError::Repository(e)) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "STORAGE_ERROR",
                e.to_string(),
            ),
            AppError::Validation(msg) => {
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
            }
            AppError::Internal(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                msg.clone(),
            ),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = self.status_code_and_message();

        let body = json!({
            "code": code,
            "message": message,
        });

        (
            status,
            [(axum::http::header::CONTENT_TYPE, "application/json")],
            body.to_string(),
        )
            .into_response()
    }
}
