use thiserror::Error;

use crate::llm::LlmError;

/// Errors from repository operations (used by trait definitions in murmur-core).
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("database connection error")]
    Connection,

    #[error("query error: {0}")]
    Query(String),

    #[error("entity not found")]
    NotFound,

    #[error("conflict: {0}")]
    Conflict(String),
}

/// Errors related to conversation operations.
#[derive(Debug, Error)]
pub enum ConversationError {
    #[error("conversation not found")]
    NotFound,

    #[error("invalid conversation title: {0}")]
    InvalidTitle(String),

    #[error("storage error: {0}")]
    Repository(#[from] RepositoryError),
}

/// Errors from the message-append-and-respond workflow.
#[derive(Debug, Error)]
pub enum ChatError {
    #[error("conversation not found")]
    ConversationNotFound,

    #[error("message content must not be empty")]
    EmptyContent,

    #[error("storage error: {0}")]
    Repository(#[from] RepositoryError),

    #[error("language model error: {0}")]
    Llm(#[from] LlmError),
}
