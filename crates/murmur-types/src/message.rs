//! Message types for Murmur.
//!
//! A message is one turn in a conversation, authored by "user" or
//! "assistant". Messages are immutable once created and ordered by
//! `created_at` within their conversation (ties broken by id; UUIDv7
//! ids are time-sortable, so id order is insertion order).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use std::fmt;
use std::str::FromStr;

/// Author of a message.
///
/// Maps to the CHECK constraint in the SQLite schema:
/// `CHECK (role IN ('user', 'assistant'))`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    User,
    Assistant,
}

impl fmt::Display for MessageRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MessageRole::User => write!(f, "user"),
            MessageRole::Assistant => write!(f, "assistant"),
        }
    }
}

impl FromStr for MessageRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "user" => Ok(MessageRole::User),
            "assistant" => Ok(MessageRole::Assistant),
            other => Err(format!("invalid message role: '{other}'")),
        }
    }
}

/// A single message within a conversation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: Uuid,
    pub conversation_id: Uuid,
    pub role: MessageRole,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl Message {
    /// Construct a message with a generated id and server-set timestamp.
    pub fn new(conversation_id: Uuid, role: MessageRole, content: String) -> Self {
        Self {
            id: Uuid::now_v7(),
            conversation_id,
            role,
            content,
            created_at: Utc::now(),
        }
    }

    /// Construct a user message.
    pub fn user(conversation_id: Uuid, content: impl Into<String>) -> Self {
        Self::new(conversation_id, MessageRole::User, content.into())
    }

    /// Construct an assistant message.
    pub fn assistant(conversation_id: Uuid, content: impl Into<String>) -> Self {
        Self::new(conversation_id, MessageRole::Assistant, content.into())
    }
}

/// Request body for appending a message to a conversation.
///
/// The role is deserialized into [`MessageRole`] directly, so anything
/// outside user/assistant is rejected at the boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateMessageRequest {
    pub role: MessageRole,
    pub content: String,
}
