//! Conversation types for Murmur.
//!
//! A conversation is a titled thread owning an ordered sequence of messages.
//! Conversations are immutable once created; they go away only via deletion,
//! which cascades to their messages.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A titled thread containing an ordered sequence of messages.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Conversation {
    pub id: Uuid,
    pub title: String,
    pub created_at: DateTime<Utc>,
}

impl Conversation {
    /// Construct a conversation with a generated id and server-set timestamp.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: Uuid::now_v7(),
            title: title.into(),
            created_at: Utc::now(),
        }
    }
}

/// Request body for creating a conversation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateConversationRequest {
    pub title: String,
}

/// Response body for a successful conversation deletion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteResponse {
    pub ok: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_sets_id_and_timestamp() {
        let before = Utc::now();
        let conversation = Conversation::new("Test");
        assert_eq!(conversation.title, "Test");
        assert!(conversation.created_at >= before);
    }

    #[test]
    fn test_uuid_v7_ids_are_time_ordered() {
        let a = Conversation::new("first");
        std::thread::sleep(std::time::Duration::from_millis(2));
        let b = Conversation::new("second");
        assert!(a.id < b.id);
    }

    #[test]
    fn test_conversation_serialize() {
        let conversation = Conversation::new("Trip planning");
        let json = serde_json::to_string(&conversation).unwrap();
        assert!(json.contains("\"title\":\"Trip planning\""));
        assert!(json.contains("\"created_at\""));
    }

    #[test]
    fn test_delete_response_shape() {
        let json = serde_json::to_string(&DeleteResponse { ok: true }).unwrap();
        assert_eq!(json, "{\"ok\":true}");
    }
}
