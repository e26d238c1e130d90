//! MessageRepository trait definition.
//!
//! Follows the same RPITIT pattern as `ConversationRepository`.
//! Implementations live in murmur-infra (e.g., `SqliteMessageRepository`).

use murmur_types::error::RepositoryError;
use murmur_types::message::Message;
use uuid::Uuid;

/// Repository trait for message persistence.
pub trait MessageRepository: Send + Sync {
    /// Insert a new message.
    fn insert(
        &self,
        message: &Message,
    ) -> impl std::future::Future<Output = Result<(), RepositoryError>> + Send;

    /// Get all messages for a conversation, ordered by created_at ASC, id ASC.
    fn list_for_conversation(
        &self,
        conversation_id: &Uuid,
    ) -> impl std::future::Future<Output = Result<Vec<Message>, RepositoryError>> + Send;

    /// Count messages within a conversation.
    fn count_for_conversation(
        &self,
        conversation_id: &Uuid,
    ) -> impl std::future::Future<Output = Result<u64, RepositoryError>> + Send;
}
