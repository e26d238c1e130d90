//! ConversationRepository trait definition.
//!
//! Provides insert/get/list/delete for conversations. Implementations live
//! in murmur-infra (e.g., `SqliteConversationRepository`). Uses native
//! async fn in traits (RPITIT, Rust 2024 edition).

use murmur_types::conversation::Conversation;
use murmur_types::error::RepositoryError;
use uuid::Uuid;

/// Repository trait for conversation persistence.
pub trait ConversationRepository: Send + Sync {
    /// Insert a new conversation.
    fn insert(
        &self,
        conversation: &Conversation,
    ) -> impl std::future::Future<Output = Result<(), RepositoryError>> + Send;

    /// Get a conversation by its unique id.
    fn get(
        &self,
        id: &Uuid,
    ) -> impl std::future::Future<Output = Result<Option<Conversation>, RepositoryError>> + Send;

    /// List conversations ordered by created_at ASC, id ASC.
    fn list(
        &self,
        offset: i64,
        limit: i64,
    ) -> impl std::future::Future<Output = Result<Vec<Conversation>, RepositoryError>> + Send;

    /// Delete a conversation and, by cascade, its messages.
    ///
    /// Fails with `RepositoryError::NotFound` when the id does not exist.
    fn delete(
        &self,
        id: &Uuid,
    ) -> impl std::future::Future<Output = Result<(), RepositoryError>> + Send;

    /// Whether a conversation with the given id exists.
    fn exists(
        &self,
        id: &Uuid,
    ) -> impl std::future::Future<Output = Result<bool, RepositoryError>> + Send;

    /// Count all conversations.
    fn count(&self) -> impl std::future::Future<Output = Result<u64, RepositoryError>> + Send;
}
