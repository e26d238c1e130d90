//! Conversation CRUD service.
//!
//! Generic over `ConversationRepository` to maintain clean architecture
//! (murmur-core never depends on murmur-infra).

use murmur_types::conversation::Conversation;
use murmur_types::error::{ConversationError, RepositoryError};
use tracing::info;
use uuid::Uuid;

use crate::conversation::repository::ConversationRepository;

/// CRUD operations on conversations.
pub struct ConversationService<R: ConversationRepository> {
    repo: R,
}

impl<R: ConversationRepository> ConversationService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Create a conversation with a generated id and server-set created_at.
    ///
    /// The title is trimmed; a blank title is a validation failure.
    pub async fn create(&self, title: String) -> Result<Conversation, ConversationError> {
        let title = title.trim().to_string();
        if title.is_empty() {
            return Err(ConversationError::InvalidTitle(
                "title must not be empty".to_string(),
            ));
        }

        let conversation = Conversation::new(title);
        self.repo.insert(&conversation).await?;
        info!(conversation_id = %conversation.id, "Conversation created");
        Ok(conversation)
    }

    /// List conversations with simple offset/limit paging.
    pub async fn list(
        &self,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<Conversation>, ConversationError> {
        Ok(self.repo.list(offset.max(0), limit.max(0)).await?)
    }

    /// Get a conversation by id.
    pub async fn get(&self, id: &Uuid) -> Result<Conversation, ConversationError> {
        self.repo
            .get(id)
            .await?
            .ok_or(ConversationError::NotFound)
    }

    /// Delete a conversation; messages go with it by cascade.
    pub async fn delete(&self, id: &Uuid) -> Result<(), ConversationError> {
        match self.repo.delete(id).await {
            Ok(()) => {
                info!(conversation_id = %id, "Conversation deleted");
                Ok(())
            }
            Err(RepositoryError::NotFound) => Err(ConversationError::NotFound),
            Err(e) => Err(e.into()),
        }
    }

}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    /// In-memory repository for service-level tests.
    #[derive(Default)]
    struct MemoryConversationRepository {
        items: Mutex<Vec<Conversation>>,
    }

    impl ConversationRepository for MemoryConversationRepository {
        async fn insert(&self, conversation: &Conversation) -> Result<(), RepositoryError> {
            self.items.lock().unwrap().push(conversation.clone());
            Ok(())
        }

        async fn get(&self, id: &Uuid) -> Result<Option<Conversation>, RepositoryError> {
            Ok(self
                .items
                .lock()
                .unwrap()
                .iter()
                .find(|c| c.id == *id)
                .cloned())
        }

        async fn list(&self, offset: i64, limit: i64) -> Result<Vec<Conversation>, RepositoryError> {
            let items = self.items.lock().unwrap();
            Ok(items
                .iter()
                .skip(offset as usize)
                .take(limit as usize)
                .cloned()
                .collect())
        }

        async fn delete(&self, id: &Uuid) -> Result<(), RepositoryError> {
            let mut items = self.items.lock().unwrap();
            let before = items.len();
            items.retain(|c| c.id != *id);
            if items.len() == before {
                return Err(RepositoryError::NotFound);
            }
            Ok(())
        }

        async fn exists(&self, id: &Uuid) -> Result<bool, RepositoryError> {
            Ok(self.items.lock().unwrap().iter().any(|c| c.id == *id))
        }

        async fn count(&self) -> Result<u64, RepositoryError> {
            Ok(self.items.lock().unwrap().len() as u64)
        }
    }

    fn service() -> ConversationService<MemoryConversationRepository> {
        ConversationService::new(MemoryConversationRepository::default())
    }

    #[tokio::test]
    async fn test_create_then_get() {
        let service = service();
        let created = service.create("Test".to_string()).await.unwrap();

        let fetched = service.get(&created.id).await.unwrap();
        assert_eq!(fetched.title, "Test");
        assert_eq!(fetched.created_at, created.created_at);
    }

    #[tokio::test]
    async fn test_create_trims_title() {
        let service = service();
        let created = service.create("  padded  ".to_string()).await.unwrap();
        assert_eq!(created.title, "padded");
    }

    #[tokio::test]
    async fn test_create_rejects_blank_title() {
        let service = service();
        let err = service.create("   ".to_string()).await.unwrap_err();
        assert!(matches!(err, ConversationError::InvalidTitle(_)));
    }

    #[tokio::test]
    async fn test_get_missing_is_not_found() {
        let service = service();
        let err = service.get(&Uuid::now_v7()).await.unwrap_err();
        assert!(matches!(err, ConversationError::NotFound));
    }

    #[tokio::test]
    async fn test_delete_missing_is_not_found() {
        let service = service();
        let err = service.delete(&Uuid::now_v7()).await.unwrap_err();
        assert!(matches!(err, ConversationError::NotFound));
    }

    #[tokio::test]
    async fn test_list_offset_limit() {
        let service = service();
        for i in 0..5 {
            service.create(format!("conversation {i}")).await.unwrap();
        }

        let page = service.list(1, 2).await.unwrap();
        assert_eq!(page.len(), 2);
        assert_eq!(page[0].title, "conversation 1");
    }
}
