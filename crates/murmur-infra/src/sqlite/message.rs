//! SQLite message repository implementation.
//!
//! Follows the same patterns as `SqliteConversationRepository`: raw queries,
//! a private Row struct, split reader/writer pool usage. Message order is
//! `(created_at, id)`; UUIDv7 ids are time-sortable, so the id tie-break
//! preserves insertion order for same-timestamp rows.

use murmur_core::message::repository::MessageRepository;
use murmur_types::error::RepositoryError;
use murmur_types::message::{Message, MessageRole};
use sqlx::Row;
use uuid::Uuid;

use super::conversation::{format_datetime, parse_datetime};
use super::pool::DatabasePool;

/// SQLite-backed implementation of `MessageRepository`.
pub struct SqliteMessageRepository {
    pool: DatabasePool,
}

impl SqliteMessageRepository {
    /// Create a new repository backed by the given database pool.
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }
}

/// Internal row type for mapping SQLite rows to domain Message.
struct MessageRow {
    id: String,
    conversation_id: String,
    role: String,
    content: String,
    created_at: String,
}

impl MessageRow {
    fn from_row(row: &sqlx::sqlite::SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            conversation_id: row.try_get("conversation_id")?,
            role: row.try_get("role")?,
            content: row.try_get("content")?,
            created_at: row.try_get("created_at")?,
        })
    }

    fn into_message(self) -> Result<Message, RepositoryError> {
        let id = Uuid::parse_str(&self.id)
            .map_err(|e| RepositoryError::Query(format!("invalid message id: {e}")))?;
        let conversation_id = Uuid::parse_str(&self.conversation_id)
            .map_err(|e| RepositoryError::Query(format!("invalid conversation_id: {e}")))?;
        let role: MessageRole = self
            .role
            .parse()
            .map_err(|e: String| RepositoryError::Query(e))?;
        let created_at = parse_datetime(&self.created_at)?;

        Ok(Message {
            id,
            conversation_id,
            role,
            content: self.content,
            created_at,
        })
    }
}

impl MessageRepository for SqliteMessageRepository {
    async fn insert(&self, message: &Message) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"INSERT INTO messages (id, conversation_id, role, content, created_at)
               VALUES (?, ?, ?, ?, ?)"#,
        )
        .bind(message.id.to_string())
        .bind(message.conversation_id.to_string())
        .bind(message.role.to_string())
        .bind(&message.content)
        .bind(format_datetime(&message.created_at))
        .execute(&self.pool.writer)
        .await
        .map_err(|e| RepositoryError::Query(e.to_string()))?;

        Ok(())
    }

    async fn list_for_conversation(
        &self,
        conversation_id: &Uuid,
    ) -> Result<Vec<Message>, RepositoryError> {
        let rows = sqlx::query(
            "SELECT * FROM messages WHERE conversation_id = ? ORDER BY created_at ASC, id ASC",
        )
        .bind(conversation_id.to_string())
        .fetch_all(&self.pool.reader)
        .await
        .map_err(|e| RepositoryError::Query(e.to_string()))?;

        let mut messages = Vec::with_capacity(rows.len());
        for row in &rows {
            let message_row =
                MessageRow::from_row(row).map_err(|e| RepositoryError::Query(e.to_string()))?;
            messages.push(message_row.into_message()?);
        }

        Ok(messages)
    }

    async fn count_for_conversation(
        &self,
        conversation_id: &Uuid,
    ) -> Result<u64, RepositoryError> {
        let row = sqlx::query("SELECT COUNT(*) AS cnt FROM messages WHERE conversation_id = ?")
            .bind(conversation_id.to_string())
            .fetch_one(&self.pool.reader)
            .await
            .map_err(|e| RepositoryError::Query(e.to_string()))?;

        let count: i64 = row
            .try_get("cnt")
            .map_err(|e| RepositoryError::Query(e.to_string()))?;

        Ok(count as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sqlite::conversation::SqliteConversationRepository;
    use murmur_core::conversation::repository::ConversationRepository;
    use murmur_types::conversation::Conversation;

    async fn test_pool() -> DatabasePool {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("test.db");
        let url = format!("sqlite://{}?mode=rwc", db_path.display());
        std::mem::forget(dir);
        DatabasePool::new(&url).await.unwrap()
    }

    async fn seeded_conversation(pool: &DatabasePool) -> Uuid {
        let repo = SqliteConversationRepository::new(pool.clone());
        let conversation = Conversation::new("Test");
        repo.insert(&conversation).await.unwrap();
        conversation.id
    }

    #[tokio::test]
    async fn test_insert_and_list_ordered() {
        let pool = test_pool().await;
        let conversation_id = seeded_conversation(&pool).await;
        let repo = SqliteMessageRepository::new(pool);

        for i in 0..3 {
            repo.insert(&Message::user(conversation_id, format!("msg {i}")))
                .await
                .unwrap();
        }

        let messages = repo.list_for_conversation(&conversation_id).await.unwrap();
        assert_eq!(messages.len(), 3);
        for pair in messages.windows(2) {
            assert!(pair[0].created_at <= pair[1].created_at);
        }
        assert_eq!(messages[0].content, "msg 0");
        assert_eq!(messages[2].content, "msg 2");
    }

    #[tokio::test]
    async fn test_insert_without_conversation_is_rejected() {
        let pool = test_pool().await;
        let repo = SqliteMessageRepository::new(pool);

        // Foreign keys are enforced, so an orphan message cannot exist.
        let err = repo
            .insert(&Message::user(Uuid::now_v7(), "orphan"))
            .await
            .unwrap_err();
        assert!(matches!(err, RepositoryError::Query(_)));
    }

    #[tokio::test]
    async fn test_delete_conversation_cascades_messages() {
        let pool = test_pool().await;
        let conversation_id = seeded_conversation(&pool).await;
        let conversations = SqliteConversationRepository::new(pool.clone());
        let messages = SqliteMessageRepository::new(pool);

        messages
            .insert(&Message::user(conversation_id, "hello"))
            .await
            .unwrap();
        messages
            .insert(&Message::assistant(conversation_id, "hi there"))
            .await
            .unwrap();
        assert_eq!(
            messages
                .count_for_conversation(&conversation_id)
                .await
                .unwrap(),
            2
        );

        conversations.delete(&conversation_id).await.unwrap();

        assert_eq!(
            messages
                .count_for_conversation(&conversation_id)
                .await
                .unwrap(),
            0
        );
    }

    #[tokio::test]
    async fn test_roles_roundtrip_through_storage() {
        let pool = test_pool().await;
        let conversation_id = seeded_conversation(&pool).await;
        let repo = SqliteMessageRepository::new(pool);

        repo.insert(&Message::user(conversation_id, "question"))
            .await
            .unwrap();
        repo.insert(&Message::assistant(conversation_id, "answer"))
            .await
            .unwrap();

        let messages = repo.list_for_conversation(&conversation_id).await.unwrap();
        assert_eq!(messages[0].role, MessageRole::User);
        assert_eq!(messages[1].role, MessageRole::Assistant);
    }
}
