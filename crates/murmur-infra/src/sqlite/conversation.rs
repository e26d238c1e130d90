//! SQLite conversation repository implementation.
//!
//! Implements `ConversationRepository` from `murmur-core` using sqlx with
//! split read/write pools: raw queries, a private Row struct for
//! SQLite-to-domain mapping, reads on the reader pool, writes on the
//! single-connection writer pool.

use chrono::{DateTime, Utc};
use murmur_core::conversation::repository::ConversationRepository;
use murmur_types::conversation::Conversation;
use murmur_types::error::RepositoryError;
use sqlx::Row;
use uuid::Uuid;

use super::pool::DatabasePool;

/// SQLite-backed implementation of `ConversationRepository`.
pub struct SqliteConversationRepository {
    pool: DatabasePool,
}

impl SqliteConversationRepository {
    /// Create a new repository backed by the given database pool.
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }
}

/// Internal row type for mapping SQLite rows to domain Conversation.
struct ConversationRow {
    id: String,
    title: String,
    created_at: String,
}

impl ConversationRow {
    fn from_row(row: &sqlx::sqlite::SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            title: row.try_get("title")?,
            created_at: row.try_get("created_at")?,
        })
    }

    fn into_conversation(self) -> Result<Conversation, RepositoryError> {
        let id = Uuid::parse_str(&self.id)
            .map_err(|e| RepositoryError::Query(format!("invalid conversation id: {e}")))?;
        let created_at = parse_datetime(&self.created_at)?;

        Ok(Conversation {
            id,
            title: self.title,
            created_at,
        })
    }
}

pub(crate) fn parse_datetime(s: &str) -> Result<DateTime<Utc>, RepositoryError> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| RepositoryError::Query(format!("invalid datetime: {e}")))
}

pub(crate) fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339()
}

impl ConversationRepository for SqliteConversationRepository {
    async fn insert(&self, conversation: &Conversation) -> Result<(), RepositoryError> {
        sqlx::query("INSERT INTO conversations (id, title, created_at) VALUES (?, ?, ?)")
            .bind(conversation.id.to_string())
            .bind(&conversation.title)
            .bind(format_datetime(&conversation.created_at))
            .execute(&self.pool.writer)
            .await
            .map_err(|e| RepositoryError::Query(e.to_string()))?;

        Ok(())
    }

    async fn get(&self, id: &Uuid) -> Result<Option<Conversation>, RepositoryError> {
        let row = sqlx::query("SELECT * FROM conversations WHERE id = ?")
            .bind(id.to_string())
            .fetch_optional(&self.pool.reader)
            .await
            .map_err(|e| RepositoryError::Query(e.to_string()))?;

        match row {
            Some(row) => {
                let conversation_row = ConversationRow::from_row(&row)
                    .map_err(|e| RepositoryError::Query(e.to_string()))?;
                Ok(Some(conversation_row.into_conversation()?))
            }
            None => Ok(None),
        }
    }

    async fn list(&self, offset: i64, limit: i64) -> Result<Vec<Conversation>, RepositoryError> {
        let rows = sqlx::query(
            "SELECT * FROM conversations ORDER BY created_at ASC, id ASC LIMIT ? OFFSET ?",
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool.reader)
        .await
        .map_err(|e| RepositoryError::Query(e.to_string()))?;

        let mut conversations = Vec::with_capacity(rows.len());
        for row in &rows {
            let conversation_row = ConversationRow::from_row(row)
                .map_err(|e| RepositoryError::Query(e.to_string()))?;
            conversations.push(conversation_row.into_conversation()?);
        }

        Ok(conversations)
    }

    async fn delete(&self, id: &Uuid) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM conversations WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool.writer)
            .await
            .map_err(|e| RepositoryError::Query(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }

    async fn exists(&self, id: &Uuid) -> Result<bool, RepositoryError> {
        let row = sqlx::query("SELECT EXISTS(SELECT 1 FROM conversations WHERE id = ?) AS present")
            .bind(id.to_string())
            .fetch_one(&self.pool.reader)
            .await
            .map_err(|e| RepositoryError::Query(e.to_string()))?;

        let present: i64 = row
            .try_get("present")
            .map_err(|e| RepositoryError::Query(e.to_string()))?;

        Ok(present != 0)
    }

    async fn count(&self) -> Result<u64, RepositoryError> {
        let row = sqlx::query("SELECT COUNT(*) AS cnt FROM conversations")
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

    async fn test_pool() -> DatabasePool {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("test.db");
        let url = format!("sqlite://{}?mode=rwc", db_path.display());
        // Leak tempdir so it lives for the test
        std::mem::forget(dir);
        DatabasePool::new(&url).await.unwrap()
    }

    #[tokio::test]
    async fn test_insert_and_get() {
        let pool = test_pool().await;
        let repo = SqliteConversationRepository::new(pool);

        let conversation = Conversation::new("Test");
        repo.insert(&conversation).await.unwrap();

        let found = repo.get(&conversation.id).await.unwrap().unwrap();
        assert_eq!(found.id, conversation.id);
        assert_eq!(found.title, "Test");
        assert_eq!(found.created_at, conversation.created_at);
    }

    #[tokio::test]
    async fn test_get_missing_returns_none() {
        let pool = test_pool().await;
        let repo = SqliteConversationRepository::new(pool);

        let found = repo.get(&Uuid::now_v7()).await.unwrap();
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn test_list_is_ordered_and_paged() {
        let pool = test_pool().await;
        let repo = SqliteConversationRepository::new(pool);

        for i in 0..4 {
            repo.insert(&Conversation::new(format!("conversation {i}")))
                .await
                .unwrap();
        }

        let all = repo.list(0, 100).await.unwrap();
        assert_eq!(all.len(), 4);
        assert_eq!(all[0].title, "conversation 0");
        assert_eq!(all[3].title, "conversation 3");

        let page = repo.list(1, 2).await.unwrap();
        assert_eq!(page.len(), 2);
        assert_eq!(page[0].title, "conversation 1");
    }

    #[tokio::test]
    async fn test_delete_missing_is_not_found() {
        let pool = test_pool().await;
        let repo = SqliteConversationRepository::new(pool);

        let err = repo.delete(&Uuid::now_v7()).await.unwrap_err();
        assert!(matches!(err, RepositoryError::NotFound));
    }

    #[tokio::test]
    async fn test_exists_and_count() {
        let pool = test_pool().await;
        let repo = SqliteConversationRepository::new(pool);

        let conversation = Conversation::new("Here");
        repo.insert(&conversation).await.unwrap();

        assert!(repo.exists(&conversation.id).await.unwrap());
        assert!(!repo.exists(&Uuid::now_v7()).await.unwrap());
        assert_eq!(repo.count().await.unwrap(), 1);

        repo.delete(&conversation.id).await.unwrap();
        assert_eq!(repo.count().await.unwrap(), 0);
    }
}
