//! Sample-data seeding for local development.
//!
//! Populates two example conversations with a short exchange each, but
//! only when the database holds no conversations yet. Invoked from the
//! CLI (`murmur seed` or `murmur serve --seed`).

use murmur_core::conversation::repository::ConversationRepository;
use murmur_core::message::repository::MessageRepository;
use murmur_types::conversation::Conversation;
use murmur_types::error::RepositoryError;
use murmur_types::message::Message;
use tracing::info;

use super::conversation::SqliteConversationRepository;
use super::message::SqliteMessageRepository;
use super::pool::DatabasePool;

/// Insert sample conversations when the database is empty.
///
/// Returns the number of conversations created (0 when the database
/// already has data).
pub async fn seed_sample_data(pool: &DatabasePool) -> Result<u64, RepositoryError> {
    let conversations = SqliteConversationRepository::new(pool.clone());
    let messages = SqliteMessageRepository::new(pool.clone());

    if conversations.count().await? > 0 {
        info!("Database already has conversations, skipping seed");
        return Ok(0);
    }

    let first = Conversation::new("Getting started");
    conversations.insert(&first).await?;
    messages
        .insert(&Message::user(first.id, "What can you help me with?"))
        .await?;
    messages
        .insert(&Message::assistant(
            first.id,
            "I can answer questions, brainstorm ideas, and help with writing or code.",
        ))
        .await?;

    let second = Conversation::new("Dinner ideas");
    conversations.insert(&second).await?;
    messages
        .insert(&Message::user(
            second.id,
            "Suggest a quick vegetarian dinner.",
        ))
        .await?;

    info!("Seeded 2 sample conversations");
    Ok(2)
}
