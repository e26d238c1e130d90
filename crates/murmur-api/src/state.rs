//! Application state wiring all services together.
//!
//! AppState holds the concrete service instances used by both CLI and REST
//! API. Services are generic over repository traits, but AppState pins them
//! to the concrete infra implementations.

use std::sync::Arc;

use murmur_core::conversation::service::ConversationService;
use murmur_core::llm::box_provider::BoxLlmProvider;
use murmur_core::message::service::MessageService;
use murmur_infra::config::{self, AppConfig};
use murmur_infra::llm::anthropic::AnthropicProvider;
use murmur_infra::sqlite::conversation::SqliteConversationRepository;
use murmur_infra::sqlite::message::SqliteMessageRepository;
use murmur_infra::sqlite::pool::DatabasePool;

/// Concrete type aliases for the service generics pinned to infra implementations.
pub type ConcreteConversationService = ConversationService<SqliteConversationRepository>;

pub type ConcreteMessageService =
    MessageService<SqliteConversationRepository, SqliteMessageRepository>;

/// Shared application state holding all services.
///
/// Used by both CLI commands and REST API handlers.
#[derive(Clone)]
pub struct AppState {
    pub conversation_service: Arc<ConcreteConversationService>,
    pub message_service: Arc<ConcreteMessageService>,
    pub llm: Arc<BoxLlmProvider>,
    pub config: AppConfig,
    pub db_pool: DatabasePool,
}

impl AppState {
    /// Initialize the application state: resolve config, connect to the
    /// database, construct the provider, wire services.
    pub async fn init() -> anyhow::Result<Self> {
        let config = AppConfig::from_env();

        // Ensure data directory exists
        tokio::fs::create_dir_all(&config.data_dir).await?;

        let db_pool = DatabasePool::new(&config.database_url()).await?;

        let api_key = config::api_key_from_env()?;
        let llm = Arc::new(BoxLlmProvider::new(AnthropicProvider::new(api_key)));

        let conversation_service =
            ConversationService::new(SqliteConversationRepository::new(db_pool.clone()));

        let message_service = MessageService::new(
            SqliteConversationRepository::new(db_pool.clone()),
            SqliteMessageRepository::new(db_pool.clone()),
            llm.clone(),
            config.model.clone(),
            config.max_tokens,
        );

        Ok(Self {
            conversation_service: Arc::new(conversation_service),
            message_service: Arc::new(message_service),
            llm,
            config,
            db_pool,
        })
    }
}
