//! Message workflow: append a message, then generate and persist the reply.
//!
//! `MessageService` coordinates the conversation repository (existence
//! checks), the message repository (history), and the language-model
//! collaborator. Generic over both repositories to maintain clean
//! architecture (murmur-core never depends on murmur-infra).

use std::sync::Arc;

use murmur_types::error::ChatError;
use murmur_types::llm::{ChatTurn, CompletionRequest};
use murmur_types::message::{Message, MessageRole};
use tracing::info;
use uuid::Uuid;

use crate::conversation::repository::ConversationRepository;
use crate::llm::box_provider::BoxLlmProvider;
use crate::message::repository::MessageRepository;

/// Orchestrates message persistence and assistant reply generation.
pub struct MessageService<C: ConversationRepository, M: MessageRepository> {
    conversation_repo: C,
    message_repo: M,
    provider: Arc<BoxLlmProvider>,
    model: String,
    max_tokens: u32,
}

impl<C: ConversationRepository, M: MessageRepository> MessageService<C, M> {
    /// Create a new message service.
    pub fn new(
        conversation_repo: C,
        message_repo: M,
        provider: Arc<BoxLlmProvider>,
        model: String,
        max_tokens: u32,
    ) -> Self {
        Self {
            conversation_repo,
            message_repo,
            provider,
            model,
            max_tokens,
        }
    }

    /// Get all messages for a conversation, ordered by creation time.
    ///
    /// Fails with `ChatError::ConversationNotFound` when the conversation
    /// does not exist (an empty conversation returns an empty list).
    pub async fn list_for_conversation(
        &self,
        conversation_id: &Uuid,
    ) -> Result<Vec<Message>, ChatError> {
        if !self.conversation_repo.exists(conversation_id).await? {
            return Err(ChatError::ConversationNotFound);
        }
        Ok(self
            .message_repo
            .list_for_conversation(conversation_id)
            .await?)
    }

    /// Append a message, forward the full history to the language model,
    /// persist the assistant reply, and return it.
    ///
    /// Two messages are created per call: the incoming one and the
    /// assistant reply. There is no compensating rollback -- a collaborator
    /// or persistence failure after the first insert leaves the conversation
    /// with an unanswered message.
    #[tracing::instrument(
        name = "append_and_respond",
        skip(self, content),
        fields(conversation_id = %conversation_id, role = %role)
    )]
    pub async fn append_and_respond(
        &self,
        conversation_id: Uuid,
        role: MessageRole,
        content: String,
    ) -> Result<Message, ChatError> {
        if content.trim().is_empty() {
            return Err(ChatError::EmptyContent);
        }
        if !self.conversation_repo.exists(&conversation_id).await? {
            return Err(ChatError::ConversationNotFound);
        }

        let incoming = Message::new(conversation_id, role, content);
        self.message_repo.insert(&incoming).await?;

        // Re-read the full ordered history, including the message just
        // inserted, and forward it verbatim.
        let history = self
            .message_repo
            .list_for_conversation(&conversation_id)
            .await?;
        let turns: Vec<ChatTurn> = history
            .iter()
            .map(|m| ChatTurn {
                role: m.role.clone(),
                content: m.content.clone(),
            })
            .collect();

        let request = CompletionRequest {
            model: self.model.clone(),
            messages: turns,
            system: None,
            max_tokens: self.max_tokens,
            temperature: None,
        };
        let response = self.provider.complete(&request).await?;

        let reply = Message::assistant(conversation_id, response.content);
        self.message_repo.insert(&reply).await?;
        info!(
            conversation_id = %conversation_id,
            message_id = %reply.id,
            provider = self.provider.name(),
            "Assistant reply persisted"
        );

        Ok(reply)
    }
}
