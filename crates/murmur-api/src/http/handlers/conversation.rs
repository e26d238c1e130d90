//! Conversation CRUD HTTP handlers.
//!
//! Endpoints:
//! - POST   /conversations/      - Create a conversation
//! - GET    /conversations/      - List conversations (offset/limit)
//! - GET    /conversations/{id}  - Get a single conversation
//! - DELETE /conversations/{id}  - Delete a conversation (cascades messages)

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;

use murmur_types::conversation::{Conversation, CreateConversationRequest, DeleteResponse};

use crate::http::error::AppError;
use crate::http::handlers::parse_uuid;
use crate::state::AppState;

/// Query parameters for conversation listing.
#[derive(Debug, Deserialize)]
pub struct ConversationListQuery {
    #[serde(default)]
    pub offset: i64,
    #[serde(default = "default_limit")]
    pub limit: i64,
}

fn default_limit() -> i64 {
    100
}

/// POST /conversations/ - Create a new conversation.
pub async fn create_conversation(
    State(state): State<AppState>,
    Json(body): Json<CreateConversationRequest>,
) -> Result<Json<Conversation>, AppError> {
    let conversation = state.conversation_service.create(body.title).await?;
    Ok(Json(conversation))
}

/// GET /conversations/ - List conversations with offset/limit paging.
pub async fn list_conversations(
    State(state): State<AppState>,
    Query(query): Query<ConversationListQuery>,
) -> Result<Json<Vec<Conversation>>, AppError> {
    let conversations = state
        .conversation_service
        .list(query.offset, query.limit)
        .await?;
    Ok(Json(conversations))
}

/// GET /conversations/{id} - Get a conversation by id.
pub async fn get_conversation(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Conversation>, AppError> {
    let id = parse_uuid(&id)?;
    let conversation = state.conversation_service.get(&id).await?;
    Ok(Json(conversation))
}

/// DELETE /conversations/{id} - Delete a conversation and its messages.
pub async fn delete_conversation(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteResponse>, AppError> {
    let id = parse_uuid(&id)?;
    state.conversation_service.delete(&id).await?;
    Ok(Json(DeleteResponse { ok: true }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_query_defaults() {
        let query: ConversationListQuery = serde_json::from_str("{}").unwrap();
        assert_eq!(query.offset, 0);
        assert_eq!(query.limit, 100);
    }

    #[test]
    fn test_list_query_explicit_values() {
        let query: ConversationListQuery =
            serde_json::from_str(r#"{"offset": 10, "limit": 5}"#).unwrap();
        assert_eq!(query.offset, 10);
        assert_eq!(query.limit, 5);
    }
}
