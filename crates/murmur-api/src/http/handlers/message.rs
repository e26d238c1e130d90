//! Message HTTP handlers.
//!
//! Endpoints:
//! - GET  /conversations/{id}/messages - Ordered message history
//! - POST /conversations/{id}/messages - Append a message and return the
//!   assistant reply generated from the full history

use axum::extract::{Path, State};
use axum::Json;

use murmur_types::message::{CreateMessageRequest, Message};

use crate::http::error::AppError;
use crate::http::handlers::parse_uuid;
use crate::state::AppState;

/// GET /conversations/{id}/messages - List messages ordered by created_at.
pub async fn list_messages(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<Message>>, AppError> {
    let conversation_id = parse_uuid(&id)?;
    let messages = state
        .message_service
        .list_for_conversation(&conversation_id)
        .await?;
    Ok(Json(messages))
}

/// POST /conversations/{id}/messages - Append a message and respond.
///
/// Persists the incoming message, forwards the full ordered history to the
/// language model, persists the assistant reply, and returns the reply.
pub async fn create_message(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<CreateMessageRequest>,
) -> Result<Json<Message>, AppError> {
    let conversation_id = parse_uuid(&id)?;
    let reply = state
        .message_service
        .append_and_respond(conversation_id, body.role, body.content)
        .await?;
    Ok(Json(reply))
}
