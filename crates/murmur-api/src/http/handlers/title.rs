//! Title generation HTTP handler.
//!
//! POST /generate-title - Produce a short conversation title from a single
//! text input. Nothing is persisted.

use axum::extract::State;
use axum::Json;

use murmur_core::llm::title;
use murmur_types::llm::{GenerateTitleRequest, TitleResponse};

use crate::http::error::AppError;
use crate::state::AppState;

/// POST /generate-title - Generate a title for the given content.
pub async fn generate_title(
    State(state): State<AppState>,
    Json(body): Json<GenerateTitleRequest>,
) -> Result<Json<TitleResponse>, AppError> {
    if body.content.trim().is_empty() {
        return Err(AppError::Validation(
            "content must not be empty".to_string(),
        ));
    }

    let title = title::generate_title(&state.llm, &body.content, &state.config.model).await?;
    Ok(Json(TitleResponse { title }))
}
