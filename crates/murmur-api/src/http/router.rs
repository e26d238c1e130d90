//! Axum router configuration with middleware.
//!
//! Middleware: CORS (allow-any, the frontend runs on a different origin)
//! and request tracing.

use axum::routing::{delete, get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::http::handlers;
use crate::state::AppState;

/// Build the complete API router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Conversation CRUD
        .route(
            "/conversations/",
            post(handlers::conversation::create_conversation)
                .get(handlers::conversation::list_conversations),
        )
        .route(
            "/conversations/{id}",
            get(handlers::conversation::get_conversation),
        )
        .route(
            "/conversations/{id}",
            delete(handlers::conversation::delete_conversation),
        )
        // Messages
        .route(
            "/conversations/{id}/messages",
            get(handlers::message::list_messages).post(handlers::message::create_message),
        )
        // Title generation
        .route("/generate-title", post(handlers::title::generate_title))
        .route("/health", get(health_check))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// GET /health - Simple health check endpoint.
async fn health_check() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
