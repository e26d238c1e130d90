//! LlmProvider trait definition.
//!
//! Uses native async fn in traits (RPITIT, Rust 2024 edition).
//! Implementations live in murmur-infra (e.g., `AnthropicProvider`).

use murmur_types::llm::{CompletionRequest, CompletionResponse, LlmError};

/// Trait for the language-model collaborator.
///
/// The contract is intentionally small: one blocking completion call over
/// the full ordered history. Errors are not caught here; they propagate to
/// the caller as request failures.
pub trait LlmProvider: Send + Sync {
    /// Human-readable provider name (e.g., "anthropic").
    fn name(&self) -> &str;

    /// Send a completion request and receive the full response.
    fn complete(
        &self,
        request: &CompletionRequest,
    ) -> impl std::future::Future<Output = Result<CompletionResponse, LlmError>> + Send;
}
