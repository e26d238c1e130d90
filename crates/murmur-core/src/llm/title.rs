//! Conversation title generation via LLM.
//!
//! `generate_title` produces a short, descriptive title from a single text
//! input. Nothing is persisted; the caller decides what to do with the
//! result.

use murmur_types::llm::{ChatTurn, CompletionRequest, LlmError, MessageRole};

use crate::llm::box_provider::BoxLlmProvider;

/// System prompt for the title generation LLM call.
const TITLE_SYSTEM_PROMPT: &str = r#"Generate a short, descriptive title (3-7 words) for a conversation that starts with the given text. The title should capture the main topic or intent. Return ONLY the title text, nothing else.

Examples:
- "Debugging Rust lifetime errors"
- "Planning a weekend trip to Tokyo"
- "Understanding quantum computing basics"
- "Recipe ideas for dinner party""#;

/// Generate a conversation title from a single text input.
///
/// Uses an LLM call at low temperature (0.3) with a strict prompt to
/// produce a concise title. The result is trimmed of whitespace and
/// surrounding quotes.
#[tracing::instrument(name = "generate_title", skip(provider, content), fields(model = %model))]
pub async fn generate_title(
    provider: &BoxLlmProvider,
    content: &str,
    model: &str,
) -> Result<String, LlmError> {
    let request = CompletionRequest {
        model: model.to_string(),
        messages: vec![ChatTurn {
            role: MessageRole::User,
            content: content.to_string(),
        }],
        system: Some(TITLE_SYSTEM_PROMPT.to_string()),
        max_tokens: 50,
        temperature: Some(0.3),
    };

    let response = provider.complete(&request).await?;

    // Trim whitespace and surrounding quotes from the title
    let title = response
        .content
        .trim()
        .trim_matches('"')
        .trim_matches('\'')
        .trim()
        .to_string();

    Ok(title)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::provider::LlmProvider;
    use murmur_types::llm::{CompletionResponse, StopReason, Usage};

    /// Provider that returns a canned completion and records the request.
    struct CannedProvider {
        reply: String,
    }

    impl LlmProvider for CannedProvider {
        fn name(&self) -> &str {
            "canned"
        }

        async fn complete(
            &self,
            request: &CompletionRequest,
        ) -> Result<CompletionResponse, LlmError> {
            assert_eq!(request.max_tokens, 50);
            assert_eq!(request.messages.len(), 1);
            assert!(request.system.is_some());
            Ok(CompletionResponse {
                id: "cmpl_1".to_string(),
                content: self.reply.clone(),
                model: request.model.clone(),
                stop_reason: StopReason::EndTurn,
                usage: Usage::default(),
            })
        }
    }

    #[tokio::test]
    async fn test_generate_title_trims_quotes() {
        let provider = BoxLlmProvider::new(CannedProvider {
            reply: "  \"Planning a Trip\"  ".to_string(),
        });

        let title = generate_title(&provider, "let's plan a trip", "test-model")
            .await
            .unwrap();
        assert_eq!(title, "Planning a Trip");
    }

    #[tokio::test]
    async fn test_generate_title_non_empty() {
        let provider = BoxLlmProvider::new(CannedProvider {
            reply: "Understanding Quantum Computing".to_string(),
        });

        let title = generate_title(&provider, "long text about qubits", "test-model")
            .await
            .unwrap();
        assert!(!title.is_empty());
    }

    #[test]
    fn test_title_system_prompt_constraints() {
        assert!(TITLE_SYSTEM_PROMPT.contains("3-7 words"));
        assert!(TITLE_SYSTEM_PROMPT.contains("ONLY the title text"));
    }
}
