//! Environment-based configuration for Murmur.
//!
//! Everything is driven by environment variables:
//! - `MURMUR_DATA_DIR`   -- data directory, default `~/.murmur`
//! - `MURMUR_MODEL`      -- model id for completions and titles
//! - `MURMUR_MAX_TOKENS` -- reply token cap
//! - `ANTHROPIC_API_KEY` -- provider credential, required at startup

use std::path::PathBuf;

use anyhow::Context;
use secrecy::SecretString;

/// Default model used for completions and title generation.
pub const DEFAULT_MODEL: &str = "claude-sonnet-4-20250514";

/// Default cap on assistant reply tokens.
pub const DEFAULT_MAX_TOKENS: u32 = 1024;

/// Runtime configuration resolved from the environment.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub data_dir: PathBuf,
    pub model: String,
    pub max_tokens: u32,
}

impl AppConfig {
    /// Resolve configuration from environment variables, applying defaults.
    pub fn from_env() -> Self {
        let data_dir = std::env::var("MURMUR_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_data_dir());

        let model =
            std::env::var("MURMUR_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        let max_tokens = parse_max_tokens(std::env::var("MURMUR_MAX_TOKENS").ok().as_deref());

        Self {
            data_dir,
            model,
            max_tokens,
        }
    }

    /// SQLite URL for the database file inside the data directory.
    pub fn database_url(&self) -> String {
        format!(
            "sqlite://{}?mode=rwc",
            self.data_dir.join("murmur.db").display()
        )
    }
}

fn default_data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".murmur")
}

fn parse_max_tokens(raw: Option<&str>) -> u32 {
    match raw {
        Some(value) => match value.parse::<u32>() {
            Ok(n) if n > 0 => n,
            _ => {
                tracing::warn!(
                    value,
                    "Invalid MURMUR_MAX_TOKENS, using default {DEFAULT_MAX_TOKENS}"
                );
                DEFAULT_MAX_TOKENS
            }
        },
        None => DEFAULT_MAX_TOKENS,
    }
}

/// Read the Anthropic API key from the environment into a [`SecretString`].
pub fn api_key_from_env() -> anyhow::Result<SecretString> {
    let key = std::env::var("ANTHROPIC_API_KEY")
        .context("ANTHROPIC_API_KEY is not set; the language-model provider needs it")?;
    Ok(SecretString::from(key))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_max_tokens_default() {
        assert_eq!(parse_max_tokens(None), DEFAULT_MAX_TOKENS);
    }

    #[test]
    fn test_parse_max_tokens_valid() {
        assert_eq!(parse_max_tokens(Some("2048")), 2048);
    }

    #[test]
    fn test_parse_max_tokens_rejects_garbage() {
        assert_eq!(parse_max_tokens(Some("lots")), DEFAULT_MAX_TOKENS);
        assert_eq!(parse_max_tokens(Some("0")), DEFAULT_MAX_TOKENS);
    }

    #[test]
    fn test_database_url_points_into_data_dir() {
        let config = AppConfig {
            data_dir: PathBuf::from("/tmp/murmur-test"),
            model: DEFAULT_MODEL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
        };
        assert_eq!(
            config.database_url(),
            "sqlite:///tmp/murmur-test/murmur.db?mode=rwc"
        );
    }
}
