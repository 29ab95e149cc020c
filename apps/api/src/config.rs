use std::str::FromStr;

use anyhow::{anyhow, Context, Result};

/// Which text-generation vendor backs the Generation Adapter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LlmProvider {
    #[default]
    Gemini,
    OpenAi,
}

impl FromStr for LlmProvider {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "gemini" | "google" => Ok(LlmProvider::Gemini),
            "openai" => Ok(LlmProvider::OpenAi),
            other => Err(anyhow!(
                "LLM_PROVIDER must be 'gemini' or 'openai', got '{other}'"
            )),
        }
    }
}

/// Application configuration loaded from environment variables.
///
/// API keys are optional here: a missing key is reported when a generation
/// call is attempted, not at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub llm_provider: LlmProvider,
    pub google_api_key: Option<String>,
    pub openai_api_key: Option<String>,
    pub llm_timeout_secs: u64,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            llm_provider: match std::env::var("LLM_PROVIDER") {
                Ok(raw) => raw.parse()?,
                Err(_) => LlmProvider::default(),
            },
            google_api_key: optional_env("GOOGLE_API_KEY"),
            openai_api_key: optional_env("OPENAI_API_KEY"),
            llm_timeout_secs: std::env::var("LLM_TIMEOUT_SECS")
                .unwrap_or_else(|_| "120".to_string())
                .parse::<u64>()
                .context("LLM_TIMEOUT_SECS must be a whole number of seconds")?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }

    /// The API key for the configured provider, if one is set.
    pub fn active_api_key(&self) -> Option<&str> {
        match self.llm_provider {
            LlmProvider::Gemini => self.google_api_key.as_deref(),
            LlmProvider::OpenAi => self.openai_api_key.as_deref(),
        }
    }

    /// Name of the environment variable holding the active provider's key.
    pub fn active_api_key_var(&self) -> &'static str {
        match self.llm_provider {
            LlmProvider::Gemini => "GOOGLE_API_KEY",
            LlmProvider::OpenAi => "OPENAI_API_KEY",
        }
    }
}

/// Reads an env var, treating unset and blank values alike.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_parses_case_insensitively() {
        assert_eq!("Gemini".parse::<LlmProvider>().unwrap(), LlmProvider::Gemini);
        assert_eq!("google".parse::<LlmProvider>().unwrap(), LlmProvider::Gemini);
        assert_eq!(" OPENAI ".parse::<LlmProvider>().unwrap(), LlmProvider::OpenAi);
    }

    #[test]
    fn test_unknown_provider_is_rejected() {
        let err = "claude".parse::<LlmProvider>().unwrap_err();
        assert!(err.to_string().contains("claude"));
    }

    #[test]
    fn test_default_provider_is_gemini() {
        assert_eq!(LlmProvider::default(), LlmProvider::Gemini);
    }

    #[test]
    fn test_active_api_key_follows_provider() {
        let mut config = Config {
            llm_provider: LlmProvider::Gemini,
            google_api_key: Some("g-key".to_string()),
            openai_api_key: None,
            llm_timeout_secs: 120,
            port: 8080,
            rust_log: "info".to_string(),
        };
        assert_eq!(config.active_api_key(), Some("g-key"));
        assert_eq!(config.active_api_key_var(), "GOOGLE_API_KEY");

        config.llm_provider = LlmProvider::OpenAi;
        assert_eq!(config.active_api_key(), None);
        assert_eq!(config.active_api_key_var(), "OPENAI_API_KEY");
    }
}
