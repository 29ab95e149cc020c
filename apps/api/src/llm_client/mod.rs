//! LLM client: the single point of entry for all text-generation calls.
//!
//! No other module may talk to a vendor API directly. Generation code receives
//! an `Arc<dyn TextGenerator>` from `AppState` and never knows which vendor
//! is behind it.
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::debug;

use crate::config::{Config, LlmProvider};

pub mod gemini;
pub mod openai;
pub mod prompts;

#[cfg(test)]
pub mod testing;

pub use gemini::GeminiClient;
pub use openai::OpenAiClient;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("{env_var} is not set")]
    MissingApiKey { env_var: &'static str },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("no JSON object found in model output")]
    NoJsonObject,

    #[error("LLM returned empty content")]
    EmptyContent,
}

/// An external text-generation service. One prompt in, one completion out.
///
/// Carried in `AppState` as `Arc<dyn TextGenerator>`; the backend is picked
/// once at startup from `LLM_PROVIDER`.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Requests a single completion and returns its raw text.
    async fn complete(&self, prompt: &str) -> Result<String, LlmError>;

    /// Short vendor label for logs.
    fn provider(&self) -> &'static str;
}

/// Builds the generator selected by configuration.
pub fn build_generator(config: &Config) -> Result<Arc<dyn TextGenerator>, LlmError> {
    let timeout = Duration::from_secs(config.llm_timeout_secs);
    let generator: Arc<dyn TextGenerator> = match config.llm_provider {
        LlmProvider::Gemini => Arc::new(GeminiClient::new(config.google_api_key.clone(), timeout)?),
        LlmProvider::OpenAi => Arc::new(OpenAiClient::new(config.openai_api_key.clone(), timeout)?),
    };
    Ok(generator)
}

/// Calls the generator and deserializes the first JSON object in its reply.
///
/// The reply may wrap the object in prose or code fences; see
/// [`extract_json_object`]. Deserializing straight into `T` means a missing
/// required key fails here rather than somewhere downstream.
pub async fn complete_json<T: DeserializeOwned>(
    generator: &dyn TextGenerator,
    prompt: &str,
) -> Result<T, LlmError> {
    let text = generator.complete(prompt).await?;
    if text.trim().is_empty() {
        return Err(LlmError::EmptyContent);
    }

    let span = extract_json_object(&text)?;
    debug!(
        "{} reply: {} chars, JSON span {} chars",
        generator.provider(),
        text.len(),
        span.len()
    );

    serde_json::from_str(span).map_err(LlmError::Parse)
}

/// Returns the span from the first `{` to the last `}` in `text`.
///
/// Greedy on purpose: it does not track nesting or strings, so two separate
/// objects in one reply come back as one (unparseable) span.
pub fn extract_json_object(text: &str) -> Result<&str, LlmError> {
    let start = text.find('{').ok_or(LlmError::NoJsonObject)?;
    let end = text
        .rfind('}')
        .filter(|&end| end > start)
        .ok_or(LlmError::NoJsonObject)?;
    Ok(&text[start..=end])
}
