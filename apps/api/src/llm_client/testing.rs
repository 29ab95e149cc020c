//! Deterministic `TextGenerator` for tests. Records every prompt it receives.

use async_trait::async_trait;
use parking_lot::Mutex;

use super::{LlmError, TextGenerator};

#[derive(Debug, Clone)]
enum StubReply {
    Text(String),
    MissingKey(&'static str),
    ApiFailure(u16),
}

#[derive(Debug)]
pub struct StubGenerator {
    reply: StubReply,
    prompts: Mutex<Vec<String>>,
}

impl StubGenerator {
    /// Always answers with `text`.
    pub fn replying(text: impl Into<String>) -> Self {
        Self::with_reply(StubReply::Text(text.into()))
    }

    /// Behaves like a backend whose credential is not configured.
    pub fn missing_key(env_var: &'static str) -> Self {
        Self::with_reply(StubReply::MissingKey(env_var))
    }

    /// Behaves like a vendor answering with a non-success status.
    pub fn failing(status: u16) -> Self {
        Self::with_reply(StubReply::ApiFailure(status))
    }

    fn with_reply(reply: StubReply) -> Self {
        Self {
            reply,
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().clone()
    }

    pub fn call_count(&self) -> usize {
        self.prompts.lock().len()
    }
}

#[async_trait]
impl TextGenerator for StubGenerator {
    async fn complete(&self, prompt: &str) -> Result<String, LlmError> {
        self.prompts.lock().push(prompt.to_string());
        match &self.reply {
            StubReply::Text(text) => Ok(text.clone()),
            StubReply::MissingKey(env_var) => Err(LlmError::MissingApiKey { env_var: *env_var }),
            StubReply::ApiFailure(status) => Err(LlmError::Api {
                status: *status,
                message: "stubbed failure".to_string(),
            }),
        }
    }

    fn provider(&self) -> &'static str {
        "stub"
    }
}
