use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::llm_client::LlmError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid id: {0}")]
    MalformedId(String),

    /// The credential for the configured LLM provider is absent.
    /// Carries the name of the environment variable to set.
    #[error("Missing API key: {0}")]
    MissingApiKey(String),

    #[error("Generation error: {0}")]
    Generation(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// Wraps an LLM failure with the operation that triggered it.
    /// A missing credential stays distinguishable from every other failure.
    pub fn from_llm(context: &str, err: LlmError) -> Self {
        match err {
            LlmError::MissingApiKey { env_var } => AppError::MissingApiKey(env_var.to_string()),
            other => AppError::Generation(format!("{context}: {other}")),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::Validation(msg) => (
                StatusCode::BAD_REQUEST,
                "VALIDATION_ERROR",
                format!("Validation error: {msg}"),
            ),
            AppError::MalformedId(msg) => (StatusCode::BAD_REQUEST, "INVALID_ID", msg.clone()),
            AppError::MissingApiKey(env_var) => {
                tracing::error!("LLM credential missing: {env_var} is not set");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "MISSING_API_KEY",
                    format!(
                        "API key is missing. Please configure the {env_var} environment variable."
                    ),
                )
            }
            AppError::Generation(msg) => {
                tracing::error!("Generation error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "GENERATION_ERROR",
                    "Generation failed. Please try again.".to_string(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let mut body = json!({
            "error": {
                "code": code,
                "message": message
            }
        });
        if matches!(self, AppError::MissingApiKey(_)) {
            body["missingApiKey"] = json!(true);
        }

        (status, Json(body)).into_response()
    }
}
