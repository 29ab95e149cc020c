use std::sync::Arc;

use crate::llm_client::TextGenerator;
use crate::store::RecordStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Built once at startup; tests inject a fresh store per case.
    pub store: Arc<RecordStore>,
    /// Vendor backend selected by `LLM_PROVIDER`.
    pub generator: Arc<dyn TextGenerator>,
}
