use std::sync::Arc;

use crate::enhancement::enhancer::ResumeEnhancer;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Demo or live backend, picked once at startup from the API key.
    pub enhancer: Arc<dyn ResumeEnhancer>,
}
