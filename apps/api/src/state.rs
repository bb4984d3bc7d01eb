use std::sync::Arc;

use crate::config::Config;
use crate::inference::InferenceClient;

/// Shared application state injected into route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// The hosted-model client behind the generation pipelines.
    /// A trait object so tests can inject scripted or failing clients.
    pub inference: Arc<dyn InferenceClient>,
    #[allow(dead_code)]
    pub config: Config,
}
