use std::sync::Arc;

use tokio::sync::RwLock;

use crate::config::Config;
use crate::llm_client::GenerationBackend;
use crate::pipeline::session::Session;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// The generation capability. Production: `GeminiClient`; tests swap in
    /// scripted fakes through the same trait.
    pub backend: Arc<dyn GenerationBackend>,
    /// The single session's artifact store. No cross-restart persistence.
    pub session: Arc<RwLock<Session>>,
    #[allow(dead_code)]
    pub config: Config,
}
