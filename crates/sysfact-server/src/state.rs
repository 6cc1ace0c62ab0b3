use crate::config::ServerConfig;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use sysfact_storage::ArtifactStore;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<ArtifactStore>,
    pub start_time: DateTime<Utc>,
    pub config: Arc<ServerConfig>,
}
