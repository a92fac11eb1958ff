use chrono::{DateTime, Utc};
use std::sync::Arc;

/// The engine is stateless; the only process-wide value is the start time
/// the health endpoint reports uptime from.
#[derive(Clone)]
pub struct AppState {
    pub started_at: DateTime<Utc>,
}

pub type SharedState = Arc<AppState>;
