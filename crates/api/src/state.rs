use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// The store client is constructed once at startup and handed to handlers
/// here; there is no lazily-initialized global. Cheaply cloneable.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: pxl_db::DbPool,
    /// Server configuration (accessed by auth extractors and handlers).
    pub config: Arc<ServerConfig>,
}
