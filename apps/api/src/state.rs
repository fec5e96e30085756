use std::sync::Arc;

use crate::catalog::CatalogStore;
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum
/// extractors. The catalog is read-only; handlers hold no mutable state, so
/// concurrent requests need no locking.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<dyn CatalogStore>,
    /// Kept alongside the catalog for handlers that need runtime settings.
    #[allow(dead_code)]
    pub config: Config,
}
