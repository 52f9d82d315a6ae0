//! Application state for the web layer.

use std::sync::Arc;

use crate::catalog::Catalog;
use crate::config::AdvisingConfig;

/// Shared application state.
///
/// The catalog is loaded once and only ever read. Schedules are not part
/// of the state; every request carries its own.
#[derive(Clone)]
pub struct AppState {
    /// Course catalog
    pub catalog: Arc<Catalog>,

    /// Service configuration
    pub config: Arc<AdvisingConfig>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(catalog: Catalog, config: AdvisingConfig) -> Self {
        Self {
            catalog: Arc::new(catalog),
            config: Arc::new(config),
        }
    }
}
