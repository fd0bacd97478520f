//! Shared application state for all routes.

use std::sync::Arc;

use crate::settings::Settings;
use crate::store::CatalogStore;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn CatalogStore>,
    pub settings: Settings,
}

impl AppState {
    pub fn new(store: Arc<dyn CatalogStore>, settings: Settings) -> Self {
        Self { store, settings }
    }
}
