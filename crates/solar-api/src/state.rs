use std::sync::Arc;

use solar_types::{campus, CardContent};

/// Shared, read-only state handed to every API handler.
#[derive(Clone, Debug)]
pub struct AppState {
    pub buildings: Arc<CardContent>,
}

impl AppState {
    pub fn new(buildings: CardContent) -> Self {
        Self {
            buildings: Arc::new(buildings),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(campus::solar_buildings())
    }
}
