use std::sync::Arc;

use crate::data::Datasets;

/// Shared application state
///
/// The datasets are immutable after startup, so handlers share them without a lock.
#[derive(Clone)]
pub struct AppState {
    pub datasets: Arc<Datasets>,
}

impl AppState {
    pub fn new(datasets: Datasets) -> Self {
        Self {
            datasets: Arc::new(datasets),
        }
    }
}
