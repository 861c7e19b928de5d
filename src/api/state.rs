use std::sync::Arc;

use crate::store::{Snapshot, TableStore};

use super::ApiError;

/// Shared handler state: just the store handle.
///
/// Handlers load their own [`Snapshot`] per request, so concurrent
/// dashboard sessions never observe each other's data.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<TableStore>,
}

impl AppState {
    pub fn new(store: TableStore) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    pub fn load_snapshot(&self) -> Result<Snapshot, ApiError> {
        Ok(Snapshot::load(&self.store)?)
    }
}
