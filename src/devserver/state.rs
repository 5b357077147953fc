//! Shared state for the dev server handlers.

use std::sync::Arc;
use std::time::Instant;
use tokio::sync::RwLock;

use super::store::DevStore;

#[derive(Clone)]
pub struct DevState {
    pub store: Arc<RwLock<DevStore>>,
    pub start_time: Instant,
}

impl DevState {
    pub fn new(store: DevStore) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
            start_time: Instant::now(),
        }
    }

    /// State with the demo account and sample data
    pub fn seeded() -> Self {
        Self::new(DevStore::seeded())
    }

    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}
