use std::sync::Arc;
use std::time::{Instant, SystemTime};

use crate::config::Config;
use crate::store::ContentStore;

#[derive(Clone)]
pub struct AppState {
    started_at: Instant,
    started_at_system: SystemTime,
    store: Arc<ContentStore>,
    app_version: Arc<str>,
}

impl AppState {
    pub fn new(store: Arc<ContentStore>, config: &Config) -> Self {
        Self {
            started_at: Instant::now(),
            started_at_system: SystemTime::now(),
            store,
            app_version: Arc::from(config.app_version.as_str()),
        }
    }

    pub fn store(&self) -> &ContentStore {
        &self.store
    }

    pub fn uptime_seconds(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }

    pub fn started_at_system(&self) -> SystemTime {
        self.started_at_system
    }

    pub fn app_version(&self) -> &str {
        &self.app_version
    }
}
