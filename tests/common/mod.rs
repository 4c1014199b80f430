//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;

use photo_search::{Config, PhotoSearchStore, SearchState};
use std::time::Duration;

/// Config pointing at `base_url` with a fixed access key.
pub fn test_config(base_url: &str) -> Config {
    let mut config = Config::default();
    config.api.base_url = base_url.to_string();
    config.api.access_key = Some("test-key".to_string());
    config.http.connect_timeout_seconds = 2;
    config
}

pub fn make_store(base_url: &str) -> PhotoSearchStore {
    PhotoSearchStore::from_config(&test_config(base_url)).expect("Failed to build store")
}

pub fn photo_ids(state: &SearchState) -> Vec<String> {
    state.photos.iter().map(|p| p.id.clone()).collect()
}

/// Poll `check` against store snapshots until it holds or `timeout` passes.
pub async fn wait_until(
    store: &PhotoSearchStore,
    timeout: Duration,
    check: impl Fn(&SearchState) -> bool,
) -> bool {
    let start = std::time::Instant::now();
    while start.elapsed() < timeout {
        if check(&store.snapshot()) {
            return true;
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    false
}
