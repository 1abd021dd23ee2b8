//! Durable site settings.

use dashmap::DashMap;
use homepages_core::ports::SettingsStore;

#[derive(Default)]
pub struct MemoryOptionStore {
    values: DashMap<String, serde_json::Value>,
}

impl MemoryOptionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SettingsStore for MemoryOptionStore {
    fn get(&self, key: &str) -> Option<serde_json::Value> {
        self.values.get(key).map(|v| v.clone())
    }

    fn update(&self, key: &str, value: serde_json::Value) -> bool {
        let previous = self.values.insert(key.to_string(), value.clone());
        let changed = previous.as_ref() != Some(&value);
        if changed {
            tracing::debug!(key, "Option updated");
        }
        changed
    }
}
