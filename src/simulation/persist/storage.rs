//! Settings persistence
//!
//! Settings are one JSON blob under `SETTINGS_KEY`. In the browser that goes
//! to `localStorage`; where storage is missing or blocked (private mode,
//! sandboxed iframes, native builds) an in-memory map takes its place and
//! settings just don't survive a reload.

use std::collections::HashMap;

use crate::domain::config::SimulationConfig;
use crate::domain::error::ConfigError;

use super::SimulationEngine;

pub const SETTINGS_KEY: &str = "particle-life:settings";

/// Minimal string key-value store (the `localStorage` surface).
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&mut self, key: &str, value: &str) -> Result<(), String>;
    fn remove_item(&mut self, key: &str);
}

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    items: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.get(key).cloned()
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), String> {
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&mut self, key: &str) {
        self.items.remove(key);
    }
}

/// `window.localStorage`
#[cfg(target_arch = "wasm32")]
pub struct LocalStore {
    storage: web_sys::Storage,
}

#[cfg(target_arch = "wasm32")]
impl LocalStore {
    const PROBE_KEY: &'static str = "particle-life:probe";

    /// `None` when there is no window, no storage, or writes are refused.
    pub fn open() -> Option<Self> {
        let storage = web_sys::window()?.local_storage().ok()??;
        storage.set_item(Self::PROBE_KEY, "1").ok()?;
        storage.remove_item(Self::PROBE_KEY).ok()?;
        Some(Self { storage })
    }
}

#[cfg(target_arch = "wasm32")]
impl KeyValueStore for LocalStore {
    fn get_item(&self, key: &str) -> Option<String> {
        self.storage.get_item(key).ok().flatten()
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), String> {
        self.storage
            .set_item(key, value)
            .map_err(|e| format!("{:?}", e))
    }

    fn remove_item(&mut self, key: &str) {
        if self.storage.remove_item(key).is_err() {
            console_warn!("localStorage: could not remove {}", key);
        }
    }
}

/// `localStorage` when usable, otherwise an in-memory store.
pub fn default_store() -> Box<dyn KeyValueStore> {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(store) = LocalStore::open() {
            return Box::new(store);
        }
        console_warn!("localStorage unavailable, settings will only last for this session");
    }
    Box::new(MemoryStore::new())
}

pub(super) fn save_settings(
    engine: &SimulationEngine,
    store: &mut dyn KeyValueStore,
) -> Result<(), ConfigError> {
    store
        .set_item(SETTINGS_KEY, &engine.settings_json())
        .map_err(ConfigError::Storage)
}

pub(super) fn restore_settings(
    engine: &mut SimulationEngine,
    store: &dyn KeyValueStore,
) -> Result<bool, ConfigError> {
    match store.get_item(SETTINGS_KEY) {
        Some(json) => {
            // Stored blobs are full snapshots; absent fields take defaults.
            engine.configure(SimulationConfig::from_json(&json)?)?;
            Ok(true)
        }
        None => Ok(false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_round_trips_items() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get_item("k"), None);
        store.set_item("k", "v").unwrap();
        assert_eq!(store.get_item("k").as_deref(), Some("v"));
        store.remove_item("k");
        assert_eq!(store.get_item("k"), None);
    }

    #[test]
    fn default_store_is_usable_natively() {
        let mut store = default_store();
        store.set_item(SETTINGS_KEY, "{}").unwrap();
        assert_eq!(store.get_item(SETTINGS_KEY).as_deref(), Some("{}"));
    }
}
