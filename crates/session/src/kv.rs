use std::collections::HashMap;

use chrono::Duration;

/// Durable key-value persistence for the session (cookie jar, browser
/// storage, or similar). Implementations live at the platform boundary.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`. `ttl` is advisory: cookie-backed stores map
    /// it to the cookie expiry, others may ignore it because token expiry is
    /// enforced from the claims regardless.
    fn set(&mut self, key: &str, value: &str, ttl: Option<Duration>);

    fn remove(&mut self, key: &str);
}

/// Process-local store for tests and headless embedding.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str, _ttl: Option<Duration>) {
        self.entries.insert(key.to_string(), value.to_string());
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }
}
