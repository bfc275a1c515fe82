//! In-memory key cache
//!
//! The cache is injectable so deployments needing rotation awareness can
//! substitute a TTL- or version-aware implementation without touching the
//! pipeline. The default keeps entries for the life of the resolver: no TTL,
//! no eviction. Cache keys are the literal issuer string as it appeared in
//! the token, never a normalized form.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::keys::PublicKeyRecord;

/// Storage for resolved issuer keys
pub trait KeyCache: Send + Sync {
    /// Look up the record stored for this exact issuer string
    fn get(&self, issuer: &str) -> Option<PublicKeyRecord>;

    /// Store a record under this exact issuer string
    fn insert(&self, issuer: &str, record: PublicKeyRecord);
}

/// Process-lifetime cache with no expiry
#[derive(Debug, Default)]
pub struct MemoryKeyCache {
    entries: Mutex<HashMap<String, PublicKeyRecord>>,
}

impl MemoryKeyCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyCache for MemoryKeyCache {
    fn get(&self, issuer: &str) -> Option<PublicKeyRecord> {
        self.entries
            .lock()
            .ok()
            .and_then(|map| map.get(issuer).cloned())
    }

    fn insert(&self, issuer: &str, record: PublicKeyRecord) {
        if let Ok(mut map) = self.entries.lock() {
            map.insert(issuer.to_string(), record);
        }
    }
}
