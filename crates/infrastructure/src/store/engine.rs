use super::glob::glob_match;
use driftdns_application::ports::RecordStore;
use driftdns_domain::{strip_trailing_dot, DomainError};
use std::collections::HashMap;
use std::sync::RwLock;

/// In-memory name→address mapping behind one coarse lock.
///
/// Write volume is low (one SET per dynamic-update ping), so a single
/// `RwLock` over the whole map is enough; what matters is that every
/// operation is atomic against every other, including `clear`. The lock is
/// only ever held for the duration of one map operation, never across I/O.
///
/// KEYS semantics: snapshot at call start. The scan runs under the read
/// lock, so a concurrent SET or DEL lands entirely before or entirely after
/// the snapshot, never halfway through it.
pub struct StoreEngine {
    map: RwLock<HashMap<String, String>>,
}

impl StoreEngine {
    pub fn new() -> Self {
        Self {
            map: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for StoreEngine {
    fn default() -> Self {
        Self::new()
    }
}

// Lock poisoning (a panic while holding the guard) is surfaced as a store
// error so the protocol server can turn it into an error reply instead of
// unwinding the whole process.
fn poisoned<T>(_: T) -> DomainError {
    DomainError::StoreError("store lock poisoned".to_string())
}

impl RecordStore for StoreEngine {
    fn set(&self, key: &str, value: &str) -> Result<String, DomainError> {
        let key = strip_trailing_dot(key);
        let mut map = self.map.write().map_err(poisoned)?;
        map.insert(key.to_string(), value.to_string());
        Ok(value.to_string())
    }

    fn get(&self, key: &str) -> Result<Option<String>, DomainError> {
        let key = strip_trailing_dot(key);
        let map = self.map.read().map_err(poisoned)?;
        Ok(map.get(key).cloned())
    }

    fn delete(&self, keys: &[String]) -> Result<u64, DomainError> {
        let mut map = self.map.write().map_err(poisoned)?;
        let mut removed = 0;
        for key in keys {
            if map.remove(strip_trailing_dot(key)).is_some() {
                removed += 1;
            }
        }
        Ok(removed)
    }

    fn exists(&self, keys: &[String]) -> Result<u64, DomainError> {
        let map = self.map.read().map_err(poisoned)?;
        Ok(keys
            .iter()
            .filter(|key| map.contains_key(strip_trailing_dot(key)))
            .count() as u64)
    }

    fn keys(&self, pattern: &str) -> Result<Vec<String>, DomainError> {
        let map = self.map.read().map_err(poisoned)?;
        Ok(map
            .keys()
            .filter(|key| glob_match(pattern, key))
            .cloned()
            .collect())
    }

    fn clear(&self) -> Result<(), DomainError> {
        let mut map = self.map.write().map_err(poisoned)?;
        map.clear();
        Ok(())
    }

    fn len(&self) -> usize {
        self.map.read().map(|map| map.len()).unwrap_or(0)
    }
}
