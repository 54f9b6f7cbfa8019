use crate::ports::RecordStore;
use driftdns_domain::DomainError;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Dump every record: `keys("*")` then `get` per key.
///
/// The scan and the per-key reads are individually atomic but not one
/// transaction; a key deleted between the two is simply omitted.
pub struct ListRecordsUseCase {
    store: Arc<dyn RecordStore>,
}

impl ListRecordsUseCase {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    pub fn execute(&self) -> Result<BTreeMap<String, String>, DomainError> {
        let mut records = BTreeMap::new();
        for key in self.store.keys("*")? {
            if let Some(value) = self.store.get(&key)? {
                records.insert(key, value);
            }
        }
        Ok(records)
    }
}
