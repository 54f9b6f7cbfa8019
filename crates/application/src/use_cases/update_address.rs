use crate::ports::RecordStore;
use driftdns_domain::{strip_trailing_dot, DomainError};
use std::net::IpAddr;
use std::sync::Arc;
use tracing::info;

/// Apply a dynamic update: hostname now points at the given address.
///
/// Validation (hostname shape, IP syntax) happens at the HTTP boundary; by
/// the time this runs the input is already well-formed.
pub struct UpdateAddressUseCase {
    store: Arc<dyn RecordStore>,
}

impl UpdateAddressUseCase {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    /// Returns the value the store now holds for the name.
    pub fn execute(&self, hostname: &str, address: IpAddr) -> Result<String, DomainError> {
        let name = strip_trailing_dot(hostname);
        let stored = self.store.set(name, &address.to_string())?;
        info!(hostname = %name, ip = %stored, "Record updated");
        Ok(stored)
    }
}
