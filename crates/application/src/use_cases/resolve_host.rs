use crate::ports::{NullQueryObserver, QueryObserver, RecordStore};
use driftdns_domain::{strip_trailing_dot, DnsQuery, HostRecord};
use std::net::Ipv4Addr;
use std::sync::Arc;
use tracing::warn;

/// The per-query resolution state machine:
/// Receive → Normalize → FilterType → Lookup → BuildAnswer → Reply.
///
/// Always reaches a terminal state and never surfaces an error to the DNS
/// transport — a miss, an unsupported query type, an unparseable stored
/// value, and a failing store all degrade to an empty answer set, so the
/// transport can still send a well-formed reply.
pub struct ResolveHostUseCase {
    store: Arc<dyn RecordStore>,
    observer: Arc<dyn QueryObserver>,
}

impl ResolveHostUseCase {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self {
            store,
            observer: Arc::new(NullQueryObserver),
        }
    }

    pub fn with_observer(mut self, observer: Arc<dyn QueryObserver>) -> Self {
        self.observer = observer;
        self
    }

    /// Returns zero or one answers.
    pub fn execute(&self, query: &DnsQuery) -> Vec<HostRecord> {
        self.observer.query_received(query);

        // Only A queries consult the store. Policy, not an error.
        if !query.record_type.is_a() {
            self.observer.answer_sent(query, 0);
            return Vec::new();
        }

        // Lookup is case-sensitive; only the trailing dot is normalized.
        let name = strip_trailing_dot(&query.name);

        let value = match self.store.get(name) {
            Ok(value) => value,
            Err(e) => {
                self.observer.lookup_failed(query, &e);
                return Vec::new();
            }
        };

        let Some(value) = value else {
            self.observer.answer_sent(query, 0);
            return Vec::new();
        };

        let Ok(address) = value.parse::<Ipv4Addr>() else {
            warn!(name = %name, value = %value, "Stored value is not an IPv4 address");
            self.observer.answer_sent(query, 0);
            return Vec::new();
        };

        let record = HostRecord::new(query.name.as_ref().to_string(), address);
        self.observer.answer_sent(query, 1);
        vec![record]
    }
}
