use driftdns_domain::{DnsQuery, DomainError};

/// Observability hooks around the resolution engine.
///
/// The engine calls through this trait but never depends on it for
/// correctness; every method defaults to a no-op, and resolution behaves
/// identically whether the observer records anything or not.
pub trait QueryObserver: Send + Sync {
    fn query_received(&self, _query: &DnsQuery) {}

    fn answer_sent(&self, _query: &DnsQuery, _answers: usize) {}

    fn lookup_failed(&self, _query: &DnsQuery, _error: &DomainError) {}
}

/// Discards everything.
pub struct NullQueryObserver;

impl QueryObserver for NullQueryObserver {}
