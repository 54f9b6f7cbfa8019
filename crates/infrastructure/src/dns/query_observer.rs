use driftdns_application::ports::QueryObserver;
use driftdns_domain::{DnsQuery, DomainError};
use tracing::{debug, warn};

/// Observer that forwards resolution events to `tracing`. With no subscriber
/// installed this degrades to the same silence as `NullQueryObserver`.
pub struct TracingQueryObserver;

impl QueryObserver for TracingQueryObserver {
    fn query_received(&self, query: &DnsQuery) {
        debug!(name = %query.name, record_type = %query.record_type, "Query received");
    }

    fn answer_sent(&self, query: &DnsQuery, answers: usize) {
        debug!(name = %query.name, answers, "Reply built");
    }

    fn lookup_failed(&self, query: &DnsQuery, error: &DomainError) {
        warn!(name = %query.name, error = %error, "Store lookup failed, replying with no answers");
    }
}
