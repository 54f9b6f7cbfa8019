use std::net::Ipv4Addr;

/// Every synthesized answer advertises the same cache lifetime. Records carry
/// no stored TTL; clients are expected to re-resolve frequently because the
/// address behind a name may change at any moment.
pub const ANSWER_TTL_SECS: u32 = 60;

/// A single synthesized A record: the name as queried and the address the
/// store currently holds for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostRecord {
    pub name: String,
    pub address: Ipv4Addr,
    pub ttl: u32,
}

impl HostRecord {
    pub fn new(name: String, address: Ipv4Addr) -> Self {
        Self {
            name,
            address,
            ttl: ANSWER_TTL_SECS,
        }
    }
}
