//! Drift DNS Domain Layer
pub mod config;
pub mod dns_query;
pub mod errors;
pub mod host_record;
pub mod name;
pub mod record_type;

pub use config::{CliOverrides, Config};
pub use dns_query::DnsQuery;
pub use errors::DomainError;
pub use host_record::{HostRecord, ANSWER_TTL_SECS};
pub use name::strip_trailing_dot;
pub use record_type::RecordType;
