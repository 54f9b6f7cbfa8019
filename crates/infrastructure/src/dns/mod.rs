mod query_observer;
mod server;

pub use query_observer::TracingQueryObserver;
pub use server::DnsServerHandler;
