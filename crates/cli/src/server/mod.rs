pub mod dns;
pub mod store;
pub mod web;

pub use dns::start_dns_server;
pub use store::bind_store_server;
pub use web::start_web_server;
