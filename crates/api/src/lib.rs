//! Drift DNS HTTP API
//!
//! The dynamic-update surface: a No-IP style `/nic/update` endpoint, a
//! `/records` listing, and `/whoami` echoing the caller's address. Response
//! bodies are the short plain-text tokens dynamic-update clients expect
//! (`good <ip>`, `nohost`, `badip`, `dnserr`).
mod client_ip;
mod handlers;
mod state;
mod validation;

pub use handlers::create_routes;
pub use state::AppState;
