//! Drift DNS Application Layer
//!
//! Ports (traits) and use cases. Everything here is transport-free: the DNS
//! wire handler, the RESP server, and the HTTP API all live in outer crates
//! and call in through these types.
pub mod ports;
pub mod use_cases;
