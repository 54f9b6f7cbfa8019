//! The key-value store: engine, wire protocol, and TCP server.
//!
//! The wire format is a subset of RESP: requests are arrays of bulk strings,
//! replies are status/integer/bulk/array/error tokens.
mod command;
mod engine;
mod frame;
mod glob;
mod reply;
mod server;

pub use command::{Command, CommandError};
pub use engine::StoreEngine;
pub use frame::{FrameError, FrameLimits};
pub use glob::glob_match;
pub use reply::Reply;
pub use server::StoreServer;
