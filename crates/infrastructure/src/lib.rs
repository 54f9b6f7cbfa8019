//! Drift DNS Infrastructure Layer
pub mod dns;
pub mod store;
