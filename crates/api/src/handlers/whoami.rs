use crate::client_ip;
use axum::extract::ConnectInfo;
use axum::http::HeaderMap;
use std::net::SocketAddr;

/// The caller's address as this service sees it, after the same proxy-header
/// probing `/nic/update` uses for its fallback.
pub async fn whoami(ConnectInfo(peer): ConnectInfo<SocketAddr>, headers: HeaderMap) -> String {
    client_ip::from_headers(&headers).unwrap_or_else(|| peer.ip().to_string())
}
