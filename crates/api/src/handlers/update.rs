use crate::client_ip;
use crate::state::AppState;
use crate::validation;
use axum::extract::{ConnectInfo, Query, State};
use axum::http::{HeaderMap, StatusCode};
use serde::Deserialize;
use std::net::{IpAddr, SocketAddr};
use tracing::error;

#[derive(Deserialize)]
pub struct UpdateParams {
    hostname: Option<String>,
    myip: Option<String>,
}

/// No-IP style dynamic update.
///
/// `myip` is optional: absent, the client address is taken from the proxy
/// headers and finally from the socket peer. Replies are the protocol's
/// single-word tokens, which update clients match on literally.
pub async fn nic_update(
    State(state): State<AppState>,
    ConnectInfo(peer): ConnectInfo<SocketAddr>,
    Query(params): Query<UpdateParams>,
    headers: HeaderMap,
) -> (StatusCode, String) {
    let Some(hostname) = params.hostname else {
        return (StatusCode::BAD_REQUEST, "nohost".to_string());
    };
    if !validation::is_valid_hostname(&hostname) {
        return (StatusCode::BAD_REQUEST, "nohost".to_string());
    }

    let candidate = params
        .myip
        .filter(|ip| !ip.is_empty())
        .or_else(|| client_ip::from_headers(&headers))
        .unwrap_or_else(|| peer.ip().to_string());

    let Ok(address) = candidate.parse::<IpAddr>() else {
        return (StatusCode::BAD_REQUEST, "badip".to_string());
    };

    match state.update_address.execute(&hostname, address) {
        Ok(stored) => (StatusCode::OK, format!("good {}", stored)),
        Err(e) => {
            error!(hostname = %hostname, error = %e, "Dynamic update failed");
            (StatusCode::INTERNAL_SERVER_ERROR, "dnserr".to_string())
        }
    }
}
