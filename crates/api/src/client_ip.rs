use axum::http::HeaderMap;

// Headers proxies commonly use to forward the originating client address,
// in the order the original service probed them.
const PROXY_HEADERS: [&str; 13] = [
    "X-Forwarded-For",
    "X-Real-IP",
    "CF-Connecting-IP",
    "Forwarded",
    "Forwarded-For",
    "True-Client-IP",
    "X-Client-IP",
    "X-Cluster-Client-IP",
    "Fastly-Client-Ip",
    "X-Forwarded",
    "X-Forwarded-Host",
    "X-ProxyUser-Ip",
    "X-Original-Forwarded-For",
];

/// First forwarded address found in the proxy headers. A comma-separated
/// list (X-Forwarded-For chains) yields its first element.
pub fn from_headers(headers: &HeaderMap) -> Option<String> {
    for name in PROXY_HEADERS {
        if let Some(value) = headers.get(name).and_then(|v| v.to_str().ok()) {
            if let Some(first) = value.split(',').next() {
                let first = first.trim();
                if !first.is_empty() {
                    return Some(first.to_string());
                }
            }
        }
    }
    None
}
