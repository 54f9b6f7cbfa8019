use fancy_regex::Regex;
use std::sync::LazyLock;

// Anchored DNS name shape: 253 chars total, labels of 1-63 alphanumerics or
// hyphens that neither start nor end with a hyphen, and an alphabetic TLD.
// The look-around assertions are why this is fancy_regex and not regex.
static HOSTNAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?=.{1,253}$)(?!-)[A-Za-z0-9-]{1,63}(?<!-)(?:\.[A-Za-z0-9-]{1,63})*\.[A-Za-z]{2,}$",
    )
    .expect("hostname regex is valid")
});

pub fn is_valid_hostname(hostname: &str) -> bool {
    HOSTNAME_RE.is_match(hostname).unwrap_or(false)
}
