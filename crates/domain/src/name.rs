/// Strip exactly one trailing dot from a DNS name.
///
/// `"x.example."` and `"x.example"` address the same record; a root query
/// (`"."`) becomes the empty name. Case is deliberately preserved: lookups
/// are case-sensitive, only the trailing dot is normalized.
pub fn strip_trailing_dot(name: &str) -> &str {
    name.strip_suffix('.').unwrap_or(name)
}
