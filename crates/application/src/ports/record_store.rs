use driftdns_domain::DomainError;

/// The shared name→address mapping.
///
/// Methods are deliberately synchronous: the store never performs I/O, so a
/// caller is never suspended while an operation is in flight. Every method is
/// atomic with respect to every other; implementations strip exactly one
/// trailing dot from each key before touching the map, so `x.example.` and
/// `x.example` address the same record no matter which interface wrote it.
pub trait RecordStore: Send + Sync {
    /// Unconditional overwrite (last-writer-wins). Returns the stored value.
    fn set(&self, key: &str, value: &str) -> Result<String, DomainError>;

    fn get(&self, key: &str) -> Result<Option<String>, DomainError>;

    /// Returns how many of the given keys were present and removed.
    fn delete(&self, keys: &[String]) -> Result<u64, DomainError>;

    /// Returns how many of the given keys are present. A key repeated in the
    /// argument list is counted each time it appears.
    fn exists(&self, keys: &[String]) -> Result<u64, DomainError>;

    /// Keys matching a shell glob (`*`, `?`, `[...]`), snapshot at call
    /// start, order unspecified.
    fn keys(&self, pattern: &str) -> Result<Vec<String>, DomainError>;

    /// Atomic clear: no reader observes a partially emptied map.
    fn clear(&self) -> Result<(), DomainError>;

    fn len(&self) -> usize;
}
