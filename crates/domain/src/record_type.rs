use std::fmt;

/// Query type as seen by the resolution engine.
///
/// Only A queries are answered from the store; every other type is carried
/// opaquely so it can be logged, then short-circuits to an empty answer set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordType {
    A,
    Other(u16),
}

impl RecordType {
    pub fn is_a(&self) -> bool {
        matches!(self, RecordType::A)
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordType::A => write!(f, "A"),
            RecordType::Other(code) => write!(f, "TYPE{}", code),
        }
    }
}
