//! Unified error type for all store operations.

/// Things that can go wrong when using the store.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A required field is absent, or the payload is not a JSON object.
    MissingField(&'static str),
    /// No item carries the requested id.
    NotFound(u64),
    /// File system problem (read, write, rename).
    Persistence(String),
    /// The data file exists but does not hold a JSON array of objects.
    Corrupt(String),
    /// Anything else, e.g. a value that refuses to serialize.
    Internal(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::MissingField(field) => write!(f, "missing required field `{field}`"),
            Error::NotFound(id) => write!(f, "no item with id {id}"),
            Error::Persistence(msg) => write!(f, "i/o error: {msg}"),
            Error::Corrupt(msg) => write!(f, "corrupt data file: {msg}"),
            Error::Internal(msg) => write!(f, "internal error: {msg}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Persistence(err.to_string())
    }
}

/// Result alias using our [`Error`] type.
pub type Result<T> = std::result::Result<T, Error>;
