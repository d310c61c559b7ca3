use thiserror::Error;

/// Error type for operations around the query tree.
///
/// Parsing itself is total and never fails: every input string produces some
/// valid tree. Errors only arise on the surfaces around it, when converting a
/// tree to or from JSON and when building flags programmatically.
#[derive(Error, Debug)]
pub enum QueryError {
    #[error("not a flag character: '{0}'")]
    UnknownFlag(char),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for squint operations
pub type Result<T> = std::result::Result<T, QueryError>;
