use thiserror::Error;

/// Main error type for OID registry operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OidError {
    /// The encoded OID is empty or ends in the middle of an arc
    #[error("Malformed OID encoding")]
    Malformed,

    /// The destination buffer cannot hold the rendering
    #[error("Buffer too small for OID rendering")]
    BufferTooSmall,

    /// No digest algorithm is associated with the OID
    #[error("Not supported: {0}")]
    NotSupported(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),
}

/// Result type alias for OID registry operations
pub type OidResult<T> = Result<T, OidError>;
