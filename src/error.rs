//! Error types for the driver shim.

use thiserror::Error;

/// Result type for shim operations.
pub type PgResult<T> = std::result::Result<T, PgError>;

/// Errors surfaced by the connection shim.
///
/// Configuration and connection failures terminate the calling operation.
/// Query failures are ordinary `Err` values the caller inspects, with the
/// diagnostic also kept for [`PgConnection::error`].
///
/// [`PgConnection::error`]: crate::PgConnection::error
#[derive(Error, Debug)]
pub enum PgError {
    /// Missing or invalid construction parameters.
    #[error("configuration error: {0}")]
    Config(String),

    /// Failure to establish a connection.
    #[error("connection error: {0}")]
    Connection(String),

    /// Statement execution failed.
    #[error("query error: {0}")]
    Query(String),

    /// The operation requires an open connection.
    #[error("connection has not been opened")]
    NotOpen,

    /// The connection was closed; reopening is not supported.
    #[error("connection is closed")]
    Closed,
}
