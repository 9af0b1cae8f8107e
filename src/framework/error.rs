//! # Operation Errors
//!
//! The library itself never fails while building requests or responses. These errors
//! appear only when a caller asks to turn a response into a `Result`, or when parsing a
//! status or operation kind from text.

use thiserror::Error;

/// Errors surfaced by response inspection and parsing.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum OperationError {
    /// The response carries `Status::Failure`.
    #[error("Operation failed: {}", .message.as_deref().unwrap_or("no message"))]
    Failed { message: Option<String> },

    /// Text that is not `SUCCESS` or `FAILURE`.
    #[error("Invalid status: {0}")]
    InvalidStatus(String),

    /// Text that is not one of the four operation kinds.
    #[error("Invalid operation kind: {0}")]
    InvalidKind(String),
}
