//! # Operation Responses
//!
//! [`OperationResponse`] is the shape every response shares: a [`Status`], an optional
//! message and optional [`ResultMetadata`]. Concrete responses embed it and implement
//! [`OperationOutcome`], which provides the status checks and accessors on top of two
//! required methods.
//!
//! Callers are expected to branch on [`OperationOutcome::is_success`] or
//! [`OperationOutcome::is_failure`] before reading payload fields. A failed response
//! conventionally has no payload, but nothing enforces it.

use crate::framework::error::OperationError;
use crate::framework::metadata::ResultMetadata;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use tracing::debug;

/// Outcome of an operation.
///
/// Serialized as `SUCCESS`/`FAILURE`. Deserialization goes through [`FromStr`], so it
/// accepts any casing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    /// Operation completed successfully
    Success,
    /// Operation failed
    Failure,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Success => "SUCCESS",
            Status::Failure => "FAILURE",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = OperationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "SUCCESS" => Ok(Status::Success),
            "FAILURE" => Ok(Status::Failure),
            _ => Err(OperationError::InvalidStatus(s.to_string())),
        }
    }
}

impl<'de> Deserialize<'de> for Status {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Status, message and metadata shared by all responses.
///
/// Metadata is a trait object and is skipped by serde.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OperationResponse {
    status: Status,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    message: Option<String>,
    #[serde(skip)]
    metadata: Option<Arc<dyn ResultMetadata>>,
}

impl OperationResponse {
    pub fn new(status: Status) -> Self {
        Self {
            status,
            message: None,
            metadata: None,
        }
    }

    pub fn with_message(status: Status, message: impl Into<String>) -> Self {
        Self {
            status,
            message: Some(message.into()),
            metadata: None,
        }
    }
}

impl From<Status> for OperationResponse {
    fn from(status: Status) -> Self {
        Self::new(status)
    }
}

/// Shared behavior of every response type.
///
/// Implementors only expose their embedded [`OperationResponse`]; everything else is
/// provided.
pub trait OperationOutcome {
    fn outcome(&self) -> &OperationResponse;

    fn outcome_mut(&mut self) -> &mut OperationResponse;

    fn status(&self) -> Status {
        self.outcome().status
    }

    fn is_success(&self) -> bool {
        self.status() == Status::Success
    }

    fn is_failure(&self) -> bool {
        self.status() == Status::Failure
    }

    fn message(&self) -> Option<&str> {
        self.outcome().message.as_deref()
    }

    fn metadata(&self) -> Option<&dyn ResultMetadata> {
        self.outcome().metadata.as_deref()
    }

    fn set_status(&mut self, status: Status) {
        self.outcome_mut().status = status;
    }

    fn set_message(&mut self, message: Option<String>) {
        self.outcome_mut().message = message;
    }

    fn set_metadata(&mut self, metadata: Option<Arc<dyn ResultMetadata>>) {
        self.outcome_mut().metadata = metadata;
    }

    /// Converts a failure into [`OperationError::Failed`] carrying the message.
    fn check(&self) -> Result<(), OperationError> {
        if self.is_failure() {
            debug!(reason = ?self.message(), "Operation reported failure");
            return Err(OperationError::Failed {
                message: self.message().map(str::to_string),
            });
        }
        Ok(())
    }
}

impl OperationOutcome for OperationResponse {
    fn outcome(&self) -> &OperationResponse {
        self
    }

    fn outcome_mut(&mut self) -> &mut OperationResponse {
        self
    }
}
