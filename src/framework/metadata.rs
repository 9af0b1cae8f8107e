//! # Result Metadata
//!
//! Extension point for supplementary result data beyond status and message. Callers
//! define their own metadata kinds by implementing [`ResultMetadata`]; the only thing
//! the library needs from them is a description.

use std::fmt::Debug;

/// Supplementary information attached to a response.
///
/// # Example
///
/// ```rust
/// use request_builder::ResultMetadata;
///
/// #[derive(Debug)]
/// struct ImportStats {
///     description: String,
///     rows_skipped: u32,
/// }
///
/// impl ResultMetadata for ImportStats {
///     fn description(&self) -> &str {
///         &self.description
///     }
/// }
///
/// let stats = ImportStats { description: "Imported with gaps".into(), rows_skipped: 3 };
/// assert_eq!(stats.description(), "Imported with gaps");
/// assert_eq!(stats.rows_skipped, 3);
/// ```
pub trait ResultMetadata: Debug + Send + Sync {
    /// Human-readable description of the result.
    fn description(&self) -> &str;
}

/// Metadata that carries only a description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Description {
    description: String,
}

impl Description {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

impl ResultMetadata for Description {
    fn description(&self) -> &str {
        &self.description
    }
}
