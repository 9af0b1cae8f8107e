//! Generic building blocks shared by every operation.
//!
//! This module provides the contracts that the four operation modules build on, plus
//! the seam where an executor plugs in.
//!
//! # Main Components
//!
//! - [`EntityType`] - Statically typed marker for the entity a request concerns
//! - [`OperationRequest`] - Trait implemented by every request, and the [`create`],
//!   [`query`], [`update`], [`delete`] factories
//! - [`OperationResponse`] / [`OperationOutcome`] - Shared status, message and metadata
//! - [`ResultMetadata`] - Extension point for supplementary result data
//! - [`OperationHandler`] - Trait an executor implements
//! - [`OperationError`] - Errors from response inspection and parsing
//!
//! # Testing
//!
//! See the [`mock`] module for a scripted [`OperationHandler`].

pub mod entity;
pub mod error;
pub mod handler;
pub mod metadata;
pub mod mock;
pub mod request;
pub mod response;

// Re-export core types for convenience
pub use entity::EntityType;
pub use error::OperationError;
pub use handler::OperationHandler;
pub use metadata::{Description, ResultMetadata};
pub use mock::MockHandler;
pub use request::{create, delete, query, update, OperationKind, OperationRequest};
pub use response::{OperationOutcome, OperationResponse, Status};
