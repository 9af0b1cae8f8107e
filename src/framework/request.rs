//! # Operation Requests
//!
//! This module defines the contract shared by every request type and the four factory
//! entry points that start a request builder.
//!
//! # The CRUD Pattern
//! Each factory maps to one [`OperationKind`]:
//!
//! - [`create`]: Lifecycle start. Carries the entity to create.
//! - [`query`]: Retrieval. Carries optional identifiers used as filters.
//! - [`update`]: State mutation. Carries the entity with its new values.
//! - [`delete`]: Lifecycle end. Carries the identifiers of the entity to remove.
//!
//! # Entity Interaction
//! The factories are generic over the entity type `T`. The compiler carries `T` from the
//! factory through the builder into the request, so a `Request<User>` can never be
//! handed to code expecting a `Request<Product>`.

use crate::create_operation;
use crate::delete_operation;
use crate::framework::entity::EntityType;
use crate::framework::error::OperationError;
use crate::query_operation;
use crate::update_operation;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The four operations a request can describe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperationKind {
    Create,
    Query,
    Update,
    Delete,
}

impl OperationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            OperationKind::Create => "create",
            OperationKind::Query => "query",
            OperationKind::Update => "update",
            OperationKind::Delete => "delete",
        }
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OperationKind {
    type Err = OperationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "create" => Ok(OperationKind::Create),
            "query" => Ok(OperationKind::Query),
            "update" => Ok(OperationKind::Update),
            "delete" => Ok(OperationKind::Delete),
            _ => Err(OperationError::InvalidKind(s.to_string())),
        }
    }
}

/// Contract implemented by every request type.
///
/// The entity type is fixed by [`OperationRequest::Entity`]; requests never store a
/// runtime type token, the marker returned by [`OperationRequest::entity_type`] is
/// produced from the associated type.
pub trait OperationRequest {
    /// The entity this request operates on.
    type Entity;

    /// Which operation this request describes.
    const KIND: OperationKind;

    fn entity_type(&self) -> EntityType<Self::Entity> {
        EntityType::new()
    }

    fn kind(&self) -> OperationKind {
        Self::KIND
    }
}

/// Starts a builder for a create request.
pub fn create<T>() -> create_operation::RequestBuilder<T> {
    create_operation::RequestBuilder::new()
}

/// Starts a builder for a query request.
pub fn query<T>() -> query_operation::RequestBuilder<T> {
    query_operation::RequestBuilder::new()
}

/// Starts a builder for an update request.
pub fn update<T>() -> update_operation::RequestBuilder<T> {
    update_operation::RequestBuilder::new()
}

/// Starts a builder for a delete request.
pub fn delete<T>() -> delete_operation::RequestBuilder<T> {
    delete_operation::RequestBuilder::new()
}
