use crate::framework::{EntityType, OperationKind, OperationRequest};
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Request to delete an entity.
///
/// `parent_id` is only meaningful for hierarchical entities.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Request<T> {
    #[serde(skip, default = "EntityType::new")]
    entity_type: EntityType<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    parent_id: Option<String>,
}

impl<T> Request<T> {
    pub fn new(id: Option<String>, parent_id: Option<String>) -> Self {
        Self {
            entity_type: EntityType::new(),
            id,
            parent_id,
        }
    }

    /// Primary identifier of the entity to delete.
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn parent_id(&self) -> Option<&str> {
        self.parent_id.as_deref()
    }
}

impl<T> OperationRequest for Request<T> {
    type Entity = T;
    const KIND: OperationKind = OperationKind::Delete;

    fn entity_type(&self) -> EntityType<T> {
        self.entity_type
    }
}

/// Builder for [`Request`]. Omitted identifiers stay `None`.
#[derive(Debug, Clone)]
pub struct RequestBuilder<T> {
    entity_type: EntityType<T>,
    id: Option<String>,
    parent_id: Option<String>,
}

impl<T> RequestBuilder<T> {
    pub fn new() -> Self {
        Self {
            entity_type: EntityType::new(),
            id: None,
            parent_id: None,
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Sets the parent identifier for hierarchical deletes.
    pub fn parent_id(mut self, parent_id: impl Into<String>) -> Self {
        self.parent_id = Some(parent_id.into());
        self
    }

    pub fn entity_type(&self) -> EntityType<T> {
        self.entity_type
    }

    pub fn build(&self) -> Request<T> {
        trace!(entity_type = %self.entity_type, id = ?self.id, parent_id = ?self.parent_id, "Built delete request");
        Request {
            entity_type: self.entity_type,
            id: self.id.clone(),
            parent_id: self.parent_id.clone(),
        }
    }
}

impl<T> Default for RequestBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}
