use crate::framework::{EntityType, OperationKind, OperationRequest};
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Request to update an existing entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Request<T> {
    #[serde(skip, default = "EntityType::new")]
    entity_type: EntityType<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    entity: Option<T>,
}

impl<T> Request<T> {
    pub fn new(entity: T) -> Self {
        Self {
            entity_type: EntityType::new(),
            entity: Some(entity),
        }
    }

    /// The entity instance with updated values.
    pub fn entity(&self) -> Option<&T> {
        self.entity.as_ref()
    }

    pub fn into_entity(self) -> Option<T> {
        self.entity
    }
}

impl<T> OperationRequest for Request<T> {
    type Entity = T;
    const KIND: OperationKind = OperationKind::Update;

    fn entity_type(&self) -> EntityType<T> {
        self.entity_type
    }
}

/// Builder for [`Request`]. Same snapshot rules as the create builder.
#[derive(Debug, Clone)]
pub struct RequestBuilder<T> {
    entity_type: EntityType<T>,
    entity: Option<T>,
}

impl<T> RequestBuilder<T> {
    pub fn new() -> Self {
        Self {
            entity_type: EntityType::new(),
            entity: None,
        }
    }

    pub fn entity(mut self, entity: T) -> Self {
        self.entity = Some(entity);
        self
    }

    pub fn entity_type(&self) -> EntityType<T> {
        self.entity_type
    }
}

impl<T: Clone> RequestBuilder<T> {
    pub fn build(&self) -> Request<T> {
        trace!(entity_type = %self.entity_type, has_entity = self.entity.is_some(), "Built update request");
        Request {
            entity_type: self.entity_type,
            entity: self.entity.clone(),
        }
    }
}

impl<T> Default for RequestBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}
