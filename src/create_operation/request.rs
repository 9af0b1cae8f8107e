use crate::framework::{EntityType, OperationKind, OperationRequest};
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Request to create a new entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Request<T> {
    #[serde(skip, default = "EntityType::new")]
    entity_type: EntityType<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    entity: Option<T>,
}

impl<T> Request<T> {
    /// Creates a request for `entity` without going through a builder.
    pub fn new(entity: T) -> Self {
        Self {
            entity_type: EntityType::new(),
            entity: Some(entity),
        }
    }

    /// The entity to create, `None` if the builder never received one.
    pub fn entity(&self) -> Option<&T> {
        self.entity.as_ref()
    }

    pub fn into_entity(self) -> Option<T> {
        self.entity
    }
}

impl<T> OperationRequest for Request<T> {
    type Entity = T;
    const KIND: OperationKind = OperationKind::Create;

    fn entity_type(&self) -> EntityType<T> {
        self.entity_type
    }
}

/// Builder for [`Request`].
///
/// `build` clones the current entity, so it can be called more than once. Use
/// `T = Arc<E>` when every built request should point at the same entity.
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

    /// Sets the entity to be created.
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
        trace!(entity_type = %self.entity_type, has_entity = self.entity.is_some(), "Built create request");
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
