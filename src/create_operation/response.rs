use crate::framework::{
    EntityType, OperationError, OperationOutcome, OperationResponse, ResultMetadata, Status,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

/// Response from a create operation.
///
/// `entity` holds the created entity. It is conventionally `None` on failure, though a
/// successful response may omit it too.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Response<T> {
    #[serde(flatten)]
    outcome: OperationResponse,
    #[serde(skip_serializing_if = "Option::is_none")]
    entity: Option<T>,
}

impl<T> Response<T> {
    pub fn new(status: Status) -> Self {
        Self {
            outcome: OperationResponse::new(status),
            entity: None,
        }
    }

    pub fn with_entity(status: Status, entity: T) -> Self {
        Self {
            outcome: OperationResponse::new(status),
            entity: Some(entity),
        }
    }

    pub fn success(entity: T) -> Self {
        Self::with_entity(Status::Success, entity)
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(Status::Failure).with_message(message)
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.set_message(Some(message.into()));
        self
    }

    pub fn with_metadata(mut self, metadata: impl ResultMetadata + 'static) -> Self {
        self.set_metadata(Some(Arc::new(metadata)));
        self
    }

    pub fn entity_type(&self) -> EntityType<T> {
        EntityType::new()
    }

    /// The created entity, or `None` if creation failed.
    pub fn entity(&self) -> Option<&T> {
        self.entity.as_ref()
    }

    pub fn into_entity(self) -> Option<T> {
        self.entity
    }

    /// Returns the entity on success, or [`OperationError::Failed`].
    pub fn into_result(self) -> Result<Option<T>, OperationError> {
        if let Err(e) = self.check() {
            debug!(entity_type = %EntityType::<T>::new(), error = %e, "Create failed");
            return Err(e);
        }
        Ok(self.entity)
    }
}

impl<T> OperationOutcome for Response<T> {
    fn outcome(&self) -> &OperationResponse {
        &self.outcome
    }

    fn outcome_mut(&mut self) -> &mut OperationResponse {
        &mut self.outcome
    }
}
