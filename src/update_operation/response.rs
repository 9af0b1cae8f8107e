use crate::framework::{EntityType, OperationOutcome, OperationResponse, ResultMetadata, Status};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Response from an update operation. Carries no payload beyond the shared outcome.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Response<T> {
    #[serde(skip, default = "EntityType::new")]
    entity_type: EntityType<T>,
    #[serde(flatten)]
    outcome: OperationResponse,
}

impl<T> Response<T> {
    pub fn new(status: Status) -> Self {
        Self {
            entity_type: EntityType::new(),
            outcome: OperationResponse::new(status),
        }
    }

    pub fn success() -> Self {
        Self::new(Status::Success)
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
        self.entity_type
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
