use crate::framework::{EntityType, OperationKind, OperationRequest};
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Request to query entities by various identifiers.
///
/// Every identifier is optional and stored exactly as given, without trimming.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Request<T> {
    #[serde(skip, default = "EntityType::new")]
    entity_type: EntityType<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    parent_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    reference_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    context_id: Option<String>,
}

impl<T> Request<T> {
    pub fn new(
        id: Option<String>,
        parent_id: Option<String>,
        reference_id: Option<String>,
        context_id: Option<String>,
    ) -> Self {
        Self {
            entity_type: EntityType::new(),
            id,
            parent_id,
            reference_id,
            context_id,
        }
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn parent_id(&self) -> Option<&str> {
        self.parent_id.as_deref()
    }

    pub fn reference_id(&self) -> Option<&str> {
        self.reference_id.as_deref()
    }

    pub fn context_id(&self) -> Option<&str> {
        self.context_id.as_deref()
    }

    /// True when `id` is set and non-empty.
    pub fn has_id(&self) -> bool {
        is_present(&self.id)
    }

    pub fn has_parent_id(&self) -> bool {
        is_present(&self.parent_id)
    }

    pub fn has_reference_id(&self) -> bool {
        is_present(&self.reference_id)
    }

    /// True when `context_id` is set and non-empty.
    pub fn has_context_id(&self) -> bool {
        is_present(&self.context_id)
    }
}

// An empty string counts as absent.
fn is_present(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|v| !v.is_empty())
}

impl<T> OperationRequest for Request<T> {
    type Entity = T;
    const KIND: OperationKind = OperationKind::Query;

    fn entity_type(&self) -> EntityType<T> {
        self.entity_type
    }
}

/// Builder for [`Request`].
#[derive(Debug, Clone)]
pub struct RequestBuilder<T> {
    entity_type: EntityType<T>,
    id: Option<String>,
    parent_id: Option<String>,
    reference_id: Option<String>,
    context_id: Option<String>,
}

impl<T> RequestBuilder<T> {
    pub fn new() -> Self {
        Self {
            entity_type: EntityType::new(),
            id: None,
            parent_id: None,
            reference_id: None,
            context_id: None,
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn parent_id(mut self, parent_id: impl Into<String>) -> Self {
        self.parent_id = Some(parent_id.into());
        self
    }

    pub fn reference_id(mut self, reference_id: impl Into<String>) -> Self {
        self.reference_id = Some(reference_id.into());
        self
    }

    pub fn context_id(mut self, context_id: impl Into<String>) -> Self {
        self.context_id = Some(context_id.into());
        self
    }

    /// Sets `id` and `parent_id` in one call.
    pub fn with_identifiers(self, id: impl Into<String>, parent_id: impl Into<String>) -> Self {
        self.id(id).parent_id(parent_id)
    }

    pub fn entity_type(&self) -> EntityType<T> {
        self.entity_type
    }

    pub fn build(&self) -> Request<T> {
        trace!(
            entity_type = %self.entity_type,
            id = ?self.id,
            parent_id = ?self.parent_id,
            reference_id = ?self.reference_id,
            context_id = ?self.context_id,
            "Built query request"
        );
        Request {
            entity_type: self.entity_type,
            id: self.id.clone(),
            parent_id: self.parent_id.clone(),
            reference_id: self.reference_id.clone(),
            context_id: self.context_id.clone(),
        }
    }
}

impl<T> Default for RequestBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}
