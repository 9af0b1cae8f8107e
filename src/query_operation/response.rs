use crate::framework::{
    EntityType, OperationError, OperationOutcome, OperationResponse, ResultMetadata, Status,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

/// Response from a query operation containing the matching entities in order.
///
/// `results` is never absent: constructing from `None` or deserializing a payload
/// without the field yields an empty list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Response<T> {
    #[serde(flatten)]
    outcome: OperationResponse,
    #[serde(default = "Vec::new")]
    results: Vec<T>,
}

impl<T> Response<T> {
    /// Creates a response with no results.
    pub fn new(status: Status) -> Self {
        Self::with_results(status, Vec::new())
    }

    pub fn with_results(status: Status, results: impl Into<Option<Vec<T>>>) -> Self {
        Self {
            outcome: OperationResponse::new(status),
            results: results.into().unwrap_or_default(),
        }
    }

    pub fn success(results: Vec<T>) -> Self {
        Self::with_results(Status::Success, results)
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

    pub fn results(&self) -> &[T] {
        &self.results
    }

    pub fn into_results(self) -> Vec<T> {
        self.results
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.results.iter()
    }

    /// Returns the results on success, or [`OperationError::Failed`].
    pub fn into_result(self) -> Result<Vec<T>, OperationError> {
        if let Err(e) = self.check() {
            debug!(entity_type = %EntityType::<T>::new(), error = %e, "Query failed");
            return Err(e);
        }
        Ok(self.results)
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

impl<'a, T> IntoIterator for &'a Response<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.results.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[derive(Debug, Clone, PartialEq)]
    struct TestEntity {
        id: String,
        name: String,
    }

    impl TestEntity {
        fn new(id: &str, name: &str) -> Self {
            Self {
                id: id.into(),
                name: name.into(),
            }
        }
    }

    #[test]
    fn test_entity_type() {
        let response = Response::<TestEntity>::new(Status::Success);
        assert_eq!(response.entity_type(), EntityType::<TestEntity>::new());
        assert_eq!(response.entity_type().short_name(), "TestEntity");
    }

    #[test]
    fn test_query_response() {
        let results = vec![TestEntity::new("1", "First"), TestEntity::new("2", "Second")];

        let response = Response::<TestEntity>::with_results(Status::Success, results);

        assert!(response.is_success());
        assert_eq!(response.results().len(), 2);
        assert_eq!(response.results()[0].name, "First");
    }

    #[test]
    fn test_none_results_become_empty() {
        let response = Response::<TestEntity>::with_results(Status::Success, None::<Vec<TestEntity>>);
        assert!(response.results().is_empty());
        assert!(response.is_empty());
        assert_eq!(response.len(), 0);

        assert!(Response::<TestEntity>::new(Status::Failure).is_empty());
    }

    #[test]
    fn test_iteration_preserves_order() {
        let response = Response::success(vec![
            TestEntity::new("b", "B"),
            TestEntity::new("a", "A"),
        ]);
        let ids: Vec<&str> = (&response).into_iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, ["b", "a"]);
        assert_eq!(response.iter().count(), 2);
    }

    #[test]
    fn test_into_result() {
        let ok = Response::success(vec![TestEntity::new("1", "One")]);
        assert_eq!(ok.into_result().map(|r| r.len()), Ok(1));

        let failed = Response::<TestEntity>::failure("index offline");
        assert_eq!(
            failed.into_result(),
            Err(OperationError::Failed {
                message: Some("index offline".into())
            })
        );
    }

    proptest! {
        #[test]
        fn prop_results_keep_length_and_order(values in proptest::collection::vec(any::<u32>(), 0..64)) {
            let response = Response::success(values.clone());
            prop_assert_eq!(response.len(), values.len());
            prop_assert_eq!(response.is_empty(), values.is_empty());
            prop_assert_eq!(response.into_results(), values);
        }
    }
}
