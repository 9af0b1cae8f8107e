//! # Mock Handler
//!
//! Utilities for testing caller code without a real executor.
//!
//! [`MockHandler`] implements [`OperationHandler`] over a queue of scripted responses.
//! Queue responses with `expect_create`, `expect_query`, `expect_update` or
//! `expect_delete`, hand the mock to the code under test, then call
//! [`MockHandler::verify`] to make sure every expectation was consumed.

use crate::create_operation;
use crate::delete_operation;
use crate::framework::entity::EntityType;
use crate::framework::handler::OperationHandler;
use crate::framework::request::OperationKind;
use crate::query_operation;
use crate::update_operation;
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::debug;

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// A scripted response waiting for its request.
enum Expectation<T> {
    Create(create_operation::Response<T>),
    Query(query_operation::Response<T>),
    Update(update_operation::Response<T>),
    Delete(delete_operation::Response<T>),
}

impl<T> Expectation<T> {
    fn kind(&self) -> OperationKind {
        match self {
            Expectation::Create(_) => OperationKind::Create,
            Expectation::Query(_) => OperationKind::Query,
            Expectation::Update(_) => OperationKind::Update,
            Expectation::Delete(_) => OperationKind::Delete,
        }
    }
}

type Queue<T> = Arc<Mutex<VecDeque<Expectation<T>>>>;

fn lock<V>(mutex: &Mutex<V>) -> MutexGuard<'_, V> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// A handler that answers requests from a FIFO queue of expectations.
///
/// Requests are served strictly in order. A request whose kind differs from the next
/// expectation, or one arriving after the queue is drained, panics.
///
/// # Example
/// ```ignore
/// let mut mock = MockHandler::<User>::new();
/// mock.expect_create().return_ok(user.clone());
/// mock.expect_delete().return_failure("Entity not found");
///
/// // Hand `mock.clone()` to the code under test...
/// mock.verify(); // Ensures all expectations were met
/// ```
pub struct MockHandler<T> {
    expectations: Queue<T>,
    received: Arc<Mutex<Vec<OperationKind>>>,
}

impl<T> MockHandler<T> {
    /// Creates a new mock handler with no expectations.
    pub fn new() -> Self {
        Self {
            expectations: Arc::new(Mutex::new(VecDeque::new())),
            received: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Expects a `create` request.
    pub fn expect_create(&mut self) -> ExpectationBuilder<T, create_operation::Response<T>> {
        self.expectation(Expectation::Create)
    }

    /// Expects a `query` request.
    pub fn expect_query(&mut self) -> ExpectationBuilder<T, query_operation::Response<T>> {
        self.expectation(Expectation::Query)
    }

    /// Expects an `update` request.
    pub fn expect_update(&mut self) -> ExpectationBuilder<T, update_operation::Response<T>> {
        self.expectation(Expectation::Update)
    }

    /// Expects a `delete` request.
    pub fn expect_delete(&mut self) -> ExpectationBuilder<T, delete_operation::Response<T>> {
        self.expectation(Expectation::Delete)
    }

    fn expectation<R>(&self, wrap: fn(R) -> Expectation<T>) -> ExpectationBuilder<T, R> {
        ExpectationBuilder {
            expectations: self.expectations.clone(),
            wrap,
        }
    }

    /// Kinds of the requests served so far, in arrival order.
    pub fn received(&self) -> Vec<OperationKind> {
        lock(&self.received).clone()
    }

    /// Number of expectations not yet consumed.
    pub fn pending(&self) -> usize {
        lock(&self.expectations).len()
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let remaining = self.pending();
        if remaining > 0 {
            panic!("Not all expectations were met. {} remaining", remaining);
        }
    }

    fn next(&self, kind: OperationKind) -> Expectation<T> {
        debug!(entity_type = %EntityType::<T>::new(), %kind, "Mock received request");
        lock(&self.received).push(kind);
        match lock(&self.expectations).pop_front() {
            Some(expectation) => expectation,
            None => panic!("Unexpected {} request: no expectations left", kind),
        }
    }
}

fn mismatch<T>(kind: OperationKind, expectation: &Expectation<T>) -> ! {
    panic!(
        "Unexpected {} request: next expectation is {}",
        kind,
        expectation.kind()
    )
}

impl<T> Clone for MockHandler<T> {
    fn clone(&self) -> Self {
        Self {
            expectations: self.expectations.clone(),
            received: self.received.clone(),
        }
    }
}

impl<T> Default for MockHandler<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T: Send + 'static> OperationHandler<T> for MockHandler<T> {
    async fn create(&self, _request: create_operation::Request<T>) -> create_operation::Response<T> {
        match self.next(OperationKind::Create) {
            Expectation::Create(response) => response,
            other => mismatch(OperationKind::Create, &other),
        }
    }

    async fn query(&self, _request: query_operation::Request<T>) -> query_operation::Response<T> {
        match self.next(OperationKind::Query) {
            Expectation::Query(response) => response,
            other => mismatch(OperationKind::Query, &other),
        }
    }

    async fn update(&self, _request: update_operation::Request<T>) -> update_operation::Response<T> {
        match self.next(OperationKind::Update) {
            Expectation::Update(response) => response,
            other => mismatch(OperationKind::Update, &other),
        }
    }

    async fn delete(&self, _request: delete_operation::Request<T>) -> delete_operation::Response<T> {
        match self.next(OperationKind::Delete) {
            Expectation::Delete(response) => response,
            other => mismatch(OperationKind::Delete, &other),
        }
    }
}

/// Builder for a single expectation answering with a response of type `R`.
pub struct ExpectationBuilder<T, R> {
    expectations: Queue<T>,
    wrap: fn(R) -> Expectation<T>,
}

impl<T, R> ExpectationBuilder<T, R> {
    /// Queues `response` as the answer to the expected request.
    pub fn return_response(self, response: R) {
        lock(&self.expectations).push_back((self.wrap)(response));
    }
}

impl<T> ExpectationBuilder<T, create_operation::Response<T>> {
    pub fn return_ok(self, entity: T) {
        self.return_response(create_operation::Response::success(entity));
    }

    pub fn return_failure(self, message: impl Into<String>) {
        self.return_response(create_operation::Response::failure(message));
    }
}

impl<T> ExpectationBuilder<T, query_operation::Response<T>> {
    pub fn return_ok(self, results: Vec<T>) {
        self.return_response(query_operation::Response::success(results));
    }

    pub fn return_failure(self, message: impl Into<String>) {
        self.return_response(query_operation::Response::failure(message));
    }
}

impl<T> ExpectationBuilder<T, update_operation::Response<T>> {
    pub fn return_ok(self) {
        self.return_response(update_operation::Response::success());
    }

    pub fn return_failure(self, message: impl Into<String>) {
        self.return_response(update_operation::Response::failure(message));
    }
}

impl<T> ExpectationBuilder<T, delete_operation::Response<T>> {
    pub fn return_ok(self) {
        self.return_response(delete_operation::Response::success());
    }

    pub fn return_failure(self, message: impl Into<String>) {
        self.return_response(delete_operation::Response::failure(message));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::request::{create, delete, query, update};
    use crate::framework::response::OperationOutcome;

    #[derive(Debug, Clone, PartialEq)]
    struct User {
        id: String,
        name: String,
    }

    fn alice() -> User {
        User {
            id: "user_1".into(),
            name: "Alice".into(),
        }
    }

    #[tokio::test]
    async fn test_mock_handler_with_expectations() {
        let mut mock = MockHandler::<User>::new();

        mock.expect_create().return_ok(alice());
        mock.expect_query().return_ok(vec![alice()]);
        mock.expect_update().return_ok();
        mock.expect_delete().return_failure("Entity not found");

        let created = mock.create(create::<User>().entity(alice()).build()).await;
        assert!(created.is_success());
        assert_eq!(created.entity(), Some(&alice()));

        let found = mock.query(query::<User>().id("user_1").build()).await;
        assert_eq!(found.results(), [alice()]);

        let updated = mock.update(update::<User>().entity(alice()).build()).await;
        assert!(updated.is_success());

        let deleted = mock.delete(delete::<User>().id("user_1").build()).await;
        assert!(deleted.is_failure());
        assert_eq!(deleted.message(), Some("Entity not found"));

        assert_eq!(
            mock.received(),
            [
                OperationKind::Create,
                OperationKind::Query,
                OperationKind::Update,
                OperationKind::Delete
            ]
        );
        mock.verify();
    }

    #[tokio::test]
    async fn test_clones_share_the_queue() {
        let mut mock = MockHandler::<User>::new();
        mock.expect_query().return_failure("index offline");

        let handle = mock.clone();
        let response = handle.query(query::<User>().build()).await;

        assert!(response.is_failure());
        assert_eq!(mock.pending(), 0);
        assert_eq!(mock.received(), [OperationKind::Query]);
    }

    #[tokio::test]
    #[should_panic(expected = "next expectation is create")]
    async fn test_kind_mismatch_panics() {
        let mut mock = MockHandler::<User>::new();
        mock.expect_create().return_ok(alice());
        mock.delete(delete::<User>().id("user_1").build()).await;
    }

    #[tokio::test]
    #[should_panic(expected = "no expectations left")]
    async fn test_unexpected_request_panics() {
        let mock = MockHandler::<User>::new();
        mock.update(update::<User>().entity(alice()).build()).await;
    }

    #[test]
    #[should_panic(expected = "1 remaining")]
    fn test_verify_reports_unmet_expectations() {
        let mut mock = MockHandler::<User>::new();
        mock.expect_update().return_ok();
        mock.verify();
    }
}
