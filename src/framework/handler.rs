//! # OperationHandler Trait
//!
//! The boundary between callers and whatever executes their requests. The library only
//! fixes the shapes exchanged here; it ships no backend. Executors implement this trait
//! outside the crate, and [`MockHandler`](crate::framework::mock::MockHandler) stands in
//! for one in tests.

use crate::create_operation;
use crate::delete_operation;
use crate::query_operation;
use crate::update_operation;
use async_trait::async_trait;

/// Executes requests for entity type `T`, producing the matching response.
///
/// Failures are reported in-band through [`Status::Failure`](crate::framework::Status)
/// and the response message, never as a Rust error.
///
/// # Example
///
/// ```rust
/// use request_builder::{create, query, OperationHandler, OperationOutcome};
/// use request_builder::{create_operation, delete_operation, query_operation, update_operation};
/// use async_trait::async_trait;
///
/// #[derive(Debug, Clone)]
/// struct Note { text: String }
///
/// struct Echo;
///
/// #[async_trait]
/// impl OperationHandler<Note> for Echo {
///     async fn create(&self, request: create_operation::Request<Note>) -> create_operation::Response<Note> {
///         match request.into_entity() {
///             Some(note) => create_operation::Response::success(note),
///             None => create_operation::Response::failure("missing entity"),
///         }
///     }
///     async fn query(&self, _: query_operation::Request<Note>) -> query_operation::Response<Note> {
///         query_operation::Response::success(Vec::new())
///     }
///     async fn update(&self, _: update_operation::Request<Note>) -> update_operation::Response<Note> {
///         update_operation::Response::success()
///     }
///     async fn delete(&self, _: delete_operation::Request<Note>) -> delete_operation::Response<Note> {
///         delete_operation::Response::failure("read-only")
///     }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let handler = Echo;
///     let created = handler
///         .create(create::<Note>().entity(Note { text: "hi".into() }).build())
///         .await;
///     assert!(created.is_success());
///     assert_eq!(created.entity().map(|n| n.text.as_str()), Some("hi"));
///
///     let found = handler.query(query::<Note>().id("1").build()).await;
///     assert!(found.is_empty());
/// }
/// ```
#[async_trait]
pub trait OperationHandler<T>: Send + Sync
where
    T: Send + 'static,
{
    async fn create(&self, request: create_operation::Request<T>) -> create_operation::Response<T>;

    async fn query(&self, request: query_operation::Request<T>) -> query_operation::Response<T>;

    async fn update(&self, request: update_operation::Request<T>) -> update_operation::Response<T>;

    async fn delete(&self, request: delete_operation::Request<T>) -> delete_operation::Response<T>;
}
