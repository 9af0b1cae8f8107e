#![doc(html_logo_url = "https://www.rust-lang.org/logos/rust-logo-128x128.png")]
#![doc(html_favicon_url = "https://www.rust-lang.org/favicon.ico")]
//! # Request Builder
//!
//! > **Typed request and response envelopes for CRUD operations on any entity.**
//!
//! This crate gives Create, Query, Update and Delete operations one uniform shape,
//! whatever the entity type. Callers assemble a typed request with a fluent builder;
//! an executor (outside this crate) consumes it and answers with a typed response that
//! reports success or failure, an optional message, optional metadata and the
//! operation's payload.
//!
//! ## 🏗️ Design Philosophy
//!
//! ### Generics instead of type tokens
//! You'll see `Request<T>` everywhere. The entity type lives in the generic parameter,
//! so the compiler carries it from the factory to the response. A `Request<User>` can't
//! be handed to code that expects a `Request<Product>`, and no runtime class token is
//! needed. [`EntityType<T>`](framework::EntityType) is a zero-sized marker when the
//! type has to be named or logged.
//!
//! ### Two outcomes, no taxonomy
//! Every response is either [`Status::Success`] or [`Status::Failure`]. Finer
//! distinctions go into the free-form message or a custom [`ResultMetadata`].
//! Building requests never fails; failures are reported in-band by the executor.
//!
//! ### No execution
//! Nothing here talks to a backend. [`OperationHandler`] names the boundary an
//! executor implements, and [`MockHandler`] scripts one for tests.
//!
//! ## 🚀 Quick Start
//!
//! ```rust
//! use request_builder::{create, delete, query, OperationOutcome, OperationRequest};
//! use request_builder::{create_operation, delete_operation, query_operation, Status};
//!
//! #[derive(Debug, Clone, PartialEq)]
//! struct User {
//!     id: String,
//!     name: String,
//! }
//!
//! let alice = User { id: "123".into(), name: "Alice".into() };
//!
//! // Requests
//! let create_request = create::<User>().entity(alice.clone()).build();
//! assert_eq!(create_request.entity(), Some(&alice));
//! assert_eq!(create_request.entity_type().short_name(), "User");
//!
//! let query_request = query::<User>().with_identifiers("123", "team-7").build();
//! assert!(query_request.has_id());
//! assert!(!query_request.has_context_id());
//!
//! let delete_request = delete::<User>().id("123").parent_id("parent-456").build();
//! assert_eq!(delete_request.parent_id(), Some("parent-456"));
//!
//! // Responses, as an executor would produce them
//! let created = create_operation::Response::with_entity(Status::Success, alice.clone());
//! assert!(created.is_success());
//!
//! let found = query_operation::Response::<User>::with_results(Status::Success, vec![alice]);
//! assert_eq!(found.len(), 1);
//!
//! let deleted = delete_operation::Response::<User>::failure("Entity not found");
//! assert!(deleted.is_failure());
//! assert_eq!(deleted.message(), Some("Entity not found"));
//! ```
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Contracts ([`framework`])
//! Entity marker, request trait and factories, response base, metadata, the handler
//! seam and the mock.
//!
//! ### 2. The Operations ([`create_operation`], [`query_operation`], [`update_operation`], [`delete_operation`])
//! Each defines `Request<T>`, `RequestBuilder<T>` and `Response<T>`. Aliases such as
//! [`CreateRequest`] are exported at the crate root.
//!
//! ### 3. Observability ([`telemetry`])
//! `tracing` subscriber bootstrap. See the module docs for what gets logged.
//!
//! ### Running Tests
//!
//! ```bash
//! cargo test
//! ```

pub mod create_operation;
pub mod delete_operation;
pub mod framework;
pub mod query_operation;
pub mod telemetry;
pub mod update_operation;

pub use framework::{
    create, delete, query, update, Description, EntityType, MockHandler, OperationError,
    OperationHandler, OperationKind, OperationOutcome, OperationRequest, OperationResponse,
    ResultMetadata, Status,
};

pub type CreateRequest<T> = create_operation::Request<T>;
pub type CreateRequestBuilder<T> = create_operation::RequestBuilder<T>;
pub type CreateResponse<T> = create_operation::Response<T>;

pub type QueryRequest<T> = query_operation::Request<T>;
pub type QueryRequestBuilder<T> = query_operation::RequestBuilder<T>;
pub type QueryResponse<T> = query_operation::Response<T>;

pub type UpdateRequest<T> = update_operation::Request<T>;
pub type UpdateRequestBuilder<T> = update_operation::RequestBuilder<T>;
pub type UpdateResponse<T> = update_operation::Response<T>;

pub type DeleteRequest<T> = delete_operation::Request<T>;
pub type DeleteRequestBuilder<T> = delete_operation::RequestBuilder<T>;
pub type DeleteResponse<T> = delete_operation::Response<T>;
