//! Delete operation: request carrying the identifiers of the entity to remove.

mod request;
mod response;

pub use request::*;
pub use response::*;
