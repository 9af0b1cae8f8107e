//! Create operation: request carrying a new entity, response carrying the created one.

mod request;
mod response;

pub use request::*;
pub use response::*;
