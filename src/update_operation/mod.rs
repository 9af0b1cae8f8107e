//! Update operation: request carrying the entity with its new values, response with
//! status only.

mod request;
mod response;

pub use request::*;
pub use response::*;
