//! Query operation: request carrying optional identifier filters, response carrying an
//! ordered list of matches.

mod request;
mod response;

pub use request::*;
pub use response::*;
