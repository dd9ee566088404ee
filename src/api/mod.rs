//! API response types and extractors

pub mod extract;
pub mod response;

pub use extract::{ApiJson, ApiQuery};
pub use response::{Created, DataResponse, MessageResponse};
