pub use errors::{ServiceError, ServiceResult};

pub mod chatbot;
pub mod errors;
