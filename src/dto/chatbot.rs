use serde::{Deserialize, Serialize};

/// Reply when the question is about neither solar power nor electricity.
pub const UNRECOGNIZED_MESSAGE: &str =
    "I can provide data on solar power and electricity. Please ask about either!";
/// Reply when the filter matches no record.
pub const NOT_FOUND_MESSAGE: &str = "No data found for the specified criteria.";
/// Prefix of the reply sent when the store lookup fails.
pub const STORE_ERROR_PREFIX: &str = "Error fetching data from the database";

/// Body of every `/chatbot` reply. Outcomes are reported in-band as text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatbotResponse {
    pub response: String,
}

impl ChatbotResponse {
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            response: response.into(),
        }
    }

    pub fn unrecognized() -> Self {
        Self::new(UNRECOGNIZED_MESSAGE)
    }

    pub fn not_found() -> Self {
        Self::new(NOT_FOUND_MESSAGE)
    }

    pub fn store_error(diagnostic: &str) -> Self {
        Self::new(format!("{STORE_ERROR_PREFIX}: {diagnostic}"))
    }
}
