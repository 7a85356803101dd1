use serde::Deserialize;

use crate::domain::types::RawQuery;

/// JSON body accepted by `POST /chatbot`.
#[derive(Debug, Default, Deserialize)]
pub struct ChatbotForm {
    /// Free-text question. Missing or `null` is treated as empty.
    #[serde(default)]
    pub query: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChatbotPayload {
    pub query: RawQuery,
}

impl From<ChatbotForm> for ChatbotPayload {
    fn from(value: ChatbotForm) -> Self {
        Self {
            query: RawQuery::new(value.query.unwrap_or_default()),
        }
    }
}

impl From<&str> for ChatbotPayload {
    fn from(value: &str) -> Self {
        Self {
            query: RawQuery::new(value),
        }
    }
}
