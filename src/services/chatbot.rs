use crate::domain::category::Category;
use crate::domain::extract::{extract_date, extract_department, extract_total, select_category};
use crate::domain::query::{Predicate, build_predicate};
use crate::domain::record::EnergyRecord;
use crate::dto::chatbot::ChatbotResponse;
use crate::forms::chatbot::ChatbotPayload;
use crate::repository::EnergyRecordReader;

use super::{ServiceError, ServiceResult};

/// Outcome of a question that reached a well-defined answer.
#[derive(Debug, Clone, PartialEq)]
pub enum ChatbotReply {
    /// First record satisfying the extracted filter.
    Record(EnergyRecord),
    /// The question names neither solar power nor electricity.
    Unrecognized,
    /// The filter matched nothing in the selected collection.
    NotFound,
}

impl ChatbotReply {
    /// Render the reply body. Matched records are embedded as a JSON string.
    pub fn into_response(self) -> ServiceResult<ChatbotResponse> {
        match self {
            ChatbotReply::Record(record) => match serde_json::to_string(&record) {
                Ok(body) => Ok(ChatbotResponse::new(body)),
                Err(e) => {
                    log::error!("Failed to serialize record {}: {e}", record.id);
                    Err(ServiceError::Internal)
                }
            },
            ChatbotReply::Unrecognized => Ok(ChatbotResponse::unrecognized()),
            ChatbotReply::NotFound => Ok(ChatbotResponse::not_found()),
        }
    }
}

/// Core business logic for the `/chatbot` endpoint.
///
/// Selects the collection, extracts the optional date, department and total,
/// merges them into a predicate and looks up the first matching record. An
/// unrecognized question returns early without touching the store.
pub fn answer_query<R>(payload: ChatbotPayload, repo: &R) -> ServiceResult<ChatbotReply>
where
    R: EnergyRecordReader,
{
    let query = payload.query;

    let Some(category) = select_category(&query) else {
        log::debug!("No category recognized in query '{query}'");
        return Ok(ChatbotReply::Unrecognized);
    };

    let predicate = build_predicate(
        extract_date(&query),
        extract_department(&query),
        extract_total(&query),
    );
    log::debug!("Query for {category}: {predicate:?}");

    match execute_query(category, &predicate, repo)? {
        Some(record) => Ok(ChatbotReply::Record(record)),
        None => Ok(ChatbotReply::NotFound),
    }
}

/// Run `predicate` against the collection of `category`.
///
/// Store failures are logged and reported as [`ServiceError::Store`] with the
/// diagnostic text; they are never retried.
pub fn execute_query<R>(
    category: Category,
    predicate: &Predicate,
    repo: &R,
) -> ServiceResult<Option<EnergyRecord>>
where
    R: EnergyRecordReader,
{
    repo.find_first_record(category, predicate).map_err(|e| {
        log::error!("Error fetching data from the database: {e}");
        ServiceError::from(e)
    })
}
