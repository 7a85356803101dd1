use actix_web::{HttpResponse, Responder, post, web};

use crate::dto::chatbot::ChatbotResponse;
use crate::forms::chatbot::ChatbotForm;
use crate::repository::DieselRepository;
use crate::services::ServiceError;
use crate::services::chatbot::answer_query as answer_query_service;

#[post("/chatbot")]
pub async fn chatbot(
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<ChatbotForm>,
) -> impl Responder {
    let reply = answer_query_service(form.into(), repo.get_ref())
        .and_then(|reply| reply.into_response());

    match reply {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(ServiceError::Store(diagnostic)) => {
            HttpResponse::Ok().json(ChatbotResponse::store_error(&diagnostic))
        }
        Err(ServiceError::Internal) => HttpResponse::InternalServerError().finish(),
    }
}
