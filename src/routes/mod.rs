use actix_web::web;

pub mod chatbot;

/// Register every HTTP route of the service.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(chatbot::chatbot);
}
