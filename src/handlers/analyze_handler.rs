use actix_web::{post, web, HttpResponse};
use validator::Validate;

use crate::{
    models::dto::{request::AnalyzeRequest, response::AnalyzeResponse},
    services::feedback_service::{progress_feedback, FEEDBACK_UNAVAILABLE},
};

/// Returns canned progress feedback for a user's completed actions.
/// Always HTTP 200; an invalid request degrades to the static fallback.
#[post("/analyze")]
pub async fn analyze(request: web::Json<AnalyzeRequest>) -> HttpResponse {
    let request = request.into_inner();

    let ai_feedback = match request.validate() {
        Ok(()) => progress_feedback(request.actions.len()),
        Err(err) => {
            log::warn!("Analyze request failed validation: {}", err);
            FEEDBACK_UNAVAILABLE.to_string()
        }
    };

    HttpResponse::Ok().json(AnalyzeResponse { ai_feedback })
}
