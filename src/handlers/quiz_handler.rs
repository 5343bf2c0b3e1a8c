use actix_web::{post, web, HttpResponse};
use validator::Validate;

use crate::{
    app_state::AppState,
    errors::AppResult,
    models::{
        domain::QuizQuestion,
        dto::{request::QuizRequest, response::QuizResponse},
    },
    services::response_extractor::extract_questions,
};

/// Generates a multiple-choice quiz for the requested topic.
///
/// Always replies HTTP 200: any failure in the pipeline (validation,
/// upstream call, decode) is folded into the `{success: false, error}`
/// envelope for the caller.
#[post("/generate-quiz")]
pub async fn generate_quiz(
    state: web::Data<AppState>,
    request: web::Json<QuizRequest>,
) -> HttpResponse {
    match run_quiz_pipeline(&state, request.into_inner()).await {
        Ok(questions) => HttpResponse::Ok().json(QuizResponse::ok(questions)),
        Err(err) => {
            log::warn!("Quiz generation failed: {}", err);
            HttpResponse::Ok().json(QuizResponse::error(err))
        }
    }
}

async fn run_quiz_pipeline(
    state: &AppState,
    request: QuizRequest,
) -> AppResult<Vec<QuizQuestion>> {
    request.validate()?;

    let raw = state
        .completion_client
        .complete(&request.topic, request.num_questions)
        .await?;

    extract_questions(&raw)
}
