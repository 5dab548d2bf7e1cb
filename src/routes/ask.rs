//! Question Routes
//!
//! Endpoints:
//! - POST /api/ask - Answer a question about a previously uploaded PDF

use axum::{
    extract::{rejection::JsonRejection, State},
    routing::post,
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};
use crate::model::build_prompt;
use crate::state::AppState;

/// Question request
#[derive(Debug, Serialize, Deserialize)]
pub struct QuestionRequest {
    pub question: String,
    pub pdf_id: String,
}

/// Answer response
#[derive(Debug, Serialize, Deserialize)]
pub struct AnswerResponse {
    pub answer: String,
}

/// Create the question router
pub fn router() -> Router<AppState> {
    Router::new().route("/ask", post(ask))
}

/// POST /api/ask
async fn ask(
    State(state): State<AppState>,
    request: std::result::Result<Json<QuestionRequest>, JsonRejection>,
) -> Result<Json<AnswerResponse>> {
    let Json(request) = request?;

    let context = state
        .library()
        .text(&request.pdf_id)
        .await
        .ok_or_else(|| AppError::DocumentNotFound(request.pdf_id.clone()))?;

    let prompt = build_prompt(&context, &request.question);
    let answer = state.model().generate(&prompt).await?;

    tracing::info!(
        pdf_id = %request.pdf_id,
        model = %state.model().model_name(),
        answer_chars = answer.len(),
        "Answered question"
    );

    Ok(Json(AnswerResponse { answer }))
}
