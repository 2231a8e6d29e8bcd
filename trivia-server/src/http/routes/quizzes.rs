//! Quiz play endpoint

use std::collections::HashSet;
use std::sync::Arc;

use axum::{extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize};

use crate::db::repos::QuestionRepo;
use crate::http::error::ApiError;
use crate::http::extractors::ValidJson;
use crate::http::server::AppState;
use crate::models::{Question, QuestionId};
use crate::quiz::{self, QuizCategory};

/// Next-question request
#[derive(Debug, Deserialize)]
pub struct QuizRequest {
    pub previous_questions: Vec<QuestionId>,
    pub quiz_category: QuizCategory,
}

/// `question` is `null` once every eligible question has been played
#[derive(Debug, Serialize)]
pub struct QuizResponse {
    pub success: bool,
    pub question: Option<Question>,
}

/// POST /quizzes - random question not yet played
async fn next_question(
    State(state): State<Arc<AppState>>,
    ValidJson(req): ValidJson<QuizRequest>,
) -> Result<Json<QuizResponse>, ApiError> {
    let category = req.quiz_category.filter()?;
    let excluded: HashSet<QuestionId> = req.previous_questions.into_iter().collect();

    let repo = QuestionRepo::new(&state.pool);
    let questions = match category {
        Some(category) => repo.list_by_category(category).await?,
        None => repo.list_all().await?,
    };

    let question = {
        let mut rng = state.rng.lock().await;
        quiz::pick(&questions, category, &excluded, &mut *rng).cloned()
    };

    tracing::debug!(
        category = ?category,
        played = excluded.len(),
        picked = ?question.as_ref().map(|q| q.id),
        "Quiz question selected"
    );

    Ok(Json(QuizResponse {
        success: true,
        question,
    }))
}

/// Quiz routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/quizzes", post(next_question))
}
