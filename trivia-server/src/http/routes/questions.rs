//! Question endpoints: paging, search, create, delete

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    routing::{delete, get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::db::repos::{CategoryRepo, QuestionRepo};
use crate::http::error::ApiError;
use crate::http::extractors::{ValidId, ValidJson, ValidQuery};
use crate::http::server::AppState;
use crate::models::{
    category_map, paginate, CategoryId, CategoryMap, LenientInt, NewQuestion, PaginationParams,
    Question, QuestionId, ValidationError,
};

/// One page of questions plus the category lookup table
#[derive(Serialize)]
pub struct QuestionPageResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub categories: CategoryMap,
    pub current_category: Option<CategoryId>,
}

/// Search term from the query string (`?search=`)
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    pub search: Option<String>,
}

/// Search term from a JSON body
#[derive(Debug, Default, Deserialize)]
pub struct SearchBody {
    #[serde(rename = "searchTerm", alias = "search")]
    pub search_term: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub current_category: Option<CategoryId>,
}

/// Create question request; numeric fields may arrive as strings
#[derive(Debug, Deserialize)]
pub struct CreateQuestionRequest {
    pub question: Option<String>,
    pub answer: Option<String>,
    pub difficulty: Option<LenientInt>,
    pub category: Option<LenientInt>,
}

impl CreateQuestionRequest {
    pub fn validate(self) -> Result<NewQuestion, ValidationError> {
        let question = self.question.ok_or(ValidationError::Missing { field: "question" })?;
        let answer = self.answer.ok_or(ValidationError::Missing { field: "answer" })?;
        let difficulty = required_int("difficulty", self.difficulty)?;
        let category = required_int("category", self.category)?;

        NewQuestion::new(&question, &answer, category, difficulty)
    }
}

fn required_int(field: &'static str, value: Option<LenientInt>) -> Result<i32, ValidationError> {
    value
        .map(|v| v.to_i32(field))
        .transpose()?
        .flatten()
        .ok_or(ValidationError::Missing { field })
}

#[derive(Serialize)]
pub struct CreateQuestionResponse {
    pub success: bool,
    pub created: QuestionId,
    pub created_ques: String,
    pub answer: String,
    pub difficulty: i32,
    pub category: CategoryId,
}

impl From<Question> for CreateQuestionResponse {
    fn from(q: Question) -> Self {
        Self {
            success: true,
            created: q.id,
            created_ques: q.question,
            answer: q.answer,
            difficulty: q.difficulty,
            category: q.category,
        }
    }
}

#[derive(Serialize)]
pub struct DeleteQuestionResponse {
    pub success: bool,
    pub deleted: QuestionId,
    pub deleted_ques: String,
}

/// GET /questions?page=N - one page of questions
async fn list_questions(
    State(state): State<Arc<AppState>>,
    ValidQuery(pairs): ValidQuery<Vec<(String, String)>>,
) -> Result<Json<QuestionPageResponse>, ApiError> {
    let page = PaginationParams::from_pairs(pairs).with_per_page(state.questions_per_page);
    let questions = QuestionRepo::new(&state.pool).list_all().await?;

    let window = paginate(&questions, page);
    if window.is_empty() {
        tracing::debug!(page = page.page, total = questions.len(), "Requested page is empty");
        return Err(ApiError::NotFound {
            resource: "page",
            id: page.page.to_string(),
        });
    }

    let categories = CategoryRepo::new(&state.pool).list().await?;

    Ok(Json(QuestionPageResponse {
        success: true,
        questions: window.to_vec(),
        total_questions: questions.len(),
        categories: category_map(categories),
        current_category: None,
    }))
}

/// POST /questions/search - substring search over question text
async fn search_questions(
    State(state): State<Arc<AppState>>,
    ValidQuery(params): ValidQuery<SearchParams>,
    body: Bytes,
) -> Result<Json<SearchResponse>, ApiError> {
    let term = match params.search {
        Some(term) => term,
        None => search_term_from_body(&body)?,
    };

    let questions = QuestionRepo::new(&state.pool).search(&term).await?;
    tracing::debug!(term = %term, hits = questions.len(), "Question search");

    Ok(Json(SearchResponse {
        success: true,
        total_questions: questions.len(),
        questions,
        current_category: None,
    }))
}

fn search_term_from_body(body: &[u8]) -> Result<String, ApiError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(ValidationError::Missing { field: "search term" }.into());
    }

    let parsed: SearchBody = serde_json::from_slice(body)
        .map_err(|e| ApiError::unprocessable(format!("invalid search body: {}", e)))?;

    parsed
        .search_term
        .ok_or_else(|| ValidationError::Missing { field: "search term" }.into())
}

/// POST /questions - create a question
async fn create_question(
    State(state): State<Arc<AppState>>,
    ValidJson(req): ValidJson<CreateQuestionRequest>,
) -> Result<Json<CreateQuestionResponse>, ApiError> {
    let new = req.validate()?;
    let question = QuestionRepo::new(&state.pool).create(&new).await?;

    tracing::info!(id = question.id, category = question.category, "Question created");
    Ok(Json(CreateQuestionResponse::from(question)))
}

/// DELETE /questions/{id} - delete a question
async fn delete_question(
    State(state): State<Arc<AppState>>,
    ValidId(id): ValidId,
) -> Result<Json<DeleteQuestionResponse>, ApiError> {
    let deleted = QuestionRepo::new(&state.pool)
        .delete(id)
        .await?
        .ok_or_else(|| ApiError::unprocessable(format!("question {} does not exist", id)))?;

    tracing::info!(id, "Question deleted");
    Ok(Json(DeleteQuestionResponse {
        success: true,
        deleted: id,
        deleted_ques: deleted,
    }))
}

/// Question routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/questions", get(list_questions).post(create_question))
        .route("/questions/", get(list_questions))
        .route("/questions/search", post(search_questions))
        .route("/questions/form", post(create_question))
        .route("/questions/{id}", delete(delete_question))
}
