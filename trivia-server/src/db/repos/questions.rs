//! Question repository
//!
//! Lists return whole result sets ordered by id; paging and random
//! selection happen in memory on top of them.

use sqlx::PgPool;

use crate::models::{CategoryId, NewQuestion, Question, QuestionId};
use super::DbError;

const QUESTION_COLUMNS: &str = "id, question, answer, category, difficulty";

/// Question repository
pub struct QuestionRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> QuestionRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// All questions ordered by id.
    pub async fn list_all(&self) -> Result<Vec<Question>, DbError> {
        let sql = format!("SELECT {} FROM questions ORDER BY id", QUESTION_COLUMNS);
        let questions: Vec<Question> = sqlx::query_as(&sql).fetch_all(self.pool).await?;
        Ok(questions)
    }

    /// Questions in a single category ordered by id.
    pub async fn list_by_category(&self, category: CategoryId) -> Result<Vec<Question>, DbError> {
        let sql = format!(
            "SELECT {} FROM questions WHERE category = $1 ORDER BY id",
            QUESTION_COLUMNS
        );
        let questions: Vec<Question> = sqlx::query_as(&sql)
            .bind(category)
            .fetch_all(self.pool)
            .await?;
        Ok(questions)
    }

    /// Case-insensitive substring search over question text.
    ///
    /// LIKE wildcards in `term` are matched literally.
    pub async fn search(&self, term: &str) -> Result<Vec<Question>, DbError> {
        let sql = format!(
            "SELECT {} FROM questions WHERE question ILIKE $1 ESCAPE '\\' ORDER BY id",
            QUESTION_COLUMNS
        );
        let questions: Vec<Question> = sqlx::query_as(&sql)
            .bind(like_pattern(term))
            .fetch_all(self.pool)
            .await?;
        Ok(questions)
    }

    /// Insert a question, returning the stored record.
    ///
    /// An unknown category surfaces as `DbError::InvalidReference`.
    pub async fn create(&self, new: &NewQuestion) -> Result<Question, DbError> {
        let sql = format!(
            r#"
            INSERT INTO questions (question, answer, category, difficulty)
            VALUES ($1, $2, $3, $4)
            RETURNING {}
            "#,
            QUESTION_COLUMNS
        );
        let result = sqlx::query_as::<_, Question>(&sql)
            .bind(new.question())
            .bind(new.answer())
            .bind(new.category())
            .bind(new.difficulty().get())
            .fetch_one(self.pool)
            .await;

        match result {
            Ok(question) => Ok(question),
            Err(sqlx::Error::Database(e)) if e.is_foreign_key_violation() => {
                Err(DbError::InvalidReference {
                    field: "category",
                    value: new.category().to_string(),
                })
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Delete a question by id.
    ///
    /// Returns the deleted question's text, or `None` if it did not exist.
    pub async fn delete(&self, id: QuestionId) -> Result<Option<String>, DbError> {
        let deleted: Option<(String,)> =
            sqlx::query_as("DELETE FROM questions WHERE id = $1 RETURNING question")
                .bind(id)
                .fetch_optional(self.pool)
                .await?;

        Ok(deleted.map(|(question,)| question))
    }
}

/// Build an ILIKE pattern matching `term` anywhere, escaping `\`, `%` and `_`.
fn like_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.chars() {
        if matches!(c, '\\' | '%' | '_') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}
