//! Quiz questions and creation-time validation

use serde::Serialize;
use sqlx::FromRow;

use super::{CategoryId, ValidationError};

pub type QuestionId = i32;

/// Maximum length for question and answer text
const MAX_TEXT_LEN: usize = 1000;

/// Question record from database
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Question {
    pub id: QuestionId,
    pub question: String,
    pub answer: String,
    pub category: CategoryId,
    pub difficulty: i32,
}

/// Difficulty score, 1 (easiest) to 5
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Difficulty(i32);

impl Difficulty {
    pub const MIN: i32 = 1;
    pub const MAX: i32 = 5;

    pub fn new(value: i32) -> Result<Self, ValidationError> {
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(ValidationError::OutOfRange {
                field: "difficulty",
                min: Self::MIN,
                max: Self::MAX,
                value,
            });
        }
        Ok(Self(value))
    }

    pub fn get(self) -> i32 {
        self.0
    }
}

/// Validated input for a new question
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuestion {
    question: String,
    answer: String,
    category: CategoryId,
    difficulty: Difficulty,
}

impl NewQuestion {
    /// Build a new question from raw request fields.
    ///
    /// # Rules
    /// - Question and answer are trimmed, non-empty, max 1000 characters
    /// - Difficulty within 1..=5
    /// - Category id positive (existence is checked by the database)
    ///
    /// # Example
    /// ```
    /// use trivia_server::models::NewQuestion;
    ///
    /// assert!(NewQuestion::new("What is H2O?", "Water", 1, 1).is_ok());
    /// assert!(NewQuestion::new("   ", "Water", 1, 1).is_err());
    /// assert!(NewQuestion::new("What is H2O?", "Water", 1, 6).is_err());
    /// ```
    pub fn new(
        question: &str,
        answer: &str,
        category: CategoryId,
        difficulty: i32,
    ) -> Result<Self, ValidationError> {
        let question = required_text("question", question)?;
        let answer = required_text("answer", answer)?;

        if category < 1 {
            return Err(ValidationError::OutOfRange {
                field: "category",
                min: 1,
                max: i32::MAX,
                value: category,
            });
        }

        Ok(Self {
            question,
            answer,
            category,
            difficulty: Difficulty::new(difficulty)?,
        })
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }

    pub fn category(&self) -> CategoryId {
        self.category
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }
}

fn required_text(field: &'static str, s: &str) -> Result<String, ValidationError> {
    let trimmed = s.trim();

    if trimmed.is_empty() {
        return Err(ValidationError::Empty { field });
    }

    if trimmed.chars().count() > MAX_TEXT_LEN {
        return Err(ValidationError::TooLong {
            field,
            max: MAX_TEXT_LEN,
        });
    }

    Ok(trimmed.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_question() {
        let q = NewQuestion::new("  Who painted the Mona Lisa?  ", "Da Vinci", 2, 3).unwrap();
        assert_eq!(q.question(), "Who painted the Mona Lisa?");
        assert_eq!(q.answer(), "Da Vinci");
        assert_eq!(q.category(), 2);
        assert_eq!(q.difficulty().get(), 3);
    }

    #[test]
    fn rejects_empty_text() {
        assert_eq!(
            NewQuestion::new("", "a", 1, 1).unwrap_err(),
            ValidationError::Empty { field: "question" }
        );
        assert_eq!(
            NewQuestion::new("q", "  ", 1, 1).unwrap_err(),
            ValidationError::Empty { field: "answer" }
        );
    }

    #[test]
    fn max_length() {
        let text_1000 = "a".repeat(1000);
        assert!(NewQuestion::new(&text_1000, "a", 1, 1).is_ok());

        let text_1001 = "a".repeat(1001);
        let err = NewQuestion::new(&text_1001, "a", 1, 1).unwrap_err();
        assert!(matches!(err, ValidationError::TooLong { max: 1000, .. }));
    }

    #[test]
    fn difficulty_bounds() {
        assert!(Difficulty::new(0).is_err());
        assert!(Difficulty::new(1).is_ok());
        assert!(Difficulty::new(5).is_ok());
        assert!(Difficulty::new(6).is_err());
    }

    #[test]
    fn rejects_non_positive_category() {
        let err = NewQuestion::new("q", "a", 0, 1).unwrap_err();
        assert!(matches!(err, ValidationError::OutOfRange { field: "category", .. }));
    }

    #[test]
    fn question_serializes_flat() {
        let q = Question {
            id: 5,
            question: "Whose autobiography is entitled 'I Know Why the Caged Bird Sings'?".into(),
            answer: "Maya Angelou".into(),
            category: 4,
            difficulty: 2,
        };
        let json = serde_json::to_value(&q).unwrap();
        assert_eq!(json["id"], 5);
        assert_eq!(json["answer"], "Maya Angelou");
        assert_eq!(json["category"], 4);
        assert_eq!(json["difficulty"], 2);
    }
}
