//! Repository implementations for database access
//!
//! Repositories borrow the pool and return domain models from `crate::models`.

pub mod categories;
pub mod questions;

pub use categories::CategoryRepo;
pub use questions::QuestionRepo;

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("invalid reference: {field} '{value}' does not exist")]
    InvalidReference { field: &'static str, value: String },
}
