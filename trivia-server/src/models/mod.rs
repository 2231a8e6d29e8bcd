//! Domain models with validation at construction
//!
//! Request input is validated when building these types.
//! Invalid input returns ValidationError, not panic.

pub mod validation;
pub mod category;
pub mod question;
pub mod pagination;

pub use validation::{LenientInt, ValidationError};
pub use category::{category_map, Category, CategoryId, CategoryMap};
pub use question::{Difficulty, NewQuestion, Question, QuestionId};
pub use pagination::{paginate, Pagination, PaginationParams, QUESTIONS_PER_PAGE};
