//! Category repository (read-only)

use sqlx::PgPool;

use crate::models::Category;
use super::DbError;

/// Category repository
pub struct CategoryRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> CategoryRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all categories ordered by id.
    pub async fn list(&self) -> Result<Vec<Category>, DbError> {
        let categories: Vec<Category> =
            sqlx::query_as("SELECT id, type FROM categories ORDER BY id")
                .fetch_all(self.pool)
                .await?;

        Ok(categories)
    }
}
