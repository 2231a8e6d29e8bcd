//! Quiz categories

use std::collections::BTreeMap;

use serde::Serialize;
use sqlx::FromRow;

pub type CategoryId = i32;

/// Category record, read-only from the API's point of view
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Category {
    pub id: CategoryId,
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub kind: String,
}

/// Categories keyed by id, serialized as `{"1": "Science", ...}`
pub type CategoryMap = BTreeMap<CategoryId, String>;

/// Collapse a category list into the id -> name map clients expect.
pub fn category_map(categories: impl IntoIterator<Item = Category>) -> CategoryMap {
    categories.into_iter().map(|c| (c.id, c.kind)).collect()
}
