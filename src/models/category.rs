use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// An active category joined with its label in one language.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq, Eq)]
pub struct CategoryRow {
    pub id: i64,
    pub parent_id: i64,
    pub sort_order: i32,
    pub key: Option<String>,
    pub label: Option<String>,
}
