use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq, Eq)]
pub struct TestAnswer {
    pub id: i64,
    pub test_id: i64,
    pub true_false: bool,
    pub value: Option<String>,
}
