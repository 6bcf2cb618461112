use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct TestQuestion {
    pub id: i64,
    pub parent_id: i64,
    pub question_type: i16,
    pub answer_type: i16,
    pub image: Option<String>,
    pub audio: Option<String>,
    pub question: Option<String>,
    pub sort_order: i32,
    pub label: Option<String>,
}
