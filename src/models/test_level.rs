use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct TestLevel {
    pub id: i64,
    pub sort_order: i32,
    pub value: Option<String>,
    pub seo_name: Option<String>,
}
