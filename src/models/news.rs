use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct News {
    pub id: i64,
    pub image: Option<String>,
    pub video: Option<String>,
    pub kind: i16,
    pub view_count: i32,
    pub created_date: DateTime<Utc>,
    pub title: Option<String>,
    pub value: Option<String>,
}
