use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Slide {
    pub id: i64,
    pub sort_order: i32,
    pub image: Option<String>,
    pub href: Option<String>,
    pub value: Option<String>,
}
