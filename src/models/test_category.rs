use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct TestCategory {
    pub id: i64,
    pub category_id: i64,
    pub parent_id: i64,
    pub level_id: Option<i64>,
    pub english_variant: String,
    pub sort_order: i32,
    pub time: NaiveTime,
    pub view_count: i32,
    pub image: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub seo_name: Option<String>,
}

/// Top-level test category with the localized name of the site category it belongs to.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct MenuTestCategory {
    pub id: i64,
    pub category_id: i64,
    pub sort_order: i32,
    pub name: Option<String>,
    pub category_name: Option<String>,
}
