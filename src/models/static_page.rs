use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct StaticPage {
    pub id: i64,
    pub page_key: String,
    pub sort_order: i32,
    pub image: Option<String>,
    pub title: Option<String>,
    pub value: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ContactInfo {
    pub id: i64,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub map_url: Option<String>,
    pub address: Option<String>,
}
