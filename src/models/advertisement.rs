use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// `ad_type`: 1 video, 2 image, 3 HTML text.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Advertisement {
    pub id: i64,
    pub test_id: Option<i64>,
    pub ad_type: i16,
    pub video_url: Option<String>,
    pub image_url: Option<String>,
    pub content: Option<String>,
    pub created_date: DateTime<Utc>,
}
