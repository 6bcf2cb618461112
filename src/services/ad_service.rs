use crate::error::Result;
use crate::models::advertisement::Advertisement;
use sqlx::PgPool;

#[derive(Clone)]
pub struct AdService {
    pool: PgPool,
}

impl AdService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Newest active ad bound to the test, else a random general ad.
    pub async fn ad_for_test(&self, test_id: i64) -> Result<Option<Advertisement>> {
        let specific = sqlx::query_as::<_, Advertisement>(
            r#"
            SELECT id, test_id, ad_type, video_url, image_url, content, created_date
            FROM advertisements
            WHERE test_id = $1 AND status = 1
            ORDER BY created_date DESC, id DESC
            LIMIT 1
            "#,
        )
        .bind(test_id)
        .fetch_optional(&self.pool)
        .await?;
        if specific.is_some() {
            return Ok(specific);
        }

        let general = sqlx::query_as::<_, Advertisement>(
            r#"
            SELECT id, test_id, ad_type, video_url, image_url, content, created_date
            FROM advertisements
            WHERE (test_id IS NULL OR test_id = 0) AND status = 1
            ORDER BY RANDOM()
            LIMIT 1
            "#,
        )
        .fetch_optional(&self.pool)
        .await?;
        if general.is_none() {
            tracing::debug!(test_id, "no advertisement available");
        }
        Ok(general)
    }
}
