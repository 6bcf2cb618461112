use std::collections::BTreeMap;

use crate::error::Result;
use crate::models::gallery::{GalleryImage, PageImage};
use crate::models::membership::Membership;
use crate::models::news::News;
use crate::models::review::Testimonial;
use crate::models::slideshow::Slide;
use sqlx::PgPool;

pub const DEFAULT_TESTIMONIAL_LIMIT: i64 = 5;
pub const DEFAULT_NEWS_LIMIT: i64 = 3;
pub const DEFAULT_GALLERY_LIMIT: i64 = 6;

#[derive(Clone)]
pub struct HomeService {
    pool: PgPool,
}

impl HomeService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn slideshow(&self, language_id: i64) -> Result<Vec<Slide>> {
        let rows = sqlx::query_as::<_, Slide>(
            r#"
            SELECT s.id, s.sort_order, s.image, s.href, sl.value
            FROM slideshow s
            LEFT JOIN slideshow_label sl ON sl.slideshow_id = s.id AND sl.language_id = $1
            WHERE s.status = 1
            ORDER BY s.sort_order ASC, s.id ASC
            "#,
        )
        .bind(language_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    pub async fn memberships(&self, language_id: i64) -> Result<Vec<Membership>> {
        let rows = sqlx::query_as::<_, Membership>(
            r#"
            SELECT m.id, m.sort_order, m.price, m.vip,
                   ml.title, ml.short_description, ml.description
            FROM membership m
            LEFT JOIN membership_label ml ON ml.membership_id = m.id AND ml.language_id = $1
            WHERE m.status = 1
            ORDER BY m.sort_order ASC, m.id ASC
            "#,
        )
        .bind(language_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Latest published reviews whose authors are not blocked.
    pub async fn testimonials(&self, limit: i64) -> Result<Vec<Testimonial>> {
        let rows = sqlx::query_as::<_, Testimonial>(
            r#"
            SELECT r.id, r.profession, r.review, r.created_date,
                   u.id AS user_id, u.first_name, u.last_name, u.avatar
            FROM review r
            INNER JOIN users u ON u.id = r.user_id AND u.block = 0
            WHERE r.status = 1
            ORDER BY r.id DESC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    pub async fn latest_news(&self, language_id: i64, limit: i64) -> Result<Vec<News>> {
        let rows = sqlx::query_as::<_, News>(
            r#"
            SELECT n.id, n.image, n.video, n.kind, n.view_count, n.created_date,
                   nl.title, nl.value
            FROM news n
            LEFT JOIN news_label nl ON nl.news_id = n.id AND nl.language_id = $1
            WHERE n.status = 1
            ORDER BY n.created_date DESC, n.id DESC
            LIMIT $2
            "#,
        )
        .bind(language_id)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    pub async fn gallery(&self, limit: i64) -> Result<Vec<GalleryImage>> {
        let rows = sqlx::query_as::<_, GalleryImage>(
            r#"
            SELECT id, image, created_date
            FROM gallery
            WHERE status = 1
            ORDER BY created_date DESC, id DESC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Images keyed by slot name. Keys with no row are left out.
    pub async fn page_images(&self, keys: &[String]) -> Result<BTreeMap<String, Option<String>>> {
        let rows = sqlx::query_as::<_, PageImage>(
            r#"SELECT key, image FROM page_images WHERE key = ANY($1)"#,
        )
        .bind(keys)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.into_iter().map(|r| (r.key, r.image)).collect())
    }
}
