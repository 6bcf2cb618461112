use crate::error::Result;
use crate::models::static_page::{ContactInfo, StaticPage};
use sqlx::PgPool;

pub const ABOUT_PAGE_KEY: &str = "about_us";
pub const WHY_CHOOSE_PAGE_KEY: &str = "why";

#[derive(Clone)]
pub struct ContentService {
    pool: PgPool,
}

impl ContentService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Every active block of a static page, in display order.
    pub async fn pages(&self, page_key: &str, language_id: i64) -> Result<Vec<StaticPage>> {
        let rows = sqlx::query_as::<_, StaticPage>(
            r#"
            SELECT sp.id, sp.page_key, sp.sort_order, sp.image, spl.title, spl.value
            FROM static_pages sp
            LEFT JOIN static_pages_label spl
                ON spl.static_pages_id = sp.id AND spl.language_id = $2
            WHERE sp.page_key = $1 AND sp.status = 1
            ORDER BY sp.sort_order ASC, sp.id ASC
            "#,
        )
        .bind(page_key)
        .bind(language_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    pub async fn first_page(&self, page_key: &str, language_id: i64) -> Result<Option<StaticPage>> {
        let row = sqlx::query_as::<_, StaticPage>(
            r#"
            SELECT sp.id, sp.page_key, sp.sort_order, sp.image, spl.title, spl.value
            FROM static_pages sp
            LEFT JOIN static_pages_label spl
                ON spl.static_pages_id = sp.id AND spl.language_id = $2
            WHERE sp.page_key = $1 AND sp.status = 1
            ORDER BY sp.sort_order ASC, sp.id ASC
            LIMIT 1
            "#,
        )
        .bind(page_key)
        .bind(language_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    pub async fn contact(&self, language_id: i64) -> Result<Option<ContactInfo>> {
        let row = sqlx::query_as::<_, ContactInfo>(
            r#"
            SELECT ci.id, ci.phone, ci.email, ci.map_url, cil.address
            FROM contact_info ci
            LEFT JOIN contact_info_label cil
                ON cil.contact_info_id = ci.id AND cil.language_id = $1
            ORDER BY ci.id ASC
            LIMIT 1
            "#,
        )
        .bind(language_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }
}
