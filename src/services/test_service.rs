use std::collections::HashMap;

use crate::dto::test_dto::EnglishVariant;
use crate::error::{Error, Result};
use crate::models::test_answer::TestAnswer;
use crate::models::test_category::{MenuTestCategory, TestCategory};
use crate::models::test_level::TestLevel;
use crate::models::test_question::TestQuestion;
use sqlx::PgPool;

const TEST_CATEGORY_COLUMNS: &str = r#"
    tc.id, tc.category_id, tc.parent_id, tc.level_id, tc.english_variant,
    tc.sort_order, tc.time, tc.view_count, tc.image,
    tcl.name, tcl.description, tcl.seo_name
"#;

#[derive(Debug, serde::Serialize)]
pub struct PaginatedTestCategories {
    pub tests: Vec<TestCategory>,
    pub total: i64,
}

#[derive(Debug, Default)]
pub struct TestListFilter {
    pub category_id: i64,
    /// `None` selects every filter (parent_id != 0) under the category.
    pub parent_id: Option<i64>,
    pub level_id: Option<i64>,
    pub variant: Option<EnglishVariant>,
}

#[derive(Clone)]
pub struct TestService {
    pool: PgPool,
}

impl TestService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Top-level test groups attached to a site category.
    pub async fn list_groups(&self, category_id: i64, language_id: i64) -> Result<Vec<TestCategory>> {
        let sql = format!(
            r#"
            SELECT {TEST_CATEGORY_COLUMNS}
            FROM test_category tc
            LEFT JOIN test_category_label tcl
                ON tcl.test_category_id = tc.id AND tcl.language_id = $2
            WHERE tc.category_id = $1 AND tc.parent_id = 0 AND tc.status = 1
            ORDER BY tc.sort_order ASC, tc.id ASC
            "#
        );
        let rows = sqlx::query_as::<_, TestCategory>(&sql)
            .bind(category_id)
            .bind(language_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Filters are the second-level test categories (parent_id != 0).
    pub async fn list_filters(&self, category_id: i64, language_id: i64) -> Result<Vec<TestCategory>> {
        let sql = format!(
            r#"
            SELECT {TEST_CATEGORY_COLUMNS}
            FROM test_category tc
            LEFT JOIN test_category_label tcl
                ON tcl.test_category_id = tc.id AND tcl.language_id = $2
            WHERE tc.category_id = $1 AND tc.parent_id <> 0 AND tc.status = 1
            ORDER BY tc.sort_order ASC, tc.id ASC
            "#
        );
        let rows = sqlx::query_as::<_, TestCategory>(&sql)
            .bind(category_id)
            .bind(language_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    pub async fn menu_test_categories(&self, language_id: i64) -> Result<Vec<MenuTestCategory>> {
        let rows = sqlx::query_as::<_, MenuTestCategory>(
            r#"
            SELECT tc.id, tc.category_id, tc.sort_order,
                   tcl.name, cl.value AS category_name
            FROM test_category tc
            LEFT JOIN test_category_label tcl
                ON tcl.test_category_id = tc.id AND tcl.language_id = $1
            LEFT JOIN category_label cl
                ON cl.category_id = tc.category_id AND cl.language_id = $1
            WHERE tc.parent_id = 0 AND tc.status = 1
            ORDER BY tc.sort_order ASC, tc.id ASC
            "#,
        )
        .bind(language_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    pub async fn list_levels(&self, language_id: i64) -> Result<Vec<TestLevel>> {
        let rows = sqlx::query_as::<_, TestLevel>(
            r#"
            SELECT tl.id, tl.sort_order, tll.value, tll.seo_name
            FROM test_level tl
            LEFT JOIN test_level_label tll
                ON tll.test_level_id = tl.id AND tll.language_id = $1
            WHERE tl.status = 1
            ORDER BY tl.sort_order ASC, tl.id ASC
            "#,
        )
        .bind(language_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    pub async fn list_tests(
        &self,
        filter: &TestListFilter,
        page: i64,
        limit: i64,
        language_id: i64,
    ) -> Result<PaginatedTestCategories> {
        let offset = page_offset(page, limit)?;
        let variant_param: Option<&str> = filter.variant.map(|v| v.as_str());

        let total: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*) FROM test_category tc
            WHERE tc.status = 1
              AND tc.category_id = $1
              AND (($2::bigint IS NULL AND tc.parent_id <> 0) OR tc.parent_id = $2)
              AND ($3::bigint IS NULL OR tc.level_id = $3)
              AND ($4::text IS NULL OR tc.english_variant IN ($4, 'both'))
            "#,
        )
        .bind(filter.category_id)
        .bind(filter.parent_id)
        .bind(filter.level_id)
        .bind(variant_param)
        .fetch_one(&self.pool)
        .await?;

        let sql = format!(
            r#"
            SELECT {TEST_CATEGORY_COLUMNS}
            FROM test_category tc
            LEFT JOIN test_category_label tcl
                ON tcl.test_category_id = tc.id AND tcl.language_id = $5
            WHERE tc.status = 1
              AND tc.category_id = $1
              AND (($2::bigint IS NULL AND tc.parent_id <> 0) OR tc.parent_id = $2)
              AND ($3::bigint IS NULL OR tc.level_id = $3)
              AND ($4::text IS NULL OR tc.english_variant IN ($4, 'both'))
            ORDER BY tc.sort_order ASC, tc.id ASC
            LIMIT $6 OFFSET $7
            "#
        );
        let tests = sqlx::query_as::<_, TestCategory>(&sql)
            .bind(filter.category_id)
            .bind(filter.parent_id)
            .bind(filter.level_id)
            .bind(variant_param)
            .bind(language_id)
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await?;

        Ok(PaginatedTestCategories { tests, total })
    }

    pub async fn get_test_category(&self, id: i64, language_id: i64) -> Result<TestCategory> {
        let sql = format!(
            r#"
            SELECT {TEST_CATEGORY_COLUMNS}
            FROM test_category tc
            LEFT JOIN test_category_label tcl
                ON tcl.test_category_id = tc.id AND tcl.language_id = $2
            WHERE tc.id = $1
            "#
        );
        sqlx::query_as::<_, TestCategory>(&sql)
            .bind(id)
            .bind(language_id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| Error::NotFound("Test not found".to_string()))
    }

    /// The test category with its active questions, each carrying its answers.
    pub async fn get_test_detail(
        &self,
        id: i64,
        language_id: i64,
    ) -> Result<(TestCategory, Vec<(TestQuestion, Vec<TestAnswer>)>)> {
        let test_category = self.get_test_category(id, language_id).await?;

        let questions = sqlx::query_as::<_, TestQuestion>(
            r#"
            SELECT t.id, t.parent_id, t.question_type, t.answer_type, t.image, t.audio,
                   t.question, t.sort_order, tl.value AS label
            FROM test t
            LEFT JOIN test_label tl ON tl.test_id = t.id AND tl.language_id = $2
            WHERE t.parent_id = $1 AND t.status = 1
            ORDER BY t.sort_order ASC, t.id ASC
            "#,
        )
        .bind(id)
        .bind(language_id)
        .fetch_all(&self.pool)
        .await?;

        let question_ids: Vec<i64> = questions.iter().map(|q| q.id).collect();
        let answers = sqlx::query_as::<_, TestAnswer>(
            r#"
            SELECT id, test_id, true_false, value
            FROM test_answer
            WHERE test_id = ANY($1)
            ORDER BY id ASC
            "#,
        )
        .bind(&question_ids)
        .fetch_all(&self.pool)
        .await?;

        Ok((test_category, group_answers(questions, answers)))
    }
}

/// Row offset of a 1-based page. Out-of-range paging is a client error.
fn page_offset(page: i64, limit: i64) -> Result<i64> {
    if page < 1 || limit < 1 {
        return Err(Error::BadRequest("page and limit must be positive".to_string()));
    }
    (page - 1)
        .checked_mul(limit)
        .ok_or_else(|| Error::BadRequest(format!("Page {} is out of range", page)))
}

fn group_answers(
    questions: Vec<TestQuestion>,
    answers: Vec<TestAnswer>,
) -> Vec<(TestQuestion, Vec<TestAnswer>)> {
    let mut by_test: HashMap<i64, Vec<TestAnswer>> = HashMap::new();
    for answer in answers {
        by_test.entry(answer.test_id).or_default().push(answer);
    }
    questions
        .into_iter()
        .map(|q| {
            let answers = by_test.remove(&q.id).unwrap_or_default();
            (q, answers)
        })
        .collect()
}
