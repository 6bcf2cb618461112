use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use sqlx::PgPool;

use crate::dto::test_dto::{ItemResult, SubmitTestResponse, SubmittedAnswer};
use crate::error::{Error, Result};
use crate::models::test_answer::TestAnswer;
use crate::models::test_history::NewTestHistory;

#[async_trait]
pub trait AnswerKeyStore: Send + Sync {
    async fn test_exists(&self, test_category_id: i64) -> Result<bool>;

    /// Answers with the given ids; unknown ids are simply absent.
    async fn find_answers(&self, answer_ids: &[i64]) -> Result<Vec<TestAnswer>>;
}

#[async_trait]
pub trait HistoryStore: Send + Sync {
    async fn append(&self, record: &NewTestHistory) -> Result<()>;
}

#[derive(Clone)]
pub struct PgAnswerKeyStore {
    pool: PgPool,
}

impl PgAnswerKeyStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AnswerKeyStore for PgAnswerKeyStore {
    async fn test_exists(&self, test_category_id: i64) -> Result<bool> {
        let exists: bool =
            sqlx::query_scalar(r#"SELECT EXISTS(SELECT 1 FROM test_category WHERE id = $1)"#)
                .bind(test_category_id)
                .fetch_one(&self.pool)
                .await?;
        Ok(exists)
    }

    async fn find_answers(&self, answer_ids: &[i64]) -> Result<Vec<TestAnswer>> {
        let rows = sqlx::query_as::<_, TestAnswer>(
            r#"SELECT id, test_id, true_false, value FROM test_answer WHERE id = ANY($1)"#,
        )
        .bind(answer_ids)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }
}

#[derive(Clone)]
pub struct PgHistoryStore {
    pool: PgPool,
}

impl PgHistoryStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl HistoryStore for PgHistoryStore {
    async fn append(&self, record: &NewTestHistory) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO test_history (user_id, test_category_id, duration_seconds, correct, total)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(record.user_id)
        .bind(record.test_category_id)
        .bind(record.duration_seconds)
        .bind(record.correct)
        .bind(record.total)
        .execute(&self.pool)
        .await?;
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreReport {
    pub score: u32,
    pub correct: u32,
    pub total: u32,
    pub results: Vec<ItemResult>,
}

impl From<ScoreReport> for SubmitTestResponse {
    fn from(report: ScoreReport) -> Self {
        Self {
            score: report.score,
            correct: report.correct,
            total: report.total,
            results: report.results,
        }
    }
}

/// Who submitted and how long it took; history is only written with a user.
#[derive(Debug, Clone, Default)]
pub struct SubmissionContext {
    pub user_id: Option<i64>,
    pub duration_seconds: Option<i32>,
}

/// Nearest integer percentage, halves rounded up. Zero total scores 0.
pub fn percentage(correct: u32, total: u32) -> u32 {
    if total == 0 {
        return 0;
    }
    let (correct, total) = (u64::from(correct), u64::from(total));
    ((correct * 200 + total) / (2 * total)) as u32
}

#[derive(Clone)]
pub struct ScoringService {
    answers: Arc<dyn AnswerKeyStore>,
    history: Arc<dyn HistoryStore>,
}

impl ScoringService {
    pub fn new(pool: PgPool) -> Self {
        Self::with_stores(
            Arc::new(PgAnswerKeyStore::new(pool.clone())),
            Arc::new(PgHistoryStore::new(pool)),
        )
    }

    pub fn with_stores(answers: Arc<dyn AnswerKeyStore>, history: Arc<dyn HistoryStore>) -> Self {
        Self { answers, history }
    }

    /// Scores each submitted pair independently. An answer counts as
    /// correct only if its row exists and is flagged true.
    pub async fn score(&self, submissions: &[SubmittedAnswer]) -> Result<ScoreReport> {
        let mut ids: Vec<i64> = submissions.iter().map(|s| s.answer_id).collect();
        ids.sort_unstable();
        ids.dedup();

        let key: HashMap<i64, bool> = if ids.is_empty() {
            HashMap::new()
        } else {
            self.answers
                .find_answers(&ids)
                .await?
                .into_iter()
                .map(|a| (a.id, a.true_false))
                .collect()
        };

        let results: Vec<ItemResult> = submissions
            .iter()
            .map(|s| ItemResult {
                test_id: s.test_id,
                answer_id: s.answer_id,
                correct: key.get(&s.answer_id).copied().unwrap_or(false),
            })
            .collect();

        let total = results.len() as u32;
        let correct = results.iter().filter(|r| r.correct).count() as u32;

        Ok(ScoreReport {
            score: percentage(correct, total),
            correct,
            total,
            results,
        })
    }

    /// Scores a submission for an existing test and, when a user is known,
    /// appends a history row. A failed history write is logged and dropped.
    pub async fn submit(
        &self,
        test_category_id: i64,
        submissions: &[SubmittedAnswer],
        ctx: &SubmissionContext,
    ) -> Result<ScoreReport> {
        if !self.answers.test_exists(test_category_id).await? {
            return Err(Error::NotFound("Test not found".to_string()));
        }

        let report = self.score(submissions).await?;
        tracing::info!(
            test_category_id,
            score = report.score,
            correct = report.correct,
            total = report.total,
            "scored test submission"
        );

        if let Some(user_id) = ctx.user_id {
            let record = NewTestHistory {
                user_id,
                test_category_id,
                duration_seconds: ctx.duration_seconds,
                correct: report.correct as i32,
                total: report.total as i32,
            };
            if let Err(e) = self.history.append(&record).await {
                tracing::warn!(error = ?e, user_id, test_category_id, "failed to record test history");
            }
        }

        Ok(report)
    }
}
