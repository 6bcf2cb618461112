use crate::dto::exam_dto::CompleteExamResponse;
use crate::error::{Error, Result};
use crate::models::exam::{Exam, ExamQuestion, ExamSection, ExamSectionItem, SectionTables};
use sqlx::PgPool;

#[derive(Clone)]
pub struct ExamService {
    pool: PgPool,
}

impl ExamService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list_section(
        &self,
        exam: Exam,
        section: ExamSection,
        language_id: i64,
    ) -> Result<Vec<ExamSectionItem>> {
        let t = SectionTables::new(exam, section);
        let sql = format!(
            r#"
            SELECT s.id, s.sort_order, s.image, s.audio, s.content, s.duration_minutes, l.name
            FROM {items} s
            LEFT JOIN {labels} l ON l.{fk} = s.id AND l.language_id = $1
            WHERE s.status = 1
            ORDER BY s.sort_order ASC, s.id ASC
            "#,
            items = t.items,
            labels = t.labels,
            fk = t.foreign_key,
        );
        let rows = sqlx::query_as::<_, ExamSectionItem>(&sql)
            .bind(language_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn first_active(
        &self,
        exam: Exam,
        section: ExamSection,
        language_id: i64,
    ) -> Result<Option<ExamSectionItem>> {
        let t = SectionTables::new(exam, section);
        let sql = format!(
            r#"
            SELECT s.id, s.sort_order, s.image, s.audio, s.content, s.duration_minutes, l.name
            FROM {items} s
            LEFT JOIN {labels} l ON l.{fk} = s.id AND l.language_id = $1
            WHERE s.status = 1
            ORDER BY s.sort_order ASC, s.id ASC
            LIMIT 1
            "#,
            items = t.items,
            labels = t.labels,
            fk = t.foreign_key,
        );
        let row = sqlx::query_as::<_, ExamSectionItem>(&sql)
            .bind(language_id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    /// First active item of every section, as one mock exam.
    pub async fn complete_exam(&self, exam: Exam, language_id: i64) -> Result<CompleteExamResponse> {
        Ok(CompleteExamResponse {
            reading: self.first_active(exam, ExamSection::Reading, language_id).await?,
            listening: self.first_active(exam, ExamSection::Listening, language_id).await?,
            speaking: self.first_active(exam, ExamSection::Speaking, language_id).await?,
            writing: self.first_active(exam, ExamSection::Writing, language_id).await?,
        })
    }

    pub async fn get_section_item(
        &self,
        exam: Exam,
        section: ExamSection,
        id: i64,
        language_id: i64,
    ) -> Result<(ExamSectionItem, Vec<ExamQuestion>)> {
        let t = SectionTables::new(exam, section);
        let sql = format!(
            r#"
            SELECT s.id, s.sort_order, s.image, s.audio, s.content, s.duration_minutes, l.name
            FROM {items} s
            LEFT JOIN {labels} l ON l.{fk} = s.id AND l.language_id = $2
            WHERE s.id = $1 AND s.status = 1
            "#,
            items = t.items,
            labels = t.labels,
            fk = t.foreign_key,
        );
        let item = sqlx::query_as::<_, ExamSectionItem>(&sql)
            .bind(id)
            .bind(language_id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| Error::NotFound("Test not found".to_string()))?;

        let questions = match &t.questions {
            Some(table) => {
                let sql = format!(
                    r#"
                    SELECT id, sort_order, question, audio
                    FROM {table}
                    WHERE {fk} = $1 AND status = 1
                    ORDER BY sort_order ASC, id ASC
                    "#,
                    fk = t.foreign_key,
                );
                sqlx::query_as::<_, ExamQuestion>(&sql)
                    .bind(id)
                    .fetch_all(&self.pool)
                    .await?
            }
            None => Vec::new(),
        };

        Ok((item, questions))
    }
}
