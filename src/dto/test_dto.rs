use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::test_answer::TestAnswer;
use crate::models::test_category::TestCategory;
use crate::models::test_question::TestQuestion;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnglishVariant {
    American,
    British,
    Both,
}

impl EnglishVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            EnglishVariant::American => "american",
            EnglishVariant::British => "british",
            EnglishVariant::Both => "both",
        }
    }
}

fn default_page() -> i64 {
    1
}

fn default_limit() -> i64 {
    10
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct TestListQuery {
    pub category_id: Option<i64>,
    pub level_id: Option<i64>,
    pub variant: Option<EnglishVariant>,
    pub filter: Option<String>,
    #[serde(default = "default_page")]
    #[validate(range(min = 1, max = 100000))]
    pub page: i64,
    #[serde(default = "default_limit")]
    #[validate(range(min = 1, max = 100))]
    pub limit: i64,
    pub language_id: Option<i64>,
}

impl TestListQuery {
    /// `all` or an absent filter selects every filter under the category.
    pub fn filter_parent_id(&self) -> crate::error::Result<Option<i64>> {
        match self.filter.as_deref().map(str::trim) {
            None | Some("") | Some("all") => Ok(None),
            Some(raw) => raw.parse::<i64>().map(Some).map_err(|_| {
                crate::error::Error::BadRequest(format!("Invalid filter: {}", raw))
            }),
        }
    }

    /// Level `0` means any level.
    pub fn level(&self) -> Option<i64> {
        self.level_id.filter(|id| *id != 0)
    }

    /// `both` means any variant.
    pub fn variant(&self) -> Option<EnglishVariant> {
        self.variant.filter(|v| *v != EnglishVariant::Both)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub total: i64,
    pub page: i64,
    pub limit: i64,
    pub total_pages: i64,
}

impl Pagination {
    pub fn new(total: i64, page: i64, limit: i64) -> Self {
        let total_pages = if limit > 0 {
            (total + limit - 1) / limit
        } else {
            0
        };
        Self {
            total,
            page,
            limit,
            total_pages,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestListResponse {
    pub tests: Vec<TestCategory>,
    pub pagination: Pagination,
}

/// Candidate answer as shown to a test taker; correctness stays server-side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublicAnswer {
    pub id: i64,
    pub value: Option<String>,
}

impl From<TestAnswer> for PublicAnswer {
    fn from(a: TestAnswer) -> Self {
        Self {
            id: a.id,
            value: a.value,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionWithAnswers {
    #[serde(flatten)]
    pub question: TestQuestion,
    pub answers: Vec<PublicAnswer>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestDetailResponse {
    pub test_category: TestCategory,
    pub tests: Vec<QuestionWithAnswers>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct SubmittedAnswer {
    #[serde(alias = "testId")]
    pub test_id: i64,
    #[serde(alias = "answerId")]
    pub answer_id: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SubmitTestRequest {
    #[serde(default)]
    pub answers: Vec<SubmittedAnswer>,
    #[serde(rename = "userId", alias = "user_id")]
    pub user_id: Option<i64>,
    #[validate(range(min = 0))]
    pub duration: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ItemResult {
    pub test_id: i64,
    pub answer_id: i64,
    pub correct: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SubmitTestResponse {
    pub score: u32,
    pub correct: u32,
    pub total: u32,
    pub results: Vec<ItemResult>,
}
