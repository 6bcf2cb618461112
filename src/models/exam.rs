use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Exam {
    Toefl,
    Ielts,
}

impl Exam {
    pub fn as_str(&self) -> &'static str {
        match self {
            Exam::Toefl => "toefl",
            Exam::Ielts => "ielts",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExamSection {
    Reading,
    Listening,
    Speaking,
    Writing,
}

impl ExamSection {
    pub const ALL: [ExamSection; 4] = [
        ExamSection::Reading,
        ExamSection::Listening,
        ExamSection::Speaking,
        ExamSection::Writing,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ExamSection::Reading => "reading",
            ExamSection::Listening => "listening",
            ExamSection::Speaking => "speaking",
            ExamSection::Writing => "writing",
        }
    }

    /// Only reading and listening sections carry their own question lists.
    pub fn has_questions(&self) -> bool {
        matches!(self, ExamSection::Reading | ExamSection::Listening)
    }
}

impl fmt::Display for ExamSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExamSection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ExamSection::ALL
            .into_iter()
            .find(|section| section.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("Invalid section: {}", s))
    }
}

/// Table names for one exam section. Built only from the closed enums above.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionTables {
    pub items: String,
    pub labels: String,
    pub foreign_key: String,
    pub questions: Option<String>,
}

impl SectionTables {
    pub fn new(exam: Exam, section: ExamSection) -> Self {
        let items = format!("{}_{}", exam.as_str(), section.as_str());
        Self {
            labels: format!("{}_label", items),
            foreign_key: format!("{}_id", items),
            questions: section
                .has_questions()
                .then(|| format!("{}_test", items)),
            items,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ExamSectionItem {
    pub id: i64,
    pub sort_order: i32,
    pub image: Option<String>,
    pub audio: Option<String>,
    pub content: Option<String>,
    pub duration_minutes: Option<i32>,
    pub name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ExamQuestion {
    pub id: i64,
    pub sort_order: i32,
    pub question: Option<String>,
    pub audio: Option<String>,
}
