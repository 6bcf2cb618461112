use serde::{Deserialize, Serialize};

use crate::models::exam::{ExamQuestion, ExamSectionItem};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CompleteExamResponse {
    pub reading: Option<ExamSectionItem>,
    pub listening: Option<ExamSectionItem>,
    pub speaking: Option<ExamSectionItem>,
    pub writing: Option<ExamSectionItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionDetailResponse {
    pub test: ExamSectionItem,
    pub questions: Vec<ExamQuestion>,
}
