use axum::{
    extract::{Path, Query, State},
    response::{IntoResponse, Json},
    Extension,
};

use crate::{
    dto::category_dto::LanguageQuery,
    dto::exam_dto::SectionDetailResponse,
    error::{Error, Result},
    models::exam::{Exam, ExamSection},
    AppState,
};

fn parse_section(raw: &str) -> Result<ExamSection> {
    raw.parse::<ExamSection>().map_err(Error::BadRequest)
}

#[utoipa::path(
    get,
    path = "/api/{exam}/{section}",
    params(
        ("exam" = String, Path, description = "toefl or ielts"),
        ("section" = String, Path, description = "reading, listening, speaking or writing"),
        ("languageId" = Option<i64>, Query, description = "Label language")
    ),
    responses(
        (status = 200, description = "Active items of the section"),
        (status = 400, description = "Invalid section")
    )
)]
#[axum::debug_handler]
pub async fn list_section(
    State(state): State<AppState>,
    Extension(exam): Extension<Exam>,
    Path(section): Path<String>,
    Query(query): Query<LanguageQuery>,
) -> Result<impl IntoResponse> {
    let section = parse_section(&section)?;
    let language_id = state.language_or_default(query.language_id);
    let items = state
        .exam_service
        .list_section(exam, section, language_id)
        .await?;
    Ok(Json(items))
}

#[utoipa::path(
    get,
    path = "/api/{exam}/complete",
    params(
        ("exam" = String, Path, description = "toefl or ielts"),
        ("languageId" = Option<i64>, Query, description = "Label language")
    ),
    responses(
        (status = 200, description = "First active item of every section")
    )
)]
#[axum::debug_handler]
pub async fn complete_exam(
    State(state): State<AppState>,
    Extension(exam): Extension<Exam>,
    Query(query): Query<LanguageQuery>,
) -> Result<impl IntoResponse> {
    let language_id = state.language_or_default(query.language_id);
    let exam = state.exam_service.complete_exam(exam, language_id).await?;
    Ok(Json(exam))
}

#[utoipa::path(
    get,
    path = "/api/{exam}/{section}/{id}",
    params(
        ("exam" = String, Path, description = "toefl or ielts"),
        ("section" = String, Path, description = "reading, listening, speaking or writing"),
        ("id" = i64, Path, description = "Section item ID"),
        ("languageId" = Option<i64>, Query, description = "Label language")
    ),
    responses(
        (status = 200, description = "Section item with its questions"),
        (status = 400, description = "Invalid section"),
        (status = 404, description = "Item not found")
    )
)]
#[axum::debug_handler]
pub async fn get_section_item(
    State(state): State<AppState>,
    Extension(exam): Extension<Exam>,
    Path((section, id)): Path<(String, i64)>,
    Query(query): Query<LanguageQuery>,
) -> Result<impl IntoResponse> {
    let section = parse_section(&section)?;
    let language_id = state.language_or_default(query.language_id);
    let (test, questions) = state
        .exam_service
        .get_section_item(exam, section, id, language_id)
        .await?;
    Ok(Json(SectionDetailResponse { test, questions }))
}
