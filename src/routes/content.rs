use axum::{
    extract::{Query, State},
    response::{IntoResponse, Json},
};

use crate::{
    dto::category_dto::LanguageQuery, error::Result, services::content_service::ABOUT_PAGE_KEY,
    AppState,
};

#[utoipa::path(
    get,
    path = "/api/content/about",
    params(
        ("languageId" = Option<i64>, Query, description = "Label language")
    ),
    responses(
        (status = 200, description = "All about-us blocks in display order")
    )
)]
#[axum::debug_handler]
pub async fn about(
    State(state): State<AppState>,
    Query(query): Query<LanguageQuery>,
) -> Result<impl IntoResponse> {
    let language_id = state.language_or_default(query.language_id);
    let pages = state.content_service.pages(ABOUT_PAGE_KEY, language_id).await?;
    Ok(Json(pages))
}

#[utoipa::path(
    get,
    path = "/api/content/contact",
    params(
        ("languageId" = Option<i64>, Query, description = "Label language")
    ),
    responses(
        (status = 200, description = "Contact details, or null")
    )
)]
#[axum::debug_handler]
pub async fn contact(
    State(state): State<AppState>,
    Query(query): Query<LanguageQuery>,
) -> Result<impl IntoResponse> {
    let language_id = state.language_or_default(query.language_id);
    Ok(Json(state.content_service.contact(language_id).await?))
}
