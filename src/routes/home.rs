use axum::{
    extract::{Query, State},
    response::{IntoResponse, Json},
};
use validator::Validate;

use crate::{
    dto::category_dto::LanguageQuery,
    dto::home_dto::{HomeListQuery, PageImagesQuery},
    error::Result,
    services::content_service::{ABOUT_PAGE_KEY, WHY_CHOOSE_PAGE_KEY},
    services::home_service::{DEFAULT_GALLERY_LIMIT, DEFAULT_NEWS_LIMIT, DEFAULT_TESTIMONIAL_LIMIT},
    AppState,
};

#[utoipa::path(
    get,
    path = "/api/home/slideshow",
    params(
        ("languageId" = Option<i64>, Query, description = "Label language")
    ),
    responses(
        (status = 200, description = "Active slides")
    )
)]
#[axum::debug_handler]
pub async fn slideshow(
    State(state): State<AppState>,
    Query(query): Query<LanguageQuery>,
) -> Result<impl IntoResponse> {
    let language_id = state.language_or_default(query.language_id);
    Ok(Json(state.home_service.slideshow(language_id).await?))
}

#[utoipa::path(
    get,
    path = "/api/home/memberships",
    params(
        ("languageId" = Option<i64>, Query, description = "Label language")
    ),
    responses(
        (status = 200, description = "Active membership plans")
    )
)]
#[axum::debug_handler]
pub async fn memberships(
    State(state): State<AppState>,
    Query(query): Query<LanguageQuery>,
) -> Result<impl IntoResponse> {
    let language_id = state.language_or_default(query.language_id);
    Ok(Json(state.home_service.memberships(language_id).await?))
}

#[utoipa::path(
    get,
    path = "/api/home/testimonials",
    params(
        ("limit" = Option<i64>, Query, description = "Number of items to return")
    ),
    responses(
        (status = 200, description = "Latest published reviews"),
        (status = 400, description = "Invalid limit")
    )
)]
#[axum::debug_handler]
pub async fn testimonials(
    State(state): State<AppState>,
    Query(query): Query<HomeListQuery>,
) -> Result<impl IntoResponse> {
    query.validate()?;
    let limit = query.limit.unwrap_or(DEFAULT_TESTIMONIAL_LIMIT);
    Ok(Json(state.home_service.testimonials(limit).await?))
}

#[utoipa::path(
    get,
    path = "/api/home/news",
    params(
        ("languageId" = Option<i64>, Query, description = "Label language"),
        ("limit" = Option<i64>, Query, description = "Number of items to return")
    ),
    responses(
        (status = 200, description = "Latest news"),
        (status = 400, description = "Invalid limit")
    )
)]
#[axum::debug_handler]
pub async fn news(
    State(state): State<AppState>,
    Query(query): Query<HomeListQuery>,
) -> Result<impl IntoResponse> {
    query.validate()?;
    let language_id = state.language_or_default(query.language_id);
    let limit = query.limit.unwrap_or(DEFAULT_NEWS_LIMIT);
    Ok(Json(state.home_service.latest_news(language_id, limit).await?))
}

#[utoipa::path(
    get,
    path = "/api/home/about",
    params(
        ("languageId" = Option<i64>, Query, description = "Label language")
    ),
    responses(
        (status = 200, description = "First about-us block, or null")
    )
)]
#[axum::debug_handler]
pub async fn about(
    State(state): State<AppState>,
    Query(query): Query<LanguageQuery>,
) -> Result<impl IntoResponse> {
    let language_id = state.language_or_default(query.language_id);
    let page = state
        .content_service
        .first_page(ABOUT_PAGE_KEY, language_id)
        .await?;
    Ok(Json(page))
}

#[utoipa::path(
    get,
    path = "/api/home/why-choose",
    params(
        ("languageId" = Option<i64>, Query, description = "Label language")
    ),
    responses(
        (status = 200, description = "First why-choose-us block, or null")
    )
)]
#[axum::debug_handler]
pub async fn why_choose(
    State(state): State<AppState>,
    Query(query): Query<LanguageQuery>,
) -> Result<impl IntoResponse> {
    let language_id = state.language_or_default(query.language_id);
    let page = state
        .content_service
        .first_page(WHY_CHOOSE_PAGE_KEY, language_id)
        .await?;
    Ok(Json(page))
}

#[utoipa::path(
    get,
    path = "/api/home/gallery",
    params(
        ("limit" = Option<i64>, Query, description = "Number of images to return")
    ),
    responses(
        (status = 200, description = "Latest gallery images"),
        (status = 400, description = "Invalid limit")
    )
)]
#[axum::debug_handler]
pub async fn gallery(
    State(state): State<AppState>,
    Query(query): Query<HomeListQuery>,
) -> Result<impl IntoResponse> {
    query.validate()?;
    let limit = query.limit.unwrap_or(DEFAULT_GALLERY_LIMIT);
    Ok(Json(state.home_service.gallery(limit).await?))
}

#[utoipa::path(
    get,
    path = "/api/home/page-images",
    params(
        ("keys" = Option<String>, Query, description = "Comma-separated image slots")
    ),
    responses(
        (status = 200, description = "Image path per known slot")
    )
)]
#[axum::debug_handler]
pub async fn page_images(
    State(state): State<AppState>,
    Query(query): Query<PageImagesQuery>,
) -> Result<impl IntoResponse> {
    let keys = query.keys();
    Ok(Json(state.home_service.page_images(&keys).await?))
}
