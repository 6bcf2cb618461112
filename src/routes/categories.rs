use axum::{
    extract::{Path, Query, State},
    response::{IntoResponse, Json},
};

use crate::{
    dto::category_dto::{
        CategoryResponse, LanguageQuery, MenuTestCategoryResponse, TestCategoryCard,
    },
    error::Result,
    AppState,
};

#[utoipa::path(
    get,
    path = "/api/categories",
    params(
        ("languageId" = Option<i64>, Query, description = "Label language")
    ),
    responses(
        (status = 200, description = "Category tree from the root level"),
        (status = 500, description = "Category tree is cyclic or the store failed")
    )
)]
#[axum::debug_handler]
pub async fn list_root_categories(
    State(state): State<AppState>,
    Query(query): Query<LanguageQuery>,
) -> Result<impl IntoResponse> {
    let language_id = state.language_or_default(query.language_id);
    let tree = state.category_service.build_tree(0, language_id).await?;
    Ok(Json(tree))
}

#[utoipa::path(
    get,
    path = "/api/categories/{id}",
    params(
        ("id" = i64, Path, description = "Category ID"),
        ("languageId" = Option<i64>, Query, description = "Label language")
    ),
    responses(
        (status = 200, description = "Category"),
        (status = 404, description = "Category not found")
    )
)]
#[axum::debug_handler]
pub async fn get_category(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Query(query): Query<LanguageQuery>,
) -> Result<impl IntoResponse> {
    let language_id = state.language_or_default(query.language_id);
    let category = state.category_service.get_category(id, language_id).await?;
    Ok(Json(CategoryResponse::from(category)))
}

#[utoipa::path(
    get,
    path = "/api/categories/{id}/subcategories",
    params(
        ("id" = i64, Path, description = "Root category ID"),
        ("languageId" = Option<i64>, Query, description = "Label language")
    ),
    responses(
        (status = 200, description = "Nested descendants of the category"),
        (status = 404, description = "Category not found")
    )
)]
#[axum::debug_handler]
pub async fn get_subcategories(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Query(query): Query<LanguageQuery>,
) -> Result<impl IntoResponse> {
    let language_id = state.language_or_default(query.language_id);
    let tree = state.category_service.build_subtree(id, language_id).await?;
    Ok(Json(tree))
}

#[utoipa::path(
    get,
    path = "/api/categories/{id}/test-categories",
    params(
        ("id" = i64, Path, description = "Category ID"),
        ("languageId" = Option<i64>, Query, description = "Label language")
    ),
    responses(
        (status = 200, description = "Test groups attached to the category")
    )
)]
#[axum::debug_handler]
pub async fn list_category_tests(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Query(query): Query<LanguageQuery>,
) -> Result<impl IntoResponse> {
    let language_id = state.language_or_default(query.language_id);
    let groups = state.test_service.list_groups(id, language_id).await?;
    let cards: Vec<TestCategoryCard> = groups.into_iter().map(TestCategoryCard::from).collect();
    Ok(Json(cards))
}

#[utoipa::path(
    get,
    path = "/api/categories/menu/test-categories",
    params(
        ("languageId" = Option<i64>, Query, description = "Label language")
    ),
    responses(
        (status = 200, description = "Test groups for the navigation menu")
    )
)]
#[axum::debug_handler]
pub async fn menu_test_categories(
    State(state): State<AppState>,
    Query(query): Query<LanguageQuery>,
) -> Result<impl IntoResponse> {
    let language_id = state.language_or_default(query.language_id);
    let rows = state.test_service.menu_test_categories(language_id).await?;
    let items: Vec<MenuTestCategoryResponse> = rows
        .into_iter()
        .map(MenuTestCategoryResponse::from)
        .collect();
    Ok(Json(items))
}
