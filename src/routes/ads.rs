use axum::{
    extract::{Path, State},
    response::{IntoResponse, Json},
};

use crate::{error::Result, AppState};

#[utoipa::path(
    get,
    path = "/api/ads/test/{testId}",
    params(
        ("testId" = i64, Path, description = "Test category ID")
    ),
    responses(
        (status = 200, description = "Ad for the test page, or null")
    )
)]
#[axum::debug_handler]
pub async fn ad_for_test(
    State(state): State<AppState>,
    Path(test_id): Path<i64>,
) -> Result<impl IntoResponse> {
    Ok(Json(state.ad_service.ad_for_test(test_id).await?))
}
