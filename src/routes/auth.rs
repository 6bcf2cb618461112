use axum::{
    extract::State,
    response::{IntoResponse, Json},
    Extension,
};

use crate::{
    dto::auth_dto::{CurrentUserResponse, LogoutResponse},
    error::{Error, Result},
    middleware::auth::CurrentSession,
    AppState,
};

#[utoipa::path(
    get,
    path = "/api/auth/me",
    responses(
        (status = 200, description = "Signed-in user"),
        (status = 401, description = "No live session")
    )
)]
#[axum::debug_handler]
pub async fn me(session: Option<Extension<CurrentSession>>) -> Result<impl IntoResponse> {
    let Some(Extension(current)) = session else {
        return Err(Error::Unauthorized("Not authenticated".to_string()));
    };
    Ok(Json(CurrentUserResponse {
        success: true,
        user: current.session.user,
    }))
}

#[utoipa::path(
    post,
    path = "/api/auth/logout",
    responses(
        (status = 200, description = "Session ended")
    )
)]
#[axum::debug_handler]
pub async fn logout(
    State(state): State<AppState>,
    session: Option<Extension<CurrentSession>>,
) -> Result<impl IntoResponse> {
    if let Some(Extension(current)) = session {
        if let Err(e) = state.sessions.delete(&current.token).await {
            tracing::warn!(error = ?e, user_id = current.session.user_id, "failed to delete session");
        }
    }
    Ok(Json(LogoutResponse {
        success: true,
        message: "Logged out".to_string(),
    }))
}
