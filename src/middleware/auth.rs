use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::models::session::Session;
use crate::AppState;

/// Resolved session for the current request, stored as a request extension.
#[derive(Debug, Clone)]
pub struct CurrentSession {
    pub token: String,
    pub session: Session,
}

/// Accepts `Authorization: Bearer <token>` or a bare token value.
pub fn session_token(req: &Request) -> Option<String> {
    let raw = req.headers().get(AUTHORIZATION)?.to_str().ok()?.trim();
    let token = match raw.split_once(' ') {
        Some((scheme, rest)) if scheme.eq_ignore_ascii_case("bearer") => rest.trim(),
        _ if raw.eq_ignore_ascii_case("bearer") => "",
        _ => raw,
    };
    if token.is_empty() {
        None
    } else {
        Some(token.to_string())
    }
}

/// Attaches the caller's session when the token resolves. Anonymous requests
/// pass through untouched; handlers decide whether a session is required.
pub async fn resolve_session(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Response {
    if let Some(token) = session_token(&req) {
        match state.sessions.get(&token).await {
            Ok(Some(session)) => {
                req.extensions_mut()
                    .insert(CurrentSession { token, session });
            }
            Ok(None) => {
                tracing::debug!("unknown or expired session token");
            }
            Err(e) => return e.into_response(),
        }
    }
    next.run(req).await
}
