use axum::{
    body::Body,
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use tower_cookies::Cookies;

use crate::{
    error::AppError,
    middleware_layer::guard::extract_session_token,
    services::session,
    state::AppState,
};

/// A middleware that requires a valid session to be present.
///
/// The session token is self-contained, so validation is a local decode with
/// no store lookup. A missing, malformed or expired token is answered with
/// 401 and is never distinguished further.
///
/// # Arguments
///
/// * `state` - The application state.
/// * `cookies` - The request cookies.
/// * `request` - The incoming request.
/// * `next` - The next middleware in the chain.
///
/// # Returns
///
/// The downstream `Response`, or a 401 error payload.
pub async fn require_auth(
    State(state): State<AppState>,
    cookies: Cookies,
    mut request: Request<Body>,
    next: Next,
) -> Response {
    tracing::debug!("🔐 Checking authentication...");

    let Some(token) = extract_session_token(&cookies, &state.config.cookie_name) else {
        tracing::warn!("❌ No session cookie found");
        return AppError::Authentication("Não autenticado".to_string()).into_response();
    };

    let Some(session) = session::decode_token(&token) else {
        tracing::warn!("❌ Session cookie invalid or expired");
        return AppError::Authentication("Não autenticado".to_string()).into_response();
    };

    tracing::debug!("✅ User authenticated: {}", session.user.id);

    request.extensions_mut().insert(session);

    next.run(request).await
}
