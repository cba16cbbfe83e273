use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Extension, Json,
};
use serde::{Deserialize, Serialize};
use tower_cookies::{Cookie, Cookies};
use tower_cookies::cookie::time::Duration;

use crate::{
    error::{AppError, Result},
    models::session::Session,
    models::user::User,
    services::auth as auth_service,
    services::session as session_service,
    state::AppState,
    validation::auth::*,
};

/// The request payload for the external-login step.
#[derive(Deserialize, Debug)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// The response payload for the external-login step.
#[derive(Serialize)]
pub struct LoginExchangeResponse {
    pub code: String,
    pub state: String,
    pub message: String,
}

/// The request payload for the callback exchange.
#[derive(Deserialize, Debug)]
pub struct CallbackRequest {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub state: String,
}

/// The response payload for the callback exchange.
#[derive(Serialize)]
pub struct CallbackResponse {
    pub success: bool,
    pub user: User,
}

/// The response payload for the current-user endpoint.
#[derive(Serialize)]
pub struct MeResponse {
    pub user: User,
}

/// The response payload for acknowledgment-only endpoints.
#[derive(Serialize)]
pub struct AuthResponse {
    pub success: bool,
    pub message: String,
}

/// Creates the session cookie with the configured name, value, and max age.
fn create_session_cookie(state: &AppState, token: String) -> Cookie<'static> {
    let mut cookie = Cookie::new(state.config.cookie_name.clone(), token);

    cookie.set_http_only(true);

    if state.config.is_production {
        cookie.set_secure(true);
    }

    cookie.set_same_site(tower_cookies::cookie::SameSite::Lax);
    let duration_secs = state.config.session_duration_days * 86400;
    cookie.set_max_age(Duration::seconds(duration_secs));
    cookie.set_path("/");

    cookie
}

/// Begins the simulated external authentication exchange.
///
/// Validates the credential fields and answers with an authorization
/// code/state pair for the callback step. No token work happens here.
#[axum::debug_handler]
pub async fn external_login(
    State(_state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<impl IntoResponse> {
    tracing::info!("🔐 External login attempt for: {}", payload.email);

    validate_credentials_present(&payload.email, &payload.password)?;

    // The simulated provider treats a short password as a bad credential,
    // not as a malformed request.
    if payload.password.len() < MIN_PASSWORD_LEN {
        return Err(AppError::Authentication("Credenciais inválidas".to_string()));
    }

    let (code, state) = auth_service::issue_authorization_code()?;

    tracing::info!("✅ Authorization code issued for: {}", payload.email);

    let response = LoginExchangeResponse {
        code,
        state,
        message: "Autenticação iniciada com sucesso".to_string(),
    };

    Ok((StatusCode::OK, Json(response)).into_response())
}

/// Handles the callback from the external authentication exchange.
///
/// Validates the code/state pair, creates the session token, and sets the
/// session cookie.
#[axum::debug_handler]
pub async fn callback(
    State(state): State<AppState>,
    cookies: Cookies,
    Json(payload): Json<CallbackRequest>,
) -> Result<Response> {
    tracing::info!("🔑 Authorization callback received");

    let user = auth_service::validate_external_auth(&payload.code, &payload.state)
        .await?
        .ok_or_else(|| {
            AppError::Authentication("Código de autenticação inválido ou expirado".to_string())
        })?;

    let token =
        session_service::create_token(user.clone(), state.config.session_duration_days)?;

    cookies.add(create_session_cookie(&state, token));

    tracing::info!("✅ Session created for user: {}", user.id);

    let response = CallbackResponse {
        success: true,
        user,
    };

    Ok((StatusCode::OK, Json(response)).into_response())
}

/// Returns the current authenticated user.
#[axum::debug_handler]
pub async fn me(Extension(session): Extension<Session>) -> Result<Response> {
    tracing::debug!("👤 Current user requested: {}", session.user.id);

    let response = MeResponse {
        user: session.user,
    };

    Ok((StatusCode::OK, Json(response)).into_response())
}

/// Handles user logout.
///
/// Clears the session cookie. Idempotent: logging out without a session is
/// also a success, so a stale client can always reach a clean state.
#[axum::debug_handler]
pub async fn logout(State(state): State<AppState>, cookies: Cookies) -> Result<Response> {
    tracing::info!("👋 Logout requested");

    let mut session_cookie = Cookie::new(state.config.cookie_name.clone(), "");
    session_cookie.set_max_age(Duration::seconds(0));
    session_cookie.set_path("/");
    cookies.remove(session_cookie);

    tracing::info!("✅ Session cookie cleared");

    let response = AuthResponse {
        success: true,
        message: "Logout realizado com sucesso".to_string(),
    };

    Ok((StatusCode::OK, Json(response)).into_response())
}
