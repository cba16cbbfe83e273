use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::{
    error::Result,
    models::user::{CreateUserPayload, UserStatus, UserType},
    services::registry as registry_service,
    state::AppState,
    validation::auth::{validate_email, validate_password},
};

/// The request payload for registering a user.
#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct RegisterUserRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub user_type: UserType,
    pub status: UserStatus,
}

/// The response payload for the registration endpoint.
#[derive(Serialize)]
pub struct RegisterUserResponse {
    pub success: bool,
    pub message: String,
}

/// Registers a user through the external registry API.
#[axum::debug_handler]
pub async fn create_user(
    State(state): State<AppState>,
    Json(payload): Json<RegisterUserRequest>,
) -> Result<Response> {
    tracing::info!("📝 User registration request for: {}", payload.email);

    validate_email(&payload.email)?;
    validate_password(&payload.password)?;

    if payload.name.trim().is_empty() {
        return Err(crate::error::AppError::Validation(
            "Name cannot be empty".to_string(),
        ));
    }

    // The registry is single-tenant today; every user lands on client 1.
    let forwarded = CreateUserPayload {
        name: payload.name,
        email: payload.email,
        password: payload.password,
        user_type: payload.user_type,
        status: payload.status,
        client_id: 1,
    };

    registry_service::create_user(&state.http, &state.config.registry_api_url, &forwarded)
        .await?;

    let response = RegisterUserResponse {
        success: true,
        message: "Usuário cadastrado com sucesso".to_string(),
    };

    Ok((StatusCode::CREATED, Json(response)).into_response())
}
