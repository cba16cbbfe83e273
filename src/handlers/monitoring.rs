use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};

use crate::{
    error::Result,
    services::monitoring as monitoring_service,
    state::AppState,
};

/// Returns the normalized telemetry of a single machine.
#[axum::debug_handler]
pub async fn get_machine(
    State(state): State<AppState>,
    Path(machine_id): Path<i64>,
) -> Result<impl IntoResponse> {
    let data = monitoring_service::get_machine_data(
        &state.http,
        &state.config.monitoring_api_url,
        machine_id,
    )
    .await?;

    Ok(Json(data))
}
