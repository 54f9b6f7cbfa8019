use crate::state::AppState;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;
use std::collections::BTreeMap;
use tracing::error;

pub async fn list_records(
    State(state): State<AppState>,
) -> Result<Json<BTreeMap<String, String>>, (StatusCode, String)> {
    state.list_records.execute().map(Json).map_err(|e| {
        error!(error = %e, "Failed to list records");
        (StatusCode::INTERNAL_SERVER_ERROR, "dnserr".to_string())
    })
}
