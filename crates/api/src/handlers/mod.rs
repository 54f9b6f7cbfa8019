use crate::state::AppState;
use axum::routing::get;
use axum::Router;

mod records;
mod update;
mod whoami;

pub fn create_routes(state: AppState) -> Router {
    Router::new()
        .route("/nic/update", get(update::nic_update).post(update::nic_update))
        .route("/records", get(records::list_records))
        .route("/whoami", get(whoami::whoami))
        .with_state(state)
}
