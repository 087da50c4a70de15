use axum::{
    extract::State,
    routing::get,
    Json, Router,
};
use boxoffice_catalog::SeatConfiguration;

use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/api/seat-config", get(seat_config))
}

async fn seat_config(State(state): State<AppState>) -> Json<SeatConfiguration> {
    let box_office = state.box_office.lock().await;
    Json(box_office.inventory.seat_configuration(&state.toggles))
}
