//! Read-only diagnostics for the demo: active toggles and the order log.

use axum::{
    extract::State,
    routing::get,
    Json, Router,
};
use boxoffice_core::Toggles;
use boxoffice_order::Order;

use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/flags", get(get_flags))
        .route("/api/orders", get(list_orders))
}

async fn get_flags(State(state): State<AppState>) -> Json<Toggles> {
    Json(state.toggles)
}

async fn list_orders(State(state): State<AppState>) -> Json<Vec<Order>> {
    let box_office = state.box_office.lock().await;
    Json(box_office.orders.orders().to_vec())
}
