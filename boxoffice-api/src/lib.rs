use axum::{
    http::{header, Method},
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tower_sessions::{MemoryStore, SessionManagerLayer};

pub mod admin;
pub mod auth;
pub mod bookings;
pub mod error;
pub mod flow;
pub mod seats;
pub mod session;
pub mod state;

pub use state::AppState;

pub fn app(state: AppState) -> Router {
    // Pages are opened from file:// during the demo, so the origin is mirrored
    // and the session cookie is allowed through.
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_credentials(true)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    let sessions = SessionManagerLayer::new(MemoryStore::default()).with_secure(false);
    let pages = ServeDir::new(&state.pages_dir);

    Router::new()
        .merge(flow::routes())
        .merge(auth::routes())
        .merge(seats::routes())
        .merge(bookings::routes())
        .merge(admin::routes())
        .route("/health", get(health))
        .fallback_service(pages)
        .layer(sessions)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
