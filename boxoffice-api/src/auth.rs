use axum::{
    extract::rejection::JsonRejection,
    routing::post,
    Json, Router,
};
use boxoffice_core::{CoreError, CoreResult, SessionRecord};
use serde::{Deserialize, Serialize};
use tower_sessions::Session;
use tracing::{info, warn};

use crate::error::AppError;
use crate::flow::STANDARD_PAGE;
use crate::session::{load_record, save_record};
use crate::state::AppState;

// Demo account; there is no user store.
const MEMBER_USERNAME: &str = "admin";
const MEMBER_PASSWORD: &str = "1234";

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    username: Option<String>,
    password: Option<String>,
}

#[derive(Debug, Serialize)]
struct LoginResponse {
    success: bool,
    status: &'static str,
    target: &'static str,
}

/// Sign the session in as a member. On failure the record is not modified.
pub fn authenticate(record: &mut SessionRecord, username: &str, password: &str) -> CoreResult<()> {
    if username != MEMBER_USERNAME || password != MEMBER_PASSWORD {
        return Err(CoreError::AuthenticationFailed);
    }

    record.sign_in(username);
    Ok(())
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/api/login", post(login))
}

async fn login(
    session: Session,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<LoginResponse>, AppError> {
    let Json(req) = payload?;
    let (username, password) = match (req.username, req.password) {
        (Some(u), Some(p)) => (u, p),
        _ => return Err(AppError::ValidationError("username and password are required".to_string())),
    };

    let mut record = load_record(&session).await?;
    if let Err(e) = authenticate(&mut record, &username, &password) {
        warn!("Login failed for {}", username);
        return Err(e.into());
    }
    save_record(&session, &record).await?;

    info!("Member {} signed in", username);

    Ok(Json(LoginResponse {
        success: true,
        status: "ok",
        target: STANDARD_PAGE,
    }))
}
