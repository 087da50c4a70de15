use axum::{
    extract::State,
    routing::get,
    Json, Router,
};
use boxoffice_core::{SessionRecord, Toggles};
use boxoffice_shared::Masked;
use serde::Serialize;
use tower_sessions::Session;
use tracing::info;

use crate::error::AppError;
use crate::session::{load_record, save_record};
use crate::state::AppState;

pub const GUEST_PAGE: &str = "guest.html";
pub const STANDARD_PAGE: &str = "standard.html";
pub const LOGIN_PAGE: &str = "login.html";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlowDecision {
    pub action: &'static str,
    pub target: &'static str,
    pub mode: &'static str,
    /// Returned only so the experiment can be observed from the browser.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debug_token: Option<String>,
}

impl FlowDecision {
    fn redirect(target: &'static str, mode: &'static str) -> Self {
        Self { action: "redirect", target, mode, debug_token: None }
    }
}

/// Decide where the client goes after pressing "buy".
///
/// The only side effect is issuing a new guest token when the guest
/// checkout experiment is on.
pub fn decide_next(toggles: &Toggles, record: &mut SessionRecord) -> FlowDecision {
    if toggles.guest_checkout {
        let token = record.enter_guest_flow();
        return FlowDecision {
            debug_token: Some(token),
            ..FlowDecision::redirect(GUEST_PAGE, "guest_experiment")
        };
    }

    if record.has_member_identity() {
        FlowDecision::redirect(STANDARD_PAGE, "standard_member")
    } else {
        FlowDecision::redirect(LOGIN_PAGE, "login_required")
    }
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/init-flow", get(init_flow))
        .route("/api/route-decision", get(init_flow))
}

async fn init_flow(
    State(state): State<AppState>,
    session: Session,
) -> Result<Json<FlowDecision>, AppError> {
    info!("Flow decision requested, guest_checkout={}", state.toggles.guest_checkout);

    let mut record = load_record(&session).await?;
    let decision = decide_next(&state.toggles, &mut record);
    save_record(&session, &record).await?;

    if let Some(token) = &decision.debug_token {
        info!("Issued guest token {}", Masked(token.as_str()));
    }

    Ok(Json(decision))
}
