use axum::{
    extract::{rejection::JsonRejection, State},
    routing::post,
    Json, Router,
};
use boxoffice_core::{Identity, Preference, SessionRecord, Toggles};
use boxoffice_order::CustomerRef;
use boxoffice_shared::Masked;
use serde::{Deserialize, Serialize};
use tower_sessions::Session;
use tracing::info;
use uuid::Uuid;

use crate::error::AppError;
use crate::session::load_record;
use crate::state::{AppState, BoxOffice};

pub const SUCCESS_PAGE: &str = "success.html";

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct BookingRequest {
    pub movie: Option<String>,
    pub email: Option<String>,
    pub preference: Option<Preference>,
    pub count: Option<i64>,
    pub selected_seats: Option<Vec<String>>,
}

#[derive(Debug, Serialize)]
pub struct BookingConfirmation {
    pub success: bool,
    pub order_id: Uuid,
    pub seats: Vec<String>,
    pub target: &'static str,
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/api/book", post(commit_booking))
}

async fn commit_booking(
    State(state): State<AppState>,
    session: Session,
    payload: Result<Json<BookingRequest>, JsonRejection>,
) -> Result<Json<BookingConfirmation>, AppError> {
    let Json(req) = payload?;
    let record = load_record(&session).await?;

    let mut box_office = state.box_office.lock().await;
    let confirmation = book(&state.toggles, &mut box_office, &record, req)?;

    Ok(Json(confirmation))
}

/// Validate the session, pick seats and record the order.
///
/// With auto seating the allocator chooses; otherwise the client's own seat
/// list is recorded as sent, without checking it against the seat map.
pub fn book(
    toggles: &Toggles,
    box_office: &mut BoxOffice,
    record: &SessionRecord,
    req: BookingRequest,
) -> Result<BookingConfirmation, AppError> {
    let identity = Identity::try_from(record)?;

    let movie = req.movie
        .map(|m| m.trim().to_string())
        .filter(|m| !m.is_empty())
        .ok_or_else(|| AppError::ValidationError("movie is required".to_string()))?;

    let customer = CustomerRef::resolve(&identity, req.email.as_deref())
        .ok_or_else(|| AppError::ValidationError("email is required for guest checkout".to_string()))?;

    let seats = if toggles.auto_seating {
        let count = req.count.unwrap_or(1);
        if count < 1 {
            return Err(AppError::ValidationError("count must be at least 1".to_string()));
        }
        let preference = req.preference.unwrap_or(Preference::Any);
        box_office.inventory.allocate(preference, count as usize)?
    } else {
        req.selected_seats.unwrap_or_default()
    };

    let order = box_office.orders.append(customer, movie, seats);

    info!(
        "Booking confirmed: {} for {} seats {:?}",
        order.id(),
        Masked(order.customer().to_string()),
        order.seats()
    );

    Ok(BookingConfirmation {
        success: true,
        order_id: order.id(),
        seats: order.seats().to_vec(),
        target: SUCCESS_PAGE,
    })
}
