//! JSON/HTTP shell over the reservation engine. Routes translate request
//! bodies into engine calls and engine results into status codes; no
//! booking rule lives here.

use std::sync::Arc;
use std::time::Instant;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{delete, get, post, put};
use axum::{Json, Router};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::engine::Engine;
use crate::model::{Booking, BookingPatch, GuestEntry, Room};
use crate::observability;

#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<Engine>,
}

pub fn router(engine: Arc<Engine>) -> Router {
    Router::new()
        .route("/booking", post(create_booking))
        .route("/available-rooms", get(available_rooms))
        .route("/booking/{email}", get(booking_by_email))
        .route("/guests", get(list_guests))
        .route("/cancel/{email}", delete(cancel_booking))
        .route("/modify/{email}", put(modify_booking))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(AppState { engine })
}

// ── Request/response bodies ──────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BookingRequest {
    name: String,
    email: String,
    check_in: NaiveDate,
    check_out: NaiveDate,
    /// Absent → auto-assign the lowest free room.
    #[serde(default)]
    room_number: Option<u32>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AvailabilityParams {
    /// Reference date for the occupancy check; defaults to today.
    #[serde(default)]
    as_of: Option<NaiveDate>,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    message: String,
}

#[derive(Debug, Serialize)]
struct StatusBody {
    success: bool,
    message: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct AvailableRoomsBody {
    available_rooms: Vec<Room>,
}

#[derive(Debug, Serialize)]
struct LookupBody {
    success: bool,
    message: String,
    booking: Booking,
}

#[derive(Debug, Serialize)]
struct GuestsBody {
    success: bool,
    guests: Vec<GuestEntry>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CancelBody {
    message: String,
    removed_booking: Booking,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ModifyBody {
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    warning: Option<String>,
    updated_booking: Booking,
}

// ── Handlers ─────────────────────────────────────────────

async fn create_booking(
    State(state): State<AppState>,
    Json(req): Json<BookingRequest>,
) -> Response {
    let started = Instant::now();
    match state
        .engine
        .create_booking(req.name, req.email, req.check_in, req.check_out, req.room_number)
        .await
    {
        Ok(booking) => {
            info!(
                room = booking.room_number,
                nights = booking.stay.nights(),
                "booking created"
            );
            metrics::gauge!(observability::BOOKINGS_ACTIVE).increment(1.0);
            record("create_booking", "ok", started);
            (StatusCode::CREATED, Json(booking)).into_response()
        }
        Err(e) => {
            warn!(error = %e, "booking rejected");
            metrics::counter!(
                observability::BOOKINGS_REJECTED_TOTAL,
                "reason" => observability::rejection_label(&e)
            )
            .increment(1);
            record("create_booking", "rejected", started);
            (
                StatusCode::BAD_REQUEST,
                Json(ErrorBody {
                    message: e.to_string(),
                }),
            )
                .into_response()
        }
    }
}

async fn available_rooms(
    State(state): State<AppState>,
    Query(params): Query<AvailabilityParams>,
) -> Response {
    let started = Instant::now();
    let as_of = params.as_of.unwrap_or_else(today);
    let rooms = state.engine.available_rooms(as_of).await;
    record("available_rooms", "ok", started);
    Json(AvailableRoomsBody {
        available_rooms: rooms,
    })
    .into_response()
}

async fn booking_by_email(State(state): State<AppState>, Path(email): Path<String>) -> Response {
    let started = Instant::now();
    match state.engine.booking_by_email(&email).await {
        Ok(booking) => {
            record("get_booking", "ok", started);
            Json(LookupBody {
                success: true,
                message: format!("booking found for {email}"),
                booking,
            })
            .into_response()
        }
        Err(e) => {
            record("get_booking", "not_found", started);
            (
                StatusCode::NOT_FOUND,
                Json(StatusBody {
                    success: false,
                    message: e.to_string(),
                }),
            )
                .into_response()
        }
    }
}

async fn list_guests(State(state): State<AppState>) -> Response {
    let started = Instant::now();
    match state.engine.list_guests().await {
        Ok(guests) => {
            record("list_guests", "ok", started);
            Json(GuestsBody {
                success: true,
                guests,
            })
            .into_response()
        }
        Err(e) => {
            record("list_guests", "empty", started);
            (
                StatusCode::NOT_FOUND,
                Json(StatusBody {
                    success: false,
                    message: e.to_string(),
                }),
            )
                .into_response()
        }
    }
}

async fn cancel_booking(State(state): State<AppState>, Path(email): Path<String>) -> Response {
    let started = Instant::now();
    match state.engine.cancel_booking(&email).await {
        Ok(removed) => {
            info!(room = removed.room_number, "booking cancelled");
            metrics::gauge!(observability::BOOKINGS_ACTIVE).decrement(1.0);
            record("cancel_booking", "ok", started);
            let message = format!(
                "booking for {email} cancelled; room {} is open again",
                removed.room_number
            );
            Json(CancelBody {
                message,
                removed_booking: removed,
            })
            .into_response()
        }
        Err(e) => {
            record("cancel_booking", "not_found", started);
            (
                StatusCode::NOT_FOUND,
                Json(ErrorBody {
                    message: e.to_string(),
                }),
            )
                .into_response()
        }
    }
}

async fn modify_booking(
    State(state): State<AppState>,
    Path(email): Path<String>,
    Json(patch): Json<BookingPatch>,
) -> Response {
    let started = Instant::now();
    match state.engine.modify_booking(&email, patch).await {
        Ok(outcome) => {
            let warning = outcome.moved_from.map(|old| {
                format!(
                    "room changed from {old} to {}; the new room was not checked for conflicting stays",
                    outcome.booking.room_number
                )
            });
            if let Some(w) = &warning {
                warn!("{w}");
            }
            record("modify_booking", "ok", started);
            Json(ModifyBody {
                message: format!("booking for {email} updated"),
                warning,
                updated_booking: outcome.booking,
            })
            .into_response()
        }
        Err(e) => {
            record("modify_booking", "not_found", started);
            (
                StatusCode::NOT_FOUND,
                Json(ErrorBody {
                    message: e.to_string(),
                }),
            )
                .into_response()
        }
    }
}

fn record(op: &'static str, status: &'static str, started: Instant) {
    metrics::counter!(observability::OPERATIONS_TOTAL, "op" => op, "status" => status)
        .increment(1);
    metrics::histogram!(observability::OPERATION_DURATION_SECONDS, "op" => op)
        .record(started.elapsed().as_secs_f64());
}

/// The only wall-clock read in the crate; the engine always takes the
/// reference date as a parameter.
fn today() -> NaiveDate {
    chrono::Utc::now().date_naive()
}
