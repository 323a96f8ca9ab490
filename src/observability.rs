use std::net::SocketAddr;

use crate::engine::EngineError;

// ── RED metrics (request-driven) ────────────────────────────────

/// Counter: total operations executed. Labels: op, status.
pub const OPERATIONS_TOTAL: &str = "innkeep_operations_total";

/// Histogram: operation latency in seconds. Labels: op.
pub const OPERATION_DURATION_SECONDS: &str = "innkeep_operation_duration_seconds";

// ── USE metrics (resource utilization) ──────────────────────────

/// Gauge: bookings currently held in the store.
pub const BOOKINGS_ACTIVE: &str = "innkeep_bookings_active";

/// Counter: booking requests rejected at the conflict checks. Labels: reason.
pub const BOOKINGS_REJECTED_TOTAL: &str = "innkeep_bookings_rejected_total";

/// Install Prometheus metrics exporter on the given port. No-op if port is None.
pub fn init(port: Option<u16>) {
    let Some(port) = port else { return };
    let addr: SocketAddr = ([0, 0, 0, 0], port).into();
    metrics_exporter_prometheus::PrometheusBuilder::new()
        .with_http_listener(addr)
        .install()
        .expect("failed to install Prometheus metrics exporter");
    tracing::info!("metrics endpoint: http://0.0.0.0:{port}/metrics");
}

/// Map an EngineError variant to a short label for metrics.
pub fn rejection_label(err: &EngineError) -> &'static str {
    match err {
        EngineError::DuplicateGuest { .. } => "duplicate_guest",
        EngineError::InvalidRoom(_) => "invalid_room",
        EngineError::NoRoomsAvailable => "no_rooms_available",
        EngineError::RoomAlreadyBooked(_) => "room_already_booked",
        EngineError::NotFound(_) => "not_found",
        EngineError::NoGuests => "no_guests",
    }
}
