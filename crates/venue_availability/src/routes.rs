// --- File: crates/venue_availability/src/routes.rs ---
use crate::handlers::{check_availability_handler, get_availability_handler, AvailabilityState};
use axum::{routing::get, Router};
use std::sync::Arc;

/// Creates a router containing the availability page routes.
pub fn routes(state: Arc<AvailabilityState>) -> Router {
    Router::new()
        .route(
            "/availability",
            get(get_availability_handler).post(check_availability_handler),
        )
        .with_state(state)
}
