// --- File: crates/venue_contact/src/routes.rs ---
use crate::handlers::{get_contact_handler, submit_contact_handler, ContactState};
use axum::{routing::get, Router};
use std::sync::Arc;

pub fn routes(state: Arc<ContactState>) -> Router {
    Router::new()
        .route(
            "/contact",
            get(get_contact_handler).post(submit_contact_handler),
        )
        .with_state(state)
}
