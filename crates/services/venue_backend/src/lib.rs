// --- File: crates/services/venue_backend/src/lib.rs ---
pub mod service_factory;

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
#[allow(unused_imports)] // only used by some features
use tracing::info;
use venue_common::services::ServiceFactory;
use venue_config::AppConfig;

#[cfg(feature = "availability")]
use venue_availability::{handlers::AvailabilityState, routes as availability_routes};
#[cfg(feature = "contact")]
use venue_contact::{handlers::ContactState, routes as contact_routes};

async fn health() -> &'static str {
    "OK"
}

/// Builds the application router. Feature routers are only merged when the
/// factory provides their services.
#[cfg_attr(
    not(any(feature = "availability", feature = "contact")),
    allow(unused_variables)
)]
pub fn build_app(config: Arc<AppConfig>, factory: &dyn ServiceFactory) -> Router {
    #[allow(unused_mut)] // for the features it needs to be mutable
    let mut router = Router::new().route("/health", get(health));

    #[cfg(feature = "availability")]
    {
        if let Some(booked_dates) = factory.booked_dates_source() {
            let state = AvailabilityState::new(config.clone(), factory.clock(), booked_dates);
            router = router.merge(availability_routes::routes(Arc::new(state)));
            info!("Mounted /api/availability");
        }
    }

    #[cfg(feature = "contact")]
    {
        if let Some(sink) = factory.inquiry_sink() {
            let state = ContactState {
                config: config.clone(),
                sink,
            };
            router = router.merge(contact_routes::routes(Arc::new(state)));
            info!("Mounted /api/contact");
        }
    }

    Router::new()
        .nest("/api", router)
        .layer(TraceLayer::new_for_http())
}

/// Merged OpenAPI document of every compiled feature.
#[cfg(feature = "openapi")]
pub fn openapi_doc() -> utoipa::openapi::OpenApi {
    use utoipa::OpenApi;

    #[derive(OpenApi)]
    #[openapi(
        info(
            title = "Venue API",
            version = "0.1.0",
            description = "Venue availability checker and contact form",
            license(name = "MIT", url = "https://opensource.org/licenses/MIT")
        ),
        servers((url = "/api", description = "Main API Prefix")),
    )]
    struct ApiDoc;

    #[allow(unused_mut)] // for the features it needs to be mutable
    let mut doc = ApiDoc::openapi();
    #[cfg(feature = "availability")]
    doc.merge(venue_availability::doc::AvailabilityApiDoc::openapi());
    #[cfg(feature = "contact")]
    doc.merge(venue_contact::doc::ContactApiDoc::openapi());
    doc
}
