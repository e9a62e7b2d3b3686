// File: services/venue_backend/src/main.rs
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;
use venue_backend::{build_app, service_factory::VenueServiceFactory};
use venue_common::{log_error, log_result, logging, Context, VenueError};
use venue_config::load_config;

#[tokio::main]
async fn main() {
    logging::init();

    let config = match load_config().map_err(VenueError::from) {
        Ok(config) => Arc::new(config),
        Err(e) => {
            log_error(e, "Failed to load config");
            std::process::exit(1);
        }
    };

    let factory = VenueServiceFactory::new(&config);
    #[allow(unused_mut)] // for the features it needs to be mutable
    let mut app = build_app(config.clone(), &factory);

    // Conditionally add Swagger UI and JSON endpoint if openapi feature enabled
    #[cfg(feature = "openapi")]
    {
        use utoipa_swagger_ui::SwaggerUi;

        info!("Adding Swagger UI at /api/docs");
        let swagger_ui =
            SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", venue_backend::openapi_doc());
        app = app.merge(swagger_ui);
    }

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let Ok(listener) = log_result(
        TcpListener::bind(&addr)
            .await
            .with_context(|| format!("binding {}", addr)),
        &format!("Listening on http://{}", addr),
        "Failed to start server",
    ) else {
        std::process::exit(1);
    };
    info!("API endpoints available at http://{}/api", addr);

    if let Err(e) = axum::serve(listener, app.into_make_service()).await {
        log_error(e, "Server error");
        std::process::exit(1);
    }
}
