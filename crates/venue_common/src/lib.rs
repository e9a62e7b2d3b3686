// --- File: crates/venue_common/src/lib.rs ---

// Declare modules within this crate
pub mod error; // Error handling
pub mod features; // Feature flag handling
pub mod forms; // Form input helpers
pub mod http; // HTTP utilities
pub mod logging; // Logging utilities
pub mod models; // Shared data structures
pub mod services; // Service abstractions

// Re-export error types and utilities for easier access
pub use error::{
    external_service_error, not_found, Context, HttpStatusCode, VenueError,
};

// Re-export HTTP utilities for easier access
pub use http::{map_json_error, IntoHttpResponse};

// Re-export logging utilities for easier access
pub use logging::{init, init_with_level, log_error, log_result};

pub use models::FieldError;

pub use features::is_feature_enabled;

#[cfg(feature = "availability")]
pub use features::is_availability_enabled;

#[cfg(feature = "contact")]
pub use features::is_contact_enabled;
