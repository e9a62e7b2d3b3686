//! Feature flag handling for the venue service.
//!
//! ## Available Features
//!
//! - `openapi`: Enables OpenAPI documentation generation
//! - `availability`: Enables the date-availability checker and calendar
//! - `contact`: Enables the contact / inquiry form
//!
//! Feature flags are used in two ways:
//!
//! 1. Compile-time feature flags using `#[cfg(feature = "...")]`
//! 2. Runtime feature flags using configuration values
//!
//! This module provides the runtime checks.

#[cfg(any(feature = "availability", feature = "contact"))]
use venue_config::AppConfig;

/// A feature is on when its runtime flag is set and, if it has one, its
/// configuration section is present.
pub fn is_feature_enabled<T>(use_feature: bool, feature_config: Option<&T>) -> bool {
    use_feature && feature_config.is_some()
}

/// Check if the availability checker is enabled at runtime.
#[cfg(feature = "availability")]
pub fn is_availability_enabled(config: &AppConfig) -> bool {
    is_feature_enabled(config.use_availability, config.availability.as_ref())
}

/// Check if the contact form is enabled at runtime.
///
/// The contact form has no configuration section of its own.
#[cfg(feature = "contact")]
pub fn is_contact_enabled(config: &AppConfig) -> bool {
    is_feature_enabled(config.use_contact, Some(&()))
}
