// --- File: crates/venue_common/src/error.rs ---
use std::fmt;
use thiserror::Error;

/// The base error type for all venue service errors.
///
/// Feature crates keep their own error enums and implement
/// `From<FeatureError> for VenueError` so handlers can bubble them up with `?`.
#[derive(Error, Debug)]
pub enum VenueError {
    /// Error occurred due to missing or invalid configuration
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Error occurred during external service call
    #[error("External service error: {service_name} - {message}")]
    ExternalServiceError {
        service_name: String,
        message: String,
    },

    /// Error occurred due to a resource not being found
    #[error("Not found: {0}")]
    NotFoundError(String),

    /// Error occurred due to an internal error
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// A trait for converting errors to HTTP status codes.
pub trait HttpStatusCode {
    /// Returns the HTTP status code for this error.
    fn status_code(&self) -> u16;
}

impl HttpStatusCode for VenueError {
    fn status_code(&self) -> u16 {
        match self {
            VenueError::ConfigError(_) => 500,
            VenueError::ExternalServiceError { .. } => 502,
            VenueError::NotFoundError(_) => 404,
            VenueError::InternalError(_) => 500,
        }
    }
}

/// A trait for adding context to errors.
pub trait Context<T, E> {
    /// Adds context to an error.
    fn context<C>(self, context: C) -> Result<T, VenueError>
    where
        C: fmt::Display + Send + Sync + 'static;

    /// Adds context to an error with a lazy context provider.
    fn with_context<C, F>(self, f: F) -> Result<T, VenueError>
    where
        C: fmt::Display + Send + Sync + 'static,
        F: FnOnce() -> C;
}

impl<T, E: std::error::Error + Send + Sync + 'static> Context<T, E> for Result<T, E> {
    fn context<C>(self, context: C) -> Result<T, VenueError>
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|error| VenueError::InternalError(format!("{}: {}", context, error)))
    }

    fn with_context<C, F>(self, f: F) -> Result<T, VenueError>
    where
        C: fmt::Display + Send + Sync + 'static,
        F: FnOnce() -> C,
    {
        self.map_err(|error| VenueError::InternalError(format!("{}: {}", f(), error)))
    }
}

impl From<venue_config::ConfigError> for VenueError {
    fn from(err: venue_config::ConfigError) -> Self {
        VenueError::ConfigError(err.to_string())
    }
}

// Utility functions for error handling
pub fn not_found<T: fmt::Display>(message: T) -> VenueError {
    VenueError::NotFoundError(message.to_string())
}

pub fn external_service_error<T: fmt::Display>(service_name: &str, message: T) -> VenueError {
    VenueError::ExternalServiceError {
        service_name: service_name.to_string(),
        message: message.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_follow_error_kind() {
        assert_eq!(not_found("calendar").status_code(), 404);
        assert_eq!(
            external_service_error("inquiry_sink", "down").status_code(),
            502
        );
        let config_err: VenueError =
            venue_config::ConfigError::Message("missing section".to_string()).into();
        assert_eq!(config_err.status_code(), 500);
    }

    #[test]
    fn context_wraps_source_error_as_internal() {
        let result: Result<(), std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::Other,
            "disk on fire",
        ));
        let err = result.context("loading registry").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Internal error: loading registry: disk on fire"
        );
    }
}
