// --- File: crates/venue_common/src/models.rs ---

use serde::{Deserialize, Serialize};

/// One field-level validation message, shown next to the offending form input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct FieldError {
    /// Form field name as submitted (e.g. "selected_date").
    pub field: String,
    /// Human readable message.
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}
