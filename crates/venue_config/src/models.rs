// --- File: crates/venue_config/src/models.rs ---

use chrono::NaiveDate;
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use tracing::warn;

// --- General Server Config ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8086
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

// --- Availability Config ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct AvailabilityConfig {
    /// Largest guest count the venue accepts.
    #[serde(default = "default_max_guests")]
    pub max_guests: u32,
    /// Minimum whole days between today and the event date.
    #[serde(default = "default_min_lead_days")]
    pub min_lead_days: i64,
    /// IANA zone used to decide what "today" is.
    #[serde(default = "default_time_zone")]
    pub time_zone: String,
    /// Dates on which the venue is already taken.
    #[serde(default = "default_booked_dates")]
    pub booked_dates: Vec<NaiveDate>,
}

fn default_max_guests() -> u32 {
    500
}

fn default_min_lead_days() -> i64 {
    7
}

fn default_time_zone() -> String {
    "Europe/Zurich".to_string()
}

fn default_booked_dates() -> Vec<NaiveDate> {
    [
        (2025, 11, 25),
        (2025, 11, 30),
        (2025, 12, 15),
        (2025, 12, 24),
        (2025, 12, 25),
        (2025, 12, 31),
        (2026, 1, 1),
    ]
    .into_iter()
    .filter_map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d))
    .collect()
}

impl Default for AvailabilityConfig {
    fn default() -> Self {
        Self {
            max_guests: default_max_guests(),
            min_lead_days: default_min_lead_days(),
            time_zone: default_time_zone(),
            booked_dates: default_booked_dates(),
        }
    }
}

impl AvailabilityConfig {
    /// The configured zone, or UTC when the name is not a known IANA zone.
    pub fn tz(&self) -> Tz {
        match self.time_zone.parse::<Tz>() {
            Ok(tz) => tz,
            Err(_) => {
                warn!("Unknown time zone '{}', falling back to UTC", self.time_zone);
                Tz::UTC
            }
        }
    }
}

// --- Unified App Configuration ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,

    // --- Runtime Flags (default to true) ---
    #[serde(default = "enabled")]
    pub use_availability: bool,
    #[serde(default = "enabled")]
    pub use_contact: bool,

    // --- Optional Feature Configurations ---
    #[serde(default = "default_availability")]
    pub availability: Option<AvailabilityConfig>,
}

fn enabled() -> bool {
    true
}

fn default_availability() -> Option<AvailabilityConfig> {
    Some(AvailabilityConfig::default())
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            use_availability: true,
            use_contact: true,
            availability: default_availability(),
        }
    }
}
