//! Errors raised at the engine boundary
//!
//! Scoring itself never fails. These cover input that must be rejected
//! before it reaches the engine: out-of-range coordinates and forecast
//! payloads that cannot be shaped into hourly samples.

use thiserror::Error;

/// Result alias for boundary operations
pub type Result<T> = std::result::Result<T, FalloutError>;

#[derive(Error, Debug)]
pub enum FalloutError {
    /// Latitude outside [-90, 90] or not finite
    #[error("Invalid latitude {0}: must be a finite value in [-90, 90]")]
    InvalidLatitude(f64),

    /// Longitude outside [-180, 180] or not finite
    #[error("Invalid longitude {0}: must be a finite value in [-180, 180]")]
    InvalidLongitude(f64),

    /// Forecast payload parsed as JSON but has the wrong shape or content
    #[error("Malformed forecast: {0}")]
    MalformedForecast(String),

    /// Payload is not valid JSON for the expected type
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
