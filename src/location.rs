//! # Location Resolution
//!
//! Three ways to obtain coordinates for the dashboard, tried in this order
//! on automatic startup:
//!
//! 1. **Device location**: ask the platform location service, bounded by a
//!    5-second timeout with no cached-result reuse.
//! 2. **Default spot**: the configured fallback, which always succeeds.
//!
//! A user-initiated place-name search is handled separately by
//! [`crate::geocode::Geocoder::find_place`] and surfaces its failure rather
//! than silently falling back.

use crate::config::Config;
use crate::{Coordinates, ResolvedPlace};
use std::time::Duration;
use thiserror::Error;

/// Errors from location resolution and geocoding.
#[derive(Error, Debug)]
pub enum LocationError {
    /// Search term was empty or whitespace
    #[error("search term is empty")]
    InvalidInput,

    /// Geocoding returned zero matches for the search term
    #[error("location not found: {0}")]
    NotFound(String),

    /// Device location capability absent, denied, or timed out
    #[error("device location unavailable: {0}")]
    Unavailable(String),

    /// Geocoding provider responded with a non-success HTTP status
    #[error("geocoding provider returned HTTP {status}")]
    Provider { status: u16 },

    /// Transport-level failure
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Malformed or unexpected payload from the provider
    #[error("malformed geocoding payload: {0}")]
    Format(String),
}

/// How long to wait for the device location service before giving up.
pub const DEVICE_LOCATION_TIMEOUT: Duration = Duration::from_secs(5);

/// A source of device coordinates (GPS, platform location service, ...).
///
/// The trait seam exists so the pipeline can be driven by a mock source in
/// tests; the stock [`SystemLocator`] reports unavailability on platforms
/// without a location service.
pub trait DeviceLocator {
    /// Obtain a fresh fix. Implementations must not reuse cached results.
    fn locate(&self) -> impl std::future::Future<Output = Result<Coordinates, LocationError>> + Send;
}

/// Platform location service adapter.
///
/// No headless location backend is wired up on desktop targets, so this
/// reports `Unavailable` and lets the resolver fall through to the
/// configured default spot.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemLocator;

impl DeviceLocator for SystemLocator {
    async fn locate(&self) -> Result<Coordinates, LocationError> {
        Err(LocationError::Unavailable(
            "no location service on this platform".to_string(),
        ))
    }
}

/// Request device coordinates with the 5-second timeout applied.
///
/// # Errors
/// [`LocationError::Unavailable`] when the source fails or the timeout
/// elapses first.
pub async fn resolve_from_device<L: DeviceLocator>(
    locator: &L,
) -> Result<Coordinates, LocationError> {
    match tokio::time::timeout(DEVICE_LOCATION_TIMEOUT, locator.locate()).await {
        Ok(result) => result,
        Err(_) => Err(LocationError::Unavailable(
            "location request timed out".to_string(),
        )),
    }
}

/// The configured fallback spot. Always succeeds.
pub fn resolve_default(config: &Config) -> ResolvedPlace {
    ResolvedPlace {
        coords: Coordinates {
            latitude: config.location.latitude,
            longitude: config.location.longitude,
        },
        display_name: config.location.name.clone(),
        country: String::new(),
    }
}
