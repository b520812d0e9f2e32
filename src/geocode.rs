//! # Geocoding
//!
//! Place-name search (name → coordinates) and best-effort reverse lookup
//! (coordinates → display name) through the OpenWeatherMap geocoding API.
//!
//! The forward search is a user-facing operation and reports its failures
//! precisely ([`crate::location::LocationError`]); the reverse lookup only
//! decorates the dashboard header, so any failure simply yields `None` and
//! the caller falls back to a generic label.

use crate::location::LocationError;
use crate::{Coordinates, ResolvedPlace};
use reqwest::Client;
use serde::Deserialize;

const OPENWEATHER_BASE: &str = "https://api.openweathermap.org";

/// One match from the geocoding API. External contract snapshot; do not
/// rename fields.
#[derive(Debug, Deserialize)]
struct GeoMatch {
    name: String,
    lat: f64,
    lon: f64,
    #[serde(default)]
    country: String,
}

/// Geocoding client wrapping a shared HTTP client and API key.
#[derive(Debug, Clone)]
pub struct Geocoder {
    http: Client,
    key: String,
    base: String,
}

impl Geocoder {
    pub fn new(key: impl Into<String>) -> Result<Self, LocationError> {
        Self::with_base(key, OPENWEATHER_BASE)
    }

    /// Construct against an alternate base URL (used by HTTP tests).
    pub fn with_base(key: impl Into<String>, base: impl Into<String>) -> Result<Self, LocationError> {
        // No request deadline here; only the device location lookup is
        // bounded by an explicit timeout.
        let http = Client::builder().build()?;
        Ok(Self {
            http,
            key: key.into(),
            base: base.into(),
        })
    }

    /// Resolve a user-entered place name to coordinates.
    ///
    /// The first match is authoritative; there is no disambiguation step.
    ///
    /// # Errors
    /// - [`LocationError::InvalidInput`] if `name` is empty after trimming
    /// - [`LocationError::Provider`] on a non-2xx response
    /// - [`LocationError::NotFound`] if the lookup returns zero matches
    pub async fn find_place(&self, name: &str) -> Result<ResolvedPlace, LocationError> {
        let query = name.trim();
        if query.is_empty() {
            return Err(LocationError::InvalidInput);
        }

        let url = format!("{}/geo/1.0/direct", self.base);
        let response = self
            .http
            .get(&url)
            .query(&[("q", query), ("limit", "1"), ("appid", &self.key)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(LocationError::Provider {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        let matches: Vec<GeoMatch> =
            serde_json::from_slice(&body).map_err(|e| LocationError::Format(e.to_string()))?;

        let first = matches
            .into_iter()
            .next()
            .ok_or_else(|| LocationError::NotFound(query.to_string()))?;

        let coords = Coordinates::new(first.lat, first.lon)
            .ok_or_else(|| LocationError::Format("coordinates out of range".to_string()))?;

        Ok(ResolvedPlace {
            coords,
            display_name: first.name,
            country: first.country,
        })
    }

    /// Reverse geocode coordinates to a "name, country" header label.
    /// Returns `None` on any failure; the caller falls back to a generic label.
    pub async fn place_name(&self, coords: Coordinates) -> Option<String> {
        let url = format!("{}/geo/1.0/reverse", self.base);
        let response = self
            .http
            .get(&url)
            .query(&[
                ("lat", coords.latitude.to_string()),
                ("lon", coords.longitude.to_string()),
                ("limit", "1".to_string()),
                ("appid", self.key.clone()),
            ])
            .send()
            .await
            .ok()?;

        if !response.status().is_success() {
            return None;
        }

        let matches: Vec<GeoMatch> = response.json().await.ok()?;
        let first = matches.into_iter().next()?;

        if first.country.is_empty() {
            Some(first.name)
        } else {
            Some(format!("{}, {}", first.name, first.country))
        }
    }
}
