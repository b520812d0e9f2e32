//! # Weather and Marine Data Fetching
//!
//! This module handles all network operations for obtaining conditions data:
//! current weather and 5-day forecast from OpenWeatherMap, and marine/tide
//! conditions from WeatherAPI. It includes a small bundle cache to avoid
//! re-fetching during repeated runs, and keeps the raw provider payloads
//! opaque for the normalizer to project from.
//!
//! ## Data Sources
//!
//! - **Current weather**: `GET /data/2.5/weather?lat=&lon=&units=imperial`
//! - **Forecast**: `GET /data/2.5/forecast?lat=&lon=&units=imperial`
//!   (3-hour samples spanning 5 days)
//! - **Marine**: `GET /marine.json?q={lat},{lng}&days=1&tide=yes`
//!
//! The payload structs below are an external contract snapshot: field names
//! mirror what the providers return and must not be redesigned.
//!
//! ## Batch semantics
//!
//! [`Fetcher::fetch_bundle`] issues all three requests concurrently and
//! waits for all of them to settle. A failure in one request never cancels
//! the others; each failed slot is simply absent from the bundle and the
//! normalizer substitutes a placeholder or the synthetic tide model.
//!
//! ## Caching Strategy
//!
//! The settled bundle is cached as JSON in the system temp directory with a
//! configurable TTL (default 30 minutes), validated by file modification
//! time and by the coordinates it was fetched for. Cache write failures are
//! non-fatal.

use crate::Coordinates;
use chrono::{DateTime, Local};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::{fs, io, time::SystemTime};
use thiserror::Error;

/// Errors that can occur while fetching provider data.
#[derive(Error, Debug)]
pub enum FetchError {
    /// Transport-level failure (DNS, connection, TLS, ...)
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Provider responded with a non-success HTTP status
    #[error("provider returned HTTP {status}")]
    Provider { status: u16 },

    /// Response body did not match the expected payload shape
    #[error("malformed payload: {0}")]
    Format(String),
}

const OPENWEATHER_BASE: &str = "https://api.openweathermap.org";
const WEATHERAPI_BASE: &str = "https://api.weatherapi.com/v1";

/// Cache file name inside the system temp directory.
///
/// Using the temp dir keeps stale bundles from outliving a reboot and
/// avoids polluting the working directory.
const CACHE_FILE: &str = "surf_report_cache.json";

// ---- Raw provider payloads (contract snapshot) ----

/// Condition tag shared by the current-weather and forecast payloads.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawConditionTag {
    pub main: String,
    #[serde(default)]
    pub icon: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawCurrentMain {
    pub temp: f64,
    #[serde(default)]
    pub humidity: u8,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawWind {
    #[serde(default)]
    pub speed: f64,
    #[serde(default)]
    pub deg: i32,
}

/// Current-weather payload, as returned by the provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawCurrent {
    pub weather: Vec<RawConditionTag>,
    pub main: RawCurrentMain,
    #[serde(default)]
    pub wind: Option<RawWind>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawSlotMain {
    pub temp: f64,
}

/// One 3-hour forecast sample.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawForecastSlot {
    /// Sample time as a Unix timestamp (seconds)
    pub dt: i64,
    pub main: RawSlotMain,
    pub weather: Vec<RawConditionTag>,
}

/// 5-day/3-hour forecast payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawForecast {
    #[serde(default)]
    pub list: Vec<RawForecastSlot>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawMarineLocation {
    pub lat: f64,
    pub lon: f64,
}

/// One predicted tide event from the marine provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawTideEntry {
    /// "high" or "low"
    #[serde(rename = "type")]
    pub kind: String,
    /// Local time, either RFC 3339 or "YYYY-MM-DD HH:MM"
    pub time: String,
    pub height: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawTideTable {
    #[serde(default)]
    pub tide: Vec<RawTideEntry>,
}

/// One hourly marine sample.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawMarineHour {
    #[serde(default)]
    pub wind_kph: f64,
    #[serde(default)]
    pub wind_degree: i32,
    #[serde(default)]
    pub swell_ht_ft: f64,
    #[serde(default)]
    pub swell_dir_16_point: Option<String>,
    #[serde(default)]
    pub swell_period_secs: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawMarineDay {
    #[serde(default)]
    pub hour: Vec<RawMarineHour>,
    #[serde(default)]
    pub tides: Vec<RawTideTable>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawMarineForecast {
    #[serde(default, rename = "forecastday")]
    pub forecast_day: Vec<RawMarineDay>,
}

/// Marine/tide payload, as returned by the provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawMarine {
    pub location: RawMarineLocation,
    pub forecast: RawMarineForecast,
}

/// The three raw payloads after all fetches have settled.
///
/// A `None` slot records a fetch failure for that provider; the normalizer
/// substitutes placeholder or synthetic data, so the pipeline continues.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawBundle {
    pub coords: Coordinates,
    pub current: Option<RawCurrent>,
    pub forecast: Option<RawForecast>,
    pub marine: Option<RawMarine>,
    pub fetched_at: DateTime<Local>,
}

/// HTTP fetcher for the weather and marine providers.
#[derive(Debug, Clone)]
pub struct Fetcher {
    http: reqwest::Client,
    openweather_key: String,
    weatherapi_key: String,
    openweather_base: String,
    weatherapi_base: String,
}

impl Fetcher {
    pub fn new(
        openweather_key: impl Into<String>,
        weatherapi_key: impl Into<String>,
    ) -> Result<Self, FetchError> {
        Self::with_endpoints(openweather_key, weatherapi_key, OPENWEATHER_BASE, WEATHERAPI_BASE)
    }

    /// Construct against alternate base URLs (used by HTTP tests).
    pub fn with_endpoints(
        openweather_key: impl Into<String>,
        weatherapi_key: impl Into<String>,
        openweather_base: impl Into<String>,
        weatherapi_base: impl Into<String>,
    ) -> Result<Self, FetchError> {
        // No request timeout here: a slow provider delays the render rather
        // than failing it. Only device geolocation is deadline-bounded.
        let http = reqwest::Client::builder().build()?;
        Ok(Self {
            http,
            openweather_key: openweather_key.into(),
            weatherapi_key: weatherapi_key.into(),
            openweather_base: openweather_base.into(),
            weatherapi_base: weatherapi_base.into(),
        })
    }

    /// Fetch current weather conditions for the given coordinates.
    pub async fn fetch_current(&self, coords: Coordinates) -> Result<RawCurrent, FetchError> {
        let url = format!("{}/data/2.5/weather", self.openweather_base);
        self.get_json(&url, &self.imperial_query(coords)).await
    }

    /// Fetch the 5-day/3-hour forecast for the given coordinates.
    pub async fn fetch_forecast(&self, coords: Coordinates) -> Result<RawForecast, FetchError> {
        let url = format!("{}/data/2.5/forecast", self.openweather_base);
        self.get_json(&url, &self.imperial_query(coords)).await
    }

    /// Fetch marine conditions (hourly swell/wind plus tide predictions).
    pub async fn fetch_marine(&self, coords: Coordinates) -> Result<RawMarine, FetchError> {
        let url = format!("{}/marine.json", self.weatherapi_base);
        let query = [
            ("key", self.weatherapi_key.clone()),
            ("q", format!("{},{}", coords.latitude, coords.longitude)),
            ("days", "1".to_string()),
            ("aqi", "no".to_string()),
            ("alerts", "no".to_string()),
            ("tide", "yes".to_string()),
        ];
        self.get_json(&url, &query).await
    }

    /// Issue all three fetches concurrently and wait for every one to
    /// settle. No fail-fast: a failed request leaves its slot empty while
    /// the others complete normally.
    pub async fn fetch_bundle(&self, coords: Coordinates) -> RawBundle {
        let (current, forecast, marine) = tokio::join!(
            self.fetch_current(coords),
            self.fetch_forecast(coords),
            self.fetch_marine(coords),
        );

        RawBundle {
            coords,
            current: current.ok(),
            forecast: forecast.ok(),
            marine: marine.ok(),
            fetched_at: Local::now(),
        }
    }

    fn imperial_query(&self, coords: Coordinates) -> [(&'static str, String); 4] {
        [
            ("lat", coords.latitude.to_string()),
            ("lon", coords.longitude.to_string()),
            ("units", "imperial".to_string()),
            ("appid", self.openweather_key.clone()),
        ]
    }

    async fn get_json<T, Q>(&self, url: &str, query: &Q) -> Result<T, FetchError>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let response = self.http.get(url).query(query).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Provider {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(|e| FetchError::Format(e.to_string()))
    }
}

// ---- Bundle cache ----

fn cache_path() -> PathBuf {
    std::env::temp_dir().join(CACHE_FILE)
}

/// Load a cached bundle if it is fresh and was fetched for (roughly) the
/// same coordinates. Returns an error for stale, missing, mismatched, or
/// corrupted cache files.
pub fn load_cached_bundle(coords: Coordinates, ttl_minutes: u64) -> Result<RawBundle, io::Error> {
    load_cached_bundle_from(cache_path(), coords, ttl_minutes)
}

/// Save a bundle for future runs. Failure to write is non-fatal for the
/// caller; the dashboard simply re-fetches next time.
pub fn save_cached_bundle(bundle: &RawBundle) -> Result<(), io::Error> {
    save_cached_bundle_to(cache_path(), bundle)
}

pub fn load_cached_bundle_from<P: AsRef<Path>>(
    path: P,
    coords: Coordinates,
    ttl_minutes: u64,
) -> Result<RawBundle, io::Error> {
    let meta = fs::metadata(&path)?;

    // Check if cache has expired based on file modification time
    let age = SystemTime::now()
        .duration_since(meta.modified()?)
        .map_err(|_| io::Error::other("time error"))?
        .as_secs();
    if age > ttl_minutes * 60 {
        return Err(io::Error::other("stale"));
    }

    let data = fs::read(&path)?;
    let bundle: RawBundle = serde_json::from_slice(&data)?;

    // A bundle cached for a different spot is a miss, not a hit
    if (bundle.coords.latitude - coords.latitude).abs() > 1e-4
        || (bundle.coords.longitude - coords.longitude).abs() > 1e-4
    {
        return Err(io::Error::other("cached for a different location"));
    }

    Ok(bundle)
}

pub fn save_cached_bundle_to<P: AsRef<Path>>(path: P, bundle: &RawBundle) -> Result<(), io::Error> {
    let data = serde_json::to_vec(bundle)?;
    fs::write(path, data)?;
    Ok(())
}
