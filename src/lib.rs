//! # Surf Report Core Library
//!
//! This library implements the data pipeline behind the surf-report dashboard:
//! resolve a location, fetch current weather, a multi-day forecast, and marine
//! conditions for it, normalize the provider payloads into a small set of
//! provider-agnostic records, and render those records as structured text
//! regions for the terminal.
//!
//! ## Pipeline
//!
//! 1. **Location** ([`location`], [`geocode`]): device location with a 5 s
//!    timeout, a geocoded place-name search, or the configured default spot.
//! 2. **Fetch** ([`surf_data`]): three independent HTTP requests (current
//!    weather, 5-day forecast, marine/tide) issued concurrently; all three
//!    settle before anything is rendered.
//! 3. **Normalize** ([`forecast`]): provider payloads become
//!    [`CurrentConditions`], a sequence of [`ForecastDay`]s (one card per
//!    calendar day), tide events and a [`SwellSummary`]. When the marine
//!    provider fails, a deterministic tide model stands in.
//! 4. **Render** ([`render`]): normalized records become render commands
//!    (region → lines of text); a thin adapter prints them.
//!
//! ## Failure policy
//!
//! No fetch failure is fatal. Marine data degrades to the synthetic tide
//! model (marked as estimated); current weather and forecast degrade to
//! placeholder text in their regions. Only an explicit user-initiated place
//! search surfaces its error to the caller.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

// Module declarations
pub mod config;
pub mod forecast;
pub mod geocode;
pub mod location;
pub mod render;
pub mod session;
pub mod spots;
pub mod surf_data;

/// A latitude/longitude pair in decimal degrees.
///
/// Produced by the location resolver and consumed by every fetch operation.
/// Valid latitudes lie in [-90, 90] and longitudes in [-180, 180]; use
/// [`Coordinates::new`] to construct a checked value.
///
/// # Example
/// ```
/// use surf_report_lib::Coordinates;
///
/// let malibu = Coordinates::new(34.0259, -118.7798).unwrap();
/// assert!(Coordinates::new(123.0, 0.0).is_none());
/// assert_eq!(malibu.latitude, 34.0259);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    /// Latitude in decimal degrees, north positive
    pub latitude: f64,
    /// Longitude in decimal degrees, east positive
    pub longitude: f64,
}

impl Coordinates {
    /// Construct coordinates, rejecting values outside the valid ranges.
    pub fn new(latitude: f64, longitude: f64) -> Option<Self> {
        if (-90.0..=90.0).contains(&latitude) && (-180.0..=180.0).contains(&longitude) {
            Some(Self {
                latitude,
                longitude,
            })
        } else {
            None
        }
    }
}

/// A location resolved to coordinates plus a human-readable name.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ResolvedPlace {
    pub coords: Coordinates,
    /// Place name for the dashboard header (e.g. "Malibu")
    pub display_name: String,
    /// ISO country code or empty when unknown
    pub country: String,
}

/// Normalized current weather conditions.
///
/// Temperatures are kept in Fahrenheit as fetched; unit conversion happens
/// only at render time so repeated imperial/metric toggling is lossless.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CurrentConditions {
    pub temperature_f: f64,
    /// Short condition word from the provider (e.g. "Clear", "Rain")
    pub condition: String,
    pub wind_speed_ms: f64,
    pub wind_direction_deg: i32,
    pub humidity_pct: u8,
    /// Provider icon reference (e.g. "01d")
    pub icon: String,
}

/// One forecast card: a single calendar day distilled from 3-hour samples.
///
/// At most six of these are produced per forecast, in chronological order.
/// Labels are unique except for the merged trailing "SAT/SUN" slot (see
/// [`forecast::normalize_forecast`]).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ForecastDay {
    /// "SUN".."SAT", or "SAT/SUN" for the merged weekend slot
    pub day_label: String,
    pub temperature_f: f64,
    pub condition: String,
    pub icon: String,
}

/// High or low water.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TideKind {
    High,
    Low,
}

/// A predicted high- or low-water event.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TideEvent {
    pub kind: TideKind,
    pub time: DateTime<Local>,
    pub height_ft: f64,
}

/// Direction the tide is currently moving.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TideState {
    Rising,
    Falling,
    Unknown,
}

impl TideState {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Rising => "Rising",
            Self::Falling => "Falling",
            Self::Unknown => "Unknown",
        }
    }
}

/// Tide direction plus a label describing the next event
/// (e.g. "Next High: 3:45 PM").
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TideStatus {
    pub state: TideState,
    pub next_event_label: String,
}

/// Swell and marine wind summary for the current hour.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SwellSummary {
    pub height_ft: f64,
    /// 16-point compass direction (e.g. "SE"), or "Unknown"
    pub direction: String,
    pub period_sec: f64,
    pub wind_speed_ms: f64,
    pub wind_direction_deg: i32,
}

/// Normalized marine conditions: tide events plus the swell summary.
///
/// `estimated` is true when the tide events come from the synthetic model
/// rather than provider predictions; the renderer surfaces this the same
/// way the rest of the dashboard marks degraded data.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MarineConditions {
    pub tide_events: Vec<TideEvent>,
    pub swell: SwellSummary,
    pub estimated: bool,
}

/// Unit preference for rendered temperatures and wind speeds.
///
/// Held by the dashboard and threaded through every formatting call rather
/// than kept as ambient global state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Units {
    #[default]
    Imperial,
    Metric,
}
