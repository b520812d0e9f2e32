//! # Dashboard Rendering
//!
//! Binds normalized conditions to structured render output. Rendering is
//! split in two layers:
//!
//! - [`Dashboard::render_all`] produces [`RenderCommand`]s, one per dashboard
//!   region, each carrying the finished lines of text for that region. This
//!   is pure with respect to the dashboard state and the supplied clock, so
//!   tests can assert on exact output.
//! - [`draw_terminal`] is the thin output adapter that prints the commands.
//!
//! Temperatures and wind speeds are stored in their fetched units
//! (Fahrenheit, m/s) and converted only here, at format time. Toggling the
//! unit preference therefore never accumulates rounding error: re-rendering
//! in the original units reproduces the original text exactly.

use crate::forecast::{compute_tide_status, Report};
use crate::{MarineConditions, TideState, Units};
use chrono::{DateTime, Local};

/// Reference beach orientation in degrees when none is configured.
/// 270 models a west-facing beach, where an east wind blows offshore.
pub const DEFAULT_BEACH_ORIENTATION: f64 = 270.0;

/// The dashboard regions, in render order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Region {
    Location,
    CurrentWeather,
    Forecast,
    Tide,
    Swell,
}

impl Region {
    pub fn title(&self) -> &'static str {
        match self {
            Self::Location => "Location",
            Self::CurrentWeather => "Current Conditions",
            Self::Forecast => "Forecast",
            Self::Tide => "Tide",
            Self::Swell => "Swell",
        }
    }
}

/// Finished text for one dashboard region.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderCommand {
    pub region: Region,
    pub lines: Vec<String>,
}

/// Wind blowing toward the beach (onshore) or out to sea (offshore).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shore {
    Onshore,
    Offshore,
}

impl Shore {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Onshore => "Onshore",
            Self::Offshore => "Offshore",
        }
    }
}

/// Classify a wind bearing against the beach orientation.
///
/// Offshore when the bearing is within a quarter turn of the orientation on
/// either side; onshore otherwise. Periodic in both arguments, so bearings
/// outside [0, 360) classify the same as their principal value.
pub fn classify_wind(degrees: f64, beach_orientation: f64) -> Shore {
    let diff = (degrees - beach_orientation).rem_euclid(360.0);
    if diff <= 90.0 || diff >= 270.0 {
        Shore::Offshore
    } else {
        Shore::Onshore
    }
}

pub fn fahrenheit_to_celsius(fahrenheit: f64) -> f64 {
    (fahrenheit - 32.0) * 5.0 / 9.0
}

/// Format a stored Fahrenheit temperature in the preferred units, rounded
/// to the nearest whole degree.
pub fn format_temperature(fahrenheit: f64, units: Units) -> String {
    match units {
        Units::Imperial => format!("{}°F", fahrenheit.round() as i64),
        Units::Metric => format!("{}°C", fahrenheit_to_celsius(fahrenheit).round() as i64),
    }
}

/// Format a stored m/s wind speed in the preferred units.
pub fn format_wind_speed(meters_per_second: f64, units: Units) -> String {
    match units {
        Units::Imperial => format!("{:.1} mph", meters_per_second * 2.237),
        Units::Metric => format!("{:.1} m/s", meters_per_second),
    }
}

/// The bound dashboard: a normalized report plus presentation state.
///
/// The unit preference is an explicit field, not ambient state; every
/// formatting decision flows from it through the render methods.
#[derive(Debug, Clone)]
pub struct Dashboard {
    header: String,
    report: Report,
    units: Units,
    beach_orientation: f64,
}

impl Dashboard {
    pub fn new(header: String, report: Report, units: Units, beach_orientation: f64) -> Self {
        Self {
            header,
            report,
            units,
            beach_orientation,
        }
    }

    pub fn units(&self) -> Units {
        self.units
    }

    /// Switch the unit preference. Takes effect on the next render; the
    /// underlying report keeps its fetched units.
    pub fn set_units(&mut self, units: Units) {
        self.units = units;
    }

    pub fn marine(&self) -> &MarineConditions {
        &self.report.marine
    }

    /// Render every region. Pure in `self` and `now`: rendering twice with
    /// the same inputs produces identical commands.
    pub fn render_all(&self, now: DateTime<Local>) -> Vec<RenderCommand> {
        vec![
            RenderCommand {
                region: Region::Location,
                lines: vec![self.header.clone()],
            },
            RenderCommand {
                region: Region::CurrentWeather,
                lines: self.current_lines(),
            },
            RenderCommand {
                region: Region::Forecast,
                lines: self.forecast_lines(),
            },
            RenderCommand {
                region: Region::Tide,
                lines: self.tide_lines(now),
            },
            RenderCommand {
                region: Region::Swell,
                lines: self.swell_lines(),
            },
        ]
    }

    fn current_lines(&self) -> Vec<String> {
        match &self.report.current {
            None => vec!["Weather data unavailable".to_string()],
            Some(current) => {
                let shore = classify_wind(
                    f64::from(current.wind_direction_deg),
                    self.beach_orientation,
                );
                vec![
                    format!(
                        "{} {}",
                        format_temperature(current.temperature_f, self.units),
                        current.condition
                    ),
                    format!("Humidity: {}%", current.humidity_pct),
                    format!(
                        "Wind: {} ({})",
                        format_wind_speed(current.wind_speed_ms, self.units),
                        shore.label()
                    ),
                ]
            }
        }
    }

    fn forecast_lines(&self) -> Vec<String> {
        if self.report.days.is_empty() {
            return vec!["Unable to load forecast data. Please try again later.".to_string()];
        }
        self.report
            .days
            .iter()
            .map(|day| {
                format!(
                    "{}: {} {}",
                    day.day_label,
                    format_temperature(day.temperature_f, self.units),
                    day.condition
                )
            })
            .collect()
    }

    fn tide_lines(&self, now: DateTime<Local>) -> Vec<String> {
        let status = compute_tide_status(&self.report.marine.tide_events, now);
        let mut lines = match status.state {
            TideState::Unknown => vec!["Tide data unavailable".to_string()],
            state => vec![
                format!("Tide: {}", state.label()),
                status.next_event_label,
            ],
        };
        if self.report.marine.estimated {
            lines.push("Estimated conditions".to_string());
        }
        lines
    }

    fn swell_lines(&self) -> Vec<String> {
        let swell = &self.report.marine.swell;
        if swell.height_ft <= 0.0 {
            return vec!["No swell data".to_string()];
        }
        let shore = classify_wind(f64::from(swell.wind_direction_deg), self.beach_orientation);
        vec![
            format!(
                "Swell: {:.1} ft {} @ {:.1}s",
                swell.height_ft, swell.direction, swell.period_sec
            ),
            format!(
                "Wind: {} ({})",
                format_wind_speed(swell.wind_speed_ms, self.units),
                shore.label()
            ),
        ]
    }
}

/// Print render commands to stdout, one titled block per region.
pub fn draw_terminal(commands: &[RenderCommand]) {
    for command in commands {
        println!("== {} ==", command.region.title());
        for line in &command.lines {
            println!("{}", line);
        }
        println!();
    }
}
