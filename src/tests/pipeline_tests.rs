//! End-to-end pipeline tests: raw bundle in, rendered regions out.

use chrono::{DateTime, Duration, Local, TimeZone};
use surf_report_lib::forecast::normalize_bundle;
use surf_report_lib::render::{Dashboard, Region, DEFAULT_BEACH_ORIENTATION};
use surf_report_lib::surf_data::{
    RawBundle, RawConditionTag, RawCurrent, RawCurrentMain, RawForecast, RawForecastSlot,
    RawSlotMain, RawWind,
};
use surf_report_lib::{Coordinates, Units};

fn local(y: i32, m: u32, d: u32, h: u32) -> DateTime<Local> {
    Local
        .with_ymd_and_hms(y, m, d, h, 0, 0)
        .single()
        .expect("unambiguous local time")
}

fn condition(main: &str, icon: &str) -> RawConditionTag {
    RawConditionTag {
        main: main.to_string(),
        icon: icon.to_string(),
    }
}

fn forecast_slot(time: DateTime<Local>, temp: f64) -> RawForecastSlot {
    RawForecastSlot {
        dt: time.timestamp(),
        main: RawSlotMain { temp },
        weather: vec![condition("Clouds", "03d")],
    }
}

/// Dense 3-hourly forecast feed, the shape a 5-day provider payload has.
fn forecast_feed(start: DateTime<Local>, count: usize) -> RawForecast {
    RawForecast {
        list: (0..count)
            .map(|i| forecast_slot(start + Duration::hours(3 * i as i64), 60.0 + i as f64))
            .collect(),
    }
}

fn sample_current() -> RawCurrent {
    RawCurrent {
        weather: vec![condition("Clear", "01d")],
        main: RawCurrentMain {
            temp: 71.6,
            humidity: 64,
        },
        wind: Some(RawWind {
            speed: 4.5,
            deg: 280,
        }),
    }
}

fn bundle(
    coords: Coordinates,
    current: Option<RawCurrent>,
    forecast: Option<RawForecast>,
    fetched_at: DateTime<Local>,
) -> RawBundle {
    RawBundle {
        coords,
        current,
        forecast,
        marine: None,
        fetched_at,
    }
}

fn region_lines(dashboard: &Dashboard, region: Region, now: DateTime<Local>) -> Vec<String> {
    dashboard
        .render_all(now)
        .into_iter()
        .find(|c| c.region == region)
        .map(|c| c.lines)
        .expect("region always rendered")
}

#[test]
fn full_run_renders_six_cards_with_merged_weekend() {
    // Monday morning with a standard 5-day feed
    let now = local(2024, 6, 10, 8);
    let coords = Coordinates::new(34.0259, -118.7798).unwrap();
    let raw = bundle(
        coords,
        Some(sample_current()),
        Some(forecast_feed(local(2024, 6, 10, 9), 40)),
        now,
    );

    let report = normalize_bundle(&raw, now);
    assert_eq!(report.days.len(), 6);
    assert_eq!(report.days[5].day_label, "SAT/SUN");
    // Marine fetch failed: synthetic tides, flagged as estimated
    assert!(report.marine.estimated);

    let dashboard = Dashboard::new(
        "Malibu, US".to_string(),
        report,
        Units::Imperial,
        DEFAULT_BEACH_ORIENTATION,
    );
    let forecast = region_lines(&dashboard, Region::Forecast, now);
    assert_eq!(forecast.len(), 6);
    assert!(forecast[5].starts_with("SAT/SUN:"));

    let tide = region_lines(&dashboard, Region::Tide, now);
    assert!(tide.contains(&"Estimated conditions".to_string()));
}

#[test]
fn marine_failure_is_deterministic_per_location_and_time() {
    let now = local(2024, 6, 12, 14);
    let coords = Coordinates::new(16.7666, -3.0026).unwrap();
    let raw = bundle(coords, None, None, now);

    let first = normalize_bundle(&raw, now);
    let second = normalize_bundle(&raw, now);
    assert_eq!(first.marine, second.marine);
    assert_eq!(first.marine.tide_events.len(), 2);
    assert!(first.marine.tide_events.iter().all(|e| e.time > now));
}

#[test]
fn stale_morning_feed_renders_the_forecast_placeholder() {
    // Every sample on today's date before noon
    let now = local(2024, 6, 12, 10);
    let coords = Coordinates::new(34.0259, -118.7798).unwrap();
    let feed = RawForecast {
        list: (0..4)
            .map(|i| forecast_slot(local(2024, 6, 12, 3 * i), 55.0))
            .collect(),
    };
    let raw = bundle(coords, Some(sample_current()), Some(feed), now);

    let report = normalize_bundle(&raw, now);
    assert!(report.days.is_empty());

    let dashboard = Dashboard::new(
        "Malibu, US".to_string(),
        report,
        Units::Imperial,
        DEFAULT_BEACH_ORIENTATION,
    );
    let forecast = region_lines(&dashboard, Region::Forecast, now);
    assert_eq!(
        forecast,
        vec!["Unable to load forecast data. Please try again later."]
    );
}

#[test]
fn failed_fetches_still_produce_a_complete_dashboard() {
    let now = local(2024, 6, 12, 8);
    let coords = Coordinates::new(34.0259, -118.7798).unwrap();
    let raw = bundle(coords, None, None, now);

    let report = normalize_bundle(&raw, now);
    let dashboard = Dashboard::new(
        "Malibu, US".to_string(),
        report,
        Units::Imperial,
        DEFAULT_BEACH_ORIENTATION,
    );

    let commands = dashboard.render_all(now);
    assert_eq!(commands.len(), 5);
    assert!(commands.iter().all(|c| !c.lines.is_empty()));
    assert_eq!(
        region_lines(&dashboard, Region::CurrentWeather, now),
        vec!["Weather data unavailable"]
    );
}

#[test]
fn metric_toggle_round_trip_preserves_the_imperial_render() {
    let now = local(2024, 6, 10, 8);
    let coords = Coordinates::new(34.0259, -118.7798).unwrap();
    let raw = bundle(
        coords,
        Some(sample_current()),
        Some(forecast_feed(local(2024, 6, 10, 9), 40)),
        now,
    );

    let mut dashboard = Dashboard::new(
        "Malibu, US".to_string(),
        normalize_bundle(&raw, now),
        Units::Imperial,
        DEFAULT_BEACH_ORIENTATION,
    );
    let imperial = dashboard.render_all(now);

    dashboard.set_units(Units::Metric);
    dashboard.set_units(Units::Imperial);
    assert_eq!(dashboard.render_all(now), imperial);
}
