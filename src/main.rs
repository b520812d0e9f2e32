//! # Surf Report Application Entry Point
//!
//! This binary wires the pipeline together: greet the visitor, resolve a
//! location, fetch conditions (cache-first), normalize, and render the
//! dashboard to the terminal, followed by a few featured surf spots and the
//! contest calendar.
//!
//! Diagnostics go to stderr so the rendered dashboard on stdout stays clean.

// Test modules
#[cfg(test)]
mod tests;

use std::env;

use chrono::Local;
use surf_report_lib::config::Config;
use surf_report_lib::forecast::normalize_bundle;
use surf_report_lib::geocode::Geocoder;
use surf_report_lib::location::{resolve_default, resolve_from_device, SystemLocator};
use surf_report_lib::render::{draw_terminal, Dashboard};
use surf_report_lib::session::{greeting, profile_lines, SessionStore};
use surf_report_lib::spots::{load_spots, pick_random, sample_events, sample_spots, SurfSpot};
use surf_report_lib::surf_data::{load_cached_bundle, save_cached_bundle, Fetcher, RawBundle};
use surf_report_lib::{Coordinates, ResolvedPlace, Units};

const DEFAULT_SPOTS_FILE: &str = "data/surf-spots.json";

/// Parsed command line options.
#[derive(Debug, Default, PartialEq)]
pub struct Cli {
    /// Render temperatures and wind speeds in metric units
    pub metric: bool,
    /// Skip the bundle cache and fetch fresh data
    pub no_cache: bool,
    /// Alternate surf-spots file
    pub spots_path: Option<String>,
    /// Place-name search; absent means automatic location resolution
    pub query: Option<String>,
}

impl Cli {
    pub fn parse<I: Iterator<Item = String>>(mut args: I) -> Self {
        let mut cli = Cli::default();
        let mut query_words: Vec<String> = Vec::new();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--metric" => cli.metric = true,
                "--no-cache" => cli.no_cache = true,
                "--spots" => cli.spots_path = args.next(),
                _ => query_words.push(arg),
            }
        }

        if !query_words.is_empty() {
            cli.query = Some(query_words.join(" "));
        }
        cli
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse(env::args().skip(1));
    let config = Config::load();

    // Single runtime for the whole fetch phase
    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(run(cli, config))
}

async fn run(cli: Cli, config: Config) -> anyhow::Result<()> {
    let now = Local::now();
    let store = SessionStore::default();

    println!("{}", greeting(store.last_visit_ms(), now.timestamp_millis()));
    println!();
    if let Err(e) = store.record_visit(now.timestamp_millis()) {
        eprintln!("Could not record this visit: {}", e);
    }

    let geocoder = Geocoder::new(&config.api.openweather_key)?;

    // An explicit search surfaces its failure; automatic resolution always
    // falls through to the configured default spot.
    let user_initiated = cli.query.is_some();
    let place = match &cli.query {
        Some(query) => geocoder.find_place(query).await?,
        None => match resolve_from_device(&SystemLocator).await {
            Ok(coords) => {
                let display_name = geocoder
                    .place_name(coords)
                    .await
                    .unwrap_or_else(|| "Current Location".to_string());
                ResolvedPlace {
                    coords,
                    display_name,
                    country: String::new(),
                }
            }
            Err(e) => {
                eprintln!("Device location unavailable: {}", e);
                eprintln!("Using default spot: {}", config.location.name);
                resolve_default(&config)
            }
        },
    };

    let header = if place.country.is_empty() {
        place.display_name.clone()
    } else {
        format!("{}, {}", place.display_name, place.country)
    };

    let fetcher = Fetcher::new(&config.api.openweather_key, &config.api.weatherapi_key)?;
    let use_cache = !cli.no_cache && !user_initiated;
    let bundle = if use_cache {
        match load_cached_bundle(place.coords, config.display.cache_ttl_minutes) {
            Ok(bundle) => bundle,
            Err(_) => fetch_and_cache(&fetcher, place.coords).await,
        }
    } else {
        fetch_and_cache(&fetcher, place.coords).await
    };

    let report = normalize_bundle(&bundle, now);
    if report.current.is_none() {
        eprintln!("Current weather unavailable; showing placeholder.");
    }
    if report.days.is_empty() {
        eprintln!("Forecast unavailable; showing placeholder.");
    }
    if report.marine.estimated {
        eprintln!("Marine provider unavailable; tide times are estimated.");
    }

    let units = if cli.metric || config.display.metric {
        Units::Metric
    } else {
        Units::Imperial
    };
    let dashboard = Dashboard::new(header, report, units, config.display.beach_orientation_deg);
    draw_terminal(&dashboard.render_all(now));

    let spots = load_spot_directory(cli.spots_path.as_deref());
    let featured = pick_random(&spots, config.display.featured_spot_count);
    println!("== Featured Spots ==");
    for spot in &featured {
        println!("{} ({})", spot.name, spot.location_line());
        println!("  {}", spot.conditions_line());
    }
    println!();

    println!("== Upcoming Events ==");
    for event in sample_events() {
        println!("{} - {}, {}", event.name, event.location, event.dates);
    }

    if let Some(profile) = store.load_profile() {
        println!();
        println!("== Your Profile ==");
        for line in profile_lines(&profile) {
            println!("{}", line);
        }
    }

    Ok(())
}

async fn fetch_and_cache(fetcher: &Fetcher, coords: Coordinates) -> RawBundle {
    let bundle = fetcher.fetch_bundle(coords).await;
    // Cache write failures only cost a re-fetch next run
    if let Err(e) = save_cached_bundle(&bundle) {
        eprintln!("Could not cache fetched data: {}", e);
    }
    bundle
}

fn load_spot_directory(path: Option<&str>) -> Vec<SurfSpot> {
    let path = path.unwrap_or(DEFAULT_SPOTS_FILE);
    match load_spots(path) {
        Ok(spots) => spots,
        Err(e) => {
            eprintln!("Could not load {}: {}", path, e);
            eprintln!("Using the built-in spot directory");
            sample_spots()
        }
    }
}
