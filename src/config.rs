//! # Configuration Management
//!
//! This module handles loading and parsing configuration from the
//! surf-config.toml file. It provides a centralized way to configure API
//! credentials, the default fallback spot, and display options.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Application configuration loaded from surf-config.toml
#[derive(Debug, Deserialize, Serialize)]
pub struct Config {
    /// Provider API credentials
    pub api: ApiConfig,
    /// Default spot used when device location is unavailable
    pub location: DefaultLocationConfig,
    /// Display and caching configuration
    pub display: DisplayConfig,
}

/// API credentials for the weather and marine providers
#[derive(Debug, Deserialize, Serialize)]
pub struct ApiConfig {
    /// OpenWeatherMap key (current weather, forecast, geocoding)
    pub openweather_key: String,
    /// WeatherAPI key (marine/tide conditions)
    pub weatherapi_key: String,
}

/// Fixed fallback location, used when geolocation fails on startup
#[derive(Debug, Deserialize, Serialize)]
pub struct DefaultLocationConfig {
    /// Human-readable spot name for the dashboard header
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// Display and caching configuration
#[derive(Debug, Deserialize, Serialize)]
pub struct DisplayConfig {
    /// Render temperatures and wind speeds in metric units
    pub metric: bool,
    /// Reference beach orientation in degrees for onshore/offshore
    /// classification (270 = beach faces west)
    pub beach_orientation_deg: f64,
    /// Fetched-bundle cache TTL in minutes
    pub cache_ttl_minutes: u64,
    /// How many random spots to feature on the dashboard
    pub featured_spot_count: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api: ApiConfig {
                openweather_key: String::new(),
                weatherapi_key: String::new(),
            },
            location: DefaultLocationConfig {
                name: "Malibu, US".to_string(),
                latitude: 34.0259,
                longitude: -118.7798,
            },
            display: DisplayConfig {
                metric: false,
                beach_orientation_deg: 270.0,
                cache_ttl_minutes: 30,
                featured_spot_count: 3,
            },
        }
    }
}

impl Config {
    /// Load configuration from surf-config.toml in the working directory.
    /// Falls back to default configuration if the file doesn't exist or is invalid.
    pub fn load() -> Self {
        Self::load_from_path("surf-config.toml")
    }

    /// Load configuration from the specified path.
    /// Falls back to default configuration if the file doesn't exist or is invalid.
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Self {
        match fs::read_to_string(&path) {
            Ok(contents) => match toml::from_str::<Config>(&contents) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("Warning: Invalid config file format: {}", e);
                    eprintln!("Using default configuration ({})", Config::default().location.name);
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }

    /// Save the current configuration to surf-config.toml.
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        let contents = toml::to_string_pretty(self)?;
        fs::write("surf-config.toml", contents)?;
        Ok(())
    }
}
