//! # Surf Spot Directory
//!
//! A small directory of notable surf spots and upcoming contests, loaded
//! from a JSON file. The dashboard features a random selection on each run;
//! the full list can be filtered by difficulty or a free-text search term.
//!
//! The JSON schema uses camelCase keys and is tolerant of missing optional
//! fields, so hand-edited spot files keep loading as they grow.

use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SpotsError {
    #[error("could not read spots file: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed spots file: {0}")]
    Format(#[from] serde_json::Error),
}

/// Where a spot is, split into optional components.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SpotLocation {
    #[serde(default)]
    pub beach: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub country: String,
}

/// One entry in the spot directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurfSpot {
    #[serde(default)]
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub location: SpotLocation,
    /// Free-form skill description, e.g. "Beginner to Intermediate"
    #[serde(default)]
    pub difficulty: String,
    #[serde(default)]
    pub wave_type: String,
    #[serde(default)]
    pub best_season: String,
    #[serde(default)]
    pub avg_wave_height: String,
    #[serde(default)]
    pub max_wave_height: String,
    #[serde(default)]
    pub surf_consistency: String,
    #[serde(default)]
    pub crowd_level: String,
    #[serde(default)]
    pub img_url: String,
    #[serde(default)]
    pub description: String,
}

impl SurfSpot {
    /// The non-empty location components joined as one line.
    pub fn location_line(&self) -> String {
        [
            &self.location.beach,
            &self.location.city,
            &self.location.state,
            &self.location.country,
        ]
        .iter()
        .filter(|part| !part.is_empty())
        .map(|part| part.as_str())
        .collect::<Vec<_>>()
        .join(", ")
    }

    /// Compact conditions summary for the featured-spot card.
    pub fn conditions_line(&self) -> String {
        format!(
            "{} • {} • Avg: {}",
            self.difficulty, self.wave_type, self.avg_wave_height
        )
    }
}

/// An upcoming surf contest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SurfEvent {
    pub name: String,
    pub location: String,
    pub dates: String,
}

#[derive(Debug, Deserialize)]
struct SpotsFile {
    #[serde(rename = "surfSpots")]
    surf_spots: Vec<SurfSpot>,
}

/// Load the spot directory from a JSON file.
pub fn load_spots<P: AsRef<Path>>(path: P) -> Result<Vec<SurfSpot>, SpotsError> {
    let data = fs::read_to_string(path)?;
    let file: SpotsFile = serde_json::from_str(&data)?;
    Ok(file.surf_spots)
}

/// Pick up to `count` spots at random, without repeats.
pub fn pick_random(spots: &[SurfSpot], count: usize) -> Vec<SurfSpot> {
    let mut pool: Vec<SurfSpot> = spots.to_vec();
    pool.shuffle(&mut rand::rng());
    pool.truncate(count);
    pool
}

/// Filter by difficulty. "all" (or empty) passes everything; otherwise a
/// case-insensitive substring match against the spot's difficulty text, so
/// "beginner" matches "Beginner to Intermediate".
pub fn filter_by_difficulty<'a>(spots: &'a [SurfSpot], difficulty: &str) -> Vec<&'a SurfSpot> {
    let wanted = difficulty.trim().to_lowercase();
    spots
        .iter()
        .filter(|spot| {
            wanted.is_empty()
                || wanted == "all"
                || spot.difficulty.to_lowercase().contains(&wanted)
        })
        .collect()
}

/// Free-text search over spot names and locations. An empty term matches
/// everything.
pub fn filter_by_term<'a>(spots: &'a [SurfSpot], term: &str) -> Vec<&'a SurfSpot> {
    let wanted = term.trim().to_lowercase();
    spots
        .iter()
        .filter(|spot| {
            wanted.is_empty()
                || spot.name.to_lowercase().contains(&wanted)
                || spot.location_line().to_lowercase().contains(&wanted)
        })
        .collect()
}

/// Built-in fallback directory, used when no spots file can be loaded.
pub fn sample_spots() -> Vec<SurfSpot> {
    vec![
        SurfSpot {
            id: 1,
            name: "Surfrider Beach".to_string(),
            location: SpotLocation {
                beach: "Surfrider".to_string(),
                city: "Malibu".to_string(),
                state: "California".to_string(),
                country: "USA".to_string(),
            },
            difficulty: "Beginner to Intermediate".to_string(),
            wave_type: "Point Break".to_string(),
            best_season: "Summer".to_string(),
            avg_wave_height: "3-5 ft".to_string(),
            max_wave_height: "8 ft".to_string(),
            surf_consistency: "Consistent".to_string(),
            crowd_level: "Crowded".to_string(),
            img_url: String::new(),
            description: "Long, peeling right-handers over a cobblestone point.".to_string(),
        },
        SurfSpot {
            id: 2,
            name: "Pipeline".to_string(),
            location: SpotLocation {
                beach: "Ehukai".to_string(),
                city: "Haleiwa".to_string(),
                state: "Hawaii".to_string(),
                country: "USA".to_string(),
            },
            difficulty: "Expert".to_string(),
            wave_type: "Reef Break".to_string(),
            best_season: "Winter".to_string(),
            avg_wave_height: "6-10 ft".to_string(),
            max_wave_height: "20 ft".to_string(),
            surf_consistency: "Seasonal".to_string(),
            crowd_level: "Very Crowded".to_string(),
            img_url: String::new(),
            description: "Heavy, hollow lefts breaking over shallow reef.".to_string(),
        },
        SurfSpot {
            id: 3,
            name: "Bells Beach".to_string(),
            location: SpotLocation {
                beach: "Bells".to_string(),
                city: "Torquay".to_string(),
                state: "Victoria".to_string(),
                country: "Australia".to_string(),
            },
            difficulty: "Intermediate to Advanced".to_string(),
            wave_type: "Point Break".to_string(),
            best_season: "Autumn".to_string(),
            avg_wave_height: "4-6 ft".to_string(),
            max_wave_height: "15 ft".to_string(),
            surf_consistency: "Consistent".to_string(),
            crowd_level: "Moderate".to_string(),
            img_url: String::new(),
            description: "Long walls on a swell-magnet point.".to_string(),
        },
    ]
}

/// Built-in contest calendar.
pub fn sample_events() -> Vec<SurfEvent> {
    vec![
        SurfEvent {
            name: "US Open of Surfing".to_string(),
            location: "Huntington Beach, CA".to_string(),
            dates: "August 3-11".to_string(),
        },
        SurfEvent {
            name: "Big Wave Challenge".to_string(),
            location: "Mavericks, CA".to_string(),
            dates: "November 15-30".to_string(),
        },
        SurfEvent {
            name: "Gold Coast Pro".to_string(),
            location: "Gold Coast, Australia".to_string(),
            dates: "May 7-15".to_string(),
        },
    ]
}
