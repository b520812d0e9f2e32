//! # Session State
//!
//! Per-user state that survives between runs: the timestamp of the last
//! visit (which drives the returning-visitor greeting) and an optional
//! surfer profile. Both live as small files under a state directory, and a
//! corrupt or missing file is always treated as absent state rather than an
//! error, so a damaged profile never blocks the dashboard.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

const LAST_VISIT_FILE: &str = "last_visit";
const PROFILE_FILE: &str = "profile.json";

const MS_PER_DAY: i64 = 86_400_000;

/// Greeting for a visitor whose previous visit was at `last_visit_ms`
/// (epoch milliseconds), evaluated at `now_ms`.
pub fn greeting(last_visit_ms: Option<i64>, now_ms: i64) -> String {
    match last_visit_ms {
        None => "Welcome! Let us know if you have any questions.".to_string(),
        Some(previous) => {
            let elapsed = now_ms - previous;
            if elapsed < MS_PER_DAY {
                "Back so soon! Awesome!".to_string()
            } else {
                let days = elapsed / MS_PER_DAY;
                if days == 1 {
                    "You last visited 1 day ago.".to_string()
                } else {
                    format!("You last visited {} days ago.", days)
                }
            }
        }
    }
}

/// A saved surfer profile.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurfProfile {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    /// Skill key: "beginner", "intermediate", "advanced" or "pro"
    #[serde(default)]
    pub experience: String,
    #[serde(default)]
    pub home_spot: String,
    /// Board key: "shortboard", "longboard", "fish", "funboard" or "gun"
    #[serde(default)]
    pub board_type: String,
    #[serde(default)]
    pub bio: String,
    /// Preferred wave size keys, e.g. "small", "medium"
    #[serde(default)]
    pub wave_size: Vec<String>,
    /// Notification subscription keys
    #[serde(default)]
    pub notifications: Vec<String>,
    #[serde(default)]
    pub last_updated: String,
}

pub fn experience_label(key: &str) -> &str {
    match key {
        "beginner" => "Beginner",
        "intermediate" => "Intermediate",
        "advanced" => "Advanced",
        "pro" => "Professional",
        other => other,
    }
}

pub fn board_label(key: &str) -> &str {
    match key {
        "shortboard" => "Shortboard",
        "longboard" => "Longboard",
        "fish" => "Fish",
        "funboard" => "Funboard",
        "gun" => "Gun",
        other => other,
    }
}

pub fn wave_size_label(key: &str) -> &str {
    match key {
        "small" => "Small (1-3 ft)",
        "medium" => "Medium (4-6 ft)",
        "large" => "Large (7-10 ft)",
        "huge" => "Huge (10+ ft)",
        other => other,
    }
}

pub fn notification_label(key: &str) -> &str {
    match key {
        "wave-alerts" => "Wave Alerts",
        "weather-updates" => "Weather Updates",
        "events" => "Local Events",
        other => other,
    }
}

/// Render a profile as display lines for the dashboard.
pub fn profile_lines(profile: &SurfProfile) -> Vec<String> {
    let mut lines = vec![format!(
        "{} ({})",
        profile.name,
        experience_label(&profile.experience)
    )];
    if !profile.home_spot.is_empty() {
        lines.push(format!("Home spot: {}", profile.home_spot));
    }
    if !profile.board_type.is_empty() {
        lines.push(format!("Board: {}", board_label(&profile.board_type)));
    }
    if !profile.wave_size.is_empty() {
        let sizes: Vec<&str> = profile
            .wave_size
            .iter()
            .map(|k| wave_size_label(k))
            .collect();
        lines.push(format!("Prefers: {}", sizes.join(", ")));
    }
    if !profile.notifications.is_empty() {
        let subs: Vec<&str> = profile
            .notifications
            .iter()
            .map(|k| notification_label(k))
            .collect();
        lines.push(format!("Subscribed: {}", subs.join(", ")));
    }
    lines
}

/// File-backed session state in a single directory.
#[derive(Debug, Clone)]
pub struct SessionStore {
    dir: PathBuf,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new(".surf-report")
    }
}

impl SessionStore {
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    /// The previous visit timestamp, or `None` when absent or unreadable.
    pub fn last_visit_ms(&self) -> Option<i64> {
        let text = fs::read_to_string(self.dir.join(LAST_VISIT_FILE)).ok()?;
        text.trim().parse().ok()
    }

    /// Record the current visit timestamp for the next run.
    pub fn record_visit(&self, now_ms: i64) -> Result<(), io::Error> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.dir.join(LAST_VISIT_FILE), now_ms.to_string())
    }

    /// The saved profile, or `None` when absent or corrupt.
    pub fn load_profile(&self) -> Option<SurfProfile> {
        let data = fs::read(self.dir.join(PROFILE_FILE)).ok()?;
        serde_json::from_slice(&data).ok()
    }

    pub fn save_profile(&self, profile: &SurfProfile) -> Result<(), io::Error> {
        fs::create_dir_all(&self.dir)?;
        let data = serde_json::to_vec_pretty(profile)?;
        fs::write(self.dir.join(PROFILE_FILE), data)
    }

    /// Remove the saved profile. Deleting an absent profile is not an error.
    pub fn clear_profile(&self) -> Result<(), io::Error> {
        match fs::remove_file(self.dir.join(PROFILE_FILE)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e),
        }
    }
}
