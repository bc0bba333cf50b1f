//! Lap records as delivered by the activity backend.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One contiguous timed/distance segment of an activity.
///
/// Sample fields are optional because the backend reports `null` for laps it
/// could not measure; the chart treats any such lap as insufficient data.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Lap {
    pub index: u32,
    /// Seconds from activity start.
    #[serde(default)]
    pub start_time: f64,
    #[serde(default)]
    pub total_elapsed_time: f64,
    /// Moving time in seconds.
    #[serde(default)]
    pub total_timer_time: Option<f64>,
    /// Metres.
    #[serde(default)]
    pub total_distance: Option<f64>,
    #[serde(default)]
    pub max_heart_rate: Option<f64>,
    #[serde(default)]
    pub avg_heart_rate: Option<f64>,
    #[serde(default)]
    pub max_speed: Option<f64>,
}

impl Lap {
    pub fn new(index: u32, total_timer_time: f64, total_distance: f64) -> Self {
        Self {
            index,
            total_elapsed_time: total_timer_time,
            total_timer_time: Some(total_timer_time),
            total_distance: Some(total_distance),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sport {
    Running,
    Cycling,
    Swimming,
}

impl Sport {
    pub const ALL: [Sport; 3] = [Sport::Running, Sport::Cycling, Sport::Swimming];

    pub fn as_str(self) -> &'static str {
        match self {
            Sport::Running => "running",
            Sport::Cycling => "cycling",
            Sport::Swimming => "swimming",
        }
    }
}

impl fmt::Display for Sport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown sport `{0}`")]
pub struct UnknownSport(pub String);

impl FromStr for Sport {
    type Err = UnknownSport;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "running" => Ok(Sport::Running),
            "cycling" => Ok(Sport::Cycling),
            "swimming" => Ok(Sport::Swimming),
            _ => Err(UnknownSport(raw.to_string())),
        }
    }
}
