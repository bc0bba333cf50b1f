//! Decides whether a lap set can be charted at all.
//!
//! Every later stage assumes positive, finite timer and distance samples and
//! at least two laps; this is the only place those preconditions are checked.

use thiserror::Error;

use crate::core::lap::{Lap, Sport};

/// Which metric a sport is charted with. Chosen once here so later stages
/// never look at the sport tag again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetricKind {
    /// Seconds per kilometre; lower is faster.
    Pace,
    /// Kilometres per hour; higher is faster.
    Speed,
}

impl MetricKind {
    pub fn for_sport(sport: Sport) -> Option<Self> {
        match sport {
            Sport::Running => Some(MetricKind::Pace),
            Sport::Cycling => Some(MetricKind::Speed),
            Sport::Swimming => None,
        }
    }

    /// Symmetric padding applied around the raw value extent.
    pub fn domain_padding(self) -> f64 {
        match self {
            MetricKind::Pace => 10.0,
            MetricKind::Speed => 2.0,
        }
    }

    pub fn unit(self) -> &'static str {
        match self {
            MetricKind::Pace => "/km",
            MetricKind::Speed => "km/h",
        }
    }

    pub fn noun(self) -> &'static str {
        match self {
            MetricKind::Pace => "pace",
            MetricKind::Speed => "speed",
        }
    }
}

/// Why a lap set was not charted. The chart renders nothing in every case.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InsufficientData {
    #[error("{0} laps are not charted")]
    UnsupportedSport(Sport),
    #[error("need at least two laps, got {0}")]
    TooFewLaps(usize),
    #[error("lap {lap} has no {field}")]
    MissingSample { lap: usize, field: &'static str },
    #[error("lap {lap} has unusable {field} ({value})")]
    NonPositiveSample {
        lap: usize,
        field: &'static str,
        value: f64,
    },
}

/// Validated timer/distance pair for one lap.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LapSample {
    pub index: u32,
    pub timer_s: f64,
    pub distance_m: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GatedLaps {
    pub kind: MetricKind,
    pub samples: Vec<LapSample>,
}

impl GatedLaps {
    pub fn total_distance(&self) -> f64 {
        self.samples.iter().map(|s| s.distance_m).sum()
    }
}

pub fn gate(laps: &[Lap], sport: Sport) -> Result<GatedLaps, InsufficientData> {
    let kind = MetricKind::for_sport(sport).ok_or(InsufficientData::UnsupportedSport(sport))?;

    if laps.len() <= 1 {
        return Err(InsufficientData::TooFewLaps(laps.len()));
    }

    let samples = laps
        .iter()
        .enumerate()
        .map(|(position, lap)| -> Result<LapSample, InsufficientData> {
            Ok(LapSample {
                index: lap.index,
                timer_s: positive(position, "total_timer_time", lap.total_timer_time)?,
                distance_m: positive(position, "total_distance", lap.total_distance)?,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(GatedLaps { kind, samples })
}

fn positive(lap: usize, field: &'static str, value: Option<f64>) -> Result<f64, InsufficientData> {
    match value {
        None => Err(InsufficientData::MissingSample { lap, field }),
        Some(value) if !value.is_finite() || value <= 0.0 => {
            Err(InsufficientData::NonPositiveSample { lap, field, value })
        }
        Some(value) => Ok(value),
    }
}
