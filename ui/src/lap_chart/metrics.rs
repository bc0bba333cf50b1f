//! Per-lap performance metric.

use crate::core::format;

use super::gating::{LapSample, MetricKind};

#[derive(Debug, Clone, PartialEq)]
pub struct LapValue {
    pub index: u32,
    pub value: f64,
    pub display_text: String,
}

/// Pace in s/km or speed in km/h. Expects a gated sample.
pub fn lap_value(kind: MetricKind, sample: &LapSample) -> f64 {
    match kind {
        MetricKind::Pace => sample.timer_s / (sample.distance_m / 1000.0),
        MetricKind::Speed => (sample.distance_m / sample.timer_s) * 3.6,
    }
}

pub fn display_text(kind: MetricKind, value: f64) -> String {
    match kind {
        MetricKind::Pace => format::format_pace(value),
        MetricKind::Speed => format::format_speed(value),
    }
}

pub fn compute(kind: MetricKind, samples: &[LapSample]) -> Vec<LapValue> {
    samples
        .iter()
        .map(|sample| {
            let value = lap_value(kind, sample);
            LapValue {
                index: sample.index,
                value,
                display_text: display_text(kind, value),
            }
        })
        .collect()
}
