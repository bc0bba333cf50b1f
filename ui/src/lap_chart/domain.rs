//! Value domain and the slow→fast color gradient.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::gating::MetricKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Linear interpolation towards `to`; `t` is clamped to `[0, 1]`.
    pub fn lerp(self, to: Rgb, t: f64) -> Rgb {
        let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 1.0 };
        let channel = |from: u8, to: u8| {
            (from as f64 + (to as f64 - from as f64) * t).round() as u8
        };
        Rgb::new(
            channel(self.r, to.r),
            channel(self.g, to.g),
            channel(self.b, to.b),
        )
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({},{},{})", self.r, self.g, self.b)
    }
}

pub const SLOW_COLOR: Rgb = Rgb::new(148, 163, 184);
pub const FAST_COLOR: Rgb = Rgb::new(255, 107, 53);

/// Raw value extent of a lap set plus the padded extent used for the axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueDomain {
    pub raw_min: f64,
    pub raw_max: f64,
    pub min: f64,
    pub max: f64,
}

impl ValueDomain {
    /// `None` for an empty value set.
    pub fn from_values(kind: MetricKind, values: &[f64]) -> Option<Self> {
        let (first, rest) = values.split_first()?;
        let (raw_min, raw_max) = rest
            .iter()
            .fold((*first, *first), |(lo, hi), v| (lo.min(*v), hi.max(*v)));
        let pad = kind.domain_padding();

        Some(Self {
            raw_min,
            raw_max,
            min: raw_min - pad,
            max: raw_max + pad,
        })
    }

    pub fn range(&self) -> f64 {
        self.max - self.min
    }

    /// Position of `value` between slowest (0) and fastest (1) lap.
    pub fn performance(&self, kind: MetricKind, value: f64) -> f64 {
        normalise(kind, value, self.raw_min, self.raw_max)
    }

    /// Share of the plot height a bar for `value` fills.
    pub fn height_fraction(&self, kind: MetricKind, value: f64) -> f64 {
        normalise(kind, value, self.min, self.max)
    }
}

fn normalise(kind: MetricKind, value: f64, lo: f64, hi: f64) -> f64 {
    let span = hi - lo;
    // Identical laps collapse the span; they all count as fastest.
    if span <= 0.0 || !span.is_finite() {
        return 1.0;
    }
    let t = match kind {
        MetricKind::Speed => (value - lo) / span,
        MetricKind::Pace => (hi - value) / span,
    };
    t.clamp(0.0, 1.0)
}

pub fn lap_color(kind: MetricKind, domain: &ValueDomain, value: f64, slow: Rgb, fast: Rgb) -> Rgb {
    slow.lerp(fast, domain.performance(kind, value))
}
