//! Lap performance chart.
//!
//! The whole pipeline is a pure function of `(laps, sport, dimensions,
//! palette)`:
//!
//! ```text
//! laps + sport ─▶ gating ─▶ metrics ─▶ domain ─▶ layout ─▶ bars
//!                                        └──────▶ ticks
//! ```
//!
//! [`LapChartModel::compute`] runs it from scratch; the [`LapChart`]
//! component calls it on every render and only keeps tooltip state of its
//! own.

pub mod config;
pub mod domain;
pub mod gating;
pub mod interaction;
pub mod layout;
pub mod metrics;
pub mod ticks;

mod view;
pub use view::LapChart;

use crate::core::lap::{Lap, Sport};

use config::{ChartDimensions, Palette};
use domain::ValueDomain;
use gating::{InsufficientData, MetricKind};
use interaction::{PointerInput, Tooltip};
use layout::LapBar;
use ticks::{AxisTick, LapLabel};

/// Everything needed to draw one lap chart.
#[derive(Debug, Clone, PartialEq)]
pub struct LapChartModel {
    pub kind: MetricKind,
    pub dims: ChartDimensions,
    pub palette: Palette,
    pub domain: ValueDomain,
    pub bars: Vec<LapBar>,
    pub y_ticks: Vec<AxisTick>,
    pub x_labels: Vec<LapLabel>,
    pub aria_label: String,
}

impl LapChartModel {
    pub fn compute(
        laps: &[Lap],
        sport: Sport,
        dims: ChartDimensions,
        palette: Palette,
    ) -> Result<Self, InsufficientData> {
        let gated = gating::gate(laps, sport)?;
        let kind = gated.kind;

        let values = metrics::compute(kind, &gated.samples);
        let raw: Vec<f64> = values.iter().map(|v| v.value).collect();
        let domain = ValueDomain::from_values(kind, &raw)
            .ok_or(InsufficientData::TooFewLaps(raw.len()))?;

        let bars = layout::layout_bars(kind, &gated.samples, &values, &domain, &dims, &palette);
        let y_ticks = ticks::y_ticks(kind, &domain, &dims);
        let x_labels = ticks::x_labels(&bars);

        tracing::trace!(
            laps = bars.len(),
            ticks = y_ticks.len(),
            labels = x_labels.len(),
            "lap chart computed"
        );

        Ok(Self {
            kind,
            dims,
            palette,
            domain,
            aria_label: aria_label(kind, bars.len()),
            bars,
            y_ticks,
            x_labels,
        })
    }

    /// Like [`compute`](Self::compute) but absorbs insufficient data into
    /// `None`, which is how the view consumes it.
    pub fn build(laps: &[Lap], sport: Sport, dims: ChartDimensions, palette: Palette) -> Option<Self> {
        match Self::compute(laps, sport, dims, palette) {
            Ok(model) => Some(model),
            Err(reason) => {
                tracing::debug!(%reason, %sport, laps = laps.len(), "lap chart suppressed");
                None
            }
        }
    }

    pub fn tooltip_at(&self, x: f64, y: f64) -> Option<Tooltip> {
        interaction::tooltip_for(&self.bars, self.kind.unit(), x, y)
    }

    pub fn tooltip_after(&self, input: PointerInput) -> Option<Tooltip> {
        interaction::next_tooltip(&self.bars, self.kind.unit(), input)
    }
}

pub fn aria_label(kind: MetricKind, lap_count: usize) -> String {
    format!("Lap {} chart showing {lap_count} laps", kind.noun())
}
