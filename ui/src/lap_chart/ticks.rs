//! Axis ticks: adaptive y-axis steps and thinned x-axis lap labels.

use crate::core::format;

use super::{
    config::ChartDimensions,
    domain::ValueDomain,
    gating::MetricKind,
    layout::{self, LapBar},
};

#[derive(Debug, Clone, PartialEq)]
pub struct AxisTick {
    pub value: f64,
    pub y: f64,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LapLabel {
    /// 1-based position of the lap in the set.
    pub lap_number: usize,
    pub x: f64,
}

/// Tick spacing for a domain range. First matching row wins.
pub fn step_for(kind: MetricKind, range: f64) -> u32 {
    match kind {
        MetricKind::Pace => match range {
            r if r > 240.0 => 60,
            r if r > 120.0 => 30,
            _ => 15,
        },
        MetricKind::Speed => match range {
            r if r > 20.0 => 10,
            r if r > 10.0 => 5,
            _ => 2,
        },
    }
}

/// Smallest vertical gap between two y-axis ticks, in pixels.
pub const MIN_TICK_GAP_PX: f64 = 18.0;

/// Coarser steps taken when the table step crowds the axis. Pace stays on
/// clock-friendly values; past the ladder both grow tenfold.
const PACE_STEPS: [f64; 9] = [15.0, 30.0, 60.0, 120.0, 300.0, 600.0, 900.0, 1800.0, 3600.0];
const SPEED_STEPS: [f64; 6] = [2.0, 5.0, 10.0, 20.0, 50.0, 100.0];

fn coarser_step(kind: MetricKind, step: f64) -> f64 {
    let ladder: &[f64] = match kind {
        MetricKind::Pace => &PACE_STEPS,
        MetricKind::Speed => &SPEED_STEPS,
    };
    ladder
        .iter()
        .copied()
        .find(|candidate| *candidate > step)
        .unwrap_or(step * 10.0)
}

fn multiples_in(domain: &ValueDomain, step: f64) -> (f64, f64) {
    ((domain.min / step).ceil(), (domain.max / step).floor())
}

/// Tick step actually used: the table step, coarsened until at most
/// `max_ticks` multiples fall inside the domain.
pub fn effective_step(kind: MetricKind, domain: &ValueDomain, max_ticks: usize) -> f64 {
    let max_ticks = max_ticks.max(1) as f64;
    let mut step = f64::from(step_for(kind, domain.range()));
    loop {
        let (first, last) = multiples_in(domain, step);
        let count = last - first + 1.0;
        // NaN comes from a non-finite domain; there is nothing to fit.
        if count.is_nan() || count <= max_ticks {
            return step;
        }
        step = coarser_step(kind, step);
    }
}

/// Multiples of the step inside the padded domain. Pace steps are whole
/// seconds, so pace ticks always land on whole seconds.
pub fn tick_values(kind: MetricKind, domain: &ValueDomain, max_ticks: usize) -> Vec<f64> {
    if !domain.min.is_finite() || !domain.max.is_finite() || domain.max < domain.min {
        return Vec::new();
    }
    let step = effective_step(kind, domain, max_ticks);
    let (first, last) = multiples_in(domain, step);
    if last < first {
        return Vec::new();
    }
    (first as i64..=last as i64).map(|k| k as f64 * step).collect()
}

/// How many ticks fit the plot without their labels colliding.
pub fn tick_budget(dims: &ChartDimensions) -> usize {
    ((dims.plot_height() / MIN_TICK_GAP_PX).floor() as usize).max(2)
}

pub fn tick_label(kind: MetricKind, value: f64) -> String {
    match kind {
        MetricKind::Pace => format::format_pace(value),
        MetricKind::Speed => format::format_whole(value),
    }
}

pub fn y_ticks(kind: MetricKind, domain: &ValueDomain, dims: &ChartDimensions) -> Vec<AxisTick> {
    tick_values(kind, domain, tick_budget(dims))
        .into_iter()
        .map(|value| AxisTick {
            value,
            y: layout::value_to_y(kind, domain, dims, value),
            label: tick_label(kind, value),
        })
        .collect()
}

/// Every how many laps an x-axis label is drawn.
pub fn label_interval(lap_count: usize) -> usize {
    match lap_count {
        0..=10 => 1,
        11..=20 => 2,
        21..=30 => 5,
        _ => 10,
    }
}

/// Lap number labels under the bars; first and last are always kept.
pub fn x_labels(bars: &[LapBar]) -> Vec<LapLabel> {
    let interval = label_interval(bars.len());
    let last = bars.len().saturating_sub(1);

    bars.iter()
        .enumerate()
        .filter(|(position, _)| {
            *position == 0 || *position == last || (position + 1) % interval == 0
        })
        .map(|(position, bar)| LapLabel {
            lap_number: position + 1,
            x: bar.center_x(),
        })
        .collect()
}
