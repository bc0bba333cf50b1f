//! Bar geometry. Widths follow each lap's share of total distance, so the
//! chart reads as pacing over ground covered rather than per lap count.

use super::{
    config::{ChartDimensions, Palette},
    domain::{self, Rgb, ValueDomain},
    gating::{LapSample, MetricKind},
    metrics::LapValue,
};

/// One rendered bar: the lap's metric plus its pixel rectangle.
#[derive(Debug, Clone, PartialEq)]
pub struct LapBar {
    pub index: u32,
    pub value: f64,
    pub display_text: String,
    pub distance_m: f64,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub color: Rgb,
}

impl LapBar {
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn center_x(&self) -> f64 {
        self.x + self.width / 2.0
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x && x <= self.right() && y >= self.y && y <= self.bottom()
    }
}

/// Top edge of a bar for `value`; shared with the tick generator so grid
/// lines and bar tops agree.
pub fn value_to_y(kind: MetricKind, domain: &ValueDomain, dims: &ChartDimensions, value: f64) -> f64 {
    dims.baseline() - domain.height_fraction(kind, value) * dims.plot_height()
}

pub fn layout_bars(
    kind: MetricKind,
    samples: &[LapSample],
    values: &[LapValue],
    domain: &ValueDomain,
    dims: &ChartDimensions,
    palette: &Palette,
) -> Vec<LapBar> {
    let total_distance: f64 = samples.iter().map(|s| s.distance_m).sum();
    let spacing = dims.spacing_for(samples.len());
    let drawable = dims.drawable_width(samples.len());
    let baseline = dims.baseline();

    let mut cursor = dims.margin.left;
    samples
        .iter()
        .zip(values)
        .map(|(sample, metric)| {
            let width = if total_distance > 0.0 {
                sample.distance_m / total_distance * drawable
            } else {
                0.0
            };
            let y = value_to_y(kind, domain, dims, metric.value);
            let bar = LapBar {
                index: metric.index,
                value: metric.value,
                display_text: metric.display_text.clone(),
                distance_m: sample.distance_m,
                x: cursor,
                y,
                width,
                height: baseline - y,
                color: domain::lap_color(kind, domain, metric.value, palette.slow, palette.fast),
            };
            cursor += width + spacing;
            bar
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lap_chart::{
        config::{Breakpoint, BreakpointTable},
        metrics,
    };

    fn bars_for(kind: MetricKind, pairs: &[(f64, f64)], dims: &ChartDimensions) -> Vec<LapBar> {
        let samples: Vec<LapSample> = pairs
            .iter()
            .enumerate()
            .map(|(i, (timer_s, distance_m))| LapSample {
                index: i as u32,
                timer_s: *timer_s,
                distance_m: *distance_m,
            })
            .collect();
        let values = metrics::compute(kind, &samples);
        let raw: Vec<f64> = values.iter().map(|v| v.value).collect();
        let domain = ValueDomain::from_values(kind, &raw).unwrap();
        layout_bars(kind, &samples, &values, &domain, dims, &Palette::default())
    }

    #[test]
    fn widths_and_spacing_fill_the_drawable_width() {
        for breakpoint in [Breakpoint::Xs, Breakpoint::Sm, Breakpoint::Md, Breakpoint::Lg] {
            let dims = BreakpointTable::default().get(breakpoint);
            let bars = bars_for(
                MetricKind::Pace,
                &[(300.0, 1000.0), (150.0, 500.0), (640.0, 2000.0), (95.0, 321.4)],
                &dims,
            );
            let spacing = dims.spacing_for(bars.len());
            let used: f64 = bars.iter().map(|b| b.width + spacing).sum();
            let available = dims.plot_width();
            assert!((used - available).abs() < 1e-6, "{breakpoint:?}: {used} vs {available}");
        }
    }

    #[test]
    fn hundreds_of_laps_stay_inside_the_margins() {
        let dims = BreakpointTable::default().get(Breakpoint::Xs);
        let pairs: Vec<(f64, f64)> = (0..300).map(|i| (300.0 + f64::from(i % 7), 1000.0)).collect();
        let bars = bars_for(MetricKind::Pace, &pairs, &dims);
        let last = bars.last().unwrap();
        assert!(last.right() <= dims.plot_right() + 1e-6, "{} > {}", last.right(), dims.plot_right());
        assert!(bars.iter().all(|b| b.width > 0.0));
    }

    #[test]
    fn width_follows_distance_share() {
        let dims = BreakpointTable::default().get(Breakpoint::Md);
        let bars = bars_for(MetricKind::Speed, &[(100.0, 1000.0), (200.0, 3000.0)], &dims);
        assert!((bars[1].width / bars[0].width - 3.0).abs() < 1e-9);
    }

    #[test]
    fn bars_advance_left_to_right_in_lap_order() {
        let dims = BreakpointTable::default().get(Breakpoint::Lg);
        let bars = bars_for(
            MetricKind::Pace,
            &[(330.0, 1000.0), (290.0, 1000.0), (310.0, 1000.0)],
            &dims,
        );
        assert_eq!(bars[0].x, dims.margin.left);
        assert!(bars.windows(2).all(|w| w[1].x >= w[0].right()));
        assert_eq!(bars.iter().map(|b| b.index).collect::<Vec<_>>(), vec![0, 1, 2]);
    }

    #[test]
    fn faster_laps_stand_taller() {
        let dims = BreakpointTable::default().get(Breakpoint::Md);
        let pace = bars_for(MetricKind::Pace, &[(330.0, 1000.0), (290.0, 1000.0)], &dims);
        assert!(pace[1].height > pace[0].height);

        let speed = bars_for(MetricKind::Speed, &[(100.0, 1000.0), (120.0, 1000.0)], &dims);
        assert!(speed[0].height > speed[1].height);

        for bar in pace.iter().chain(&speed) {
            assert!((bar.bottom() - dims.baseline()).abs() < 1e-9);
            assert!(bar.y >= dims.plot_top());
        }
    }

    #[test]
    fn contains_checks_both_axes() {
        let dims = BreakpointTable::default().get(Breakpoint::Md);
        let bars = bars_for(MetricKind::Pace, &[(300.0, 1000.0), (320.0, 1000.0)], &dims);
        let bar = &bars[0];
        assert!(bar.contains(bar.center_x(), bar.bottom() - 1.0));
        assert!(!bar.contains(bar.center_x(), bar.y - 1.0));
        assert!(!bar.contains(bar.right() + 0.5, bar.bottom() - 1.0));
    }
}
