//! Invariants of the lap chart pipeline over a spread of generated lap sets.

use ui::core::lap::{Lap, Sport};
use ui::lap_chart::{
    config::{Breakpoint, LapChartConfig},
    domain::{FAST_COLOR, SLOW_COLOR},
    LapChartModel,
};

const BREAKPOINTS: [Breakpoint; 4] = [
    Breakpoint::Xs,
    Breakpoint::Sm,
    Breakpoint::Md,
    Breakpoint::Lg,
];

/// Deterministic lap sets with uneven distances and times.
fn lap_sets() -> Vec<Vec<Lap>> {
    let mut sets = Vec::new();
    for count in [2u32, 3, 7, 12, 26, 41, 320] {
        let laps = (0..count)
            .map(|i| {
                let distance = 400.0 + f64::from((i * 137) % 900);
                let seconds_per_km = 240.0 + f64::from((i * 53) % 150);
                Lap::new(i, seconds_per_km * distance / 1000.0, distance)
            })
            .collect();
        sets.push(laps);
    }
    sets
}

fn model(laps: &[Lap], sport: Sport, breakpoint: Breakpoint) -> LapChartModel {
    let config = LapChartConfig::default();
    LapChartModel::compute(laps, sport, config.dimensions(breakpoint), config.palette).unwrap()
}

#[test]
fn widths_plus_spacing_fill_the_plot() {
    for laps in lap_sets() {
        for sport in [Sport::Running, Sport::Cycling] {
            for breakpoint in BREAKPOINTS {
                let chart = model(&laps, sport, breakpoint);
                let dims = chart.dims;
                let used: f64 = chart.bars.iter().map(|b| b.width).sum::<f64>()
                    + dims.spacing_for(chart.bars.len()) * chart.bars.len() as f64;
                let available = dims.width - dims.margin.left - dims.margin.right;
                assert!((used - available).abs() < 1e-6, "{used} vs {available}");
            }
        }
    }
}

#[test]
fn bars_stay_between_the_margins() {
    for laps in lap_sets() {
        for breakpoint in BREAKPOINTS {
            let chart = model(&laps, Sport::Cycling, breakpoint);
            let dims = chart.dims;
            let first = chart.bars.first().unwrap();
            let last = chart.bars.last().unwrap();
            assert!(first.x >= dims.margin.left);
            assert!(
                last.right() <= dims.plot_right() + 1e-6,
                "{} laps at {breakpoint:?}: {} > {}",
                laps.len(),
                last.right(),
                dims.plot_right()
            );
        }
    }
}

#[test]
fn bars_never_move_left() {
    for laps in lap_sets() {
        let chart = model(&laps, Sport::Running, Breakpoint::Md);
        assert!(chart.bars.windows(2).all(|w| w[1].x >= w[0].x));
        assert_eq!(chart.bars.len(), laps.len());
    }
}

#[test]
fn fastest_and_slowest_laps_take_endpoint_colors() {
    for laps in lap_sets() {
        for sport in [Sport::Running, Sport::Cycling] {
            let chart = model(&laps, sport, Breakpoint::Md);
            let fastest = match sport {
                Sport::Running => chart
                    .bars
                    .iter()
                    .min_by(|a, b| a.value.total_cmp(&b.value)),
                _ => chart
                    .bars
                    .iter()
                    .max_by(|a, b| a.value.total_cmp(&b.value)),
            }
            .unwrap();
            let slowest = match sport {
                Sport::Running => chart
                    .bars
                    .iter()
                    .max_by(|a, b| a.value.total_cmp(&b.value)),
                _ => chart
                    .bars
                    .iter()
                    .min_by(|a, b| a.value.total_cmp(&b.value)),
            }
            .unwrap();
            assert_eq!(fastest.color, FAST_COLOR);
            assert_eq!(slowest.color, SLOW_COLOR);
        }
    }
}

#[test]
fn color_rises_with_performance() {
    for laps in lap_sets() {
        let chart = model(&laps, Sport::Cycling, Breakpoint::Md);
        let mut by_speed = chart.bars.clone();
        by_speed.sort_by(|a, b| a.value.total_cmp(&b.value));
        assert!(by_speed.windows(2).all(|w| w[0].color.r <= w[1].color.r));
        assert!(by_speed.windows(2).all(|w| w[0].color.b >= w[1].color.b));
    }
}

#[test]
fn ticks_stay_inside_the_plot() {
    for laps in lap_sets() {
        for sport in [Sport::Running, Sport::Cycling] {
            let chart = model(&laps, sport, Breakpoint::Sm);
            assert!(!chart.y_ticks.is_empty());
            for tick in &chart.y_ticks {
                assert!(tick.value >= chart.domain.min && tick.value <= chart.domain.max);
                assert!(tick.y >= chart.dims.plot_top() - 1e-9);
                assert!(tick.y <= chart.dims.baseline() + 1e-9);
            }
        }
    }
}

#[test]
fn first_and_last_laps_are_always_labelled() {
    for laps in lap_sets() {
        let chart = model(&laps, Sport::Running, Breakpoint::Lg);
        let numbers: Vec<usize> = chart.x_labels.iter().map(|l| l.lap_number).collect();
        assert_eq!(numbers.first(), Some(&1));
        assert_eq!(numbers.last(), Some(&laps.len()));
    }
}

#[test]
fn swimming_is_suppressed_for_every_set() {
    let config = LapChartConfig::default();
    for laps in lap_sets() {
        assert!(LapChartModel::build(
            &laps,
            Sport::Swimming,
            config.dimensions(Breakpoint::Md),
            config.palette
        )
        .is_none());
    }
}
