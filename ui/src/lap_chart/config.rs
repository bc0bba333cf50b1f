//! Breakpoint tables and palette for the lap chart.
//!
//! Defaults are compiled in; hosts can ship a JSON override that is decoded
//! with [`LapChartConfig::from_json`]. Missing keys fall back to defaults.

use serde::{Deserialize, Serialize};

use crate::core::platform;

use super::domain::{Rgb, FAST_COLOR, SLOW_COLOR};

/// Viewport width class. `Xs` is the mobile layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Breakpoint {
    Xs,
    Sm,
    #[default]
    Md,
    Lg,
}

impl Breakpoint {
    pub fn from_width(px: f64) -> Self {
        match px {
            w if w < 600.0 => Breakpoint::Xs,
            w if w < 900.0 => Breakpoint::Sm,
            w if w < 1200.0 => Breakpoint::Md,
            _ => Breakpoint::Lg,
        }
    }

    /// Breakpoint of the running platform, `Md` when it can't be measured.
    pub fn current() -> Self {
        platform::viewport_width()
            .map(Self::from_width)
            .unwrap_or_default()
    }

    pub fn is_mobile(self) -> bool {
        matches!(self, Breakpoint::Xs)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartDimensions {
    pub width: f64,
    pub height: f64,
    pub margin: Margins,
    /// Gap placed after every bar.
    pub bar_spacing: f64,
    #[serde(default)]
    pub bar_shadow: bool,
}

impl ChartDimensions {
    pub const fn new(
        width: f64,
        height: f64,
        margin: Margins,
        bar_spacing: f64,
        bar_shadow: bool,
    ) -> Self {
        Self {
            width,
            height,
            margin,
            bar_spacing,
            bar_shadow,
        }
    }

    /// y coordinate bars rise from.
    pub fn baseline(&self) -> f64 {
        self.height - self.margin.bottom
    }

    pub fn plot_top(&self) -> f64 {
        self.margin.top
    }

    pub fn plot_height(&self) -> f64 {
        (self.baseline() - self.plot_top()).max(0.0)
    }

    pub fn plot_right(&self) -> f64 {
        self.width - self.margin.right
    }

    /// Width between the left and right margins.
    pub fn plot_width(&self) -> f64 {
        (self.width - self.margin.left - self.margin.right).max(0.0)
    }

    /// Gap after each of `lap_count` bars. Narrows once the configured
    /// spacing would take more than half the plot width.
    pub fn spacing_for(&self, lap_count: usize) -> f64 {
        if lap_count == 0 {
            return self.bar_spacing;
        }
        self.bar_spacing
            .min(self.plot_width() / (2.0 * lap_count as f64))
            .max(0.0)
    }

    /// Width left for bars once margins and per-bar spacing are removed.
    pub fn drawable_width(&self, lap_count: usize) -> f64 {
        self.plot_width() - self.spacing_for(lap_count) * lap_count as f64
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BreakpointTable {
    pub xs: ChartDimensions,
    pub sm: ChartDimensions,
    pub md: ChartDimensions,
    pub lg: ChartDimensions,
}

impl BreakpointTable {
    pub fn get(&self, breakpoint: Breakpoint) -> ChartDimensions {
        match breakpoint {
            Breakpoint::Xs => self.xs,
            Breakpoint::Sm => self.sm,
            Breakpoint::Md => self.md,
            Breakpoint::Lg => self.lg,
        }
    }
}

impl Default for BreakpointTable {
    fn default() -> Self {
        Self {
            xs: ChartDimensions::new(
                340.0,
                220.0,
                Margins {
                    top: 16.0,
                    right: 10.0,
                    bottom: 28.0,
                    left: 40.0,
                },
                1.0,
                true,
            ),
            sm: ChartDimensions::new(
                540.0,
                260.0,
                Margins {
                    top: 20.0,
                    right: 16.0,
                    bottom: 32.0,
                    left: 48.0,
                },
                2.0,
                false,
            ),
            md: ChartDimensions::new(
                700.0,
                300.0,
                Margins {
                    top: 20.0,
                    right: 20.0,
                    bottom: 36.0,
                    left: 52.0,
                },
                2.0,
                false,
            ),
            lg: ChartDimensions::new(
                800.0,
                320.0,
                Margins {
                    top: 20.0,
                    right: 24.0,
                    bottom: 40.0,
                    left: 56.0,
                },
                2.0,
                false,
            ),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Palette {
    pub slow: Rgb,
    pub fast: Rgb,
    /// Bar separator stroke.
    pub stroke: Rgb,
    pub grid: Rgb,
    pub text: Rgb,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            slow: SLOW_COLOR,
            fast: FAST_COLOR,
            stroke: Rgb::new(255, 255, 255),
            grid: Rgb::new(226, 232, 240),
            text: Rgb::new(100, 116, 139),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LapChartConfig {
    pub breakpoints: BreakpointTable,
    pub palette: Palette,
}

impl LapChartConfig {
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    pub fn dimensions(&self, breakpoint: Breakpoint) -> ChartDimensions {
        self.breakpoints.get(breakpoint)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoints_follow_width() {
        assert_eq!(Breakpoint::from_width(375.0), Breakpoint::Xs);
        assert_eq!(Breakpoint::from_width(600.0), Breakpoint::Sm);
        assert_eq!(Breakpoint::from_width(1024.0), Breakpoint::Md);
        assert_eq!(Breakpoint::from_width(1920.0), Breakpoint::Lg);
        assert!(Breakpoint::Xs.is_mobile());
        assert!(!Breakpoint::Lg.is_mobile());
    }

    #[test]
    fn mobile_table_is_smaller_in_every_dimension() {
        let table = BreakpointTable::default();
        let (xs, lg) = (table.get(Breakpoint::Xs), table.get(Breakpoint::Lg));
        assert!(xs.width < lg.width);
        assert!(xs.height < lg.height);
        assert!(xs.margin.left < lg.margin.left);
        assert!(xs.bar_spacing < lg.bar_spacing);
        assert!(xs.bar_shadow && !lg.bar_shadow);
    }

    #[test]
    fn drawable_width_removes_margins_and_spacing() {
        let md = BreakpointTable::default().get(Breakpoint::Md);
        assert_eq!(md.drawable_width(5), 700.0 - 52.0 - 20.0 - 10.0);
        assert_eq!(md.baseline(), 264.0);
        assert_eq!(md.plot_height(), 244.0);
    }

    #[test]
    fn spacing_narrows_when_laps_crowd_the_plot() {
        let xs = BreakpointTable::default().get(Breakpoint::Xs);
        assert_eq!(xs.plot_width(), 290.0);
        assert_eq!(xs.spacing_for(10), xs.bar_spacing);
        // 300 gaps of 1px would not fit in 290px.
        assert_eq!(xs.spacing_for(300), 290.0 / 600.0);
        assert!((xs.drawable_width(300) - 145.0).abs() < 1e-9);
        assert!(xs.drawable_width(5_000) > 0.0);
    }

    #[test]
    fn partial_json_override_keeps_defaults() {
        let config = LapChartConfig::from_json(
            r#"{ "palette": { "slow": {"r":0,"g":0,"b":0}, "fast": {"r":255,"g":0,"b":0},
                 "stroke": {"r":255,"g":255,"b":255}, "grid": {"r":1,"g":1,"b":1},
                 "text": {"r":2,"g":2,"b":2} } }"#,
        )
        .unwrap();
        assert_eq!(config.palette.fast, Rgb::new(255, 0, 0));
        assert_eq!(config.breakpoints, BreakpointTable::default());
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(LapChartConfig::from_json("{ \"palette\": 3 }").is_err());
    }
}
