//! Shared UI crate for Lapboard. The lap chart pipeline and its views live here.

pub mod core;
pub mod lap_chart;
pub mod views;

pub use lap_chart::LapChart;

/// Unified theme, inlined by every launcher.
pub const THEME_CSS: &str = include_str!("../assets/theme/main.css");
