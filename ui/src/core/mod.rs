//! Platform-agnostic building blocks shared by the chart and the views.

pub mod format;
pub mod lap;
pub mod platform;
