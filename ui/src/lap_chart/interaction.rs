//! Tooltip state driven by pointer and touch input.
//!
//! Nothing here feeds back into geometry; a tooltip is a transient view of
//! one bar's precomputed text.

use super::{config::Breakpoint, layout::LapBar};

/// Pixel offset between the pointer and the tooltip's top-left corner.
pub const TOOLTIP_OFFSET: f64 = 5.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Tooltip {
    /// Position of the hovered bar in the rendered set.
    pub bar: usize,
    pub x: f64,
    pub y: f64,
    pub text: String,
}

/// Bar under the point, if any. Gaps between bars and the margins miss.
pub fn hit_test(bars: &[LapBar], x: f64, y: f64) -> Option<usize> {
    bars.iter().position(|bar| bar.contains(x, y))
}

pub fn tooltip_for(bars: &[LapBar], unit: &str, x: f64, y: f64) -> Option<Tooltip> {
    let position = hit_test(bars, x, y)?;
    let bar = &bars[position];
    Some(Tooltip {
        bar: position,
        x: x + TOOLTIP_OFFSET,
        y: y + TOOLTIP_OFFSET,
        text: format!("Lap {} · {} {unit}", position + 1, bar.display_text),
    })
}

/// Input the chart surface reacts to, in the coordinates each event carries.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerInput {
    /// Mouse position relative to the surface.
    Move { x: f64, y: f64 },
    Leave,
    /// Touch position in client space, with the surface's client origin
    /// measured when the touch landed.
    TouchStart { client: (f64, f64), origin: (f64, f64) },
    TouchEnd,
}

/// Client-space point translated into surface coordinates.
pub fn surface_point(client: (f64, f64), origin: (f64, f64)) -> (f64, f64) {
    (client.0 - origin.0, client.1 - origin.1)
}

/// Tooltip shown after `input`. Leaving the surface or lifting a finger
/// always hides it.
pub fn next_tooltip(bars: &[LapBar], unit: &str, input: PointerInput) -> Option<Tooltip> {
    match input {
        PointerInput::Move { x, y } => tooltip_for(bars, unit, x, y),
        PointerInput::TouchStart { client, origin } => {
            let (x, y) = surface_point(client, origin);
            tooltip_for(bars, unit, x, y)
        }
        PointerInput::Leave | PointerInput::TouchEnd => None,
    }
}

/// Tooltip presentation. Touch layouts get a padded, centred panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TooltipStyle {
    Pointer,
    Touch,
}

impl TooltipStyle {
    pub fn for_mobile(mobile: bool) -> Self {
        if mobile {
            TooltipStyle::Touch
        } else {
            TooltipStyle::Pointer
        }
    }

    pub fn for_breakpoint(breakpoint: Breakpoint) -> Self {
        Self::for_mobile(breakpoint.is_mobile())
    }

    pub fn css_class(self) -> &'static str {
        match self {
            TooltipStyle::Pointer => "lap-chart__tooltip",
            TooltipStyle::Touch => "lap-chart__tooltip lap-chart__tooltip--touch",
        }
    }
}
