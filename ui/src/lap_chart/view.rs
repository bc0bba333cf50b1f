use std::rc::Rc;

use dioxus::prelude::*;

use crate::core::lap::{Lap, Sport};

use super::{
    config::{Breakpoint, LapChartConfig},
    interaction::{PointerInput, Tooltip, TooltipStyle},
    LapChartModel,
};

/// Lap bar chart drawn from SVG primitives.
///
/// Renders nothing when the laps can't be charted (swimming, fewer than two
/// laps, or any lap without timer/distance samples).
#[component]
pub fn LapChart(
    laps: Vec<Lap>,
    sport: Sport,
    #[props(default)] breakpoint: Breakpoint,
    #[props(default)] config: LapChartConfig,
) -> Element {
    let mut tooltip = use_signal(|| Option::<Tooltip>::None);
    let mut surface = use_signal(|| Option::<Rc<MountedData>>::None);

    let dims = config.dimensions(breakpoint);
    let Some(model) = LapChartModel::build(&laps, sport, dims, config.palette) else {
        return rsx! {};
    };

    let model = Rc::new(model);
    let mobile = breakpoint.is_mobile();
    let tooltip_class = TooltipStyle::for_breakpoint(breakpoint).css_class();
    let surface_class = if mobile {
        "lap-chart lap-chart--compact"
    } else {
        "lap-chart"
    };
    let bar_class = if dims.bar_shadow {
        "lap-chart__bar lap-chart__bar--shadow"
    } else {
        "lap-chart__bar"
    };

    let width = dims.width;
    let height = dims.height;
    let axis_x = dims.margin.left;
    let y_label_x = axis_x - 6.0;
    let grid_right = dims.plot_right();
    let baseline = dims.baseline();
    let label_y = baseline + dims.margin.bottom * 0.6;
    let stroke = model.palette.stroke.to_string();
    let grid = model.palette.grid.to_string();
    let text_fill = model.palette.text.to_string();
    let font_size = if mobile { "10" } else { "12" };

    let hover_model = model.clone();
    let leave_model = model.clone();
    let touch_model = model.clone();
    let end_model = model.clone();

    rsx! {
        div {
            class: "{surface_class}",
            role: "img",
            aria_label: "{model.aria_label}",
            style: "width: {width}px; height: {height}px;",
            onmounted: move |evt| surface.set(Some(evt.data())),
            onmousemove: move |evt| {
                let point = evt.data().element_coordinates();
                let next = hover_model.tooltip_after(PointerInput::Move { x: point.x, y: point.y });
                let hovered = next.as_ref().map(|tip| tip.bar);
                if hovered != tooltip.peek().as_ref().map(|tip| tip.bar) {
                    tracing::debug!(bar = ?hovered, "lap chart tooltip");
                }
                tooltip.set(next);
            },
            onmouseleave: move |_| tooltip.set(leave_model.tooltip_after(PointerInput::Leave)),
            ontouchstart: move |evt| {
                let Some(client) = evt.data().touches().first().map(|touch| touch.client_coordinates())
                else {
                    return;
                };
                let Some(mounted) = surface() else {
                    return;
                };
                let chart = touch_model.clone();
                spawn(async move {
                    // Measured per touch: scrolling moves the surface in client space.
                    let Ok(rect) = mounted.get_client_rect().await else {
                        return;
                    };
                    tooltip.set(chart.tooltip_after(PointerInput::TouchStart {
                        client: (client.x, client.y),
                        origin: (rect.min_x(), rect.min_y()),
                    }));
                });
            },
            ontouchend: move |_| tooltip.set(end_model.tooltip_after(PointerInput::TouchEnd)),

            svg {
                class: "lap-chart__surface",
                width: "{width}",
                height: "{height}",
                view_box: "0 0 {width} {height}",
                style: "pointer-events: none;",

                for tick in model.y_ticks.iter() {
                    g { key: "tick-{tick.value}",
                        line {
                            class: "lap-chart__grid",
                            x1: "{axis_x}",
                            y1: "{tick.y}",
                            x2: "{grid_right}",
                            y2: "{tick.y}",
                            stroke: "{grid}",
                            "stroke-width": "1",
                        }
                        text {
                            class: "lap-chart__y-label",
                            x: "{y_label_x}",
                            y: "{tick.y}",
                            fill: "{text_fill}",
                            "font-size": "{font_size}",
                            "text-anchor": "end",
                            "dominant-baseline": "middle",
                            "{tick.label}"
                        }
                    }
                }

                for (position, bar) in model.bars.iter().enumerate() {
                    rect {
                        key: "bar-{position}",
                        class: "{bar_class}",
                        "data-name": "{bar.display_text}",
                        x: "{bar.x}",
                        y: "{bar.y}",
                        width: "{bar.width}",
                        height: "{bar.height}",
                        fill: "{bar.color}",
                        stroke: "{stroke}",
                        "stroke-width": "1",
                    }
                }

                for label in model.x_labels.iter() {
                    text {
                        key: "lap-{label.lap_number}",
                        class: "lap-chart__x-label",
                        x: "{label.x}",
                        y: "{label_y}",
                        fill: "{text_fill}",
                        "font-size": "{font_size}",
                        "text-anchor": "middle",
                        "{label.lap_number}"
                    }
                }
            }

            if let Some(tip) = tooltip() {
                div {
                    class: "{tooltip_class}",
                    style: "left: {tip.x}px; top: {tip.y}px;",
                    "{tip.text}"
                }
            }
        }
    }
}
