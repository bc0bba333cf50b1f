use dioxus::prelude::*;
use once_cell::sync::Lazy;
use serde::Deserialize;

use crate::core::lap::{Lap, Sport};
use crate::lap_chart::{config::Breakpoint, LapChart};

/// Recorded activities in the backend's lap JSON shape, one per sport.
const SAMPLE_LAPS_JSON: &str = include_str!("../../assets/sample_laps.json");

#[derive(Debug, Default, Deserialize)]
struct SampleActivities {
    running: Vec<Lap>,
    cycling: Vec<Lap>,
    swimming: Vec<Lap>,
}

static SAMPLES: Lazy<SampleActivities> = Lazy::new(|| {
    serde_json::from_str(SAMPLE_LAPS_JSON).unwrap_or_else(|err| {
        tracing::warn!(%err, "sample laps failed to decode");
        SampleActivities::default()
    })
});

pub fn sample_laps(sport: Sport) -> &'static [Lap] {
    match sport {
        Sport::Running => &SAMPLES.running,
        Sport::Cycling => &SAMPLES.cycling,
        Sport::Swimming => &SAMPLES.swimming,
    }
}

#[component]
pub fn LapPreview(#[props(default = Breakpoint::current())] breakpoint: Breakpoint) -> Element {
    let mut sport = use_signal(|| Sport::Running);
    let current = sport();
    let laps = sample_laps(current).to_vec();
    let lap_count = laps.len();

    rsx! {
        section { class: "page page-laps",
            h1 { "Laps" }
            p {
                "Bars widen with the distance each lap covered. The warmer the colour, the faster the lap."
            }

            div { class: "page-laps__sports",
                for option in Sport::ALL {
                    button {
                        key: "{option}",
                        r#type: "button",
                        class: if option == current { "button button--primary" } else { "button" },
                        onclick: move |_| sport.set(option),
                        "{option}"
                    }
                }
            }

            div { class: "lap-chart-card",
                LapChart { laps, sport: current, breakpoint }
                if current == Sport::Swimming {
                    p { class: "lap-chart-card__placeholder",
                        "Lap charts cover running and cycling. {lap_count} swim laps recorded."
                    }
                }
            }
        }
    }
}
