#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

#[cfg(feature = "desktop")]
use dioxus::desktop::{tao::window::WindowBuilder, Config};
use dioxus::prelude::*;

use ui::lap_chart::config::Breakpoint;
use ui::views::LapPreview;

const THEME_CSS: &str = ui::THEME_CSS;

#[cfg(feature = "desktop")]
fn main() {
    dioxus::logger::initialize_default();

    LaunchBuilder::desktop()
        .with_cfg(
            Config::new().with_window(
                WindowBuilder::new()
                    .with_title(format!("Lapboard – v{}", env!("CARGO_PKG_VERSION")))
                    .with_inner_size(dioxus::desktop::tao::dpi::LogicalSize::new(960.0, 640.0)),
            ),
        )
        .launch(App);
}

#[cfg(not(feature = "desktop"))]
fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // Always inline embedded CSS (no external file dependency for desktop builds)
        document::Style { "{THEME_CSS}" }

        // Desktop windows open wide; the large table fits the default size.
        LapPreview { breakpoint: Breakpoint::Lg }
    }
}
