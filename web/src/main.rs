use dioxus::prelude::*;

use ui::views::LapPreview;

const THEME_CSS: &str = ui::THEME_CSS;

fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Style { "{THEME_CSS}" }

        // Breakpoint defaults to the browser's viewport width.
        LapPreview {}
    }
}
