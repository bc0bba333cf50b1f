mod lap_preview;
pub use lap_preview::{sample_laps, LapPreview};
