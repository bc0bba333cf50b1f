//! Formatting helpers for presenting lap metrics.

/// Pace in seconds per kilometre as `m:ss`. Seconds are rounded before the
/// split so a value like 359.6 reads `6:00`, never `5:60`.
pub fn format_pace(seconds_per_km: f64) -> String {
    if !seconds_per_km.is_finite() || seconds_per_km < 0.0 {
        return "—".to_string();
    }
    let total = seconds_per_km.round() as u64;
    format!("{}:{:02}", total / 60, total % 60)
}

/// Speed in km/h with one decimal place.
pub fn format_speed(kmh: f64) -> String {
    format!("{kmh:.1}")
}

pub fn format_whole(value: f64) -> String {
    format!("{value:.0}")
}

/// Distance in metres rendered as kilometres, e.g. `1.00 km`.
pub fn format_km(meters: f64) -> String {
    format!("{:.2} km", meters / 1000.0)
}
