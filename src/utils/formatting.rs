//! Formatting utilities used for CLI and export outputs.

/// Round to one decimal place, half away from zero (`f64::round`).
///
/// `3.049999` → `3.0`, `2.25` → `2.3`, `-2.25` → `-2.3`.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Hours as printed in every output table: always one decimal.
pub fn format_hours(hours: f64) -> String {
    format!("{:.1}", hours)
}

pub fn pad_right(s: &str, width: usize) -> String {
    format!("{:<width$}", s, width = width)
}

pub fn pad_left(s: &str, width: usize) -> String {
    format!("{:>width$}", s, width = width)
}
