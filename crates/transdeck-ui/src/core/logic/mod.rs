//! Pure formatting helpers extracted from components for non-wasm testing.

use chrono::{DateTime, Utc};

const UNITS: [&str; 5] = ["KiB", "MiB", "GiB", "TiB", "PiB"];

/// Human-friendly byte count with binary units and two decimals.
#[must_use]
pub fn format_bytes(value: u64) -> String {
    if value < 1024 {
        return format!("{value} B");
    }
    let mut unit = 0;
    let mut scale: u128 = 1024;
    while unit + 1 < UNITS.len() && u128::from(value) >= scale * 1024 {
        scale *= 1024;
        unit += 1;
    }
    let hundredths = u128::from(value) * 100 / scale;
    format!("{}.{:02} {}", hundredths / 100, hundredths % 100, UNITS[unit])
}

/// Transfer rate in bytes per second.
#[must_use]
pub fn format_rate(value: u64) -> String {
    format!("{}/s", format_bytes(value))
}

/// Compact remaining time; `None` when the daemon reports it as unknown.
#[must_use]
pub fn format_eta(seconds: i64) -> Option<String> {
    if seconds < 0 {
        return None;
    }
    if seconds == 0 {
        return Some("0s".to_string());
    }
    let parts = [
        (seconds / 86_400, "d"),
        (seconds % 86_400 / 3_600, "h"),
        (seconds % 3_600 / 60, "m"),
        (seconds % 60, "s"),
    ];
    let text = parts
        .iter()
        .filter(|(amount, _)| *amount > 0)
        .map(|(amount, unit)| format!("{amount}{unit}"))
        .collect::<Vec<_>>()
        .join(" ");
    Some(text)
}

/// Completion fraction as a percentage with one decimal.
#[must_use]
pub fn format_percent(fraction: f64) -> String {
    format!("{:.1}%", fraction * 100.0)
}

/// Unix timestamp rendered as `YYYY-MM-DD HH:MM:SS` in UTC.
#[must_use]
pub fn format_added_date(timestamp: i64) -> String {
    DateTime::<Utc>::from_timestamp(timestamp, 0).map_or_else(
        || "-".to_string(),
        |date| date.format("%Y-%m-%d %H:%M:%S").to_string(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bytes_scale_through_binary_units() {
        assert_eq!(format_bytes(0), "0 B");
        assert_eq!(format_bytes(1023), "1023 B");
        assert_eq!(format_bytes(1536), "1.50 KiB");
        assert_eq!(format_bytes(5 * 1024 * 1024), "5.00 MiB");
        assert_eq!(format_bytes(3 * 1024 * 1024 * 1024), "3.00 GiB");
        assert_eq!(format_rate(2048), "2.00 KiB/s");
    }

    #[test]
    fn eta_is_compact_and_hides_unknown() {
        assert_eq!(format_eta(-1), None);
        assert_eq!(format_eta(0).as_deref(), Some("0s"));
        assert_eq!(format_eta(59).as_deref(), Some("59s"));
        assert_eq!(format_eta(3_660).as_deref(), Some("1h 1m"));
        assert_eq!(format_eta(90_061).as_deref(), Some("1d 1h 1m 1s"));
    }

    #[test]
    fn percent_and_date_formats() {
        assert_eq!(format_percent(0.5), "50.0%");
        assert_eq!(format_percent(1.0), "100.0%");
        assert_eq!(format_added_date(0), "1970-01-01 00:00:00");
        assert_eq!(format_added_date(1_700_000_000), "2023-11-14 22:13:20");
    }
}
