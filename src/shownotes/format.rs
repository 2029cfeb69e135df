use chrono::{DateTime, Utc};

/// Size units, each step 1024 of the previous
const UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

/// Render a byte count for humans.
///
/// Plain bytes never show decimals. Scaled values keep two decimals below
/// ten, one below a hundred, none beyond that.
pub fn format_bytes(bytes: u64) -> String {
    if bytes == 0 {
        return "0 B".to_string();
    }

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    let name = UNITS[unit];
    if unit == 0 {
        format!("{value:.0} {name}")
    } else if value < 10.0 {
        format!("{value:.2} {name}")
    } else if value < 100.0 {
        format!("{value:.1} {name}")
    } else {
        format!("{value:.0} {name}")
    }
}

/// Timestamp as `YYYY-MM-DD HH:MM:SS UTC`
pub fn format_utc(date: &DateTime<Utc>) -> String {
    date.format("%Y-%m-%d %H:%M:%S UTC").to_string()
}
