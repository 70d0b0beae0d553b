//! Formatting utilities for file sizes and dates.

/// Size in kilobytes with two decimals (e.g., "1.50 KB").
pub fn format_kb(bytes: u64) -> String {
    format!("{:.2} KB", bytes as f64 / 1024.0)
}

/// Compact human-readable size (e.g., "512 B", "1.5 KB", "3.4 MB").
pub fn format_size(bytes: u64) -> String {
    const UNITS: &[&str] = &["B", "KB", "MB", "GB"];
    let mut size = bytes as f64;
    let mut unit = 0;

    while size >= 1024.0 && unit < UNITS.len() - 1 {
        size /= 1024.0;
        unit += 1;
    }

    if unit == 0 {
        format!("{} {}", bytes, UNITS[0])
    } else {
        format!("{:.1} {}", size, UNITS[unit])
    }
}

/// Date portion (`YYYY-MM-DD`) of an ISO-8601 timestamp.
///
/// Returns the input unchanged when it does not look like one.
pub fn iso_date(timestamp: &str) -> &str {
    match timestamp.get(..10) {
        Some(date)
            if date.as_bytes().get(4) == Some(&b'-') && date.as_bytes().get(7) == Some(&b'-') =>
        {
            date
        }
        _ => timestamp,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_kb() {
        assert_eq!(format_kb(0), "0.00 KB");
        assert_eq!(format_kb(1536), "1.50 KB");
        assert_eq!(format_kb(100), "0.10 KB");
    }

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(500), "500 B");
        assert_eq!(format_size(1536), "1.5 KB");
        assert_eq!(format_size(3 * 1024 * 1024), "3.0 MB");
    }

    #[test]
    fn test_iso_date() {
        assert_eq!(iso_date("2024-01-01T12:00:00.000Z"), "2024-01-01");
        assert_eq!(iso_date("yesterday"), "yesterday");
        assert_eq!(iso_date(""), "");
    }
}
