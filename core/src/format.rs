//! Human-readable byte counts.

/// Units used by [`format_file_size`], base 1024.
const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

/// Format a byte count with the largest fitting unit and up to two decimals.
///
/// Trailing zeros are dropped, so `1536` renders as `"1.5 KB"` and `2048`
/// as `"2 KB"`. Anything at or beyond one terabyte stays in GB.
///
/// ```
/// use pdfdrop::format_file_size;
///
/// assert_eq!(format_file_size(0), "0 Bytes");
/// assert_eq!(format_file_size(1536), "1.5 KB");
/// ```
pub fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    format!("{} {}", trim_decimals(value), UNITS[unit])
}

/// Two-decimal rendering with trailing zeros (and a dangling dot) removed.
fn trim_decimals(value: f64) -> String {
    let fixed = format!("{:.2}", value);
    fixed.trim_end_matches('0').trim_end_matches('.').to_string()
}
