/*!
 * Number Formatting
 * Whole mebibytes with thousands separators
 */

use crate::core::limits::MEBIBYTE;
use crate::core::types::Bytes;
use std::time::Duration;

/// Bytes to MiB, rounded half up to the nearest whole unit
pub fn to_mebibytes(bytes: Bytes) -> u64 {
    bytes / MEBIBYTE + u64::from(bytes % MEBIBYTE >= MEBIBYTE / 2)
}

/// `1234567` becomes `1,234,567`
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    grouped
}

/// Grouped whole MiB, e.g. `1,024`
pub fn format_mebibytes(bytes: Bytes) -> String {
    group_thousands(to_mebibytes(bytes))
}

/// Seconds with one decimal and a grouped integer part, e.g. `1,234.5`
pub fn format_seconds(elapsed: Duration) -> String {
    let tenths = (elapsed.as_secs_f64() * 10.0).round() as u64;
    format!("{}.{}", group_thousands(tenths / 10), tenths % 10)
}
