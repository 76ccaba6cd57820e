//! Byte and duration formatting helpers for dashboard plugins.

/// Convert a byte value to a human-readable string.
///
/// ```
/// use dstone_core::utils::bytes::bytes_to_human_readable;
/// assert_eq!(bytes_to_human_readable(1023.0), "1023.00 B");
/// assert_eq!(bytes_to_human_readable(1024.0), "1.00 KiB");
/// assert_eq!(bytes_to_human_readable(1_048_576.0), "1.00 MiB");
/// ```
pub fn bytes_to_human_readable(bytes_value: f64) -> String {
    const UNITS: [&str; 7] = ["B", "KiB", "MiB", "GiB", "TiB", "PiB", "EiB"];
    let mut size = bytes_value;
    let mut unit_index = 0;

    while size >= 1024.0 && unit_index < UNITS.len() - 1 {
        size /= 1024.0;
        unit_index += 1;
    }

    format!("{:.2} {}", size, UNITS[unit_index])
}

/// Convert a human-readable size string (e.g. `"5.2 MiB"`, `"3GiB"`) to
/// bytes. Unit matching is case-insensitive and accepts the short forms
/// `K`, `KB`, `KiB` and so on.
///
/// Returns `None` if the input is not in a valid format.
pub fn human_readable_to_bytes(size_string: &str) -> Option<u64> {
    let trimmed = size_string.trim();
    let split = trimmed
        .find(|c: char| !(c.is_ascii_digit() || c == '.'))
        .unwrap_or(trimmed.len());
    let (number_part, unit_part) = trimmed.split_at(split);

    let value: f64 = number_part.parse().ok()?;
    let unit = unit_part.trim().to_uppercase();

    let multiplier: u64 = match unit.as_str() {
        "B" | "" => 1,
        "K" | "KB" | "KIB" => 1024,
        "M" | "MB" | "MIB" => 1024u64.pow(2),
        "G" | "GB" | "GIB" => 1024u64.pow(3),
        "T" | "TB" | "TIB" => 1024u64.pow(4),
        "P" | "PB" | "PIB" => 1024u64.pow(5),
        _ => return None,
    };

    Some((value * multiplier as f64) as u64)
}

/// Convert seconds to a human-readable time string.
///
/// ```
/// use dstone_core::utils::bytes::seconds_to_human_readable;
/// assert_eq!(seconds_to_human_readable(3661), "1 hour, 1 minute, 1 second");
/// assert_eq!(seconds_to_human_readable(86400), "1 day");
/// ```
pub fn seconds_to_human_readable(seconds: u64) -> String {
    const INTERVALS: [(u64, &str); 4] = [
        (60 * 60 * 24, "day"),
        (60 * 60, "hour"),
        (60, "minute"),
        (1, "second"),
    ];

    let mut remaining = seconds;
    let mut result = Vec::new();
    for (count, name) in INTERVALS {
        let value = remaining / count;
        if value > 0 {
            remaining -= value * count;
            if value == 1 {
                result.push(format!("{} {}", value, name));
            } else {
                result.push(format!("{} {}s", value, name));
            }
        }
    }
    result.join(", ")
}
