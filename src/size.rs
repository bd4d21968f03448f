//! Size labels: parsing "2.5 MB" style strings and formatting byte counts

use regex::Regex;
use std::sync::OnceLock;

const KB: f64 = 1024.0;

/// Parse a display size such as `"2.5 MB"` into bytes.
///
/// Units are B, KB, MB and GB (case-insensitive, 1024-based). Anything else
/// counts as zero.
pub fn parse_size(label: &str) -> f64 {
    static SIZE_RE: OnceLock<Regex> = OnceLock::new();
    let re = SIZE_RE.get_or_init(|| {
        Regex::new(r"(?i)^([\d.]+)\s*([KMG]?B)$").expect("size pattern is valid")
    });

    let Some(caps) = re.captures(label.trim()) else {
        return 0.0;
    };
    let Ok(value) = caps[1].parse::<f64>() else {
        return 0.0;
    };

    let multiplier = match caps[2].to_ascii_uppercase().as_str() {
        "KB" => KB,
        "MB" => KB * KB,
        "GB" => KB * KB * KB,
        _ => 1.0,
    };
    value * multiplier
}

/// Format a byte count for display: `0` is `"0 Bytes"`, otherwise the largest
/// unit up to GB keeping the quotient at least 1, rounded to one decimal.
pub fn format_file_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

    if bytes == 0 {
        return String::from("0 Bytes");
    }

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= KB && unit < UNITS.len() - 1 {
        value /= KB;
        unit += 1;
    }

    let rounded = (value * 10.0).round() / 10.0;
    if rounded.fract() == 0.0 {
        format!("{:.0} {}", rounded, UNITS[unit])
    } else {
        format!("{:.1} {}", rounded, UNITS[unit])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_units() {
        assert_eq!(parse_size("512 B"), 512.0);
        assert_eq!(parse_size("2 KB"), 2048.0);
        assert_eq!(parse_size("1.5 mb"), 1.5 * 1024.0 * 1024.0);
        assert_eq!(parse_size("1GB"), 1024.0 * 1024.0 * 1024.0);
    }

    #[test]
    fn test_parse_unparseable_is_zero() {
        assert_eq!(parse_size(""), 0.0);
        assert_eq!(parse_size("huge"), 0.0);
        assert_eq!(parse_size("0 Bytes"), 0.0);
        assert_eq!(parse_size("3 TB"), 0.0);
        assert_eq!(parse_size("1.2.3 MB"), 0.0);
    }

    #[test]
    fn test_format_sizes() {
        assert_eq!(format_file_size(0), "0 Bytes");
        assert_eq!(format_file_size(500), "500 Bytes");
        assert_eq!(format_file_size(1024), "1 KB");
        assert_eq!(format_file_size(1536), "1.5 KB");
        assert_eq!(format_file_size(3_221_225), "3.1 MB");
        assert_eq!(format_file_size(5 * 1024 * 1024 * 1024 * 1024), "5120 GB");
    }

    #[test]
    fn test_formatted_size_parses_back() {
        let label = format_file_size(10 * 1024 * 1024);
        assert_eq!(label, "10 MB");
        assert_eq!(parse_size(&label), 10.0 * 1024.0 * 1024.0);
    }
}
