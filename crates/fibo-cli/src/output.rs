//! CLI output formatting.

use std::io::{self, Write};
use std::path::Path;
use std::time::Duration;

use num_bigint::BigUint;

/// Longest decimal expansion printed in full by default.
pub const FULL_OUTPUT_LIMIT: usize = 100;

/// Digits kept on each side of the ellipsis when a result is elided.
pub const ELIDED_EDGE_DIGITS: usize = 50;

/// Shorten a decimal string longer than `FULL_OUTPUT_LIMIT` to its first and
/// last `ELIDED_EDGE_DIGITS` digits, unless `print_full` is set.
#[must_use]
pub fn format_digits(digits: &str, print_full: bool) -> String {
    if print_full || digits.len() <= FULL_OUTPUT_LIMIT {
        digits.to_string()
    } else {
        format!(
            "{}...{}",
            &digits[..ELIDED_EDGE_DIGITS],
            &digits[digits.len() - ELIDED_EDGE_DIGITS..]
        )
    }
}

/// Format a `BigUint` for display, eliding long values.
#[must_use]
pub fn format_result(value: &BigUint, print_full: bool) -> String {
    format_digits(&value.to_string(), print_full)
}

/// Elapsed time in seconds, as printed after a computation.
#[must_use]
pub fn format_seconds(d: Duration) -> String {
    format!("{:.6}", d.as_secs_f64())
}

/// Compact human-readable duration for tables.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn format_duration(d: Duration) -> String {
    let secs = d.as_secs_f64();
    if secs < 0.001 {
        format!("{:.2}µs", secs * 1_000_000.0)
    } else if secs < 1.0 {
        format!("{:.2}ms", secs * 1000.0)
    } else if secs < 60.0 {
        format!("{secs:.3}s")
    } else {
        let mins = (secs / 60.0).floor() as u64;
        let remaining = secs - (mins as f64 * 60.0);
        format!("{mins}m{remaining:.1}s")
    }
}

/// Write the full decimal value to a file.
pub fn write_to_file(path: impl AsRef<Path>, value: &BigUint) -> io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    writeln!(file, "{value}")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_results_are_untouched() {
        let value = BigUint::parse_bytes(b"354224848179261915075", 10).unwrap();
        assert_eq!(format_result(&value, false), "354224848179261915075");
    }

    #[test]
    fn exactly_one_hundred_digits_is_full() {
        let digits = "7".repeat(100);
        assert_eq!(format_digits(&digits, false), digits);
    }

    #[test]
    fn long_results_are_elided() {
        let digits = format!("{}{}{}", "1".repeat(50), "5".repeat(10), "9".repeat(50));
        let shown = format_digits(&digits, false);
        assert_eq!(shown, format!("{}...{}", "1".repeat(50), "9".repeat(50)));
        assert_eq!(shown.len(), 103);
    }

    #[test]
    fn print_full_disables_elision() {
        let digits = "3".repeat(500);
        assert_eq!(format_digits(&digits, true), digits);
    }

    #[test]
    fn format_seconds_fixed_precision() {
        assert_eq!(format_seconds(Duration::from_millis(1500)), "1.500000");
        assert_eq!(format_seconds(Duration::ZERO), "0.000000");
    }

    #[test]
    fn format_duration_units() {
        assert!(format_duration(Duration::from_nanos(500)).ends_with("µs"));
        assert!(format_duration(Duration::from_millis(42)).ends_with("ms"));
        assert_eq!(format_duration(Duration::from_secs_f64(3.25)), "3.250s");
        assert_eq!(format_duration(Duration::from_secs(90)), "1m30.0s");
    }

    #[test]
    fn write_to_file_roundtrip() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("f.txt");
        write_to_file(&path, &BigUint::from(6765u32)).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "6765\n");
    }
}
