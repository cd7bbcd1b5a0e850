//! Time representation conversions.
//!
//! Canonical time inside the crate is `f64` seconds. Three textual
//! forms exist:
//!
//! - SRT timestamp: `HH:MM:SS,mmm` (zero-padded, comma fraction)
//! - Short display form: `M:SS` (minutes unpadded)
//! - Compact form: one decimal place with an `s` suffix (`4.5s`)
//!
//! All conversions are pure functions. Formatting truncates rather
//! than rounds, and millisecond-granular values survive a
//! format/parse round trip exactly.

use thiserror::Error;

/// Error for text that matches no recognized time form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimecodeError {
    /// Neither the SRT form nor the `MM:SS` shorthand matched.
    #[error("unrecognized time format: '{0}'")]
    Unrecognized(String),
}

/// Parse a user-entered time string into seconds.
///
/// Accepts the strict SRT form `HH:MM:SS,mmm` or the shorthand
/// `MM:SS[.fraction]`. The shorthand is deliberately lenient:
/// non-numeric components read as zero, matching the free-text
/// timing-editor fields.
pub fn parse_timestamp(text: &str) -> Result<f64, TimecodeError> {
    let text = text.trim();

    if let Some(seconds) = parse_srt_timestamp(text) {
        return Ok(seconds);
    }

    let parts: Vec<&str> = text.split(':').collect();
    if parts.len() == 2 {
        let minutes: f64 = parts[0].parse().unwrap_or(0.0);
        let seconds: f64 = parts[1].parse().unwrap_or(0.0);
        return Ok(minutes * 60.0 + seconds);
    }

    Err(TimecodeError::Unrecognized(text.to_string()))
}

/// Parse a strict SRT timestamp (`HH:MM:SS,mmm`, fixed-width fields).
///
/// Returns `None` if the text deviates from the fixed-width pattern.
pub fn parse_srt_timestamp(text: &str) -> Option<f64> {
    let (hms, millis) = text.split_once(',')?;
    let fields: Vec<&str> = hms.split(':').collect();
    if fields.len() != 3 {
        return None;
    }
    if !is_fixed_digits(fields[0], 2)
        || !is_fixed_digits(fields[1], 2)
        || !is_fixed_digits(fields[2], 2)
        || !is_fixed_digits(millis, 3)
    {
        return None;
    }

    let hours: f64 = fields[0].parse().ok()?;
    let minutes: f64 = fields[1].parse().ok()?;
    let seconds: f64 = fields[2].parse().ok()?;
    let milliseconds: f64 = millis.parse().ok()?;

    Some(hours * 3600.0 + minutes * 60.0 + seconds + milliseconds / 1000.0)
}

fn is_fixed_digits(s: &str, len: usize) -> bool {
    s.len() == len && s.bytes().all(|b| b.is_ascii_digit())
}

/// Format seconds as an SRT timestamp (`HH:MM:SS,mmm`).
///
/// Truncates to whole milliseconds. NaN formats as `00:00:00,000`.
pub fn format_timestamp(seconds: f64) -> String {
    if seconds.is_nan() {
        return "00:00:00,000".to_string();
    }

    // Half-microsecond nudge so millisecond-granular values survive
    // truncation despite binary float representation (8.2 * 1000 is
    // 8199.999...).
    let total_ms = (seconds.max(0.0) * 1000.0 + 5e-4).floor() as u64;

    let millis = total_ms % 1000;
    let total_secs = total_ms / 1000;
    let secs = total_secs % 60;
    let total_mins = total_secs / 60;
    let mins = total_mins % 60;
    let hours = total_mins / 60;

    format!("{:02}:{:02}:{:02},{:03}", hours, mins, secs, millis)
}

/// Format seconds as the short `M:SS` display form.
///
/// Minutes are unpadded and unbounded (no hours field). NaN formats
/// as `0:00`.
pub fn format_short(seconds: f64) -> String {
    if seconds.is_nan() {
        return "0:00".to_string();
    }
    let total_secs = seconds.max(0.0) as u64;
    format!("{}:{:02}", total_secs / 60, total_secs % 60)
}

/// Format seconds in the compact one-decimal form, e.g. `4.5s`.
pub fn format_compact(seconds: f64) -> String {
    if seconds.is_nan() {
        return "0.0s".to_string();
    }
    format!("{:.1}s", seconds)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_srt_form() {
        assert_eq!(parse_timestamp("00:00:00,000").unwrap(), 0.0);
        assert!((parse_timestamp("00:00:01,500").unwrap() - 1.5).abs() < 1e-9);
        assert!((parse_timestamp("00:01:00,000").unwrap() - 60.0).abs() < 1e-9);
        assert!((parse_timestamp("01:00:00,000").unwrap() - 3600.0).abs() < 1e-9);
        assert!((parse_timestamp("01:02:03,042").unwrap() - 3723.042).abs() < 1e-9);
    }

    #[test]
    fn parse_short_form() {
        assert!((parse_timestamp("1:30").unwrap() - 90.0).abs() < 1e-9);
        assert!((parse_timestamp("0:04.5").unwrap() - 4.5).abs() < 1e-9);
        assert!((parse_timestamp("10:00").unwrap() - 600.0).abs() < 1e-9);
    }

    #[test]
    fn short_form_is_lenient() {
        // Non-numeric components read as zero.
        assert_eq!(parse_timestamp("ab:cd").unwrap(), 0.0);
        assert!((parse_timestamp("ab:30").unwrap() - 30.0).abs() < 1e-9);
    }

    #[test]
    fn unrecognized_forms_error() {
        assert!(parse_timestamp("").is_err());
        assert!(parse_timestamp("1:2:3:4").is_err());
        assert!(parse_timestamp("12").is_err());
        // SRT form requires fixed-width fields; a period fraction or
        // short fields fall through and fail the 3-part colon split.
        assert!(parse_timestamp("00:00:01.500").is_err());
        assert!(parse_timestamp("0:00:01,500").is_err());
    }

    #[test]
    fn format_basic() {
        assert_eq!(format_timestamp(0.0), "00:00:00,000");
        assert_eq!(format_timestamp(1.5), "00:00:01,500");
        assert_eq!(format_timestamp(61.0), "00:01:01,000");
        assert_eq!(format_timestamp(3723.042), "01:02:03,042");
    }

    #[test]
    fn format_truncates_submillisecond() {
        assert_eq!(format_timestamp(1.2345), "00:00:01,234");
        assert_eq!(format_timestamp(0.9999), "00:00:00,999");
    }

    #[test]
    fn format_nan_is_zero() {
        assert_eq!(format_timestamp(f64::NAN), "00:00:00,000");
        assert_eq!(format_short(f64::NAN), "0:00");
        assert_eq!(format_compact(f64::NAN), "0.0s");
    }

    #[test]
    fn round_trip_at_millisecond_granularity() {
        for ms in [0u64, 1, 42, 500, 999, 1000, 8200, 59999, 61042, 3_600_000, 7_323_456] {
            let seconds = ms as f64 / 1000.0;
            let formatted = format_timestamp(seconds);
            let parsed = parse_timestamp(&formatted).unwrap();
            assert!(
                ((parsed * 1000.0).round() as u64) == ms,
                "round trip failed for {}ms ({} -> {})",
                ms,
                seconds,
                formatted
            );
        }
    }

    #[test]
    fn short_display_form() {
        assert_eq!(format_short(0.0), "0:00");
        assert_eq!(format_short(75.0), "1:15");
        assert_eq!(format_short(75.9), "1:15");
        assert_eq!(format_short(600.0), "10:00");
        // Unbounded minutes, no hours field.
        assert_eq!(format_short(3600.0), "60:00");
    }

    #[test]
    fn compact_form() {
        assert_eq!(format_compact(4.5), "4.5s");
        assert_eq!(format_compact(0.0), "0.0s");
        assert_eq!(format_compact(-1.0), "-1.0s");
    }
}
