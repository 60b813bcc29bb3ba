//! Units formatting and conversion utilities
//!
//! Provides functions for human-readable formatting of sizes, durations,
//! timestamps and the per-window loop rates.

use std::time::Duration;

use chrono::{DateTime, TimeZone};

/// Format bytes into human-readable size with appropriate units
///
/// # Examples
/// ```
/// use diskloop::util::units::format_bytes;
///
/// assert_eq!(format_bytes(1024), "1.0 KiB");
/// assert_eq!(format_bytes(102400), "100.0 KiB");
/// ```
pub fn format_bytes(bytes: u64) -> String {
    const UNITS: &[&str] = &["B", "KiB", "MiB", "GiB", "TiB", "PiB"];
    const THRESHOLD: f64 = 1024.0;

    if bytes == 0 {
        return "0 B".to_string();
    }

    let mut size = bytes as f64;
    let mut unit_index = 0;

    while size >= THRESHOLD && unit_index < UNITS.len() - 1 {
        size /= THRESHOLD;
        unit_index += 1;
    }

    if unit_index == 0 {
        format!("{} {}", bytes, UNITS[unit_index])
    } else {
        format!("{:.1} {}", size, UNITS[unit_index])
    }
}

/// Format an elapsed time or window length, truncated to milliseconds
///
/// # Examples
/// ```
/// use std::time::Duration;
/// use diskloop::util::units::format_elapsed;
///
/// assert_eq!(format_elapsed(Duration::from_secs(60)), "1m");
/// assert_eq!(format_elapsed(Duration::from_micros(60_012_345)), "1m 12ms");
/// ```
pub fn format_elapsed(duration: Duration) -> String {
    let truncated = Duration::from_millis(duration.as_millis() as u64);
    if truncated.is_zero() {
        return "0ms".to_string();
    }
    humantime::format_duration(truncated).to_string()
}

/// Format latency duration with appropriate precision
///
/// # Examples
/// ```
/// use std::time::Duration;
/// use diskloop::util::units::format_latency;
///
/// assert_eq!(format_latency(Duration::from_millis(5)), "5.00ms");
/// assert_eq!(format_latency(Duration::from_micros(500)), "500μs");
/// ```
pub fn format_latency(duration: Duration) -> String {
    let micros = duration.as_micros();

    if micros >= 1000 {
        let millis = micros as f64 / 1000.0;
        format!("{:.2}ms", millis)
    } else {
        format!("{}μs", micros)
    }
}

/// Format a wall-clock timestamp with microsecond precision and UTC offset
pub fn format_timestamp<Tz: TimeZone>(time: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    time.format("%Y-%m-%d %H:%M:%S%.6f %z").to_string()
}

/// Loops per minute over the actual elapsed time
///
/// # Examples
/// ```
/// use std::time::Duration;
/// use diskloop::util::units::loops_per_minute;
///
/// let rate = loops_per_minute(120, Duration::from_secs(60));
/// assert!((rate - 120.0).abs() < 0.01);
/// ```
pub fn loops_per_minute(loops: u64, elapsed: Duration) -> f64 {
    if elapsed.is_zero() {
        return 0.0;
    }

    loops as f64 / (elapsed.as_secs_f64() / 60.0)
}

/// Mean of `count` samples whose durations sum to `total`
pub fn average_duration(total: Duration, count: u64) -> Duration {
    if count == 0 {
        return Duration::ZERO;
    }

    Duration::from_nanos((total.as_nanos() / count as u128) as u64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};

    #[test]
    fn test_format_bytes() {
        assert_eq!(format_bytes(0), "0 B");
        assert_eq!(format_bytes(10), "10 B");
        assert_eq!(format_bytes(1536), "1.5 KiB");
        assert_eq!(format_bytes(102_400), "100.0 KiB");
        assert_eq!(format_bytes(1_048_576), "1.0 MiB");
    }

    #[test]
    fn test_format_elapsed() {
        assert_eq!(format_elapsed(Duration::ZERO), "0ms");
        assert_eq!(format_elapsed(Duration::from_micros(999)), "0ms");
        assert_eq!(format_elapsed(Duration::from_millis(100)), "100ms");
        assert_eq!(format_elapsed(Duration::from_secs(60)), "1m");
        assert_eq!(format_elapsed(Duration::from_millis(61_500)), "1m 1s 500ms");
    }

    #[test]
    fn test_format_latency() {
        assert_eq!(format_latency(Duration::ZERO), "0μs");
        assert_eq!(format_latency(Duration::from_micros(50)), "50μs");
        assert_eq!(format_latency(Duration::from_micros(1500)), "1.50ms");
        assert_eq!(format_latency(Duration::from_millis(5)), "5.00ms");
    }

    #[test]
    fn test_format_timestamp() {
        let utc = Utc.with_ymd_and_hms(2026, 10, 18, 9, 30, 5).unwrap();
        assert_eq!(format_timestamp(&utc), "2026-10-18 09:30:05.000000 +0000");

        let offset = FixedOffset::east_opt(2 * 3600).unwrap();
        let local = offset.with_ymd_and_hms(2026, 10, 18, 11, 30, 5).unwrap();
        assert_eq!(format_timestamp(&local), "2026-10-18 11:30:05.000000 +0200");
    }

    #[test]
    fn test_loops_per_minute() {
        assert!((loops_per_minute(600, Duration::from_secs(60)) - 600.0).abs() < 1e-9);
        assert!((loops_per_minute(600, Duration::from_secs(120)) - 300.0).abs() < 1e-9);
        assert!((loops_per_minute(5, Duration::from_millis(100)) - 3000.0).abs() < 1e-6);
        assert_eq!(loops_per_minute(10, Duration::ZERO), 0.0);
    }

    #[test]
    fn test_average_duration() {
        assert_eq!(
            average_duration(Duration::from_millis(300), 3),
            Duration::from_millis(100)
        );
        assert_eq!(average_duration(Duration::from_nanos(10), 4), Duration::from_nanos(2));
        assert_eq!(average_duration(Duration::from_secs(1), 0), Duration::ZERO);
    }
}
