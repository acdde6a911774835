//! Display formatting for contract fields.
//!
//! These mirror the formats players already know from in-game wallets:
//! large ISK amounts collapse to `1.23B`/`345.6M`, smaller ones keep
//! thousands separators, and expiry timestamps render as a coarse
//! countdown.

use chrono::{DateTime, Duration, Utc};

const BILLION: f64 = 1_000_000_000.0;
const MILLION: f64 = 1_000_000.0;

/// Format an ISK amount. `precision` bounds the decimals used for the
/// billion/million forms; trailing zeros are trimmed. Absent values render
/// as an empty string so table cells stay blank rather than showing a
/// placeholder zero.
pub fn isk(value: Option<f64>, precision: usize) -> String {
    let Some(value) = value else {
        return String::new();
    };
    if value == 0.0 {
        return "0".to_string();
    }

    let magnitude = value.abs();
    if magnitude >= BILLION {
        return format!("{}B", trim_decimal(value / BILLION, precision));
    }
    if magnitude >= MILLION {
        return format!("{}M", trim_decimal(value / MILLION, precision));
    }
    group_thousands(value.round() as i64)
}

/// Coarse countdown to `expires`, measured from `now`.
pub fn time_left(expires: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let remaining = expires - now;
    if remaining <= Duration::zero() {
        return "Expired".to_string();
    }

    let days = remaining.num_days();
    let hours = remaining.num_hours() - days * 24;
    let minutes = remaining.num_minutes() - remaining.num_hours() * 60;

    if days > 0 {
        format!("{days}d {hours}h")
    } else if hours > 0 {
        format!("{hours}h {minutes}m")
    } else if minutes > 0 {
        format!("{minutes}m")
    } else {
        "< 1m".to_string()
    }
}

fn trim_decimal(value: f64, precision: usize) -> String {
    let text = format!("{value:.precision$}");
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        text
    }
}

fn group_thousands(value: i64) -> String {
    let digits = value.abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    let offset = digits.len() % 3;
    for (index, digit) in digits.chars().enumerate() {
        if index != 0 && (index + 3 - offset) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    if value < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn isk_collapses_billions_and_millions() {
        assert_eq!(isk(Some(1_234_567_890.0), 2), "1.23B");
        assert_eq!(isk(Some(150_000_000.0), 1), "150M");
        assert_eq!(isk(Some(345_600_000.0), 2), "345.6M");
    }

    #[test]
    fn isk_trims_trailing_zeros() {
        assert_eq!(isk(Some(1_500_000_000.0), 2), "1.5B");
        assert_eq!(isk(Some(2_000_000_000.0), 2), "2B");
    }

    #[test]
    fn isk_groups_small_amounts() {
        assert_eq!(isk(Some(987_654.0), 2), "987,654");
        assert_eq!(isk(Some(999.0), 2), "999");
        assert_eq!(isk(Some(0.0), 2), "0");
        assert_eq!(isk(None, 2), "");
    }

    #[test]
    fn isk_handles_negative_amounts() {
        assert_eq!(isk(Some(-1_234_567_890.0), 2), "-1.23B");
        assert_eq!(isk(Some(-12_345.0), 2), "-12,345");
    }

    fn at(seconds: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(seconds, 0).unwrap()
    }

    #[test]
    fn time_left_renders_coarse_buckets() {
        let now = at(0);
        assert_eq!(time_left(at(-5), now), "Expired");
        assert_eq!(time_left(at(0), now), "Expired");
        assert_eq!(time_left(at(30), now), "< 1m");
        assert_eq!(time_left(at(5 * 60), now), "5m");
        assert_eq!(time_left(at(3 * 3600 + 20 * 60), now), "3h 20m");
        assert_eq!(time_left(at(2 * 86_400 + 5 * 3600), now), "2d 5h");
    }
}
