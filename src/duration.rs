//! Duration text parsing and formatting.
//!
//! Durations are written as one or more `<integer><unit>` segments with the
//! units `h`, `m` and `s`:
//!
//! ```rust
//! use hourglass::duration::{format_duration, parse, ParseError};
//! use std::time::Duration;
//!
//! assert_eq!(parse("1h30m"), Ok(Duration::from_secs(5400)));
//! assert_eq!(parse("45s"), Ok(Duration::from_secs(45)));
//! assert_eq!(parse("abc"), Err(ParseError::Malformed));
//! assert_eq!(parse("0s"), Err(ParseError::NonPositive));
//!
//! assert_eq!(format_duration(Duration::from_secs(90)), "1m30s");
//! ```

use std::time::Duration;
use thiserror::Error;

/// Why a duration could not be parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The text is not a sequence of `<integer><unit>` segments, or the
    /// value does not fit in a `Duration`.
    #[error("Invalid duration format. Use formats like '5m', '30s', '1h30m'")]
    Malformed,
    /// The text is well formed but adds up to zero.
    #[error("Duration must be greater than 0")]
    NonPositive,
}

/// Parses duration text such as `"5m"`, `"30s"` or `"1h30m"`.
pub fn parse(text: &str) -> Result<Duration, ParseError> {
    if text.is_empty() {
        return Err(ParseError::Malformed);
    }

    let mut total_secs: u64 = 0;
    let mut chars = text.chars().peekable();

    while chars.peek().is_some() {
        let mut value: u64 = 0;
        let mut digits = 0;
        while let Some(digit) = chars.peek().and_then(|c| c.to_digit(10)) {
            value = value
                .checked_mul(10)
                .and_then(|v| v.checked_add(u64::from(digit)))
                .ok_or(ParseError::Malformed)?;
            digits += 1;
            chars.next();
        }
        if digits == 0 {
            return Err(ParseError::Malformed);
        }

        let unit_secs = match chars.next() {
            Some('h') => 3600,
            Some('m') => 60,
            Some('s') => 1,
            _ => return Err(ParseError::Malformed),
        };

        total_secs = value
            .checked_mul(unit_secs)
            .and_then(|secs| total_secs.checked_add(secs))
            .ok_or(ParseError::Malformed)?;
    }

    if total_secs == 0 {
        return Err(ParseError::NonPositive);
    }
    Ok(Duration::from_secs(total_secs))
}

/// Formats a duration for display, in the style of `1h2m3.4s`.
///
/// - `0s` for zero
/// - `900ms` below one second, in tenths
/// - `9.5s`, `4m59.9s`, `5m0s`, `1h0m0s` otherwise
///
/// Precision below a tenth of a second is truncated.
pub fn format_duration(d: Duration) -> String {
    let tenths = d.as_millis() / 100;
    if tenths == 0 {
        return "0s".to_string();
    }
    if tenths < 10 {
        return format!("{}ms", tenths * 100);
    }

    let total_secs = tenths / 10;
    let frac = tenths % 10;
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let secs = total_secs % 60;

    let secs_part = if frac == 0 {
        format!("{secs}s")
    } else {
        format!("{secs}.{frac}s")
    };

    if hours > 0 {
        format!("{hours}h{minutes}m{secs_part}")
    } else if minutes > 0 {
        format!("{minutes}m{secs_part}")
    } else {
        secs_part
    }
}
