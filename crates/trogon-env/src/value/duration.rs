use std::time::Duration;

/// Upper bound on intermediate totals, in nanoseconds.
const MAX_NANOS: u64 = 1 << 63;

const NANOSECOND: u64 = 1;
const MICROSECOND: u64 = 1_000 * NANOSECOND;
const MILLISECOND: u64 = 1_000 * MICROSECOND;
const SECOND: u64 = 1_000 * MILLISECOND;
const MINUTE: u64 = 60 * SECOND;
const HOUR: u64 = 60 * MINUTE;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DurationParseError {
    #[error("empty duration")]
    Empty,
    #[error("duration segment must start with a number")]
    InvalidNumber,
    #[error("missing unit in duration")]
    MissingUnit,
    #[error("unknown unit {0:?} in duration")]
    UnknownUnit(String),
    #[error("duration exceeds {} nanoseconds", i64::MAX)]
    Overflow,
    #[error("negative durations are not supported")]
    Negative,
}

/// Parses a sequence of `<number><unit>` segments and sums them.
///
/// Numbers may carry a fraction (`1.5h`, `.5s`). Units are `ns`, `us`
/// (also `µs` and `μs`), `ms`, `s`, `m` and `h`. A unit is required on
/// every segment except for the bare literal `0`. An optional leading sign
/// is accepted, but only zero may be negative.
///
/// ```
/// use std::time::Duration;
/// use trogon_env::value::parse_duration;
///
/// assert_eq!(parse_duration("1h30m").unwrap(), Duration::from_secs(5400));
/// assert_eq!(parse_duration("1.5s").unwrap(), Duration::from_millis(1500));
/// assert!(parse_duration("30").is_err());
/// ```
pub fn parse_duration(raw: &str) -> Result<Duration, DurationParseError> {
    let (negative, mut rest) = match raw.as_bytes().first() {
        Some(b'-') => (true, &raw[1..]),
        Some(b'+') => (false, &raw[1..]),
        _ => (false, raw),
    };

    if rest == "0" {
        return Ok(Duration::ZERO);
    }
    if rest.is_empty() {
        return Err(DurationParseError::Empty);
    }

    let mut total: u64 = 0;
    while !rest.is_empty() {
        let (nanos, remaining) = parse_segment(rest)?;
        total = total
            .checked_add(nanos)
            .filter(|sum| *sum <= MAX_NANOS)
            .ok_or(DurationParseError::Overflow)?;
        rest = remaining;
    }

    if negative {
        return if total == 0 {
            Ok(Duration::ZERO)
        } else {
            Err(DurationParseError::Negative)
        };
    }
    if total > i64::MAX as u64 {
        return Err(DurationParseError::Overflow);
    }
    Ok(Duration::from_nanos(total))
}

/// Consumes one `<number><unit>` segment, returning its value in
/// nanoseconds and the unconsumed tail.
fn parse_segment(s: &str) -> Result<(u64, &str), DurationParseError> {
    if !s.starts_with(|c: char| c == '.' || c.is_ascii_digit()) {
        return Err(DurationParseError::InvalidNumber);
    }

    let (whole, after_whole) = leading_int(s)?;
    let has_whole = after_whole.len() != s.len();

    let (fraction, scale, after_number, has_fraction) = match after_whole.strip_prefix('.') {
        Some(tail) => {
            let (fraction, scale, rest) = leading_fraction(tail);
            (fraction, scale, rest, rest.len() != tail.len())
        }
        None => (0, 1.0, after_whole, false),
    };
    if !has_whole && !has_fraction {
        return Err(DurationParseError::InvalidNumber);
    }

    let unit_len = after_number
        .find(|c: char| c == '.' || c.is_ascii_digit())
        .unwrap_or(after_number.len());
    if unit_len == 0 {
        return Err(DurationParseError::MissingUnit);
    }
    let (unit, rest) = after_number.split_at(unit_len);
    let per_unit = unit_nanos(unit)
        .ok_or_else(|| DurationParseError::UnknownUnit(unit.to_owned()))?;

    if whole > MAX_NANOS / per_unit {
        return Err(DurationParseError::Overflow);
    }
    let mut nanos = whole * per_unit;
    if fraction > 0 {
        // Sub-nanosecond remainders truncate.
        nanos += (fraction as f64 * (per_unit as f64 / scale)) as u64;
        if nanos > MAX_NANOS {
            return Err(DurationParseError::Overflow);
        }
    }
    Ok((nanos, rest))
}

fn leading_int(s: &str) -> Result<(u64, &str), DurationParseError> {
    let digits = s.bytes().take_while(u8::is_ascii_digit).count();
    let mut value: u64 = 0;
    for b in s[..digits].bytes() {
        if value > MAX_NANOS / 10 {
            return Err(DurationParseError::Overflow);
        }
        value = value * 10 + u64::from(b - b'0');
        if value > MAX_NANOS {
            return Err(DurationParseError::Overflow);
        }
    }
    Ok((value, &s[digits..]))
}

/// Digits past the representable precision are consumed and dropped.
fn leading_fraction(s: &str) -> (u64, f64, &str) {
    let digits = s.bytes().take_while(u8::is_ascii_digit).count();
    let mut value: u64 = 0;
    let mut scale = 1.0;
    let mut saturated = false;
    for b in s[..digits].bytes() {
        if saturated {
            continue;
        }
        if value > (MAX_NANOS - 1) / 10 {
            saturated = true;
            continue;
        }
        let next = value * 10 + u64::from(b - b'0');
        if next > MAX_NANOS {
            saturated = true;
            continue;
        }
        value = next;
        scale *= 10.0;
    }
    (value, scale, &s[digits..])
}

fn unit_nanos(unit: &str) -> Option<u64> {
    match unit {
        "ns" => Some(NANOSECOND),
        "us" | "\u{00b5}s" | "\u{03bc}s" => Some(MICROSECOND),
        "ms" => Some(MILLISECOND),
        "s" => Some(SECOND),
        "m" => Some(MINUTE),
        "h" => Some(HOUR),
        _ => None,
    }
}
