//! Unit-suffixed number parsing.
//!
//! Unparseable input yields `0.0`; callers treat a zero CPU time as "no sample".

/// Time suffixes and their divisor to seconds. Longer suffixes first so that
/// `ms` is not mistaken for `s`.
const TIME_UNITS: &[(&str, f64)] = &[
    ("ms", 1e3),
    ("us", 1e6),
    ("µs", 1e6),
    ("ns", 1e9),
    ("s", 1.0),
];

/// Parse a time value into seconds.
///
/// ```
/// use vtune_report::parsing::parse_time;
///
/// assert_eq!(parse_time("1.234s"), 1.234);
/// assert_eq!(parse_time("5ms"), 0.005);
/// assert_eq!(parse_time("n/a"), 0.0);
/// ```
#[must_use]
pub fn parse_time(raw: &str) -> f64 {
    let trimmed = raw.trim();
    let (number, divisor) = TIME_UNITS
        .iter()
        .find_map(|(suffix, divisor)| trimmed.strip_suffix(suffix).map(|n| (n, *divisor)))
        .unwrap_or((trimmed, 1.0));

    parse_finite(number).map_or(0.0, |value| value / divisor)
}

/// Parse a percentage such as `"12.34%"` into `12.34`.
#[must_use]
pub fn parse_percent(raw: &str) -> f64 {
    parse_finite(&raw.replace('%', "")).unwrap_or(0.0)
}

// `f64::from_str` accepts "NaN" and "inf", which are never valid measurements.
fn parse_finite(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}
