// ABOUTME: Duration string parsing for episode lengths and soundbite offsets.
// ABOUTME: Supports bare (decimal) seconds and [[HH:]MM:]SS[.fraction] literals as chrono TimeDelta.

use chrono::TimeDelta;

/// Parses a duration into a non-negative [`TimeDelta`].
///
/// Accepted forms:
/// - bare seconds, integer or decimal: `"90"`, `"12.5"`
/// - `MM:SS` and `HH:MM:SS`, with an optional fraction on the seconds:
///   `"45:30"`, `"01:02:03"`, `"2:03.250"`
///
/// Negative values, signs, empty components and anything non-numeric yield
/// `None`. Components are not range-checked (`"75:00"` is 75 minutes).
pub fn parse_duration(s: &str) -> Option<TimeDelta> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    let parts: Vec<&str> = s.split(':').collect();
    if parts.len() > 3 {
        return None;
    }

    let (seconds_part, leading) = parts.split_last()?;
    let (whole_secs, nanos) = parse_seconds_component(seconds_part)?;

    let mut total: u64 = 0;
    for part in leading {
        total = total.checked_mul(60)?.checked_add(parse_digits(part)?)?;
    }
    total = total.checked_mul(60)?.checked_add(whole_secs)?;

    TimeDelta::new(i64::try_from(total).ok()?, nanos)
}

/// Parses a signed decimal number of seconds: `"73"`, `"60.5"`, `"-1"`.
///
/// Only an optional sign, digits and one decimal point are accepted, so
/// exponents, `NaN` and colon forms yield `None`.
pub fn parse_signed_seconds(s: &str) -> Option<TimeDelta> {
    let s = s.trim();
    let (negative, digits) = match s.as_bytes().first()? {
        b'-' => (true, &s[1..]),
        b'+' => (false, &s[1..]),
        _ => (false, s),
    };
    let (whole_secs, nanos) = parse_seconds_component(digits)?;
    let delta = TimeDelta::new(i64::try_from(whole_secs).ok()?, nanos)?;
    Some(if negative { -delta } else { delta })
}

/// Parses `SS` or `SS.fraction` into whole seconds and nanoseconds.
fn parse_seconds_component(s: &str) -> Option<(u64, u32)> {
    match s.split_once('.') {
        None => Some((parse_digits(s)?, 0)),
        Some((whole, fraction)) => {
            if fraction.is_empty() || !fraction.bytes().all(|b| b.is_ascii_digit()) {
                return None;
            }
            let whole = if whole.is_empty() { 0 } else { parse_digits(whole)? };
            // Digits beyond nanosecond precision are truncated.
            let mut nanos: u32 = 0;
            for (idx, digit) in fraction.bytes().take(9).enumerate() {
                nanos += u32::from(digit - b'0') * 10u32.pow(8 - idx as u32);
            }
            Some((whole, nanos))
        }
    }
}

fn parse_digits(s: &str) -> Option<u64> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

/// Serde helpers storing a [`TimeDelta`] as fractional seconds. The
/// nanosecond part is kept, within the precision of an `f64`.
pub mod serde_seconds {
    use chrono::TimeDelta;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(delta: &TimeDelta, serializer: S) -> Result<S::Ok, S::Error> {
        let nanos = f64::from(delta.subsec_nanos()) / 1e9;
        serializer.serialize_f64(delta.num_seconds() as f64 + nanos)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<TimeDelta, D::Error> {
        let secs = f64::deserialize(deserializer)?;
        from_secs(secs).ok_or_else(|| serde::de::Error::custom("duration out of range"))
    }

    fn from_secs(secs: f64) -> Option<TimeDelta> {
        if !secs.is_finite() || secs.abs() >= i64::MAX as f64 / 1000.0 {
            return None;
        }
        let whole = secs.trunc();
        let nanos = ((secs - whole) * 1e9).round() as i64;
        TimeDelta::try_seconds(whole as i64)?.checked_add(&TimeDelta::nanoseconds(nanos))
    }

    pub mod option {
        use chrono::TimeDelta;
        use serde::{Deserialize, Deserializer, Serializer};

        pub fn serialize<S: Serializer>(
            delta: &Option<TimeDelta>,
            serializer: S,
        ) -> Result<S::Ok, S::Error> {
            match delta {
                Some(delta) => super::serialize(delta, serializer),
                None => serializer.serialize_none(),
            }
        }

        pub fn deserialize<'de, D: Deserializer<'de>>(
            deserializer: D,
        ) -> Result<Option<TimeDelta>, D::Error> {
            match Option::<f64>::deserialize(deserializer)? {
                Some(secs) => super::from_secs(secs)
                    .map(Some)
                    .ok_or_else(|| serde::de::Error::custom("duration out of range")),
                None => Ok(None),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secs(s: i64) -> TimeDelta {
        TimeDelta::try_seconds(s).unwrap()
    }

    #[test]
    fn test_bare_seconds() {
        assert_eq!(parse_duration("123"), Some(secs(123)));
        assert_eq!(parse_duration("0"), Some(TimeDelta::zero()));
        assert_eq!(parse_duration(" 3600 "), Some(secs(3600)));
    }

    #[test]
    fn test_decimal_seconds() {
        assert_eq!(parse_duration("12.5"), Some(TimeDelta::try_milliseconds(12_500).unwrap()));
        assert_eq!(parse_duration("0.001"), Some(TimeDelta::try_milliseconds(1).unwrap()));
        assert_eq!(parse_duration(".5"), Some(TimeDelta::try_milliseconds(500).unwrap()));
    }

    #[test]
    fn test_colon_forms() {
        assert_eq!(parse_duration("01:02:03"), Some(secs(3723)));
        assert_eq!(parse_duration("45:30"), Some(secs(2730)));
        assert_eq!(parse_duration("0:0:0"), Some(TimeDelta::zero()));
        assert_eq!(parse_duration("75:00"), Some(secs(4500)));
        assert_eq!(
            parse_duration("2:03.250"),
            Some(TimeDelta::try_milliseconds(123_250).unwrap())
        );
    }

    #[test]
    fn test_rejects_negative_and_garbage() {
        assert_eq!(parse_duration("-1"), None);
        assert_eq!(parse_duration("+1"), None);
        assert_eq!(parse_duration(""), None);
        assert_eq!(parse_duration("   "), None);
        assert_eq!(parse_duration("1:2:3:4"), None);
        assert_eq!(parse_duration("1::3"), None);
        assert_eq!(parse_duration("12."), None);
        assert_eq!(parse_duration("1h30m"), None);
        assert_eq!(parse_duration("not a duration"), None);
    }

    #[test]
    fn test_signed_seconds() {
        assert_eq!(parse_signed_seconds("73"), Some(secs(73)));
        assert_eq!(parse_signed_seconds(" 60.5 "), TimeDelta::try_milliseconds(60_500));
        assert_eq!(parse_signed_seconds("-1"), Some(secs(-1)));
        assert_eq!(parse_signed_seconds("-0.25"), TimeDelta::try_milliseconds(-250));
        assert_eq!(parse_signed_seconds("+2"), Some(secs(2)));
        assert_eq!(parse_signed_seconds("0.0000004"), Some(TimeDelta::nanoseconds(400)));
    }

    #[test]
    fn test_signed_seconds_rejects_non_decimal_forms() {
        assert_eq!(parse_signed_seconds("1e2"), None);
        assert_eq!(parse_signed_seconds("NaN"), None);
        assert_eq!(parse_signed_seconds("inf"), None);
        assert_eq!(parse_signed_seconds("1:00"), None);
        assert_eq!(parse_signed_seconds("-"), None);
        assert_eq!(parse_signed_seconds("--1"), None);
        assert_eq!(parse_signed_seconds(""), None);
    }

    #[test]
    fn test_serde_seconds_keeps_sub_millisecond_values() {
        #[derive(serde::Serialize, serde::Deserialize, Debug, PartialEq)]
        struct Offset {
            #[serde(with = "serde_seconds")]
            at: TimeDelta,
        }

        for at in [
            TimeDelta::nanoseconds(400_000),
            TimeDelta::nanoseconds(1),
            TimeDelta::nanoseconds(3_723_000_000_001),
            TimeDelta::try_milliseconds(-2_500).unwrap(),
        ] {
            let json = serde_json::to_string(&Offset { at }).unwrap();
            let back: Offset = serde_json::from_str(&json).unwrap();
            assert_eq!(back.at, at, "{}", json);
        }
    }

    #[test]
    fn test_rejects_overflow() {
        assert_eq!(parse_duration("99999999999999999999999"), None);
        assert_eq!(parse_duration("18446744073709551615:00"), None);
    }
}
