// ABOUTME: Ordered-fallback date parsing for RSS/Atom feed timestamps.
// ABOUTME: Tries RFC 3339, named-zone RFC 822, RFC 2822, and ISO-8601 variants in a fixed order.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, TimeZone, Utc};

/// One date grammar understood by the parser.
#[derive(Debug, Clone, Copy)]
enum DateGrammar {
    /// `2023-06-15T14:30:00Z`, `2023-06-15T14:30:00.123+02:00`
    Rfc3339,
    /// `Mon, 02 Jan 2006 15:04:05 -0700`, `2 Jan 06 15:04 GMT`
    Rfc2822,
    /// RFC 822 date followed by a zone abbreviation chrono does not know.
    NamedZone,
    /// chrono pattern carrying a numeric offset.
    Offset(&'static str),
    /// chrono pattern without zone information, read as UTC.
    Naive(&'static str),
    /// chrono date-only pattern, read as UTC midnight.
    DateOnly(&'static str),
}

/// The first grammar that accepts the input wins. Named zones go before
/// RFC 2822 because chrono reads unknown zone names as UTC.
const DATE_GRAMMARS: &[DateGrammar] = &[
    DateGrammar::Rfc3339,
    DateGrammar::NamedZone,
    DateGrammar::Rfc2822,
    DateGrammar::Offset("%a, %d %b %Y %H:%M:%S %z"),
    DateGrammar::Offset("%a, %e %b %Y %H:%M:%S %z"),
    DateGrammar::Offset("%d %b %Y %H:%M:%S %z"),
    DateGrammar::Offset("%e %b %Y %H:%M:%S %z"),
    DateGrammar::Offset("%Y-%m-%dT%H:%M:%S%.f%z"),
    DateGrammar::Offset("%Y-%m-%dT%H:%M%:z"),
    DateGrammar::Naive("%Y-%m-%dT%H:%M:%S%.f"),
    DateGrammar::Naive("%Y-%m-%dT%H:%M"),
    DateGrammar::Naive("%Y-%m-%d %H:%M:%S%.f"),
    DateGrammar::Naive("%a, %d %b %Y %H:%M:%S"),
    DateGrammar::Naive("%d %b %Y %H:%M:%S"),
    DateGrammar::Naive("%e %b %Y %H:%M:%S"),
    DateGrammar::DateOnly("%Y-%m-%d"),
    DateGrammar::DateOnly("%a, %d %b %Y"),
    DateGrammar::DateOnly("%d %b %Y"),
];

/// Zone abbreviations seen in real feeds, in seconds east of UTC.
/// Ambiguous abbreviations resolve to their first entry.
const NAMED_ZONES: &[(&str, i32)] = &[
    ("GMT", 0),
    ("UTC", 0),
    ("UT", 0),
    ("Z", 0),
    ("EST", -5 * 3600),
    ("EDT", -4 * 3600),
    ("CST", -6 * 3600),
    ("CDT", -5 * 3600),
    ("MST", -7 * 3600),
    ("MDT", -6 * 3600),
    ("PST", -8 * 3600),
    ("PDT", -7 * 3600),
    ("AKST", -9 * 3600),
    ("AKDT", -8 * 3600),
    ("HST", -10 * 3600),
    ("AST", -4 * 3600),
    ("ADT", -3 * 3600),
    ("NST", -(3 * 3600 + 30 * 60)),
    ("NDT", -(2 * 3600 + 30 * 60)),
    ("WET", 0),
    ("WEST", 3600),
    ("CET", 3600),
    ("CEST", 2 * 3600),
    ("MEZ", 3600),
    ("MESZ", 2 * 3600),
    ("EET", 2 * 3600),
    ("EEST", 3 * 3600),
    ("BST", 3600),
    ("IST", 5 * 3600 + 30 * 60),
    ("JST", 9 * 3600),
    ("KST", 9 * 3600),
    ("AEST", 10 * 3600),
    ("AEDT", 11 * 3600),
    ("AWST", 8 * 3600),
    ("NZST", 12 * 3600),
    ("NZDT", 13 * 3600),
];

const NAMED_ZONE_PATTERNS: &[&str] = &[
    "%a, %d %b %Y %H:%M:%S",
    "%a, %e %b %Y %H:%M:%S",
    "%a, %d %b %Y %H:%M",
    "%d %b %Y %H:%M:%S",
    "%e %b %Y %H:%M:%S",
];

/// Parses a feed timestamp into UTC.
///
/// Returns `None` for blank input or when no known grammar matches; a bad
/// date never fails the surrounding parse.
pub fn parse_flexible_time(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    DATE_GRAMMARS.iter().find_map(|grammar| grammar.parse(s))
}

impl DateGrammar {
    fn parse(self, s: &str) -> Option<DateTime<Utc>> {
        match self {
            DateGrammar::Rfc3339 => DateTime::parse_from_rfc3339(s)
                .ok()
                .map(|dt| dt.with_timezone(&Utc)),
            DateGrammar::Rfc2822 => DateTime::parse_from_rfc2822(s)
                .ok()
                .map(|dt| dt.with_timezone(&Utc)),
            DateGrammar::NamedZone => parse_with_named_zone(s),
            DateGrammar::Offset(fmt) => DateTime::parse_from_str(s, fmt)
                .ok()
                .map(|dt| dt.with_timezone(&Utc)),
            DateGrammar::Naive(fmt) => NaiveDateTime::parse_from_str(s, fmt)
                .ok()
                .map(|naive| Utc.from_utc_datetime(&naive)),
            DateGrammar::DateOnly(fmt) => NaiveDate::parse_from_str(s, fmt)
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
                .map(|naive| Utc.from_utc_datetime(&naive)),
        }
    }
}

fn parse_with_named_zone(s: &str) -> Option<DateTime<Utc>> {
    let (base, zone) = s.rsplit_once(' ')?;
    let offset_secs = NAMED_ZONES
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(zone))
        .map(|(_, secs)| *secs)?;
    let offset = FixedOffset::east_opt(offset_secs)?;
    let base = base.trim_end();

    NAMED_ZONE_PATTERNS.iter().find_map(|fmt| {
        let naive = NaiveDateTime::parse_from_str(base, fmt).ok()?;
        let dt = offset.from_local_datetime(&naive).single()?;
        Some(dt.with_timezone(&Utc))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap()
    }

    #[test]
    fn test_rfc3339() {
        assert_eq!(
            parse_flexible_time("2023-06-15T14:30:00Z"),
            Some(utc(2023, 6, 15, 14, 30, 0))
        );
    }

    #[test]
    fn test_rfc3339_fraction_and_offset() {
        let dt = parse_flexible_time("2023-06-15T14:30:00.250+02:00").unwrap();
        assert_eq!(dt.with_nanosecond(0).unwrap(), utc(2023, 6, 15, 12, 30, 0));
        assert_eq!(dt.nanosecond(), 250_000_000);
    }

    #[test]
    fn test_rfc2822() {
        assert_eq!(
            parse_flexible_time("Mon, 02 Jan 2006 15:04:05 -0700"),
            Some(utc(2006, 1, 2, 22, 4, 5))
        );
    }

    #[test]
    fn test_named_zone() {
        // 15:04:05 PDT is 22:04:05 UTC
        assert_eq!(
            parse_flexible_time("Mon, 02 Jan 2006 15:04:05 PDT"),
            Some(utc(2006, 1, 2, 22, 4, 5))
        );
        assert_eq!(
            parse_flexible_time("Mon, 2 Jan 2006 15:04:05 CEST"),
            Some(utc(2006, 1, 2, 13, 4, 5))
        );
    }

    #[test]
    fn test_iso_compact_offset() {
        assert_eq!(
            parse_flexible_time("2006-01-02T15:04:05-0700"),
            Some(utc(2006, 1, 2, 22, 4, 5))
        );
    }

    #[test]
    fn test_naive_forms_assume_utc() {
        assert_eq!(
            parse_flexible_time("2006-01-02T15:04:05"),
            Some(utc(2006, 1, 2, 15, 4, 5))
        );
        assert_eq!(
            parse_flexible_time("2006-01-02 15:04:05"),
            Some(utc(2006, 1, 2, 15, 4, 5))
        );
        assert_eq!(parse_flexible_time("2023-12-25"), Some(utc(2023, 12, 25, 0, 0, 0)));
    }

    #[test]
    fn test_garbage_is_absent() {
        assert_eq!(parse_flexible_time(""), None);
        assert_eq!(parse_flexible_time("   "), None);
        assert_eq!(parse_flexible_time("not a date"), None);
        assert_eq!(parse_flexible_time("Mon, 99 Foo 2006 15:04:05 GMT"), None);
        assert_eq!(parse_flexible_time("2006-01-02 15:04:05 XYZ"), None);
    }
}
