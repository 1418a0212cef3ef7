//! Search text normalization for DATETIME columns.
//!
//! Dates are stored as `YYYY-MM-DD hh:mm:ss`, so user-friendly input like `4:7` or
//! `1/2/1990` is rewritten into that shape before it is used in a `LIKE`.

use std::sync::LazyLock;

use regex::Regex;

use crate::config::DatetimeMatching;

/// `H:M` or `H:M:S` with an optional zone token (`GMT`, `UTC+2`, `pm`, ...).
static TIME_OF_DAY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^([01]?[0-9]|2[0-3]):([0-5]?[0-9])(?::([0-5]?[0-9]))?(\s*[A-Za-z]{1,5}(?:[+-][0-9]{0,2}(?::?[0-9]{2})?)?)?$",
    )
    .expect("time-of-day pattern is valid")
});

/// Leading `M-D-YYYY` or `M/D/YYYY`, not followed by another digit.
static DATE_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]{1,2})[-/]([0-9]{1,2})[-/]([0-9]{4})(?:[^0-9]|$)")
        .expect("date pattern is valid")
});

fn pad2(component: &str) -> String {
    format!("{component:0>2}")
}

/// Zero-pad the components of a time of day: `4:7` becomes `04:07`, `4:7:5 GMT` becomes
/// `04:07:05 GMT`. Returns `None` if `value` is not a time of day.
#[must_use]
pub fn normalize_time(value: &str) -> Option<String> {
    let captures = TIME_OF_DAY.captures(value)?;

    let mut normalized = format!("{}:{}", pad2(&captures[1]), pad2(&captures[2]));
    if let Some(seconds) = captures.get(3) {
        normalized.push(':');
        normalized.push_str(&pad2(seconds.as_str()));
    }
    if let Some(zone) = captures.get(4) {
        normalized.push_str(zone.as_str());
    }
    Some(normalized)
}

/// Rewrite a leading `M-D-YYYY` / `M/D/YYYY` as `YYYY-MM-DD`, keeping the rest of the
/// string. Values without such a prefix are returned unchanged.
#[must_use]
pub fn normalize_date(value: &str) -> String {
    let Some(captures) = DATE_PREFIX.captures(value) else {
        return value.to_string();
    };
    let prefix_end = captures.get(3).map_or(0, |year| year.end());

    format!(
        "{}-{}-{}{}",
        &captures[3],
        pad2(&captures[1]),
        pad2(&captures[2]),
        &value[prefix_end..]
    )
}

#[must_use]
pub fn has_date_prefix(value: &str) -> bool {
    DATE_PREFIX.is_match(value)
}

/// The text a DATETIME column is matched against, or `None` if the column should be
/// left out of the search.
///
/// A time of day wins over a date. In [`DatetimeMatching::Strict`] mode only values with a
/// date prefix are accepted after that.
#[must_use]
pub fn datetime_search_value(value: &str, matching: DatetimeMatching) -> Option<String> {
    if let Some(time) = normalize_time(value) {
        return Some(time);
    }

    match matching {
        DatetimeMatching::Lenient => Some(normalize_date(value)),
        DatetimeMatching::Strict => has_date_prefix(value).then(|| normalize_date(value)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_is_zero_padded() {
        assert_eq!(normalize_time("4:7").as_deref(), Some("04:07"));
        assert_eq!(normalize_time("14:30").as_deref(), Some("14:30"));
        assert_eq!(normalize_time("4:7:5").as_deref(), Some("04:07:05"));
        assert_eq!(normalize_time("23:59:59").as_deref(), Some("23:59:59"));
    }

    #[test]
    fn test_time_keeps_zone_suffix() {
        assert_eq!(normalize_time("4:07 GMT").as_deref(), Some("04:07 GMT"));
        assert_eq!(normalize_time("9:5GMT+").as_deref(), Some("09:05GMT+"));
        assert_eq!(normalize_time("9:05:1 GMT+02").as_deref(), Some("09:05:01 GMT+02"));
    }

    #[test]
    fn test_out_of_range_time_is_rejected() {
        assert_eq!(normalize_time("24:00"), None);
        assert_eq!(normalize_time("12:60"), None);
        assert_eq!(normalize_time("12:30:61"), None);
        assert_eq!(normalize_time("1-2-1990"), None);
        assert_eq!(normalize_time("12"), None);
    }

    #[test]
    fn test_date_prefix_is_reordered() {
        assert_eq!(normalize_date("1-2-1990"), "1990-01-02");
        assert_eq!(normalize_date("12/31/2020"), "2020-12-31");
        assert_eq!(normalize_date("1/2/1990 10:00"), "1990-01-02 10:00");
    }

    #[test]
    fn test_non_date_is_unchanged() {
        assert_eq!(normalize_date("1990"), "1990");
        assert_eq!(normalize_date("hello"), "hello");
        assert_eq!(normalize_date("1-2-90"), "1-2-90");
        assert_eq!(normalize_date("1-2-19901"), "1-2-19901");
        assert!(!has_date_prefix("12/31/20201"));
    }

    #[test]
    fn test_date_prefix_keeps_following_text() {
        assert_eq!(normalize_date("1-2-1990"), "1990-01-02");
        assert_eq!(normalize_date("1-2-1990T10"), "1990-01-02T10");
        assert_eq!(normalize_date("1/2/1990, noon"), "1990-01-02, noon");
    }

    #[test]
    fn test_lenient_matching_accepts_anything() {
        let lenient = DatetimeMatching::Lenient;
        assert_eq!(datetime_search_value("4:7", lenient).as_deref(), Some("04:07"));
        assert_eq!(datetime_search_value("1-2-1990", lenient).as_deref(), Some("1990-01-02"));
        assert_eq!(datetime_search_value("2021", lenient).as_deref(), Some("2021"));
        assert_eq!(datetime_search_value("???", lenient).as_deref(), Some("???"));
    }

    #[test]
    fn test_strict_matching_requires_time_or_date() {
        let strict = DatetimeMatching::Strict;
        assert_eq!(datetime_search_value("4:7", strict).as_deref(), Some("04:07"));
        assert_eq!(datetime_search_value("1/2/1990", strict).as_deref(), Some("1990-01-02"));
        assert_eq!(datetime_search_value("2021", strict), None);
        assert_eq!(datetime_search_value("abc", strict), None);
    }
}
