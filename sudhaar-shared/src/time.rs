//! Date formatting for cards, tables and campaign countdowns.
//!
//! All functions take `now` explicitly so they stay deterministic under test.
//! Timestamps are rendered in UTC.

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, Utc};

/// Length of a campaign's fundraising window.
pub const CAMPAIGN_WINDOW_DAYS: i64 = 30;

const FALLBACK: &str = "Recently";

/// Parse a backend timestamp. Accepts RFC 3339, offset-less date-times
/// (read as UTC) and bare `YYYY-MM-DD` dates.
#[must_use]
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    DateTime::parse_from_rfc3339(raw)
        .map(|parsed| parsed.with_timezone(&Utc))
        .ok()
        .or_else(|| {
            ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
                .iter()
                .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
                .map(|naive| naive.and_utc())
        })
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
                .map(|naive| naive.and_utc())
        })
}

fn plural(count: i64, unit: &str) -> String {
    if count == 1 {
        format!("{count} {unit} ago")
    } else {
        format!("{count} {unit}s ago")
    }
}

/// Relative age such as `5 minutes ago`.
///
/// Missing or unparsable input yields `Recently`; anything under a minute,
/// including future timestamps, is `Just now`. Months are 30-day blocks and
/// years 365-day blocks, with a floor of one year once twelve months pass.
#[must_use]
pub fn format_time_ago(raw: Option<&str>, now: DateTime<Utc>) -> String {
    let Some(then) = raw.and_then(parse_timestamp) else {
        return FALLBACK.to_string();
    };
    let seconds = (now - then).num_seconds();
    if seconds < 60 {
        return "Just now".to_string();
    }
    let minutes = seconds / 60;
    if minutes < 60 {
        return plural(minutes, "minute");
    }
    let hours = minutes / 60;
    if hours < 24 {
        return plural(hours, "hour");
    }
    let days = hours / 24;
    if days < 30 {
        return plural(days, "day");
    }
    let months = days / 30;
    if months < 12 {
        return plural(months, "month");
    }
    plural((days / 365).max(1), "year")
}

/// Calendar date such as `Dec 31, 2023`, or `Recently` when unknown.
#[must_use]
pub fn format_display_date(raw: Option<&str>) -> String {
    raw.and_then(parse_timestamp).map_or_else(
        || FALLBACK.to_string(),
        |then| then.format("%b %-d, %Y").to_string(),
    )
}

/// Date with time of day, e.g. `Dec 31, 2023, 09:05 PM`.
#[must_use]
pub fn format_timestamp(raw: Option<&str>) -> String {
    raw.and_then(parse_timestamp).map_or_else(
        || FALLBACK.to_string(),
        |then| then.format("%b %-d, %Y, %I:%M %p").to_string(),
    )
}

/// Whole days left in a campaign's 30-day window, rounded up and never
/// negative. Campaigns without a parsable creation date report zero.
#[must_use]
pub fn days_left(created_at: Option<&str>, now: DateTime<Utc>) -> i64 {
    let Some(created) = created_at.and_then(parse_timestamp) else {
        return 0;
    };
    let remaining = (created + Duration::days(CAMPAIGN_WINDOW_DAYS)) - now;
    let millis = remaining.num_milliseconds().max(0);
    let day = Duration::days(1).num_milliseconds();
    (millis + day - 1) / day
}

/// Coarse age for archive cards: `N days ago`, or `Recently` for anything
/// under a day or without a date.
#[must_use]
pub fn age_label(created_at: Option<&str>, now: DateTime<Utc>) -> String {
    let Some(created) = created_at.and_then(parse_timestamp) else {
        return FALLBACK.to_string();
    };
    match (now - created).num_days() {
        days if days > 0 => plural(days, "day"),
        _ => FALLBACK.to_string(),
    }
}

/// Prefer the server's precomputed text, then derive one from `created_at`.
#[must_use]
pub fn issue_age(time_text: Option<&str>, created_at: Option<&str>, now: DateTime<Utc>) -> String {
    match time_text.map(str::trim) {
        Some(text) if !text.is_empty() => text.to_string(),
        _ => age_label(created_at, now),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use test_case::test_case;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap()
    }

    fn ago(duration: Duration) -> String {
        (now() - duration).to_rfc3339()
    }

    #[test_case("2024-01-15T10:30:00.123456", 10, 30 ; "django microseconds without offset")]
    #[test_case("2024-01-15T10:30:00", 10, 30 ; "seconds without offset")]
    #[test_case("2024-01-15 08:05:00", 8, 5 ; "space separated")]
    #[test_case("2024-01-15T10:30:00+05:00", 5, 30 ; "with offset")]
    fn parses_backend_timestamps(raw: &str, hour: u32, minute: u32) {
        let parsed = parse_timestamp(raw).unwrap();
        assert_eq!(
            parsed.format("%Y-%m-%d %H:%M").to_string(),
            format!("2024-01-15 {hour:02}:{minute:02}")
        );
    }

    #[test]
    fn offsetless_timestamps_are_not_recently() {
        assert_eq!(
            format_time_ago(Some("2024-06-15T08:59:00.123456"), now()),
            "3 hours ago"
        );
    }

    #[test_case(Duration::seconds(30), "Just now" ; "seconds")]
    #[test_case(Duration::minutes(1), "1 minute ago" ; "one minute")]
    #[test_case(Duration::minutes(45), "45 minutes ago" ; "minutes")]
    #[test_case(Duration::hours(1), "1 hour ago" ; "one hour")]
    #[test_case(Duration::hours(23), "23 hours ago" ; "hours")]
    #[test_case(Duration::days(1), "1 day ago" ; "one day")]
    #[test_case(Duration::days(29), "29 days ago" ; "days")]
    #[test_case(Duration::days(30), "1 month ago" ; "one month")]
    #[test_case(Duration::days(359), "11 months ago" ; "months")]
    #[test_case(Duration::days(360), "1 year ago" ; "twelve thirty day months")]
    #[test_case(Duration::days(800), "2 years ago" ; "years")]
    fn relative_buckets(elapsed: Duration, expected: &str) {
        assert_eq!(format_time_ago(Some(&ago(elapsed)), now()), expected);
    }

    #[test]
    fn relative_fallbacks() {
        assert_eq!(format_time_ago(None, now()), "Recently");
        assert_eq!(format_time_ago(Some("not a date"), now()), "Recently");
        let future = (now() + Duration::hours(2)).to_rfc3339();
        assert_eq!(format_time_ago(Some(&future), now()), "Just now");
    }

    #[test]
    fn display_date_formats() {
        assert_eq!(
            format_display_date(Some("2023-12-31T08:30:00Z")),
            "Dec 31, 2023"
        );
        assert_eq!(format_display_date(Some("2024-03-05")), "Mar 5, 2024");
        assert_eq!(format_display_date(Some("")), "Recently");
        assert_eq!(
            format_timestamp(Some("2023-12-31T21:05:00.123456Z")),
            "Dec 31, 2023, 09:05 PM"
        );
    }

    #[test]
    fn days_left_rounds_up_and_floors_at_zero() {
        assert_eq!(days_left(Some(&ago(Duration::zero())), now()), 30);
        assert_eq!(days_left(Some(&ago(Duration::hours(12))), now()), 30);
        assert_eq!(days_left(Some(&ago(Duration::days(29))), now()), 1);
        assert_eq!(days_left(Some(&ago(Duration::days(45))), now()), 0);
        assert_eq!(days_left(None, now()), 0);
    }

    #[test]
    fn archive_age_labels() {
        assert_eq!(age_label(Some(&ago(Duration::hours(5))), now()), "Recently");
        assert_eq!(age_label(Some(&ago(Duration::days(1))), now()), "1 day ago");
        assert_eq!(age_label(Some(&ago(Duration::days(9))), now()), "9 days ago");
        assert_eq!(age_label(None, now()), "Recently");
        assert_eq!(
            issue_age(Some("3 hours ago"), Some(&ago(Duration::days(9))), now()),
            "3 hours ago"
        );
        assert_eq!(
            issue_age(Some(" "), Some(&ago(Duration::days(2))), now()),
            "2 days ago"
        );
    }
}
