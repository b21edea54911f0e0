/// Utilities for date and time formatting
///
/// Provides consistent date/time formatting across the application
use chrono::{DateTime, NaiveDateTime, Utc};

/// Format ISO datetime string to its date part
/// Example: "2024-03-15T14:02:26.123Z" -> "2024-03-15"
pub fn format_date(datetime_str: &str) -> String {
    let date_part = datetime_str
        .split(['T', ' '])
        .next()
        .unwrap_or(datetime_str);
    if date_part.len() == 10 && date_part.chars().filter(|c| *c == '-').count() == 2 {
        return date_part.to_string();
    }
    datetime_str.to_string()
}

/// Parse a server timestamp: HTTP date, RFC 3339 or naive ISO (taken as UTC)
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc2822(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|naive| naive.and_utc())
}

/// Describe `then` relative to `now`: "3 minutes ago", "a day ago", ...
pub fn from_now(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let seconds = (now - then).num_seconds().max(0) as f64;
    let minutes = (seconds / 60.0).round();
    let hours = (seconds / 3_600.0).round();
    let days = (seconds / 86_400.0).round();

    if seconds < 45.0 {
        "a few seconds ago".to_string()
    } else if seconds < 90.0 {
        "a minute ago".to_string()
    } else if minutes < 45.0 {
        format!("{} minutes ago", minutes)
    } else if minutes < 90.0 {
        "an hour ago".to_string()
    } else if hours < 22.0 {
        format!("{} hours ago", hours)
    } else if hours < 36.0 {
        "a day ago".to_string()
    } else if days < 26.0 {
        format!("{} days ago", days)
    } else if days < 45.0 {
        "a month ago".to_string()
    } else if days < 320.0 {
        format!("{} months ago", (days / 30.4).round().max(2.0))
    } else if days < 548.0 {
        "a year ago".to_string()
    } else {
        format!("{} years ago", (days / 365.0).round().max(2.0))
    }
}

/// Relative time of a server timestamp as of now; unparseable input is returned as is
pub fn relative_time(raw: &str) -> String {
    match parse_timestamp(raw) {
        Some(then) => from_now(then, Utc::now()),
        None => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 16, 12, 0, 0).unwrap()
    }

    fn ago(d: Duration) -> String {
        from_now(now() - d, now())
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-03-15"), "2024-03-15");
        assert_eq!(format_date("2024-03-15T14:02:26.123Z"), "2024-03-15");
        assert_eq!(format_date("2024-03-15 14:02:26"), "2024-03-15");
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_date("invalid"), "invalid");
        assert_eq!(relative_time("invalid"), "invalid");
    }

    #[test]
    fn test_parse_timestamp_formats() {
        let expected = Utc.with_ymd_and_hms(2026, 10, 12, 10, 0, 0).unwrap();
        assert_eq!(parse_timestamp("Mon, 12 Oct 2026 10:00:00 GMT"), Some(expected));
        assert_eq!(parse_timestamp("2026-10-12T10:00:00Z"), Some(expected));
        assert_eq!(parse_timestamp("2026-10-12T10:00:00.000"), Some(expected));
        assert_eq!(parse_timestamp("2026-10-12 10:00:00"), Some(expected));
    }

    #[test]
    fn test_from_now_buckets() {
        assert_eq!(ago(Duration::seconds(10)), "a few seconds ago");
        assert_eq!(ago(Duration::seconds(60)), "a minute ago");
        assert_eq!(ago(Duration::minutes(5)), "5 minutes ago");
        assert_eq!(ago(Duration::minutes(60)), "an hour ago");
        assert_eq!(ago(Duration::hours(3)), "3 hours ago");
        assert_eq!(ago(Duration::hours(30)), "a day ago");
        assert_eq!(ago(Duration::days(4)), "4 days ago");
        assert_eq!(ago(Duration::days(30)), "a month ago");
        assert_eq!(ago(Duration::days(92)), "3 months ago");
        assert_eq!(ago(Duration::days(400)), "a year ago");
        assert_eq!(ago(Duration::days(800)), "2 years ago");
    }

    #[test]
    fn test_future_timestamp_is_recent() {
        assert_eq!(from_now(now() + Duration::minutes(5), now()), "a few seconds ago");
    }
}
