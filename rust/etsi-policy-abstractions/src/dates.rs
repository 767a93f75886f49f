// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Date parsing shared by the suite and policy document readers.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};

/// Parse an XML Schema `date` or `dateTime` value.
///
/// Accepted forms: `2029-01-01` (UTC midnight), `2029-01-01Z`, `2029-01-01+01:00`,
/// RFC 3339 date-times, and offset-less date-times (taken as UTC).
pub fn parse_date_time(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(Utc.from_utc_datetime(&naive));
    }

    // xs:date, optionally followed by a zone designator.
    let (date, zone) = match (value.get(..10), value.get(10..)) {
        (Some(date), Some(zone)) => (date, zone),
        _ => (value, ""),
    };
    let day = NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()?;
    match zone {
        "" => day.and_hms_opt(0, 0, 0).map(|n| Utc.from_utc_datetime(&n)),
        zone => DateTime::parse_from_rfc3339(&format!("{date}T00:00:00{zone}"))
            .ok()
            .map(|dt| dt.with_timezone(&Utc)),
    }
}

/// Parse a date written with a `SimpleDateFormat`-style pattern such as `yyyy-MM-dd`.
///
/// Patterns may omit the month and/or the day (`yyyy`, `yyyy-MM`); missing fields default
/// to the first month/day. The result is taken as UTC.
pub fn parse_with_pattern(value: &str, pattern: &str) -> Option<DateTime<Utc>> {
    let mut format = pattern
        .replace("yyyy", "%Y")
        .replace("MM", "%m")
        .replace("dd", "%d")
        .replace("HH", "%H")
        .replace("mm", "%M")
        .replace("ss", "%S");
    let mut value = value.trim().to_string();

    if !pattern.contains("MM") {
        format.push_str(" %m");
        value.push_str(" 01");
    }
    if !pattern.contains("dd") {
        format.push_str(" %d");
        value.push_str(" 01");
    }

    if pattern.contains("HH") {
        NaiveDateTime::parse_from_str(&value, &format)
            .ok()
            .map(|n| Utc.from_utc_datetime(&n))
    } else {
        NaiveDate::parse_from_str(&value, &format)
            .ok()?
            .and_hms_opt(0, 0, 0)
            .map(|n| Utc.from_utc_datetime(&n))
    }
}
