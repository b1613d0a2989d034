//! Lenient readers for request fields that clients send in more than one shape.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde_json::Value;

/// Accepts `YYYY-MM-DD` (midnight UTC), an RFC 3339 date-time, or a naive
/// `YYYY-MM-DDTHH:MM:SS` date-time taken as UTC.
pub fn purchase_date(value: &Value) -> Option<DateTime<Utc>> {
    let raw = value.as_str()?.trim();

    if let Ok(date_time) = DateTime::parse_from_rfc3339(raw) {
        return Some(date_time.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Accepts a JSON number or a string holding one. Non-finite values are rejected.
pub fn purchase_price(value: &Value) -> Option<f64> {
    let price = match value {
        Value::Number(number) => number.as_f64(),
        Value::String(raw) => raw.trim().parse::<f64>().ok(),
        _ => None,
    }?;

    price.is_finite().then_some(price)
}
