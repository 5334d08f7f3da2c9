//! Display Formatting
//!
//! Indian-style rupee grouping and chat timestamps.

use chrono::{DateTime, Local, NaiveDateTime, TimeZone, Utc};

/// Group digits the Indian way: last three, then pairs (12,34,567)
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();
    format!("{},{}", groups.join(","), tail)
}

/// Format an amount like `toLocaleString('en-IN')`, at most two decimals
pub fn format_inr(amount: f64) -> String {
    if !amount.is_finite() {
        return "-".to_string();
    }
    let rounded = (amount.abs() * 100.0).round() as u64;
    let whole = rounded / 100;
    let fraction = rounded % 100;
    let sign = if amount < 0.0 && rounded > 0 { "-" } else { "" };

    let mut text = format!("{}{}", sign, group_indian(&whole.to_string()));
    if fraction > 0 {
        let decimals = format!("{:02}", fraction);
        text.push('.');
        text.push_str(decimals.trim_end_matches('0'));
    }
    text
}

/// `₹` prefixed amount
pub fn rupees(amount: f64) -> String {
    format!("₹{}", format_inr(amount))
}

/// Current instant as RFC 3339, used to stamp outgoing messages
pub fn now_timestamp() -> String {
    Utc::now().to_rfc3339()
}

fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }
    // Backend datetimes without offset are UTC
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc())
}

fn clock_in<Tz: TimeZone>(raw: &str, tz: &Tz) -> Option<String>
where
    Tz::Offset: std::fmt::Display,
{
    parse_timestamp(raw).map(|ts| ts.with_timezone(tz).format("%H:%M").to_string())
}

/// `HH:MM` in the browser's local time
pub fn message_clock(raw: &str) -> Option<String> {
    clock_in(raw, &Local)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    #[test]
    fn test_group_indian() {
        assert_eq!(group_indian("999"), "999");
        assert_eq!(group_indian("2450"), "2,450");
        assert_eq!(group_indian("123456"), "1,23,456");
        assert_eq!(group_indian("12345678"), "1,23,45,678");
    }

    #[test]
    fn test_format_inr() {
        assert_eq!(format_inr(2275.0), "2,275");
        assert_eq!(format_inr(150000.0), "1,50,000");
        assert_eq!(format_inr(2450.5), "2,450.5");
        assert_eq!(format_inr(99.999), "100");
        assert_eq!(format_inr(-1200.25), "-1,200.25");
        assert_eq!(format_inr(f64::NAN), "-");
    }

    #[test]
    fn test_rupees() {
        assert_eq!(rupees(6000.0), "₹6,000");
    }

    #[test]
    fn test_clock_in_ist() {
        let ist = FixedOffset::east_opt(5 * 3600 + 30 * 60).unwrap();
        assert_eq!(clock_in("2026-10-17T04:00:00Z", &ist).as_deref(), Some("09:30"));
        assert_eq!(clock_in("2026-10-17T04:00:00.123456", &ist).as_deref(), Some("09:30"));
        assert_eq!(clock_in("yesterday", &ist), None);
    }

    #[test]
    fn test_now_timestamp_parses() {
        assert!(parse_timestamp(&now_timestamp()).is_some());
    }
}
