//! Time related utils.

use chrono::Utc;

/// DateTime in UTC.
pub type DateTime = chrono::DateTime<Utc>;

/// Return the current UTC time.
pub fn now() -> DateTime {
    Utc::now()
}

/// Format a time into an RFC-1123 / GMT HTTP date.
///
/// ```text
/// Thu, 05 Jan 2023 12:00:00 GMT
/// ```
///
/// This is the format the `date` header must carry for the signature to
/// verify on the service side.
pub fn format_http_date(t: DateTime) -> String {
    t.format("%a, %d %b %Y %H:%M:%S GMT").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_http_date() {
        let t = Utc.with_ymd_and_hms(2023, 1, 5, 12, 0, 0).unwrap();
        assert_eq!(format_http_date(t), "Thu, 05 Jan 2023 12:00:00 GMT");
    }
}
