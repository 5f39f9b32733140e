//! Date conversion utilities

use chrono::{DateTime, FixedOffset, Utc};

/// Parse an RFC 2822 `pubDate` value (e.g. "Fri, 27 Mar 2015 12:00:00 -0400")
///
/// WordPress exports occasionally carry empty or mangled dates; those fall
/// back to the Unix epoch so the entry is still written.
pub fn parse_pubdate_or_epoch(pubdate: &str) -> DateTime<FixedOffset> {
    DateTime::parse_from_rfc2822(pubdate)
        .unwrap_or_else(|_| DateTime::<Utc>::UNIX_EPOCH.fixed_offset())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_pubdate_negative_offset() {
        let parsed = parse_pubdate_or_epoch("Fri, 27 Mar 2015 12:00:00 -0400");
        assert_eq!(parsed.to_rfc3339(), "2015-03-27T12:00:00-04:00");
    }

    #[test]
    fn test_parse_pubdate_zero_offset() {
        let parsed = parse_pubdate_or_epoch("Tue, 30 Jun 2015 08:15:00 +0000");
        assert_eq!(parsed.to_rfc3339(), "2015-06-30T08:15:00+00:00");
    }

    #[test]
    fn test_parse_pubdate_gmt_zone_name() {
        let parsed = parse_pubdate_or_epoch("Thu, 01 Jan 2015 00:00:00 GMT");
        assert_eq!(parsed.to_rfc3339(), "2015-01-01T00:00:00+00:00");
    }

    #[test]
    fn test_parse_pubdate_invalid_falls_back_to_epoch() {
        let parsed = parse_pubdate_or_epoch("not a date");
        assert_eq!(parsed.to_rfc3339(), "1970-01-01T00:00:00+00:00");
    }

    #[test]
    fn test_parse_pubdate_empty_falls_back_to_epoch() {
        let parsed = parse_pubdate_or_epoch("");
        assert_eq!(parsed.to_rfc3339(), "1970-01-01T00:00:00+00:00");
    }
}
