mod book;
mod recommendation;
mod review;

pub use book::{Book, BookPayload, BookWire, BookWithReviews};
pub use recommendation::{
    NewRecommendation, Recommendation, RecommendationUpdate, RecommendationWire,
};
pub use review::{NewReview, Review, ReviewWire};

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};

/// Parse whatever timestamp shape a backend hands us. The services disagree
/// on formats, so anything unparseable becomes `None` rather than failing
/// the whole payload.
pub(crate) fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .ok()
        .or_else(|| {
            NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
                .ok()
                .map(|naive| Utc.from_utc_datetime(&naive))
        })
        .or_else(|| {
            NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S")
                .ok()
                .map(|naive| Utc.from_utc_datetime(&naive))
        })
}

/// dd/mm/yyyy, or "Unknown date" when the service sent nothing usable.
pub fn format_date(timestamp: Option<DateTime<Utc>>) -> String {
    match timestamp {
        Some(ts) => ts.format("%d/%m/%Y").to_string(),
        None => "Unknown date".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_parse_timestamp_accepts_rfc3339() {
        let parsed = parse_timestamp("2024-02-15T10:30:00Z").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2024, 2, 15, 10, 30, 0).unwrap());
    }

    #[test]
    fn test_parse_timestamp_accepts_naive_datetime() {
        assert!(parse_timestamp("2024-02-15T10:30:00.123").is_some());
        assert!(parse_timestamp("2024-02-15 10:30:00").is_some());
    }

    #[test]
    fn test_parse_timestamp_rejects_garbage() {
        assert!(parse_timestamp("not a date").is_none());
        assert!(parse_timestamp("").is_none());
    }

    #[test]
    fn test_format_date_is_day_month_year() {
        let ts = Utc.with_ymd_and_hms(2024, 2, 5, 0, 0, 0).unwrap();
        assert_eq!(format_date(Some(ts)), "05/02/2024");
        assert_eq!(format_date(None), "Unknown date");
    }
}
