use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A review as rendered by the dashboard. Loosely tied to a book by numeric
/// id only; the review service sometimes denormalizes the book title and
/// author onto the review, sometimes not.
#[derive(Debug, Clone, PartialEq)]
pub struct Review {
    pub id: u64,
    pub book_id: u64,
    pub reviewer: String,
    pub comment: String,
    pub rating: Option<u8>,
    pub created_at: Option<DateTime<Utc>>,
    pub book_title: Option<String>,
    pub book_author: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewWire {
    pub id: u64,
    pub book_id: u64,
    #[serde(default)]
    pub reviewer: Option<String>,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub rating: Option<u8>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub book_title: Option<String>,
    #[serde(default)]
    pub book_author: Option<String>,
}

impl From<ReviewWire> for Review {
    fn from(wire: ReviewWire) -> Self {
        Review {
            id: wire.id,
            book_id: wire.book_id,
            reviewer: wire.reviewer.unwrap_or_default(),
            comment: wire.comment.unwrap_or_default(),
            rating: wire.rating,
            created_at: wire
                .created_at
                .as_deref()
                .and_then(super::parse_timestamp),
            book_title: wire.book_title,
            book_author: wire.book_author,
        }
    }
}

impl Review {
    /// Falls back to "Book {id}" when the service did not denormalize a title.
    pub fn display_book_title(&self) -> String {
        match &self.book_title {
            Some(title) if !title.is_empty() => title.clone(),
            _ => format!("Book {}", self.book_id),
        }
    }

    pub fn display_book_author(&self) -> String {
        match &self.book_author {
            Some(author) if !author.is_empty() => author.clone(),
            _ => "Unknown Author".to_string(),
        }
    }
}

/// Body for `POST /reviews`.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NewReview {
    pub book_id: u64,
    pub reviewer: String,
    pub comment: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<u8>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_review_wire_tolerates_missing_optionals() {
        let json = r#"{"id": 1, "bookId": 3}"#;
        let review: Review = serde_json::from_str::<ReviewWire>(json).unwrap().into();
        assert_eq!(review.book_id, 3);
        assert_eq!(review.reviewer, "");
        assert_eq!(review.rating, None);
        assert_eq!(review.created_at, None);
        assert_eq!(review.display_book_title(), "Book 3");
        assert_eq!(review.display_book_author(), "Unknown Author");
    }

    #[test]
    fn test_review_wire_full_payload() {
        let json = r#"{
            "id": 7,
            "bookId": 3,
            "reviewer": "Ann",
            "comment": "Great",
            "rating": 4,
            "createdAt": "2024-02-15T10:30:00Z",
            "bookTitle": "Dune"
        }"#;
        let review: Review = serde_json::from_str::<ReviewWire>(json).unwrap().into();
        assert_eq!(review.reviewer, "Ann");
        assert_eq!(review.rating, Some(4));
        assert!(review.created_at.is_some());
        assert_eq!(review.display_book_title(), "Dune");
    }

    #[test]
    fn test_new_review_omits_absent_rating() {
        let body = NewReview {
            book_id: 3,
            reviewer: "Ann".into(),
            comment: "Great".into(),
            rating: None,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["bookId"], 3);
        assert!(json.get("rating").is_none());

        let rated = NewReview {
            rating: Some(4),
            ..body
        };
        assert_eq!(serde_json::to_value(&rated).unwrap()["rating"], 4);
    }
}
