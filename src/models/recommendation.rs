use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A community recommendation. Lives in its own service with no foreign-key
/// relation to catalog books.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recommendation {
    pub id: u64,
    pub book_name: String,
    pub author: String,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RecommendationWire {
    #[serde(alias = "bookId")]
    pub id: u64,
    #[serde(default, rename = "bookName")]
    pub book_name: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default, rename = "createdAt")]
    pub created_at: Option<String>,
}

impl From<RecommendationWire> for Recommendation {
    fn from(wire: RecommendationWire) -> Self {
        Recommendation {
            id: wire.id,
            book_name: wire
                .book_name
                .filter(|name| !name.is_empty())
                .unwrap_or_else(|| "Untitled Book".to_string()),
            author: wire
                .author
                .filter(|author| !author.is_empty())
                .unwrap_or_else(|| "Unknown Author".to_string()),
            created_at: wire
                .created_at
                .as_deref()
                .and_then(super::parse_timestamp),
        }
    }
}

impl Recommendation {
    pub fn formatted_date(&self) -> String {
        super::format_date(self.created_at)
    }
}

/// Body for `POST /api/books`.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewRecommendation {
    pub book_name: String,
    pub author: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Body for `PUT /api/books/{id}`.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationUpdate {
    pub book_name: String,
    pub author: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_accepts_both_id_spellings() {
        let by_book_id: Recommendation =
            serde_json::from_str::<RecommendationWire>(r#"{"bookId": 4, "bookName": "Dune"}"#)
                .unwrap()
                .into();
        let by_id: Recommendation =
            serde_json::from_str::<RecommendationWire>(r#"{"id": 4, "bookName": "Dune"}"#)
                .unwrap()
                .into();
        assert_eq!(by_book_id, by_id);
    }

    #[test]
    fn test_missing_name_and_author_get_placeholders() {
        let rec: Recommendation = serde_json::from_str::<RecommendationWire>(r#"{"id": 4}"#)
            .unwrap()
            .into();
        assert_eq!(rec.book_name, "Untitled Book");
        assert_eq!(rec.author, "Unknown Author");
        assert_eq!(rec.formatted_date(), "Unknown date");
    }

    #[test]
    fn test_update_serializes_camel_case() {
        let body = RecommendationUpdate {
            book_name: "Dune".into(),
            author: "Frank Herbert".into(),
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["bookName"], "Dune");
        assert_eq!(json["author"], "Frank Herbert");
    }
}
