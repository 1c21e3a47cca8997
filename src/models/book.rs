use serde::{Deserialize, Serialize};

use super::Review;

/// A catalog entry as the dashboard works with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    pub id: u64,
    pub title: String,
    pub author: String,
    pub description: String,
}

/// What the book service actually sends. Older deployments use
/// `productId`/`productTitle`/..., newer ones plain `id`/`title`/...;
/// both decode into the same canonical [`Book`].
#[derive(Debug, Clone, Deserialize)]
pub struct BookWire {
    #[serde(alias = "productId")]
    pub id: u64,
    #[serde(default, alias = "productTitle")]
    pub title: Option<String>,
    #[serde(default, alias = "productAuthor")]
    pub author: Option<String>,
    #[serde(default, alias = "productDescription")]
    pub description: Option<String>,
}

impl From<BookWire> for Book {
    fn from(wire: BookWire) -> Self {
        Book {
            id: wire.id,
            title: wire.title.unwrap_or_default(),
            author: wire.author.unwrap_or_default(),
            description: wire.description.unwrap_or_default(),
        }
    }
}

impl Book {
    pub fn display_author(&self) -> &str {
        if self.author.is_empty() {
            "Unknown Author"
        } else {
            &self.author
        }
    }

    pub fn display_description(&self) -> &str {
        if self.description.is_empty() {
            "No description available"
        } else {
            &self.description
        }
    }
}

/// Create/update body for the book service, which speaks `product*` names.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BookPayload {
    pub product_title: String,
    pub product_author: String,
    pub product_description: String,
}

/// A book joined with its reviews from the fan-out fetch.
#[derive(Debug, Clone, PartialEq)]
pub struct BookWithReviews {
    pub book: Book,
    pub reviews: Vec<Review>,
}

impl BookWithReviews {
    pub fn review_count(&self) -> usize {
        self.reviews.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_book_wire_decodes_product_field_names() {
        let json = r#"{
            "productId": 3,
            "productTitle": "Dune",
            "productAuthor": "Frank Herbert",
            "productDescription": "Sand."
        }"#;
        let book: Book = serde_json::from_str::<BookWire>(json).unwrap().into();
        assert_eq!(
            book,
            Book {
                id: 3,
                title: "Dune".into(),
                author: "Frank Herbert".into(),
                description: "Sand.".into(),
            }
        );
    }

    #[test]
    fn test_book_wire_decodes_plain_field_names() {
        let json = r#"{"id": 3, "title": "Dune", "author": "Frank Herbert"}"#;
        let book: Book = serde_json::from_str::<BookWire>(json).unwrap().into();
        assert_eq!(book.id, 3);
        assert_eq!(book.title, "Dune");
        assert_eq!(book.description, "");
    }

    #[test]
    fn test_missing_fields_get_display_fallbacks() {
        let json = r#"{"productId": 9}"#;
        let book: Book = serde_json::from_str::<BookWire>(json).unwrap().into();
        assert_eq!(book.display_author(), "Unknown Author");
        assert_eq!(book.display_description(), "No description available");
    }

    #[test]
    fn test_payload_serializes_product_names() {
        let payload = BookPayload {
            product_title: "Dune".into(),
            product_author: "Frank Herbert".into(),
            product_description: "Sand.".into(),
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["productTitle"], "Dune");
        assert_eq!(json["productAuthor"], "Frank Herbert");
        assert_eq!(json["productDescription"], "Sand.");
    }
}
