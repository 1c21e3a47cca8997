mod common;

#[cfg(test)]
pub mod model_tests {
    use super::common::*;
    use bookdash::models::*;

    #[test]
    fn test_book_list_decodes_mixed_field_spellings() {
        // Two deployments of the book service, one response shape each.
        let json = r#"[
            {"productId": 3, "productTitle": "Dune", "productAuthor": "Frank Herbert",
             "productDescription": "A desert planet, a spice, a prophecy."},
            {"id": 4, "title": "Emma", "author": "Jane Austen"}
        ]"#;
        let books: Vec<Book> = serde_json::from_str::<Vec<BookWire>>(json)
            .unwrap()
            .into_iter()
            .map(Book::from)
            .collect();

        assert_eq!(books[0], get_seed_book_0());
        assert_eq!(books[1].id, 4);
        assert_eq!(books[1].title, "Emma");
        assert_eq!(books[1].display_description(), "No description available");
    }

    #[test]
    fn test_repeated_decode_yields_identical_list() {
        let json = r#"[
            {"productId": 1, "productTitle": "A"},
            {"productId": 2, "productTitle": "B"}
        ]"#;
        let first: Vec<Book> = serde_json::from_str::<Vec<BookWire>>(json)
            .unwrap()
            .into_iter()
            .map(Book::from)
            .collect();
        let second: Vec<Book> = serde_json::from_str::<Vec<BookWire>>(json)
            .unwrap()
            .into_iter()
            .map(Book::from)
            .collect();

        // Same payload, same order, same content — a refetch with no
        // server-side change renders the same list.
        assert_eq!(first, second);
    }

    #[test]
    fn test_review_submission_payload_matches_service_contract() {
        let body = NewReview {
            book_id: 3,
            reviewer: "Ann".to_string(),
            comment: "Great".to_string(),
            rating: Some(4),
        };
        let json = serde_json::to_value(&body).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "bookId": 3,
                "reviewer": "Ann",
                "comment": "Great",
                "rating": 4
            })
        );
    }

    #[test]
    fn test_created_review_echo_decodes_into_book_list_entry() {
        // The service's 201 echo for the submission above.
        let echo = r#"{
            "id": 17,
            "bookId": 3,
            "reviewer": "Ann",
            "comment": "Great",
            "rating": 4,
            "createdAt": "2026-01-04T22:15:06Z"
        }"#;
        let review: Review = serde_json::from_str::<ReviewWire>(echo).unwrap().into();
        assert_eq!(review, get_seed_review_0());

        // After the next fetch, the book-3 list contains the new entry.
        let list = r#"[
            {"id": 16, "bookId": 3, "reviewer": "Ben", "comment": "Fine"},
            {"id": 17, "bookId": 3, "reviewer": "Ann", "comment": "Great",
             "rating": 4, "createdAt": "2026-01-04T22:15:06Z"}
        ]"#;
        let reviews: Vec<Review> = serde_json::from_str::<Vec<ReviewWire>>(list)
            .unwrap()
            .into_iter()
            .map(Review::from)
            .collect();
        assert!(reviews.contains(&review));
    }

    #[test]
    fn test_recommendation_wire_normalizes_to_canonical() {
        let json = r#"{"bookId": 4, "bookName": "Atomic Habits", "author": "James Clear",
                       "createdAt": "2026-01-05T13:22:56Z"}"#;
        let rec: Recommendation = serde_json::from_str::<RecommendationWire>(json)
            .unwrap()
            .into();
        assert_eq!(rec, get_seed_recommendation_0());
        assert_eq!(rec.formatted_date(), "05/01/2026");
    }

    #[test]
    fn test_unknown_wire_fields_are_ignored() {
        let json = r#"{"productId": 9, "productTitle": "X", "publisher": "ignored",
                       "stockCount": 12}"#;
        let book: Book = serde_json::from_str::<BookWire>(json).unwrap().into();
        assert_eq!(book.id, 9);
        assert_eq!(book.title, "X");
    }
}
