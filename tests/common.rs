use chrono::{DateTime, Utc};

use bookdash::models::*;
use bookdash::services::{MemoryStore, SessionManager};

pub fn parse_time(s: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(s)
        .expect("Invalid time format in test helper")
        .with_timezone(&Utc)
}

pub fn new_manager() -> SessionManager {
    SessionManager::new(Box::new(MemoryStore::default()))
}

pub fn get_seed_book_0() -> Book {
    Book {
        id: 3,
        title: "Dune".to_string(),
        author: "Frank Herbert".to_string(),
        description: "A desert planet, a spice, a prophecy.".to_string(),
    }
}

pub fn get_seed_review_0() -> Review {
    Review {
        id: 17,
        book_id: 3,
        reviewer: "Ann".to_string(),
        comment: "Great".to_string(),
        rating: Some(4),
        created_at: Some(parse_time("2026-01-04T22:15:06Z")),
        book_title: None,
        book_author: None,
    }
}

pub fn get_seed_recommendation_0() -> Recommendation {
    Recommendation {
        id: 4,
        book_name: "Atomic Habits".to_string(),
        author: "James Clear".to_string(),
        created_at: Some(parse_time("2026-01-05T13:22:56Z")),
    }
}
