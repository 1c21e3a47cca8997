use reqwest::Client;

use super::http::{decode_json, ok_or_status};
use crate::common::ApiError;
use crate::config::ServiceConfig;
use crate::models::{NewReview, Review, ReviewWire};

/// Client for the review service (`/reviews`).
#[derive(Clone)]
pub struct ReviewsClient {
    http: Client,
    config: ServiceConfig,
}

impl ReviewsClient {
    pub fn new(config: ServiceConfig) -> Self {
        Self {
            http: Client::new(),
            config,
        }
    }

    pub async fn for_book(&self, book_id: u64) -> Result<Vec<Review>, ApiError> {
        let response = self
            .http
            .get(self.config.reviews_for_book_url(book_id))
            .send()
            .await?;
        let wires: Vec<ReviewWire> = decode_json(ok_or_status(response).await?).await?;
        Ok(wires.into_iter().map(Review::from).collect())
    }

    pub async fn by_id(&self, id: u64) -> Result<Review, ApiError> {
        let response = self.http.get(self.config.review_url(id)).send().await?;
        let wire: ReviewWire = decode_json(ok_or_status(response).await?).await?;
        Ok(wire.into())
    }

    /// The service echoes the created review back, timestamps included.
    pub async fn submit(&self, review: &NewReview) -> Result<Review, ApiError> {
        let response = self
            .http
            .post(self.config.reviews_url())
            .json(review)
            .send()
            .await?;
        let wire: ReviewWire = decode_json(ok_or_status(response).await?).await?;
        Ok(wire.into())
    }

    pub async fn delete(&self, id: u64) -> Result<(), ApiError> {
        let response = self.http.delete(self.config.review_url(id)).send().await?;
        ok_or_status(response).await?;
        Ok(())
    }
}
