use reqwest::Client;

use super::http::{decode_json, ok_or_status};
use crate::common::ApiError;
use crate::config::ServiceConfig;
use crate::models::{NewRecommendation, Recommendation, RecommendationUpdate, RecommendationWire};

/// Client for the recommendation service (`/api/books`).
#[derive(Clone)]
pub struct RecommendationsClient {
    http: Client,
    config: ServiceConfig,
}

impl RecommendationsClient {
    pub fn new(config: ServiceConfig) -> Self {
        Self {
            http: Client::new(),
            config,
        }
    }

    pub async fn list(&self) -> Result<Vec<Recommendation>, ApiError> {
        let response = self
            .http
            .get(self.config.recommendations_url())
            .send()
            .await?;
        let wires: Vec<RecommendationWire> = decode_json(ok_or_status(response).await?).await?;
        Ok(wires.into_iter().map(Recommendation::from).collect())
    }

    pub async fn by_id(&self, id: u64) -> Result<Recommendation, ApiError> {
        let response = self
            .http
            .get(self.config.recommendation_url(id))
            .send()
            .await?;
        let wire: RecommendationWire = decode_json(ok_or_status(response).await?).await?;
        Ok(wire.into())
    }

    pub async fn create(&self, body: &NewRecommendation) -> Result<(), ApiError> {
        let response = self
            .http
            .post(self.config.recommendations_url())
            .json(body)
            .send()
            .await?;
        ok_or_status(response).await?;
        Ok(())
    }

    pub async fn update(&self, id: u64, body: &RecommendationUpdate) -> Result<(), ApiError> {
        let response = self
            .http
            .put(self.config.recommendation_url(id))
            .json(body)
            .send()
            .await?;
        ok_or_status(response).await?;
        Ok(())
    }

    pub async fn delete(&self, id: u64) -> Result<(), ApiError> {
        let response = self
            .http
            .delete(self.config.recommendation_url(id))
            .send()
            .await?;
        ok_or_status(response).await?;
        Ok(())
    }
}
