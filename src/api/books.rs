use reqwest::Client;

use super::http::{decode_json, ok_or_status};
use crate::common::ApiError;
use crate::config::ServiceConfig;
use crate::models::{Book, BookPayload, BookWire};

/// Client for the book/product service (`/api/v1/products`).
#[derive(Clone)]
pub struct BooksClient {
    http: Client,
    config: ServiceConfig,
}

impl BooksClient {
    pub fn new(config: ServiceConfig) -> Self {
        Self {
            http: Client::new(),
            config,
        }
    }

    pub async fn list(&self) -> Result<Vec<Book>, ApiError> {
        let response = self.http.get(self.config.products_url()).send().await?;
        let wires: Vec<BookWire> = decode_json(ok_or_status(response).await?).await?;
        Ok(wires.into_iter().map(Book::from).collect())
    }

    pub async fn create(&self, payload: &BookPayload) -> Result<(), ApiError> {
        let response = self
            .http
            .post(self.config.products_url())
            .json(payload)
            .send()
            .await?;
        ok_or_status(response).await?;
        Ok(())
    }

    pub async fn update(&self, id: u64, payload: &BookPayload) -> Result<(), ApiError> {
        let response = self
            .http
            .put(self.config.product_url(id))
            .json(payload)
            .send()
            .await?;
        ok_or_status(response).await?;
        Ok(())
    }

    pub async fn delete(&self, id: u64) -> Result<(), ApiError> {
        let response = self.http.delete(self.config.product_url(id)).send().await?;
        ok_or_status(response).await?;
        Ok(())
    }
}
