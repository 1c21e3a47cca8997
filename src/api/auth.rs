use reqwest::Client;

use super::http::{decode_json, ok_or_status};
use crate::common::ApiError;
use crate::config::ServiceConfig;
use crate::types::{LoginRequest, LoginResponse, SignupRequest};

/// Client for the remote auth service.
#[derive(Clone)]
pub struct AuthClient {
    http: Client,
    config: ServiceConfig,
}

impl AuthClient {
    pub fn new(config: ServiceConfig) -> Self {
        Self {
            http: Client::new(),
            config,
        }
    }

    pub async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        let response = self
            .http
            .post(self.config.login_url())
            .json(request)
            .send()
            .await?;
        decode_json(ok_or_status(response).await?).await
    }

    pub async fn signup(&self, request: &SignupRequest) -> Result<(), ApiError> {
        let response = self
            .http
            .post(self.config.signup_url())
            .json(request)
            .send()
            .await?;
        ok_or_status(response).await?;
        Ok(())
    }

    /// Checks a stored bearer token against the validate endpoint.
    pub async fn validate(&self, token: &str) -> Result<(), ApiError> {
        let response = self
            .http
            .get(self.config.validate_url())
            .bearer_auth(token)
            .send()
            .await?;
        ok_or_status(response).await?;
        Ok(())
    }
}
