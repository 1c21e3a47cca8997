//! Service endpoints and authentication strategy.
//!
//! Each entity is served by exactly one backend; the base URLs here are the
//! canonical contracts for this deployment. Pages never hard-code hosts.

use serde::{Deserialize, Serialize};

/// How sign-in and sign-up are resolved.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AuthMode {
    /// Only the remote auth service; transport failures surface as errors.
    Remote,
    /// Only the locally persisted user registry. Never touches the network.
    Offline,
    /// Try the remote service; route to the offline registry when the
    /// service is unreachable (transport failure, not an HTTP rejection).
    #[default]
    RemoteWithOfflineFallback,
}

/// Base URLs for the four external services.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServiceConfig {
    pub books_base: String,
    pub reviews_base: String,
    pub recommendations_base: String,
    pub auth_base: String,
    pub auth_mode: AuthMode,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            books_base: "http://20.121.232.133:8080".to_string(),
            reviews_base: "http://9.169.178.97:8080".to_string(),
            recommendations_base: "http://172.193.176.39:8081".to_string(),
            auth_base: "https://auth-service-0oqe.onrender.com".to_string(),
            auth_mode: AuthMode::default(),
        }
    }
}

impl ServiceConfig {
    pub fn products_url(&self) -> String {
        format!("{}/api/v1/products", self.books_base)
    }

    pub fn product_url(&self, id: u64) -> String {
        format!("{}/api/v1/products/{}", self.books_base, id)
    }

    pub fn reviews_url(&self) -> String {
        format!("{}/reviews", self.reviews_base)
    }

    pub fn review_url(&self, id: u64) -> String {
        format!("{}/reviews/{}", self.reviews_base, id)
    }

    pub fn reviews_for_book_url(&self, book_id: u64) -> String {
        format!("{}/reviews/book/{}", self.reviews_base, book_id)
    }

    pub fn recommendations_url(&self) -> String {
        format!("{}/api/books", self.recommendations_base)
    }

    pub fn recommendation_url(&self, id: u64) -> String {
        format!("{}/api/books/{}", self.recommendations_base, id)
    }

    pub fn login_url(&self) -> String {
        format!("{}/auth/login", self.auth_base)
    }

    pub fn signup_url(&self) -> String {
        format!("{}/auth/signup", self.auth_base)
    }

    pub fn validate_url(&self) -> String {
        format!("{}/auth/validate", self.auth_base)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_urls_compose_from_bases() {
        let cfg = ServiceConfig {
            books_base: "http://books.local".into(),
            reviews_base: "http://reviews.local".into(),
            recommendations_base: "http://recs.local".into(),
            auth_base: "http://auth.local".into(),
            auth_mode: AuthMode::Remote,
        };

        assert_eq!(cfg.products_url(), "http://books.local/api/v1/products");
        assert_eq!(cfg.product_url(7), "http://books.local/api/v1/products/7");
        assert_eq!(
            cfg.reviews_for_book_url(3),
            "http://reviews.local/reviews/book/3"
        );
        assert_eq!(cfg.review_url(12), "http://reviews.local/reviews/12");
        assert_eq!(cfg.recommendation_url(4), "http://recs.local/api/books/4");
        assert_eq!(cfg.validate_url(), "http://auth.local/auth/validate");
    }

    #[test]
    fn test_default_auth_mode_falls_back_to_offline() {
        assert_eq!(
            ServiceConfig::default().auth_mode,
            AuthMode::RemoteWithOfflineFallback
        );
    }
}
