//! Thin clients, one per backend service.
//!
//! Every call is a single request against a fixed URL: no retries, no
//! caching, no batching. Errors are mapped into [`crate::common::ApiError`]
//! at this boundary and surfaced by the calling page.

mod auth;
mod books;
mod http;
mod recommendations;
mod reviews;

pub use auth::AuthClient;
pub use books::BooksClient;
pub use recommendations::RecommendationsClient;
pub use reviews::ReviewsClient;
