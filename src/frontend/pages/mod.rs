mod books;
mod dashboard;
mod not_found;
mod recommendations;
mod reviews;
mod sign_in;
mod sign_up;

pub use books::BooksPage;
pub use dashboard::DashboardPage;
pub use not_found::NotFound;
pub use recommendations::RecommendationsPage;
pub use reviews::ReviewsPage;
pub use sign_in::SignInPage;
pub use sign_up::SignUpPage;
