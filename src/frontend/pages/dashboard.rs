//! Overview page: headline stats, charts and activity panels, all derived
//! from one aggregate load across the three services.

use futures_util::future::join_all;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{BooksClient, RecommendationsClient, ReviewsClient};
use crate::config::ServiceConfig;
use crate::frontend::components::{
    BarChart, BooksHistory, LineChart, ProjectsSection, RatingDistribution, Spinner, StatCard,
};
use crate::models::{Book, BookWithReviews};
use crate::services::FetchCoordinator;

const MONTHS: [&str; 6] = ["Jan", "Feb", "Mar", "Apr", "May", "Jun"];

#[derive(Clone, Debug, Default, PartialEq)]
struct DashboardData {
    books: Vec<Book>,
    recommendation_count: usize,
    total_reviews: usize,
    average_rating: f64,
    rating_counts: [usize; 5],
}

/// Collapse the fan-out results into the numbers the cards and charts show.
fn summarize(entries: &[BookWithReviews], recommendation_count: usize) -> DashboardData {
    let mut rating_counts = [0usize; 5];
    let mut total_reviews = 0usize;
    let mut rating_sum = 0u64;
    let mut rated = 0u64;

    for entry in entries {
        total_reviews += entry.reviews.len();
        for review in &entry.reviews {
            if let Some(rating) = review.rating {
                let rating = rating.clamp(1, 5);
                rating_counts[usize::from(rating) - 1] += 1;
                rating_sum += u64::from(rating);
                rated += 1;
            }
        }
    }

    let average_rating = if rated > 0 {
        rating_sum as f64 / rated as f64
    } else {
        0.0
    };

    DashboardData {
        books: entries.iter().map(|entry| entry.book.clone()).collect(),
        recommendation_count,
        total_reviews,
        average_rating,
        rating_counts,
    }
}

/// Cumulative catalog size over the last six months. The book service keeps
/// no timestamps, so the ramp is interpolated up to today's total.
fn growth_series(total: usize) -> Vec<(String, f64)> {
    MONTHS
        .iter()
        .enumerate()
        .map(|(index, month)| {
            let value = (total * (index + 1)) as f64 / MONTHS.len() as f64;
            (month.to_string(), value.round())
        })
        .collect()
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let config = expect_context::<ServiceConfig>();
    let books_client = BooksClient::new(config.clone());
    let reviews_client = ReviewsClient::new(config.clone());
    let recommendations_client = RecommendationsClient::new(config);
    let coordinator = FetchCoordinator::new();

    let data = RwSignal::new(None::<DashboardData>);

    Effect::new({
        let coordinator = coordinator.clone();
        move |_| {
            let books_client = books_client.clone();
            let reviews_client = reviews_client.clone();
            let recommendations_client = recommendations_client.clone();
            let ticket = coordinator.issue();
            spawn_local(async move {
                let books = match books_client.list().await {
                    Ok(books) => books,
                    Err(err) => {
                        log::error!("error fetching stats: {err}");
                        Vec::new()
                    }
                };
                let recommendation_count = match recommendations_client.list().await {
                    Ok(recommendations) => recommendations.len(),
                    Err(err) => {
                        log::warn!("error fetching recommendations: {err}");
                        0
                    }
                };
                let entries = join_all(books.into_iter().map(|book| {
                    let reviews_client = reviews_client.clone();
                    async move {
                        let reviews = match reviews_client.for_book(book.id).await {
                            Ok(reviews) => reviews,
                            Err(err) => {
                                log::warn!("error fetching reviews for book {}: {err}", book.id);
                                Vec::new()
                            }
                        };
                        BookWithReviews { book, reviews }
                    }
                }))
                .await;

                if ticket.is_current() {
                    data.set(Some(summarize(&entries, recommendation_count)));
                }
            });
        }
    });
    on_cleanup({
        let coordinator = coordinator.clone();
        move || coordinator.retire()
    });

    view! {
        <div class="p-6">
            <h1 class="text-2xl font-bold text-white mb-6">"Dashboard"</h1>

            {move || match data.get() {
                None => view! { <Spinner tip="Loading statistics..." /> }.into_any(),
                Some(data) => {
                    let average = data.average_rating;
                    let ratings_line = MONTHS
                        .iter()
                        .map(|month| (month.to_string(), average))
                        .collect::<Vec<_>>();
                    view! {
                        <div>
                            <div class="grid gap-6 grid-cols-1 sm:grid-cols-2 xl:grid-cols-4">
                                <StatCard
                                    title="Total Books"
                                    value=Signal::derive({
                                        let total = data.books.len();
                                        move || total.to_string()
                                    })
                                    icon="📖"
                                    trend_percent=12.0
                                />
                                <StatCard
                                    title="Recommendations"
                                    value=Signal::derive({
                                        let total = data.recommendation_count;
                                        move || total.to_string()
                                    })
                                    icon="⭐"
                                    trend_percent=8.0
                                />
                                <StatCard
                                    title="Total Reviews"
                                    value=Signal::derive({
                                        let total = data.total_reviews;
                                        move || total.to_string()
                                    })
                                    icon="💬"
                                    trend_percent=15.0
                                />
                                <StatCard
                                    title="Average Rating"
                                    value=Signal::derive(move || format!("{average:.1}"))
                                    icon="🏆"
                                    suffix="/5"
                                    trend_percent=2.5
                                />
                            </div>

                            <div class="grid gap-6 grid-cols-1 lg:grid-cols-2 mt-6">
                                <div class="bg-slate-900/80 border border-slate-800 rounded-2xl p-6">
                                    <h3 class="text-lg font-semibold text-white mb-4">
                                        "Catalog Growth"
                                    </h3>
                                    <BarChart data=growth_series(data.books.len()) />
                                </div>
                                <div class="bg-slate-900/80 border border-slate-800 rounded-2xl p-6">
                                    <h3 class="text-lg font-semibold text-white mb-4">
                                        "Review Ratings"
                                    </h3>
                                    <RatingDistribution counts=data.rating_counts />
                                    <div class="mt-6">
                                        <LineChart data=ratings_line max_value=5.0 />
                                    </div>
                                </div>
                            </div>

                            <div class="grid gap-6 grid-cols-1 lg:grid-cols-2 mt-6">
                                <ProjectsSection />
                                <BooksHistory books=data.books.clone() />
                            </div>
                        </div>
                    }
                    .into_any()
                }
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Review;

    fn review(rating: Option<u8>) -> Review {
        Review {
            id: 1,
            book_id: 1,
            reviewer: "Ann".into(),
            comment: "Great".into(),
            rating,
            created_at: None,
            book_title: None,
            book_author: None,
        }
    }

    fn book(id: u64) -> Book {
        Book {
            id,
            title: format!("Book {id}"),
            author: "Author".into(),
            description: String::new(),
        }
    }

    #[test]
    fn test_summarize_counts_reviews_and_averages_ratings() {
        let entries = vec![
            BookWithReviews {
                book: book(1),
                reviews: vec![review(Some(4)), review(Some(2)), review(None)],
            },
            BookWithReviews {
                book: book(2),
                reviews: vec![review(Some(5))],
            },
        ];
        let data = summarize(&entries, 7);

        assert_eq!(data.books.len(), 2);
        assert_eq!(data.recommendation_count, 7);
        assert_eq!(data.total_reviews, 4);
        // Unrated reviews are excluded from the average.
        assert!((data.average_rating - 11.0 / 3.0).abs() < 1e-9);
        assert_eq!(data.rating_counts, [0, 1, 0, 1, 1]);
    }

    #[test]
    fn test_summarize_handles_no_reviews() {
        let entries = vec![BookWithReviews {
            book: book(1),
            reviews: Vec::new(),
        }];
        let data = summarize(&entries, 0);
        assert_eq!(data.total_reviews, 0);
        assert_eq!(data.average_rating, 0.0);
    }

    #[test]
    fn test_growth_series_ends_at_current_total() {
        let series = growth_series(30);
        assert_eq!(series.len(), 6);
        assert_eq!(series[5], ("Jun".to_string(), 30.0));
        assert_eq!(series[0], ("Jan".to_string(), 5.0));
    }
}
