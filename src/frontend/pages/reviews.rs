//! Review moderation: browse a book's reviews, find by id, write, delete.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::ReviewsClient;
use crate::common::{ListView, Loadable};
use crate::config::ServiceConfig;
use crate::frontend::components::{
    Button, ButtonVariant, ConfirmModal, ErrorAlert, RatingDisplay, Spinner, TextArea, TextInput,
};
use crate::frontend::forms::WriteReviewForm;
use crate::models::{format_date, Review};
use crate::services::{FetchCoordinator, Toasts};

#[derive(Clone, Copy, PartialEq, Eq)]
enum Section {
    Browse,
    Find,
    Write,
    Delete,
}

#[component]
pub fn ReviewsPage() -> impl IntoView {
    let config = expect_context::<ServiceConfig>();
    let toasts = expect_context::<Toasts>();
    let client = ReviewsClient::new(config);
    let coordinator = FetchCoordinator::new();

    let section = RwSignal::new(Section::Browse);

    // browse
    let (browse_book_id, set_browse_book_id) = signal("1".to_string());
    let browse_reviews = RwSignal::new(Loadable::<Review>::Loading);
    let (filter, set_filter) = signal(String::new());
    let browse_refresh = RwSignal::new(0u32);

    // find
    let (find_review_id, set_find_review_id) = signal(String::new());
    let (find_book_id, set_find_book_id) = signal(String::new());
    let find_results = RwSignal::new(None::<Loadable<Review>>);
    let finding = RwSignal::new(false);

    // write
    let (write_book_id, set_write_book_id) = signal(String::new());
    let (write_reviewer, set_write_reviewer) = signal(String::new());
    let (write_comment, set_write_comment) = signal(String::new());
    let write_errors = RwSignal::new(Vec::<String>::new());
    let submitted = RwSignal::new(None::<Review>);
    let writing = RwSignal::new(false);

    // delete
    let (delete_id, set_delete_id) = signal(String::new());
    let delete_open = RwSignal::new(false);
    let deleting = RwSignal::new(false);

    let fetch_browse = {
        let client = client.clone();
        let coordinator = coordinator.clone();
        move || {
            let book_id = browse_book_id
                .get_untracked()
                .trim()
                .parse::<u64>()
                .unwrap_or(1);
            let client = client.clone();
            let ticket = coordinator.issue();
            browse_reviews.set(Loadable::Loading);
            spawn_local(async move {
                match client.for_book(book_id).await {
                    Ok(reviews) => {
                        if ticket.is_current() {
                            browse_reviews.set(Loadable::Ready(reviews));
                        }
                    }
                    Err(err) => {
                        log::error!("fetch error: {err}");
                        if ticket.is_current() {
                            browse_reviews.set(Loadable::Failed(err.to_string()));
                        }
                    }
                }
            });
        }
    };

    Effect::new(move |_| {
        browse_refresh.track();
        fetch_browse();
    });
    on_cleanup({
        let coordinator = coordinator.clone();
        move || coordinator.retire()
    });

    let filtered = move || {
        let needle = filter.get().to_lowercase();
        let reviews = browse_reviews.get().items().to_vec();
        if needle.is_empty() {
            reviews
        } else {
            reviews
                .into_iter()
                .filter(|review| {
                    review.reviewer.to_lowercase().contains(&needle)
                        || review.comment.to_lowercase().contains(&needle)
                        || review.display_book_title().to_lowercase().contains(&needle)
                        || review
                            .display_book_author()
                            .to_lowercase()
                            .contains(&needle)
                })
                .collect()
        }
    };

    let run_find = {
        let client = client.clone();
        let toasts = toasts.clone();
        move || {
            let review_id = find_review_id.get_untracked().trim().to_string();
            let book_id = find_book_id.get_untracked().trim().to_string();
            let client = client.clone();
            let toasts = toasts.clone();

            if review_id.is_empty() && book_id.is_empty() {
                toasts.info("Enter a review ID or a book ID");
                return;
            }

            finding.set(true);
            find_results.set(Some(Loadable::Loading));
            spawn_local(async move {
                let outcome = if !review_id.is_empty() {
                    match review_id.parse::<u64>() {
                        Ok(id) => match client.by_id(id).await {
                            Ok(review) => Loadable::Ready(vec![review]),
                            Err(err) => {
                                log::warn!("review lookup failed: {err}");
                                toasts.info("No review found with that ID");
                                Loadable::Ready(Vec::new())
                            }
                        },
                        Err(_) => {
                            toasts.error("Review ID must be a number");
                            Loadable::Ready(Vec::new())
                        }
                    }
                } else {
                    match book_id.parse::<u64>() {
                        Ok(id) => match client.for_book(id).await {
                            Ok(reviews) => {
                                if reviews.is_empty() {
                                    toasts.info("No reviews found for that book");
                                }
                                Loadable::Ready(reviews)
                            }
                            Err(err) => {
                                log::warn!("book reviews lookup failed: {err}");
                                toasts.info("No reviews found for that book");
                                Loadable::Ready(Vec::new())
                            }
                        },
                        Err(_) => {
                            toasts.error("Book ID must be a number");
                            Loadable::Ready(Vec::new())
                        }
                    }
                };
                finding.set(false);
                find_results.set(Some(outcome));
            });
        }
    };

    let submit_review = {
        let client = client.clone();
        let toasts = toasts.clone();
        move || {
            let form = WriteReviewForm {
                book_id: write_book_id.get_untracked(),
                reviewer: write_reviewer.get_untracked(),
                comment: write_comment.get_untracked(),
            };
            let review = match form.validate() {
                Ok(review) => review,
                Err(errors) => {
                    write_errors.set(errors);
                    return;
                }
            };
            write_errors.set(Vec::new());
            writing.set(true);
            let client = client.clone();
            let toasts = toasts.clone();
            spawn_local(async move {
                let result = client.submit(&review).await;
                writing.set(false);
                match result {
                    Ok(created) => {
                        toasts.success("Review submitted successfully!");
                        submitted.set(Some(created));
                        set_write_book_id.set(String::new());
                        set_write_reviewer.set(String::new());
                        set_write_comment.set(String::new());
                    }
                    Err(err) => {
                        log::error!("submit error: {err}");
                        toasts.error(format!("Error submitting review: {err}"));
                    }
                }
            });
        }
    };

    let delete_review = {
        let client = client.clone();
        let toasts = toasts.clone();
        move || {
            let Ok(id) = delete_id.get_untracked().trim().parse::<u64>() else {
                toasts.error("Please enter a valid review ID");
                delete_open.set(false);
                return;
            };
            deleting.set(true);
            let client = client.clone();
            let toasts = toasts.clone();
            spawn_local(async move {
                let result = client.delete(id).await;
                deleting.set(false);
                delete_open.set(false);
                match result {
                    Ok(()) => {
                        toasts.success("Review deleted successfully!");
                        set_delete_id.set(String::new());
                    }
                    Err(err) => {
                        log::error!("delete error: {err}");
                        toasts.error(format!("Error deleting review: {err}"));
                    }
                }
            });
        }
    };

    let nav_button = move |target: Section, label: &'static str| {
        view! {
            <button
                class=move || {
                    let state = if section.get() == target {
                        "bg-orange-500/90 text-white"
                    } else {
                        "text-slate-400 hover:text-white hover:bg-slate-800"
                    };
                    format!("px-4 py-2 text-sm font-medium rounded-lg transition-colors {state}")
                }
                on:click=move |_| section.set(target)
            >
                {label}
            </button>
        }
    };

    let review_card = |review: Review| {
        view! {
            <div class="bg-slate-900/80 border border-slate-800 rounded-xl p-4">
                <div class="flex flex-wrap items-center gap-2">
                    <span class="font-semibold text-white">{review.reviewer.clone()}</span>
                    <span class="px-2 py-0.5 text-xs rounded-full border bg-blue-500/10 text-blue-400 border-blue-500/30">
                        {review.display_book_title()}
                    </span>
                    {review.rating.map(|rating| view! { <RatingDisplay rating=rating /> })}
                </div>
                <div class="flex gap-4 mt-1 text-xs text-slate-500">
                    <span>{format!("Review ID: {}", review.id)}</span>
                    <span>{format_date(review.created_at)}</span>
                </div>
                <p class="text-sm text-slate-300 mt-2">{review.comment.clone()}</p>
            </div>
        }
    };

    view! {
        <div class="p-6">
            <div class="flex flex-wrap items-center justify-between gap-4 mb-6">
                <h1 class="text-2xl font-bold text-white">"Book Reviews"</h1>
                <div class="flex gap-1">
                    {nav_button(Section::Browse, "Browse")}
                    {nav_button(Section::Find, "Find")}
                    {nav_button(Section::Write, "Write")}
                    {nav_button(Section::Delete, "Delete")}
                </div>
            </div>

            // browse
            <div class:hidden=move || section.get() != Section::Browse>
                <div class="flex flex-wrap items-center gap-3 mb-6">
                    <input
                        type="text"
                        placeholder="Book ID"
                        prop:value=move || browse_book_id.get()
                        on:input=move |ev| set_browse_book_id.set(event_target_value(&ev))
                        class="w-28 px-4 py-2 rounded-lg bg-slate-800 border border-slate-700 text-white placeholder-slate-500 focus:outline-none focus:ring-2 focus:ring-orange-500"
                    />
                    <Button on:click=move |_| browse_refresh.update(|n| *n += 1)>
                        "Load Reviews"
                    </Button>
                    <input
                        type="text"
                        placeholder="Search books, authors, or reviewers..."
                        prop:value=move || filter.get()
                        on:input=move |ev| set_filter.set(event_target_value(&ev))
                        class="flex-1 min-w-60 px-4 py-2 rounded-lg bg-slate-800 border border-slate-700 text-white placeholder-slate-500 focus:outline-none focus:ring-2 focus:ring-orange-500"
                    />
                </div>

                {move || match browse_reviews.get().view() {
                    ListView::Spinner => view! {
                        <Spinner tip="Loading reviews..." />
                    }
                    .into_any(),
                    ListView::Error(_) => view! {
                        <ErrorAlert message=Signal::derive(|| {
                            "No Reviews at The Moment — Check Back Later".to_string()
                        }) />
                    }
                    .into_any(),
                    _ => {
                        let visible = filtered();
                        if visible.is_empty() {
                            view! {
                                <p class="text-center text-slate-400 py-16">
                                    "No reviews found. Perhaps try another search."
                                </p>
                            }
                            .into_any()
                        } else {
                            let count = visible.len();
                            view! {
                                <div>
                                    <div class="space-y-3">
                                        {visible.into_iter().map(review_card).collect_view()}
                                    </div>
                                    <p class="mt-4 text-sm text-slate-500">
                                        {format!(
                                            "Showing {count} review{}",
                                            if count == 1 { "" } else { "s" },
                                        )}
                                    </p>
                                </div>
                            }
                            .into_any()
                        }
                    }
                }}
            </div>

            // find
            <div class:hidden=move || section.get() != Section::Find>
                <div class="max-w-xl mx-auto bg-slate-900/80 border border-slate-800 rounded-2xl p-8 mb-6">
                    <div class="text-center mb-6">
                        <span class="text-4xl">"🔍"</span>
                        <h2 class="text-xl font-semibold text-white mt-2">"Find Reviews"</h2>
                        <p class="text-sm text-slate-400">
                            "Search for reviews by Review ID or Book ID"
                        </p>
                    </div>
                    <div class="space-y-4">
                        <TextInput
                            label="Review ID"
                            name="find-review-id"
                            placeholder="Enter review ID to find a specific review"
                            value=find_review_id
                            set_value=set_find_review_id
                        />
                        <TextInput
                            label="Book ID"
                            name="find-book-id"
                            placeholder="Enter book ID to find all reviews for that book"
                            value=find_book_id
                            set_value=set_find_book_id
                        />
                    </div>
                    <div class="mt-6 flex justify-center gap-3">
                        <Button loading=finding on:click=move |_| run_find()>
                            "Search Reviews"
                        </Button>
                        <Button variant=ButtonVariant::Ghost on:click=move |_| {
                            set_find_review_id.set(String::new());
                            set_find_book_id.set(String::new());
                            find_results.set(None);
                        }>
                            "Clear"
                        </Button>
                    </div>
                </div>

                {move || {
                    find_results
                        .get()
                        .map(|results| match results.view() {
                            ListView::Spinner => view! {
                                <Spinner tip="Searching reviews..." />
                            }
                            .into_any(),
                            ListView::Error(message) => view! {
                                <ErrorAlert message=Signal::derive(move || message.clone()) />
                            }
                            .into_any(),
                            ListView::Empty => view! {
                                <p class="text-center text-slate-400 py-8">
                                    "No reviews found. Try different search criteria."
                                </p>
                            }
                            .into_any(),
                            ListView::Items(count) => view! {
                                <div>
                                    <p class="text-sm text-slate-400 mb-3">
                                        {format!("Search Results ({count} found)")}
                                    </p>
                                    <div class="space-y-3">
                                        {results
                                            .items()
                                            .to_vec()
                                            .into_iter()
                                            .map(review_card)
                                            .collect_view()}
                                    </div>
                                </div>
                            }
                            .into_any(),
                        })
                }}
            </div>

            // write
            <div class:hidden=move || section.get() != Section::Write>
                <div class="max-w-xl mx-auto bg-slate-900/80 border border-slate-800 rounded-2xl p-8">
                    <div class="text-center mb-6">
                        <span class="text-4xl">"✍️"</span>
                        <h2 class="text-xl font-semibold text-white mt-2">"Submit a Book Review"</h2>
                        <p class="text-sm text-slate-400">"Let others read your view"</p>
                    </div>

                    <Show when=move || !write_errors.get().is_empty() fallback=|| ()>
                        <ErrorAlert message=Signal::derive(move || write_errors.get().join(" · ")) />
                    </Show>

                    <div class="space-y-4">
                        <TextInput
                            label="Book ID"
                            name="write-book-id"
                            placeholder="Numeric ID of the book"
                            required=true
                            value=write_book_id
                            set_value=set_write_book_id
                        />
                        <TextInput
                            label="Your Name"
                            name="write-reviewer"
                            placeholder="Enter your name"
                            required=true
                            value=write_reviewer
                            set_value=set_write_reviewer
                        />
                        <TextArea
                            label="Your Review"
                            name="write-comment"
                            placeholder="What did you think of this book?"
                            rows=4
                            value=write_comment
                            set_value=set_write_comment
                        />
                    </div>

                    <div class="mt-6 flex justify-center">
                        <Button loading=writing button_type="submit" on:click=move |_| submit_review()>
                            "Submit Review"
                        </Button>
                    </div>

                    {move || {
                        submitted
                            .get()
                            .map(|review| {
                                view! {
                                    <div class="mt-6 p-4 bg-slate-800/60 border border-slate-700 rounded-lg">
                                        <p class="font-semibold text-emerald-400 mb-2">
                                            "Review Submitted Successfully:"
                                        </p>
                                        <p class="text-sm text-slate-300">
                                            {format!("Book ID: {}", review.book_id)}
                                        </p>
                                        <p class="text-sm text-slate-300">
                                            {format!("Reviewer: {}", review.reviewer)}
                                        </p>
                                        <p class="text-sm text-slate-300">
                                            {format!("Comment: {}", review.comment)}
                                        </p>
                                        <p class="text-sm text-slate-500">
                                            {format!("Created At: {}", format_date(review.created_at))}
                                        </p>
                                    </div>
                                }
                            })
                    }}
                </div>
            </div>

            // delete
            <div class:hidden=move || section.get() != Section::Delete>
                <div class="max-w-xl mx-auto bg-slate-900/80 border border-slate-800 rounded-2xl p-8">
                    <div class="text-center mb-6">
                        <span class="text-4xl">"🗑"</span>
                        <h2 class="text-xl font-semibold text-white mt-2">"Delete Review"</h2>
                        <p class="text-sm text-slate-400">"Remove a review by entering its ID"</p>
                    </div>

                    <TextInput
                        label="Review ID"
                        name="delete-review-id"
                        placeholder="Enter the ID of the review you want to delete"
                        required=true
                        value=delete_id
                        set_value=set_delete_id
                    />

                    <div class="mt-6 flex justify-center gap-3">
                        <Button
                            variant=ButtonVariant::Danger
                            loading=deleting
                            on:click=move |_| {
                                if delete_id.get_untracked().trim().is_empty() {
                                    toasts.error("Please enter the review ID");
                                } else {
                                    delete_open.set(true);
                                }
                            }
                        >
                            "Delete Review"
                        </Button>
                        <Button variant=ButtonVariant::Ghost on:click=move |_| {
                            set_delete_id.set(String::new());
                        }>
                            "Clear"
                        </Button>
                    </div>

                    <div class="mt-6 p-4 bg-red-500/10 border border-red-500/30 rounded-lg text-sm">
                        <span class="font-semibold text-red-400">"⚠ Warning: "</span>
                        <span class="text-slate-400">
                            "This action cannot be undone. Make sure you have the correct review ID before proceeding."
                        </span>
                    </div>
                </div>
            </div>
        </div>

        <ConfirmModal
            title=Signal::derive(|| "Confirm Delete".to_string())
            open=delete_open
            ok_text="Delete"
            danger=true
            on_ok=delete_review
        >
            <p class="text-slate-300">
                {move || format!(
                    "Are you sure you want to delete review #{}?",
                    delete_id.get().trim(),
                )}
            </p>
            <p class="mt-2 text-sm text-red-400">"This action cannot be undone."</p>
        </ConfirmModal>
    }
}
