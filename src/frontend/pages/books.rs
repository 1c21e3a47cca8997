//! Book collection: card grid with add/edit/delete plus per-book reviews.

use futures_util::future::join_all;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{BooksClient, ReviewsClient};
use crate::common::{ListView, Loadable};
use crate::config::ServiceConfig;
use crate::frontend::components::{
    Button, ButtonVariant, ConfirmModal, ErrorAlert, Modal, RatingDisplay, RatingInput, Spinner,
    TextArea, TextInput,
};
use crate::frontend::forms::{BookForm, ReviewForm};
use crate::models::{format_date, Book, BookWithReviews, Review};
use crate::services::{FetchCoordinator, Toasts};

#[component]
pub fn BooksPage() -> impl IntoView {
    let config = expect_context::<ServiceConfig>();
    let toasts = expect_context::<Toasts>();
    let books_client = BooksClient::new(config.clone());
    let reviews_client = ReviewsClient::new(config);
    let coordinator = FetchCoordinator::new();

    let books = RwSignal::new(Loadable::<BookWithReviews>::Loading);
    let refresh = RwSignal::new(0u32);

    // One GET for the collection, then one review lookup per book. A failed
    // lookup degrades that book to zero reviews instead of failing the page.
    let fetch_books = {
        let books_client = books_client.clone();
        let reviews_client = reviews_client.clone();
        let coordinator = coordinator.clone();
        move || {
            let books_client = books_client.clone();
            let reviews_client = reviews_client.clone();
            let ticket = coordinator.issue();
            books.set(Loadable::Loading);
            spawn_local(async move {
                match books_client.list().await {
                    Ok(list) => {
                        let joined = join_all(list.into_iter().map(|book| {
                            let reviews_client = reviews_client.clone();
                            async move {
                                let reviews = match reviews_client.for_book(book.id).await {
                                    Ok(reviews) => reviews,
                                    Err(err) => {
                                        log::warn!(
                                            "failed to fetch reviews for book {}: {err}",
                                            book.id
                                        );
                                        Vec::new()
                                    }
                                };
                                BookWithReviews { book, reviews }
                            }
                        }))
                        .await;
                        if ticket.is_current() {
                            books.set(Loadable::Ready(joined));
                        }
                    }
                    Err(err) => {
                        log::error!("failed to fetch books: {err}");
                        if ticket.is_current() {
                            books.set(Loadable::Failed(err.to_string()));
                        }
                    }
                }
            });
        }
    };

    Effect::new(move |_| {
        refresh.track();
        fetch_books();
    });
    on_cleanup({
        let coordinator = coordinator.clone();
        move || coordinator.retire()
    });

    // add/edit modal
    let form_open = RwSignal::new(false);
    let editing = RwSignal::new(None::<Book>);
    let form_errors = RwSignal::new(Vec::<String>::new());
    let saving = RwSignal::new(false);
    let (title, set_title) = signal(String::new());
    let (author, set_author) = signal(String::new());
    let (description, set_description) = signal(String::new());

    // details modal
    let details = RwSignal::new(None::<BookWithReviews>);
    let details_open = RwSignal::new(false);

    // add-review modal
    let review_for = RwSignal::new(None::<Book>);
    let review_open = RwSignal::new(false);
    let review_errors = RwSignal::new(Vec::<String>::new());
    let submitting_review = RwSignal::new(false);
    let (reviewer, set_reviewer) = signal(String::new());
    let (comment, set_comment) = signal(String::new());
    let review_rating = RwSignal::new(5u8);

    // view-reviews modal
    let viewing_for = RwSignal::new(None::<Book>);
    let viewing_open = RwSignal::new(false);
    let book_reviews = RwSignal::new(Loadable::<Review>::Loading);

    // delete confirmation
    let to_delete = RwSignal::new(None::<Book>);
    let delete_open = RwSignal::new(false);

    let save_book = {
        let books_client = books_client.clone();
        let toasts = toasts.clone();
        move || {
            let form = BookForm {
                title: title.get_untracked(),
                author: author.get_untracked(),
                description: description.get_untracked(),
            };
            let payload = match form.validate() {
                Ok(payload) => payload,
                Err(errors) => {
                    form_errors.set(errors);
                    return;
                }
            };
            form_errors.set(Vec::new());
            saving.set(true);
            let books_client = books_client.clone();
            let toasts = toasts.clone();
            let editing_book = editing.get_untracked();
            spawn_local(async move {
                let result = match &editing_book {
                    Some(book) => books_client.update(book.id, &payload).await,
                    None => books_client.create(&payload).await,
                };
                saving.set(false);
                match result {
                    Ok(()) => {
                        toasts.success(if editing_book.is_some() {
                            "Book updated successfully"
                        } else {
                            "Book added successfully"
                        });
                        form_open.set(false);
                        editing.set(None);
                        refresh.update(|n| *n += 1);
                    }
                    Err(err) => {
                        log::error!("save book error: {err}");
                        toasts.error(format!("Error: {err}"));
                    }
                }
            });
        }
    };

    let submit_review = {
        let reviews_client = reviews_client.clone();
        let toasts = toasts.clone();
        move || {
            let Some(book) = review_for.get_untracked() else {
                return;
            };
            let form = ReviewForm {
                reviewer: reviewer.get_untracked(),
                comment: comment.get_untracked(),
                rating: review_rating.get_untracked(),
            };
            let review = match form.validate(book.id) {
                Ok(review) => review,
                Err(errors) => {
                    review_errors.set(errors);
                    return;
                }
            };
            review_errors.set(Vec::new());
            submitting_review.set(true);
            let reviews_client = reviews_client.clone();
            let toasts = toasts.clone();
            spawn_local(async move {
                let result = reviews_client.submit(&review).await;
                submitting_review.set(false);
                match result {
                    Ok(_) => {
                        toasts.success("Review added successfully!");
                        review_open.set(false);
                        review_for.set(None);
                        refresh.update(|n| *n += 1);
                    }
                    Err(err) => {
                        log::error!("submit review error: {err}");
                        toasts.error("Error submitting review");
                    }
                }
            });
        }
    };

    // The row buttons only flip signals; this effect owns the actual fetch,
    // so the per-row views stay free of client handles.
    Effect::new({
        let reviews_client = reviews_client.clone();
        move |_| {
            if !viewing_open.get() {
                return;
            }
            let Some(book) = viewing_for.get() else {
                return;
            };
            book_reviews.set(Loadable::Loading);
            let reviews_client = reviews_client.clone();
            spawn_local(async move {
                match reviews_client.for_book(book.id).await {
                    Ok(reviews) => book_reviews.set(Loadable::Ready(reviews)),
                    Err(err) => {
                        log::error!("failed to fetch reviews: {err}");
                        book_reviews.set(Loadable::Failed("Failed to fetch reviews".into()));
                    }
                }
            });
        }
    });

    let delete_book = {
        let books_client = books_client.clone();
        let toasts = toasts.clone();
        move || {
            let Some(book) = to_delete.get_untracked() else {
                return;
            };
            let books_client = books_client.clone();
            let toasts = toasts.clone();
            spawn_local(async move {
                match books_client.delete(book.id).await {
                    Ok(()) => {
                        toasts.success("Book deleted successfully");
                        refresh.update(|n| *n += 1);
                    }
                    Err(err) => {
                        log::error!("delete error: {err}");
                        toasts.error("Error deleting book");
                    }
                }
                delete_open.set(false);
                to_delete.set(None);
            });
        }
    };

    view! {
        <div class="p-6">
            <div class="flex flex-wrap items-center justify-between gap-4 mb-6">
                <h1 class="text-2xl font-bold text-white">"Book Collection"</h1>
                <Button on:click=move |_| {
                    editing.set(None);
                    set_title.set(String::new());
                    set_author.set(String::new());
                    set_description.set(String::new());
                    form_errors.set(Vec::new());
                    form_open.set(true);
                }>
                    "Add Book"
                </Button>
            </div>

            {move || match books.get().view() {
                ListView::Spinner => view! { <Spinner tip="Loading books..." /> }.into_any(),
                ListView::Error(_) => view! {
                    <ErrorAlert message=Signal::derive(|| {
                        "No Books Available At The Moment — Check Back Later".to_string()
                    }) />
                }
                .into_any(),
                ListView::Empty => view! {
                    <p class="text-center text-slate-400 py-16">"No books in the catalog yet."</p>
                }
                .into_any(),
                ListView::Items(_) => view! {
                    <div class="grid gap-6 grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 xl:grid-cols-4">
                        <For
                            each=move || books.get().items().to_vec()
                            key=|entry| entry.book.id
                            children=move |entry: BookWithReviews| {
                                let book = entry.book.clone();
                                let review_count = entry.review_count();
                                let cover_book = entry.clone();
                                let edit_book = book.clone();
                                let delete_candidate = book.clone();
                                let review_book = book.clone();
                                let view_book = book.clone();
                                view! {
                                    <div class="bg-slate-900/80 border border-slate-800 rounded-2xl overflow-hidden flex flex-col hover:border-slate-700 transition-colors">
                                        <button
                                            class="h-40 w-full bg-gradient-to-br from-indigo-500 to-purple-600 flex items-center justify-center p-4 text-white text-lg font-semibold text-center"
                                            on:click=move |_| {
                                                details.set(Some(cover_book.clone()));
                                                details_open.set(true);
                                            }
                                        >
                                            <span class="line-clamp-3">{book.title.clone()}</span>
                                        </button>
                                        <div class="p-4 flex-1 flex flex-col gap-2">
                                            <p class="text-xs text-slate-400">
                                                <span class="font-semibold">"Author: "</span>
                                                {book.display_author().to_string()}
                                            </p>
                                            <p class="text-xs text-slate-500 line-clamp-3 flex-1">
                                                {book.display_description().to_string()}
                                            </p>
                                            <div class="flex gap-2 pt-2">
                                                <Button
                                                    variant=ButtonVariant::Ghost
                                                    on:click=move |_| {
                                                        let book = edit_book.clone();
                                                        set_title.set(book.title.clone());
                                                        set_author.set(book.author.clone());
                                                        set_description.set(book.description.clone());
                                                        form_errors.set(Vec::new());
                                                        editing.set(Some(book));
                                                        form_open.set(true);
                                                    }
                                                >
                                                    "Edit"
                                                </Button>
                                                <Button
                                                    variant=ButtonVariant::Danger
                                                    on:click=move |_| {
                                                        to_delete.set(Some(delete_candidate.clone()));
                                                        delete_open.set(true);
                                                    }
                                                >
                                                    "Delete"
                                                </Button>
                                            </div>
                                        </div>
                                        <div class="px-4 py-3 border-t border-slate-800 flex gap-2">
                                            <Button on:click=move |_| {
                                                set_reviewer.set(String::new());
                                                set_comment.set(String::new());
                                                review_rating.set(5);
                                                review_errors.set(Vec::new());
                                                review_for.set(Some(review_book.clone()));
                                                review_open.set(true);
                                            }>
                                                "Add Review"
                                            </Button>
                                            <Button
                                                variant=ButtonVariant::Ghost
                                                on:click=move |_| {
                                                    viewing_for.set(Some(view_book.clone()));
                                                    viewing_open.set(true);
                                                }
                                            >
                                                {format!("Reviews ({review_count})")}
                                            </Button>
                                        </div>
                                    </div>
                                }
                            }
                        />
                    </div>
                }
                .into_any(),
            }}
        </div>

        // add / edit
        <Modal
            title=Signal::derive(move || {
                if editing.get().is_some() { "Edit Book" } else { "Add New Book" }.to_string()
            })
            open=form_open
        >
            <Show when=move || !form_errors.get().is_empty() fallback=|| ()>
                <ErrorAlert message=Signal::derive(move || form_errors.get().join(" · ")) />
            </Show>
            <div class="space-y-4">
                <TextInput
                    label="Title"
                    name="book-title"
                    placeholder="Enter book title"
                    required=true
                    value=title
                    set_value=set_title
                />
                <TextInput
                    label="Author"
                    name="book-author"
                    placeholder="Enter author name"
                    required=true
                    value=author
                    set_value=set_author
                />
                <TextArea
                    label="Description"
                    name="book-description"
                    placeholder="Enter book description"
                    rows=4
                    max_length=500
                    value=description
                    set_value=set_description
                />
            </div>
            <div class="mt-6 flex justify-end gap-3">
                <Button
                    variant=ButtonVariant::Ghost
                    on:click=move |_| {
                        form_open.set(false);
                        editing.set(None);
                    }
                >
                    "Cancel"
                </Button>
                <Button loading=saving on:click=move |_| save_book()>
                    {move || if editing.get().is_some() { "Update" } else { "Add" }}
                </Button>
            </div>
        </Modal>

        // details
        <Modal title=Signal::derive(|| "Book Details".to_string()) open=details_open>
            {move || {
                details
                    .get()
                    .map(|entry| {
                        let book = entry.book.clone();
                        view! {
                            <h4 class="text-xl font-semibold text-white">{book.title.clone()}</h4>
                            <p class="mt-2 text-sm text-slate-300">
                                <span class="font-semibold">"Author: "</span>
                                {book.display_author().to_string()}
                            </p>
                            <hr class="my-4 border-slate-800" />
                            <p class="text-sm font-semibold text-slate-300">"About:"</p>
                            <p class="text-sm text-slate-400">
                                {book.display_description().to_string()}
                            </p>
                            <hr class="my-4 border-slate-800" />
                            <p class="text-sm text-slate-300">
                                <span class="font-semibold">"Reviews: "</span>
                                {entry.review_count()}
                            </p>
                        }
                    })
            }}
            <div class="mt-6 flex justify-end">
                <Button variant=ButtonVariant::Ghost on:click=move |_| details_open.set(false)>
                    "Close"
                </Button>
            </div>
        </Modal>

        // add review
        <Modal
            title=Signal::derive(move || {
                format!(
                    "Add Review for \"{}\"",
                    review_for.get().map(|book| book.title).unwrap_or_default()
                )
            })
            open=review_open
        >
            <Show when=move || !review_errors.get().is_empty() fallback=|| ()>
                <ErrorAlert message=Signal::derive(move || review_errors.get().join(" · ")) />
            </Show>
            <div class="space-y-4">
                <TextInput
                    label="Your Name"
                    name="reviewer"
                    placeholder="Enter your name"
                    required=true
                    value=reviewer
                    set_value=set_reviewer
                />
                <div>
                    <p class="block text-sm font-medium text-slate-300 mb-2">"Rating"</p>
                    <RatingInput value=review_rating />
                </div>
                <TextArea
                    label="Your Review"
                    name="review-comment"
                    placeholder="Share your thoughts about this book..."
                    rows=4
                    value=comment
                    set_value=set_comment
                />
            </div>
            <div class="mt-6 flex justify-end gap-3">
                <Button
                    variant=ButtonVariant::Ghost
                    on:click=move |_| {
                        review_open.set(false);
                        review_for.set(None);
                    }
                >
                    "Cancel"
                </Button>
                <Button loading=submitting_review on:click=move |_| submit_review()>
                    "Submit Review"
                </Button>
            </div>
        </Modal>

        // view reviews
        <Modal
            title=Signal::derive(move || {
                format!(
                    "Reviews for \"{}\"",
                    viewing_for.get().map(|book| book.title).unwrap_or_default()
                )
            })
            open=viewing_open
        >
            {move || match book_reviews.get().view() {
                ListView::Spinner => view! { <Spinner tip="Loading reviews..." /> }.into_any(),
                ListView::Error(message) => view! {
                    <ErrorAlert message=Signal::derive(move || message.clone()) />
                }
                .into_any(),
                ListView::Empty => view! {
                    <p class="text-center text-slate-400 py-8">"No reviews yet for this book."</p>
                }
                .into_any(),
                ListView::Items(_) => view! {
                    <div class="space-y-3 max-h-80 overflow-y-auto">
                        <For
                            each=move || book_reviews.get().items().to_vec()
                            key=|review| review.id
                            children=|review: Review| {
                                view! {
                                    <div class="bg-slate-800/60 border border-slate-700 rounded-lg p-3">
                                        <div class="flex items-center justify-between">
                                            <span class="font-semibold text-white">
                                                {review.reviewer.clone()}
                                            </span>
                                            {review
                                                .rating
                                                .map(|rating| view! { <RatingDisplay rating=rating /> })}
                                        </div>
                                        <p class="text-sm text-slate-300 my-2">{review.comment.clone()}</p>
                                        <p class="text-xs text-slate-500">
                                            {format_date(review.created_at)}
                                        </p>
                                    </div>
                                }
                            }
                        />
                    </div>
                }
                .into_any(),
            }}
            <div class="mt-6 flex justify-end">
                <Button variant=ButtonVariant::Ghost on:click=move |_| {
                    viewing_open.set(false);
                    viewing_for.set(None);
                }>
                    "Close"
                </Button>
            </div>
        </Modal>

        // delete confirmation
        <ConfirmModal
            title=Signal::derive(|| "Confirm Delete".to_string())
            open=delete_open
            ok_text="Delete"
            danger=true
            on_ok=delete_book
        >
            <p class="text-slate-300">
                "Are you sure you want to delete the book "
                <span class="font-semibold">
                    {move || format!("\"{}\"", to_delete.get().map(|b| b.title).unwrap_or_default())}
                </span>
                "?"
            </p>
            <p class="mt-2 text-sm text-red-400">"This action cannot be undone."</p>
        </ConfirmModal>
    }
}
