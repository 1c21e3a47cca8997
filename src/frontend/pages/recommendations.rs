//! Community recommendations: tabbed list / add / edit views backed by the
//! recommendation service.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::RecommendationsClient;
use crate::common::{ApiError, ListView, Loadable};
use crate::config::ServiceConfig;
use crate::frontend::components::{
    Button, ButtonVariant, ConfirmModal, ErrorAlert, RatingInput, Spinner, TextArea, TextInput,
};
use crate::frontend::forms::{RecommendationEditForm, RecommendationForm};
use crate::models::Recommendation;
use crate::services::{FetchCoordinator, Toasts};

#[derive(Clone, Copy, PartialEq, Eq)]
enum Tab {
    List,
    Add,
    Edit,
}

#[component]
pub fn RecommendationsPage() -> impl IntoView {
    let config = expect_context::<ServiceConfig>();
    let toasts = expect_context::<Toasts>();
    let client = RecommendationsClient::new(config);
    let coordinator = FetchCoordinator::new();

    let active_tab = RwSignal::new(Tab::List);
    let editing = RwSignal::new(None::<Recommendation>);
    let refresh = RwSignal::new(0u32);

    let recommendations = RwSignal::new(Loadable::<Recommendation>::Loading);

    // search by id
    let (search_id, set_search_id) = signal(String::new());
    let searched = RwSignal::new(None::<Recommendation>);
    let search_error = RwSignal::new(None::<String>);
    let searching = RwSignal::new(false);

    // delete confirmation
    let to_delete = RwSignal::new(None::<Recommendation>);
    let delete_open = RwSignal::new(false);

    // add form
    let (new_name, set_new_name) = signal(String::new());
    let (new_author, set_new_author) = signal(String::new());
    let new_rating = RwSignal::new(0u8);
    let (new_description, set_new_description) = signal(String::new());
    let add_errors = RwSignal::new(Vec::<String>::new());
    let adding = RwSignal::new(false);

    // edit form
    let (edit_name, set_edit_name) = signal(String::new());
    let (edit_author, set_edit_author) = signal(String::new());
    let edit_errors = RwSignal::new(Vec::<String>::new());
    let updating = RwSignal::new(false);

    let fetch_all = {
        let client = client.clone();
        let coordinator = coordinator.clone();
        move || {
            let client = client.clone();
            let ticket = coordinator.issue();
            recommendations.set(Loadable::Loading);
            spawn_local(async move {
                match client.list().await {
                    Ok(list) => {
                        if ticket.is_current() {
                            recommendations.set(Loadable::Ready(list));
                        }
                    }
                    Err(err) => {
                        log::error!("fetch error: {err}");
                        if ticket.is_current() {
                            recommendations.set(Loadable::Failed("Failed to load books".into()));
                        }
                    }
                }
            });
        }
    };

    Effect::new(move |_| {
        refresh.track();
        fetch_all();
    });
    on_cleanup({
        let coordinator = coordinator.clone();
        move || coordinator.retire()
    });

    let search_by_id = {
        let client = client.clone();
        let toasts = toasts.clone();
        move || {
            let raw = search_id.get_untracked();
            let raw = raw.trim().to_string();
            if raw.is_empty() {
                toasts.info("Enter a book ID");
                return;
            }
            let Ok(id) = raw.parse::<u64>() else {
                search_error.set(Some("Book does not exist".into()));
                searched.set(None);
                return;
            };
            searching.set(true);
            search_error.set(None);
            searched.set(None);
            let client = client.clone();
            let toasts = toasts.clone();
            spawn_local(async move {
                let result = client.by_id(id).await;
                searching.set(false);
                match result {
                    Ok(rec) => {
                        searched.set(Some(rec));
                        toasts.success("Book found!");
                    }
                    Err(err) => {
                        if let ApiError::Status { status: 404, .. } = err {
                            search_error.set(Some("Book does not exist".into()));
                            toasts.error("Book does not exist");
                        } else {
                            log::error!("search error: {err}");
                            search_error.set(Some("Search failed. Please try again.".into()));
                            toasts.error("Search failed");
                        }
                    }
                }
            });
        }
    };

    let add_recommendation = {
        let client = client.clone();
        let toasts = toasts.clone();
        move || {
            let form = RecommendationForm {
                book_name: new_name.get_untracked(),
                author: new_author.get_untracked(),
                rating: match new_rating.get_untracked() {
                    0 => None,
                    stars => Some(stars),
                },
                description: new_description.get_untracked(),
            };
            let body = match form.validate() {
                Ok(body) => body,
                Err(errors) => {
                    add_errors.set(errors);
                    return;
                }
            };
            add_errors.set(Vec::new());
            adding.set(true);
            let client = client.clone();
            let toasts = toasts.clone();
            spawn_local(async move {
                let result = client.create(&body).await;
                adding.set(false);
                match result {
                    Ok(()) => {
                        toasts.success("Book added completed successfully!");
                        set_new_name.set(String::new());
                        set_new_author.set(String::new());
                        new_rating.set(0);
                        set_new_description.set(String::new());
                        active_tab.set(Tab::List);
                        refresh.update(|n| *n += 1);
                    }
                    Err(err) => {
                        log::error!("add recommendation error: {err}");
                        toasts.error(format!("Error adding recommendation: {err}"));
                    }
                }
            });
        }
    };

    let update_recommendation = {
        let client = client.clone();
        let toasts = toasts.clone();
        move || {
            let Some(rec) = editing.get_untracked() else {
                return;
            };
            let form = RecommendationEditForm {
                book_name: edit_name.get_untracked(),
                author: edit_author.get_untracked(),
            };
            let body = match form.validate() {
                Ok(body) => body,
                Err(errors) => {
                    edit_errors.set(errors);
                    return;
                }
            };
            edit_errors.set(Vec::new());
            updating.set(true);
            let client = client.clone();
            let toasts = toasts.clone();
            spawn_local(async move {
                let result = client.update(rec.id, &body).await;
                updating.set(false);
                match result {
                    Ok(()) => {
                        toasts.success("Book updated completed successfully!");
                        editing.set(None);
                        active_tab.set(Tab::List);
                        refresh.update(|n| *n += 1);
                    }
                    Err(err) => {
                        log::error!("update error: {err}");
                        toasts.error("Failed to update book");
                    }
                }
            });
        }
    };

    let delete_recommendation = {
        let client = client.clone();
        let toasts = toasts.clone();
        move || {
            let Some(rec) = to_delete.get_untracked() else {
                return;
            };
            let client = client.clone();
            let toasts = toasts.clone();
            spawn_local(async move {
                match client.delete(rec.id).await {
                    Ok(()) => {
                        toasts.success("Book deleted successfully!");
                        refresh.update(|n| *n += 1);
                    }
                    Err(err) => {
                        log::error!("delete error: {err}");
                        toasts.error(format!("{err}"));
                    }
                }
                delete_open.set(false);
                to_delete.set(None);
            });
        }
    };

    let tab_button = move |tab: Tab, label: &'static str| {
        view! {
            <button
                class=move || {
                    let state = if active_tab.get() == tab {
                        "bg-slate-800 text-white border-b-2 border-orange-500"
                    } else {
                        "text-slate-400 hover:text-white"
                    };
                    format!("px-4 py-2 text-sm font-medium rounded-t-lg transition-colors {state}")
                }
                on:click=move |_| active_tab.set(tab)
            >
                {label}
            </button>
        }
    };

    view! {
        <div class="p-6">
            <h1 class="text-2xl font-bold text-white mb-6">"Book Recommendations"</h1>

            <div class="flex gap-1 border-b border-slate-800 mb-6">
                {tab_button(Tab::List, "View All Books")}
                {tab_button(Tab::Add, "Add Book")}
                <Show when=move || editing.get().is_some() fallback=|| ()>
                    {tab_button(Tab::Edit, "Edit Book")}
                </Show>
            </div>

            // list tab
            <div class:hidden=move || active_tab.get() != Tab::List>
                <div class="flex flex-wrap items-center gap-3 mb-6">
                    <input
                        type="text"
                        placeholder="Search by Book ID"
                        prop:value=move || search_id.get()
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            if value.trim().is_empty() {
                                searched.set(None);
                                search_error.set(None);
                            }
                            set_search_id.set(value);
                        }
                        class="w-72 px-4 py-2 rounded-lg bg-slate-800 border border-slate-700 text-white placeholder-slate-500 focus:outline-none focus:ring-2 focus:ring-orange-500"
                    />
                    <Button loading=searching on:click=move |_| search_by_id()>
                        "Search"
                    </Button>
                    <Button variant=ButtonVariant::Ghost on:click=move |_| {
                        set_search_id.set(String::new());
                        searched.set(None);
                        search_error.set(None);
                        refresh.update(|n| *n += 1);
                    }>
                        "Refresh"
                    </Button>
                </div>

                {move || {
                    search_error
                        .get()
                        .map(|message| {
                            view! {
                                <div class="mb-6">
                                    <ErrorAlert message=Signal::derive(move || {
                                        format!(
                                            "{message} — no book found with ID {}",
                                            search_id.get(),
                                        )
                                    }) />
                                </div>
                            }
                        })
                }}

                {move || {
                    searched
                        .get()
                        .map(|rec| {
                            view! {
                                <div class="mb-6">
                                    <p class="text-sm text-slate-400 mb-2">"Search Result"</p>
                                    <div class="max-w-sm">
                                        <RecommendationCard
                                            recommendation=rec
                                            editing=editing
                                            active_tab=active_tab
                                            edit_name=set_edit_name
                                            edit_author=set_edit_author
                                            to_delete=to_delete
                                            delete_open=delete_open
                                        />
                                    </div>
                                    <hr class="mt-6 border-slate-800" />
                                </div>
                            }
                        })
                }}

                {move || match recommendations.get().view() {
                    ListView::Spinner => view! { <Spinner tip="Loading books..." /> }.into_any(),
                    ListView::Error(message) => view! {
                        <ErrorAlert message=Signal::derive(move || message.clone()) />
                    }
                    .into_any(),
                    ListView::Empty => view! {
                        <p class="text-center text-slate-400 py-16">
                            "No recommendations yet. Be the first!"
                        </p>
                    }
                    .into_any(),
                    ListView::Items(_) => view! {
                        <div class="grid gap-6 grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 xl:grid-cols-4">
                            <For
                                each=move || recommendations.get().items().to_vec()
                                key=|rec| rec.id
                                children=move |rec: Recommendation| {
                                    view! {
                                        <RecommendationCard
                                            recommendation=rec
                                            editing=editing
                                            active_tab=active_tab
                                            edit_name=set_edit_name
                                            edit_author=set_edit_author
                                            to_delete=to_delete
                                            delete_open=delete_open
                                        />
                                    }
                                }
                            />
                        </div>
                    }
                    .into_any(),
                }}
            </div>

            // add tab
            <div class:hidden=move || active_tab.get() != Tab::Add>
                <div class="max-w-xl mx-auto bg-slate-900/80 border border-slate-800 rounded-2xl p-8">
                    <div class="text-center mb-6">
                        <span class="text-4xl">"📖"</span>
                        <h2 class="text-xl font-semibold text-white mt-2">
                            "Add New Book Recommendation"
                        </h2>
                        <p class="text-sm text-slate-400">
                            "Share a book you love with the community"
                        </p>
                    </div>

                    <Show when=move || !add_errors.get().is_empty() fallback=|| ()>
                        <ErrorAlert message=Signal::derive(move || add_errors.get().join(" · ")) />
                    </Show>

                    <div class="space-y-4">
                        <TextInput
                            label="Book Title"
                            name="rec-title"
                            placeholder="e.g. Atomic Habits"
                            required=true
                            value=new_name
                            set_value=set_new_name
                        />
                        <TextInput
                            label="Author"
                            name="rec-author"
                            placeholder="e.g. James Clear"
                            required=true
                            value=new_author
                            set_value=set_new_author
                        />
                        <div>
                            <p class="block text-sm font-medium text-slate-300 mb-2">
                                "Your Rating"
                            </p>
                            <RatingInput value=new_rating />
                        </div>
                        <TextArea
                            label="Why do you recommend this book?"
                            name="rec-description"
                            placeholder="Share what makes this book special, how it impacted you, or who should read it..."
                            rows=5
                            max_length=800
                            value=new_description
                            set_value=set_new_description
                        />
                    </div>

                    <div class="mt-6 flex justify-center gap-3">
                        <Button loading=adding on:click=move |_| add_recommendation()>
                            "Add Recommendation"
                        </Button>
                        <Button variant=ButtonVariant::Ghost on:click=move |_| {
                            set_new_name.set(String::new());
                            set_new_author.set(String::new());
                            new_rating.set(0);
                            set_new_description.set(String::new());
                            add_errors.set(Vec::new());
                        }>
                            "Clear Form"
                        </Button>
                    </div>
                </div>
            </div>

            // edit tab
            <div class:hidden=move || active_tab.get() != Tab::Edit>
                {move || {
                    let update_recommendation = update_recommendation.clone();
                    editing
                        .get()
                        .map(|rec| {
                            view! {
                                <div class="max-w-xl mx-auto bg-slate-900/80 border border-slate-800 rounded-2xl p-8">
                                    <h2 class="text-xl font-semibold text-white mb-6">
                                        {format!("Edit Book: {}", rec.book_name)}
                                    </h2>

                                    <Show when=move || !edit_errors.get().is_empty() fallback=|| ()>
                                        <ErrorAlert message=Signal::derive(move || {
                                            edit_errors.get().join(" · ")
                                        }) />
                                    </Show>

                                    <div class="space-y-4">
                                        <TextInput
                                            label="Book Name"
                                            name="edit-rec-title"
                                            placeholder="Enter book name"
                                            required=true
                                            value=edit_name
                                            set_value=set_edit_name
                                        />
                                        <TextInput
                                            label="Author"
                                            name="edit-rec-author"
                                            placeholder="Enter author name"
                                            required=true
                                            value=edit_author
                                            set_value=set_edit_author
                                        />
                                    </div>

                                    <div class="mt-6 flex gap-3">
                                        <Button loading=updating on:click=move |_| update_recommendation()>
                                            "Update Book"
                                        </Button>
                                        <Button variant=ButtonVariant::Ghost on:click=move |_| {
                                            editing.set(None);
                                            active_tab.set(Tab::List);
                                        }>
                                            "Cancel"
                                        </Button>
                                    </div>
                                </div>
                            }
                        })
                }}
            </div>
        </div>

        <ConfirmModal
            title=Signal::derive(|| "Delete Book Recommendation".to_string())
            open=delete_open
            ok_text="Yes, Delete"
            danger=true
            on_ok=delete_recommendation
        >
            <p class="text-slate-300">"Are you sure you want to delete this book?"</p>
            {move || {
                to_delete
                    .get()
                    .map(|rec| {
                        view! {
                            <div class="mt-4 p-3 bg-slate-800 rounded-lg">
                                <p class="font-semibold text-white">{rec.book_name.clone()}</p>
                                <p class="text-sm text-slate-400">{rec.author.clone()}</p>
                            </div>
                        }
                    })
            }}
            <p class="mt-4 text-sm text-red-400 font-semibold">"This action cannot be undone!"</p>
        </ConfirmModal>
    }
}

/// One recommendation card with its edit/delete actions. Actions only flip
/// page-level signals; the page owns the network calls.
#[component]
fn RecommendationCard(
    recommendation: Recommendation,
    editing: RwSignal<Option<Recommendation>>,
    active_tab: RwSignal<Tab>,
    edit_name: WriteSignal<String>,
    edit_author: WriteSignal<String>,
    to_delete: RwSignal<Option<Recommendation>>,
    delete_open: RwSignal<bool>,
) -> impl IntoView {
    let edit_rec = recommendation.clone();
    let delete_rec = recommendation.clone();

    view! {
        <div class="bg-slate-900/80 border border-slate-800 rounded-2xl overflow-hidden flex flex-col hover:border-slate-700 transition-colors">
            <div class="h-40 bg-gradient-to-br from-indigo-500 to-purple-600 flex flex-col items-center justify-center p-4 text-white text-center">
                <span class="text-4xl mb-2">"📚"</span>
                <span class="text-lg font-semibold line-clamp-2">
                    {recommendation.book_name.clone()}
                </span>
            </div>
            <div class="p-4 flex-1 flex flex-col gap-3">
                <div class="flex items-center justify-between gap-2">
                    <span class="font-semibold text-white line-clamp-1">
                        {recommendation.book_name.clone()}
                    </span>
                    <span class="px-2.5 py-1 text-xs font-bold rounded-full bg-gradient-to-r from-indigo-500 to-purple-600 text-white whitespace-nowrap">
                        {format!("#{}", recommendation.id)}
                    </span>
                </div>
                <p class="text-sm text-slate-300">{recommendation.author.clone()}</p>
                <p class="text-xs text-slate-500">
                    {format!("Added on {}", recommendation.formatted_date())}
                </p>
            </div>
            <div class="px-4 py-3 border-t border-slate-800 flex gap-2">
                <Button
                    variant=ButtonVariant::Ghost
                    on:click=move |_| {
                        let rec = edit_rec.clone();
                        edit_name.set(rec.book_name.clone());
                        edit_author.set(rec.author.clone());
                        editing.set(Some(rec));
                        active_tab.set(Tab::Edit);
                    }
                >
                    "Edit"
                </Button>
                <Button
                    variant=ButtonVariant::Danger
                    on:click=move |_| {
                        to_delete.set(Some(delete_rec.clone()));
                        delete_open.set(true);
                    }
                >
                    "Delete"
                </Button>
            </div>
        </div>
    }
}
