use leptos::prelude::*;

/// Five clickable stars.
#[component]
pub fn RatingInput(value: RwSignal<u8>) -> impl IntoView {
    view! {
        <div class="flex gap-1">
            {(1u8..=5)
                .map(|star| {
                    view! {
                        <button
                            type="button"
                            class="text-2xl transition-colors"
                            class:text-amber-400=move || value.get() >= star
                            class:text-slate-600=move || (value.get() < star)
                            on:click=move |_| value.set(star)
                        >
                            "★"
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}

/// Read-only stars for rendering a stored rating.
#[component]
pub fn RatingDisplay(rating: u8) -> impl IntoView {
    view! {
        <div class="flex gap-0.5 text-sm">
            {(1u8..=5)
                .map(|star| {
                    let classes = if rating >= star {
                        "text-amber-400"
                    } else {
                        "text-slate-600"
                    };
                    view! { <span class=classes>"★"</span> }
                })
                .collect_view()}
        </div>
    }
}
