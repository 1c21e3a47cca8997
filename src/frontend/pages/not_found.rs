use leptos::prelude::*;

/// 404 Not Found page
#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class="min-h-screen flex items-center justify-center bg-slate-950">
            <div class="text-center">
                <h1 class="text-6xl font-bold text-slate-500 mb-4">"404"</h1>
                <p class="text-xl text-slate-400 mb-2">"Page not found"</p>
                <p class="text-sm text-slate-500 mb-8">
                    "The page you're looking for doesn't exist or has been moved."
                </p>
                <a
                    href="/dashboard"
                    class="px-6 py-3 bg-gradient-to-r from-orange-500 to-amber-500 text-white rounded-lg font-medium"
                >
                    "Back to Dashboard"
                </a>
            </div>
        </div>
    }
}
