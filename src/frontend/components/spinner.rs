use leptos::prelude::*;

#[component]
pub fn Spinner(#[prop(optional, into)] tip: String) -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center gap-3 py-12">
            <span class="w-10 h-10 border-4 border-slate-700 border-t-orange-500 rounded-full animate-spin"></span>
            {(!tip.is_empty()).then(|| view! { <p class="text-sm text-slate-400">{tip.clone()}</p> })}
        </div>
    }
}
