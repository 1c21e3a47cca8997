use leptos::prelude::*;

use crate::services::{Toast, ToastLevel, Toasts};

/// Renders the toast queue in the top-right corner.
#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = expect_context::<Toasts>();
    let items = toasts.items();

    view! {
        <div class="fixed top-4 right-4 z-50 w-80 space-y-2">
            <For
                each=move || items.get()
                key=|toast| toast.id
                children=move |toast: Toast| {
                    let (icon, classes) = match toast.level {
                        ToastLevel::Success => {
                            ("✓", "bg-emerald-500/15 border-emerald-500/40 text-emerald-300")
                        }
                        ToastLevel::Error => ("✕", "bg-red-500/15 border-red-500/40 text-red-300"),
                        ToastLevel::Info => ("ℹ", "bg-blue-500/15 border-blue-500/40 text-blue-300"),
                    };
                    let toasts = toasts.clone();
                    view! {
                        <div class=format!(
                            "flex items-start gap-2 p-3 rounded-lg border text-sm shadow-lg backdrop-blur-sm {}",
                            classes,
                        )>
                            <span>{icon}</span>
                            <span class="flex-1">{toast.message.clone()}</span>
                            <button
                                class="text-slate-400 hover:text-white"
                                on:click=move |_| toasts.dismiss(toast.id)
                            >
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
