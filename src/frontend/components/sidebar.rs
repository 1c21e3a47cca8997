use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};

use super::ConfirmModal;
use crate::services::{Session, Toasts};

const NAV_ITEMS: [(&str, &str, &str); 4] = [
    ("/dashboard", "📊", "Dashboard"),
    ("/books", "📖", "Books"),
    ("/recommendations", "⭐", "Recommendations"),
    ("/reviews", "💬", "Reviews"),
];

/// Main navigation rail with the logout confirmation dialog.
#[component]
pub fn Sidebar(collapsed: RwSignal<bool>) -> impl IntoView {
    let session = expect_context::<Session>();
    let toasts = expect_context::<Toasts>();
    let location = use_location();
    let navigate = use_navigate();

    let logout_open = RwSignal::new(false);

    let on_logout = {
        let session = session.clone();
        let toasts = toasts.clone();
        move || {
            session.logout();
            toasts.success("Logged out successfully!");
            logout_open.set(false);
            navigate("/signin", Default::default());
        }
    };

    let links = NAV_ITEMS
        .iter()
        .map(|(path, icon, label)| {
            let pathname = location.pathname;
            let is_active = move || {
                let current = pathname.get();
                current == *path || (*path == "/dashboard" && current == "/")
            };
            view! {
                <a
                    href=*path
                    class=move || {
                        let state = if is_active() {
                            "bg-orange-500/90 text-white"
                        } else {
                            "text-slate-400 hover:text-white hover:bg-slate-800"
                        };
                        format!(
                            "flex items-center gap-3 px-4 py-2.5 rounded-lg text-sm transition-colors {state}"
                        )
                    }
                >
                    <span>{*icon}</span>
                    <Show when=move || !collapsed.get() fallback=|| ()>
                        <span>{*label}</span>
                    </Show>
                </a>
            }
        })
        .collect_view();

    view! {
        <aside class=move || {
            let width = if collapsed.get() { "w-16" } else { "w-64" };
            format!(
                "shrink-0 min-h-screen bg-slate-950 border-r border-slate-800 flex flex-col transition-all {width}"
            )
        }>
            <div class="flex items-center gap-3 px-4 py-5 border-b border-slate-800">
                <span class="text-2xl">"📚"</span>
                <Show when=move || !collapsed.get() fallback=|| ()>
                    <div class="leading-tight">
                        <p class="font-bold text-white">"Book Dashboard"</p>
                        <p class="text-xs text-slate-500">"Management System"</p>
                    </div>
                </Show>
            </div>

            <nav class="flex-1 px-2 py-4 space-y-1">
                <p class="px-4 pb-2 text-xs font-semibold text-slate-600 tracking-wider">
                    <Show when=move || !collapsed.get() fallback=|| ()>
                        "MAIN NAVIGATION"
                    </Show>
                </p>
                {links}
            </nav>

            <div class="px-2 py-4 border-t border-slate-800">
                <button
                    class="w-full flex items-center gap-3 px-4 py-2.5 rounded-lg text-sm text-red-400 hover:text-red-300 hover:bg-slate-800 transition-colors"
                    on:click=move |_| logout_open.set(true)
                >
                    <span>"⏻"</span>
                    <Show when=move || !collapsed.get() fallback=|| ()>
                        <span>"Logout"</span>
                    </Show>
                </button>
                <button
                    class="w-full mt-1 flex items-center gap-3 px-4 py-2.5 rounded-lg text-sm text-slate-500 hover:text-white hover:bg-slate-800 transition-colors"
                    on:click=move |_| collapsed.update(|value| *value = !*value)
                >
                    <span>{move || if collapsed.get() { "»" } else { "«" }}</span>
                    <Show when=move || !collapsed.get() fallback=|| ()>
                        <span>"Collapse"</span>
                    </Show>
                </button>
            </div>
        </aside>

        <ConfirmModal
            title=Signal::derive(|| "Confirm Logout".to_string())
            open=logout_open
            ok_text="Logout"
            danger=true
            on_ok=on_logout
        >
            <p class="text-slate-300">"Are you sure you want to log out?"</p>
        </ConfirmModal>
    }
}
