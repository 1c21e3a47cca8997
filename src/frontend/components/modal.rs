use leptos::prelude::*;

use super::{Button, ButtonVariant};

/// Overlay dialog. Stays mounted (hidden) so form state survives reopening;
/// the footer lives in `children` so each page wires its own actions.
#[component]
pub fn Modal(
    #[prop(into)] title: Signal<String>,
    #[prop(into)] open: Signal<bool>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class="fixed inset-0 z-40 flex items-center justify-center bg-black/60 p-4"
            class:hidden=move || !open.get()
        >
            <div class="w-full max-w-xl bg-slate-900 border border-slate-800 rounded-2xl shadow-xl max-h-[90vh] overflow-y-auto">
                <div class="px-6 py-4 border-b border-slate-800">
                    <h3 class="text-lg font-semibold text-white">{move || title.get()}</h3>
                </div>
                <div class="p-6">{children()}</div>
            </div>
        </div>
    }
}

/// Confirmation dialog: the destructive call fires only from its OK button,
/// cancelling just closes.
#[component]
pub fn ConfirmModal<F>(
    #[prop(into)] title: Signal<String>,
    open: RwSignal<bool>,
    #[prop(into)] ok_text: String,
    #[prop(optional)] danger: bool,
    on_ok: F,
    children: Children,
) -> impl IntoView
where
    F: Fn() + 'static + Send,
{
    let ok_variant = if danger {
        ButtonVariant::Danger
    } else {
        ButtonVariant::Primary
    };

    view! {
        <Modal title=title open=open>
            {children()}
            <div class="mt-6 flex justify-end gap-3">
                <Button variant=ButtonVariant::Ghost on:click=move |_| open.set(false)>
                    "Cancel"
                </Button>
                <Button variant=ok_variant on:click=move |_| on_ok()>
                    {ok_text}
                </Button>
            </div>
        </Modal>
    }
}
