use leptos::prelude::*;

#[component]
pub fn TextInput(
    #[prop(into)] label: String,
    #[prop(into)] name: String,
    #[prop(into)] placeholder: String,
    #[prop(optional, into)] input_type: String,
    #[prop(optional)] required: bool,
    #[prop(optional, into)] disabled: Signal<bool>,
    #[prop(optional, into)] hint: String,
    value: ReadSignal<String>,
    set_value: WriteSignal<String>,
) -> impl IntoView {
    let has_hint = !hint.is_empty();
    let input_type = if input_type.is_empty() {
        "text".to_string()
    } else {
        input_type
    };

    view! {
        <div>
            <label for=name.clone() class="block text-sm font-medium text-slate-300 mb-2">
                {label}
            </label>
            <input
                type=input_type
                id=name.clone()
                name=name
                placeholder=placeholder
                required=required
                disabled=move || disabled.get()
                prop:value=move || value.get()
                on:input=move |ev| set_value.set(event_target_value(&ev))
                class="w-full px-4 py-3 rounded-lg bg-slate-800 border border-slate-700
                       text-white placeholder-slate-500
                       focus:outline-none focus:ring-2 focus:ring-orange-500 focus:border-transparent
                       disabled:opacity-50 disabled:cursor-not-allowed
                       transition-all"
            />
            {has_hint.then(|| view! { <p class="mt-1 text-xs text-slate-500">{hint.clone()}</p> })}
        </div>
    }
}

#[component]
pub fn PasswordInput(
    #[prop(into)] label: String,
    #[prop(optional, into)] name: String,
    #[prop(optional, into)] disabled: Signal<bool>,
    #[prop(optional, into)] hint: String,
    value: ReadSignal<String>,
    set_value: WriteSignal<String>,
) -> impl IntoView {
    let name = if name.is_empty() {
        "password".to_string()
    } else {
        name
    };

    view! {
        <TextInput
            label=label
            name=name
            placeholder="••••••••"
            input_type="password"
            required=true
            disabled=disabled
            hint=hint
            value=value
            set_value=set_value
        />
    }
}

#[component]
pub fn TextArea(
    #[prop(into)] label: String,
    #[prop(into)] name: String,
    #[prop(into)] placeholder: String,
    #[prop(optional)] rows: u32,
    #[prop(optional)] max_length: usize,
    value: ReadSignal<String>,
    set_value: WriteSignal<String>,
) -> impl IntoView {
    let rows = if rows == 0 { 4 } else { rows };
    let show_count = max_length > 0;

    view! {
        <div>
            <label for=name.clone() class="block text-sm font-medium text-slate-300 mb-2">
                {label}
            </label>
            <textarea
                id=name.clone()
                name=name
                placeholder=placeholder
                rows=rows
                prop:value=move || value.get()
                on:input=move |ev| set_value.set(event_target_value(&ev))
                class="w-full px-4 py-3 rounded-lg bg-slate-800 border border-slate-700
                       text-white placeholder-slate-500 resize-y
                       focus:outline-none focus:ring-2 focus:ring-orange-500 focus:border-transparent
                       transition-all"
            ></textarea>
            {show_count.then(|| view! {
                <p class="mt-1 text-xs text-slate-500 text-right">
                    {move || format!("{} / {}", value.get().chars().count(), max_length)}
                </p>
            })}
        </div>
    }
}
