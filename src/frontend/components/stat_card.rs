use leptos::prelude::*;

/// One headline figure on the dashboard, with a trend annotation.
#[component]
pub fn StatCard(
    #[prop(into)] title: String,
    #[prop(into)] value: Signal<String>,
    icon: &'static str,
    #[prop(optional, into)] suffix: String,
    #[prop(optional)] trend_percent: f32,
) -> impl IntoView {
    let trend_up = trend_percent >= 0.0;

    view! {
        <div class="bg-slate-900/80 border border-slate-800 rounded-2xl p-6 hover:border-slate-700 transition-colors">
            <div class="flex items-start gap-4">
                <span class="text-3xl">{icon}</span>
                <div class="flex-1">
                    <p class="text-sm text-slate-400">{title}</p>
                    <p class="text-2xl font-bold text-white">
                        {move || value.get()}
                        <span class="text-sm font-normal text-slate-400">{suffix.clone()}</span>
                    </p>
                    <p class="mt-1 text-xs flex items-center gap-1">
                        <span class=if trend_up { "text-emerald-400" } else { "text-red-400" }>
                            {if trend_up { "▲" } else { "▼" }}
                            {format!(" {:.1}%", trend_percent.abs())}
                        </span>
                        <span class="text-slate-500">"vs last month"</span>
                    </p>
                </div>
            </div>
        </div>
    }
}
