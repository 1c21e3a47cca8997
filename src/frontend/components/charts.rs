use leptos::prelude::*;

/// Vertical bars, one per labelled value. Pure rendering of data the page
/// already fetched or derived.
#[component]
pub fn BarChart(data: Vec<(String, f64)>) -> impl IntoView {
    let max = data
        .iter()
        .map(|(_, value)| *value)
        .fold(f64::EPSILON, f64::max);

    view! {
        <div class="flex items-end gap-3 h-48">
            {data
                .into_iter()
                .map(|(label, value)| {
                    let height = (value / max * 100.0).clamp(2.0, 100.0);
                    view! {
                        <div class="flex-1 flex flex-col items-center gap-2 h-full justify-end">
                            <span class="text-xs text-slate-400">{format!("{value:.0}")}</span>
                            <div
                                class="w-full rounded-t-md bg-gradient-to-t from-orange-600 to-amber-400"
                                style:height=format!("{height}%")
                            ></div>
                            <span class="text-xs text-slate-500">{label}</span>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

/// A single polyline over labelled points, scaled to the data's range.
#[component]
pub fn LineChart(data: Vec<(String, f64)>, #[prop(optional)] max_value: f64) -> impl IntoView {
    let max = if max_value > 0.0 {
        max_value
    } else {
        data.iter()
            .map(|(_, value)| *value)
            .fold(f64::EPSILON, f64::max)
    };

    let step = if data.len() > 1 {
        100.0 / (data.len() - 1) as f64
    } else {
        100.0
    };
    let points = data
        .iter()
        .enumerate()
        .map(|(i, (_, value))| {
            let x = i as f64 * step;
            let y = 100.0 - (value / max * 90.0);
            format!("{x:.1},{y:.1}")
        })
        .collect::<Vec<_>>()
        .join(" ");

    let labels = data
        .into_iter()
        .map(|(label, _)| view! { <span class="text-xs text-slate-500">{label}</span> })
        .collect_view();

    view! {
        <div>
            <svg viewBox="0 0 100 100" preserveAspectRatio="none" class="w-full h-40">
                <polyline
                    points=points
                    fill="none"
                    stroke="#f59e0b"
                    stroke-width="2"
                    vector-effect="non-scaling-stroke"
                ></polyline>
            </svg>
            <div class="flex justify-between mt-2">{labels}</div>
        </div>
    }
}

/// Horizontal five-row breakdown of review ratings, derived from fetched
/// reviews. Index 0 holds one-star counts.
#[component]
pub fn RatingDistribution(counts: [usize; 5]) -> impl IntoView {
    let total: usize = counts.iter().sum();

    view! {
        <div class="space-y-2">
            {(0..5usize)
                .rev()
                .map(|index| {
                    let count = counts[index];
                    let percent = if total > 0 {
                        count as f64 / total as f64 * 100.0
                    } else {
                        0.0
                    };
                    view! {
                        <div class="flex items-center gap-3">
                            <span class="w-14 text-xs text-slate-400">
                                {format!("{} star{}", index + 1, if index == 0 { "" } else { "s" })}
                            </span>
                            <div class="flex-1 h-3 bg-slate-800 rounded-full overflow-hidden">
                                <div
                                    class="h-full bg-gradient-to-r from-orange-500 to-amber-400"
                                    style:width=format!("{percent:.0}%")
                                ></div>
                            </div>
                            <span class="w-8 text-right text-xs text-slate-400">{count}</span>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
