use leptos::prelude::*;

use crate::models::Book;

#[derive(Clone, Copy)]
enum ActivityKind {
    Added,
    Updated,
    Reviewed,
    Recommended,
}

impl ActivityKind {
    fn for_index(index: usize) -> Self {
        match index % 4 {
            0 => ActivityKind::Added,
            1 => ActivityKind::Updated,
            2 => ActivityKind::Reviewed,
            _ => ActivityKind::Recommended,
        }
    }

    fn label(self) -> &'static str {
        match self {
            ActivityKind::Added => "Added",
            ActivityKind::Updated => "Updated",
            ActivityKind::Reviewed => "Reviewed",
            ActivityKind::Recommended => "Recommended",
        }
    }

    fn tag_classes(self) -> &'static str {
        match self {
            ActivityKind::Added => "bg-emerald-500/10 text-emerald-400 border-emerald-500/30",
            ActivityKind::Updated => "bg-blue-500/10 text-blue-400 border-blue-500/30",
            ActivityKind::Reviewed => "bg-amber-500/10 text-amber-400 border-amber-500/30",
            ActivityKind::Recommended => "bg-purple-500/10 text-purple-400 border-purple-500/30",
        }
    }
}

fn truncated(description: &str) -> String {
    let description = if description.is_empty() {
        "No description available"
    } else {
        description
    };
    let mut text: String = description.chars().take(100).collect();
    if description.chars().count() > 100 {
        text.push('…');
    }
    text
}

/// Recent-activity feed derived from the latest catalog entries.
#[component]
pub fn BooksHistory(books: Vec<Book>) -> impl IntoView {
    let rows = books
        .into_iter()
        .take(8)
        .enumerate()
        .map(|(index, book)| {
            let kind = ActivityKind::for_index(index);
            view! {
                <li class="py-3 border-b border-slate-800 last:border-b-0">
                    <div class="flex items-center justify-between gap-3">
                        <span class="font-medium text-white truncate">{book.title.clone()}</span>
                        <span class=format!(
                            "px-2 py-0.5 text-xs rounded-full border {}",
                            kind.tag_classes(),
                        )>{kind.label()}</span>
                    </div>
                    <p class="text-xs text-slate-400 mt-1">
                        {format!("by {}", book.display_author())}
                    </p>
                    <p class="text-xs text-slate-500 mt-1">{truncated(&book.description)}</p>
                </li>
            }
        })
        .collect_view();

    view! {
        <div class="bg-slate-900/80 border border-slate-800 rounded-2xl p-6">
            <h3 class="text-lg font-semibold text-white mb-4">"Recent Activity"</h3>
            <ul>{rows}</ul>
        </div>
    }
}
