use leptos::prelude::*;

struct Project {
    title: &'static str,
    description: &'static str,
    progress: u8,
    status: &'static str,
    assignee: &'static str,
    priority: &'static str,
}

const PROJECTS: [Project; 4] = [
    Project {
        title: "Fiction Collection Expansion",
        description: "Adding new contemporary fiction books to our collection",
        progress: 75,
        status: "In Progress",
        assignee: "John Doe",
        priority: "High",
    },
    Project {
        title: "Review System Enhancement",
        description: "Improving the book review and rating system",
        progress: 45,
        status: "In Progress",
        assignee: "Jane Smith",
        priority: "Medium",
    },
    Project {
        title: "Recommendation Algorithm",
        description: "Developing AI-powered book recommendation system",
        progress: 90,
        status: "Almost Done",
        assignee: "Mike Johnson",
        priority: "High",
    },
    Project {
        title: "Mobile App Integration",
        description: "Creating mobile app for book management",
        progress: 20,
        status: "Planning",
        assignee: "Sarah Wilson",
        priority: "Low",
    },
];

fn priority_classes(priority: &str) -> &'static str {
    match priority {
        "High" => "bg-red-500/10 text-red-400 border-red-500/30",
        "Medium" => "bg-amber-500/10 text-amber-400 border-amber-500/30",
        _ => "bg-emerald-500/10 text-emerald-400 border-emerald-500/30",
    }
}

/// Curated project list shown on the dashboard. Static content; nothing in
/// the backends describes staff projects.
#[component]
pub fn ProjectsSection() -> impl IntoView {
    let rows = PROJECTS
        .iter()
        .map(|project| {
            view! {
                <li class="py-4 border-b border-slate-800 last:border-b-0">
                    <div class="flex items-center justify-between gap-3">
                        <span class="font-medium text-white">{project.title}</span>
                        <span class=format!(
                            "px-2 py-0.5 text-xs rounded-full border {}",
                            priority_classes(project.priority),
                        )>{project.priority}</span>
                    </div>
                    <p class="text-xs text-slate-400 mt-1">{project.description}</p>
                    <div class="mt-3 flex items-center gap-3">
                        <div class="flex-1 h-2 bg-slate-800 rounded-full overflow-hidden">
                            <div
                                class="h-full bg-gradient-to-r from-orange-500 to-amber-400"
                                style:width=format!("{}%", project.progress)
                            ></div>
                        </div>
                        <span class="text-xs text-slate-400">{format!("{}%", project.progress)}</span>
                    </div>
                    <p class="text-xs text-slate-500 mt-2">
                        {format!("{} · {}", project.status, project.assignee)}
                    </p>
                </li>
            }
        })
        .collect_view();

    view! {
        <div class="bg-slate-900/80 border border-slate-800 rounded-2xl p-6">
            <h3 class="text-lg font-semibold text-white mb-2">"Active Projects"</h3>
            <ul>{rows}</ul>
        </div>
    }
}
