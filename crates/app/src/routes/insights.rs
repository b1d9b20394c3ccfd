use crate::routes::Route;
use dioxus::prelude::*;
use shared_ui::{Card, CardContent, CardDescription, CardHeader, CardTitle, PageHeader};

/// Activity insights, optionally scoped to one user via `?user=`.
#[component]
pub fn Insights(user: Option<String>) -> Element {
    let scope = user
        .as_deref()
        .map(str::trim)
        .filter(|u| !u.is_empty())
        .map(str::to_string);

    let subtitle = match &scope {
        Some(u) => format!("Scoped to {u}"),
        None => "Across everyone you manage".to_string(),
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./pages.css") }

        PageHeader { title: "Insights", subtitle: subtitle,
            if let Some(u) = scope.clone() {
                Link {
                    class: "page-link",
                    to: Route::UserDetail { company_username: u },
                    "Back to user"
                }
            }
        }

        div { class: "page-grid",
            Card {
                CardHeader {
                    CardTitle { "Activity summary" }
                    CardDescription { "Captured sessions and applications" }
                }
                CardContent {
                    p { class: "muted", "No activity has been captured for this scope yet." }
                }
            }
            Card {
                CardHeader {
                    CardTitle { "Focus time" }
                    CardDescription { "Time spent in primary work tools" }
                }
                CardContent {
                    p { class: "muted", "Insights appear once the agent reports its first session." }
                }
            }
        }
    }
}
