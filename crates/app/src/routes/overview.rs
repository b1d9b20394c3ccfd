use crate::auth::use_auth;
use crate::routes::route_for;
use dioxus::prelude::*;
use shared_types::visible_entries;
use shared_ui::{Badge, BadgeVariant, Card, CardContent, CardDescription, CardHeader, CardTitle, PageHeader};

/// Dashboard home: who is signed in and what they can open.
#[component]
pub fn Overview() -> Element {
    let auth = use_auth();
    let Some(principal) = auth.principal() else {
        return rsx! {};
    };

    let entries = visible_entries(principal.raw_role());
    let department = principal
        .department
        .clone()
        .filter(|d| !d.trim().is_empty())
        .unwrap_or_else(|| "No department".to_string());

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./pages.css") }

        PageHeader {
            title: format!("Welcome, {}", principal.display_name),
            subtitle: "Your workspace at a glance",
        }

        div { class: "page-grid",
            Card {
                CardHeader {
                    CardTitle { "Your access" }
                    CardDescription { "{department}" }
                }
                CardContent {
                    div { class: "detail-row",
                        span { class: "detail-label", "Role" }
                        Badge { variant: BadgeVariant::Primary, "{principal.role_label()}" }
                    }
                    div { class: "detail-row",
                        span { class: "detail-label", "Username" }
                        span { "{principal.company_username}" }
                    }
                }
            }

            Card {
                CardHeader {
                    CardTitle { "Sections" }
                    CardDescription { "Available with your role" }
                }
                CardContent {
                    ul { class: "section-list",
                        for entry in entries {
                            li { key: "{entry.route}",
                                Link { to: route_for(entry.route), "{entry.label}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
