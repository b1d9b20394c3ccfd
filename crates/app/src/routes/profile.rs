use crate::auth::use_auth;
use dioxus::prelude::*;
use shared_ui::{Badge, BadgeVariant, Card, CardContent, CardHeader, CardTitle, PageHeader};

#[component]
pub fn Profile() -> Element {
    let auth = use_auth();
    let Some(principal) = auth.principal() else {
        return rsx! {};
    };

    let role_name = principal
        .known_role()
        .map(|r| r.display_name().to_string())
        .unwrap_or_else(|| principal.role_label());
    let department = principal.department.clone().unwrap_or_default();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./pages.css") }

        PageHeader { title: "Profile", subtitle: "Your account details" }

        Card {
            CardHeader {
                div { class: "profile-heading",
                    span { class: "profile-avatar", "{principal.initials()}" }
                    CardTitle { "{principal.display_name}" }
                }
            }
            CardContent {
                div { class: "detail-row",
                    span { class: "detail-label", "Email" }
                    span { "{principal.email}" }
                }
                div { class: "detail-row",
                    span { class: "detail-label", "Username" }
                    span { "{principal.company_username}" }
                }
                div { class: "detail-row",
                    span { class: "detail-label", "Department" }
                    span { "{department}" }
                }
                div { class: "detail-row",
                    span { class: "detail-label", "Role" }
                    Badge { variant: BadgeVariant::Primary, "{role_name}" }
                }
            }
        }
    }
}
