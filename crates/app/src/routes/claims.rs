use dioxus::prelude::*;
use shared_ui::{Badge, BadgeVariant, Card, CardContent, CardDescription, CardHeader, CardTitle, PageHeader};

#[component]
pub fn Claims() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./pages.css") }

        PageHeader {
            title: "Claims",
            subtitle: "Claims workspace (coming soon)",
            Badge { variant: BadgeVariant::Outline, "Preview" }
        }

        Card {
            CardHeader {
                CardTitle { "Claims dashboard is under construction" }
                CardDescription {
                    "This section is reserved for future claims analytics and management."
                }
            }
            CardContent {
                p { class: "muted",
                    "You can continue using the Overview, Users, and Insights tabs while we wire this up."
                }
            }
        }
    }
}
