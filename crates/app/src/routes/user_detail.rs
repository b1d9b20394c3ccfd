use crate::routes::Route;
use dioxus::prelude::*;
use server::api::get_directory_member;
use shared_types::AppError;
use shared_ui::{
    Badge, BadgeVariant, Card, CardContent, CardDescription, CardHeader, CardTitle, PageHeader,
    TabContent, TabList, TabTrigger, Tabs,
};

/// One user's logs, screenshots and insights.
#[component]
pub fn UserDetail(company_username: String) -> Element {
    let member = use_resource(use_reactive!(|(company_username,)| async move {
        get_directory_member(company_username).await
    }));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./pages.css") }

        match &*member.read() {
            Some(Ok(person)) => rsx! {
                PageHeader {
                    title: person.display_name.clone(),
                    subtitle: person.caption(),
                    Badge { variant: BadgeVariant::Outline, "@{person.company_username}" }
                    Link { class: "page-link", to: Route::Users {}, "All users" }
                }

                Tabs { default_value: "logs", horizontal: true,
                    TabList {
                        TabTrigger { value: "logs", index: 0usize, "Logs" }
                        TabTrigger { value: "screenshots", index: 1usize, "Screenshots" }
                        TabTrigger { value: "insights", index: 2usize, "Insights" }
                    }
                    TabContent { value: "logs", index: 0usize,
                        Card {
                            CardHeader {
                                CardTitle { "Activity logs" }
                                CardDescription { "Applications and windows in focus" }
                            }
                            CardContent {
                                p { class: "muted", "No logs captured for {person.display_name} yet." }
                            }
                        }
                    }
                    TabContent { value: "screenshots", index: 1usize,
                        Card {
                            CardHeader {
                                CardTitle { "Screenshots" }
                                CardDescription { "Periodic captures from the agent" }
                            }
                            CardContent {
                                p { class: "muted", "No screenshots captured yet." }
                            }
                        }
                    }
                    TabContent { value: "insights", index: 2usize,
                        Card {
                            CardHeader {
                                CardTitle { "Insights" }
                                CardDescription { "Summaries built from logs and screenshots" }
                            }
                            CardContent {
                                Link {
                                    class: "page-link",
                                    to: Route::Insights { user: Some(person.company_username.clone()) },
                                    "Open insights for {person.display_name}"
                                }
                            }
                        }
                    }
                }
            },
            Some(Err(e)) => rsx! {
                PageHeader { title: "User", subtitle: company_username.clone() }
                div { class: "page-error", {AppError::friendly_message(&e.to_string())} }
                Link { class: "page-link", to: Route::Users {}, "Back to users" }
            },
            None => rsx! {
                p { class: "muted", "Loading user..." }
            },
        }
    }
}
