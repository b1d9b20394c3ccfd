use crate::routes::Route;
use dioxus::prelude::*;
use server::api::list_directory;
use shared_types::{AppError, Principal, Role};
use shared_ui::{Badge, BadgeVariant, Card, CardContent, PageHeader};

/// Badge style for a principal's role.
fn role_badge_variant(principal: &Principal) -> BadgeVariant {
    match principal.known_role() {
        Some(Role::CSuite) => BadgeVariant::Primary,
        Some(Role::DepartmentHead) => BadgeVariant::Secondary,
        Some(Role::Staff) => BadgeVariant::Success,
        None => BadgeVariant::Outline,
    }
}

/// Directory of everyone in the organization.
#[component]
pub fn Users() -> Element {
    let users = use_resource(move || async move { list_directory().await });

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./pages.css") }

        PageHeader { title: "Users", subtitle: "Everyone in your organization" }

        Card {
            CardContent {
                match &*users.read() {
                    Some(Ok(list)) if list.is_empty() => rsx! {
                        p { class: "muted", "No users found." }
                    },
                    Some(Ok(list)) => rsx! {
                        table { class: "data-table",
                            thead {
                                tr {
                                    th { "Name" }
                                    th { "Username" }
                                    th { "Department" }
                                    th { "Role" }
                                }
                            }
                            tbody {
                                for person in list.iter() {
                                    tr { key: "{person.id}",
                                        td {
                                            Link {
                                                to: Route::UserDetail {
                                                    company_username: person.company_username.clone(),
                                                },
                                                "{person.display_name}"
                                            }
                                        }
                                        td { "{person.company_username}" }
                                        td { {person.department.clone().unwrap_or_default()} }
                                        td {
                                            Badge { variant: role_badge_variant(person),
                                                "{person.role_label()}"
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    },
                    Some(Err(e)) => rsx! {
                        div { class: "page-error", {AppError::friendly_message(&e.to_string())} }
                    },
                    None => rsx! {
                        p { class: "muted", "Loading users..." }
                    },
                }
            }
        }
    }
}
