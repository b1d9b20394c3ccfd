use dioxus::prelude::*;

/// Page heading with an optional subtitle and trailing actions.
#[component]
pub fn PageHeader(
    title: String,
    subtitle: Option<String>,
    children: Element,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "page-header",
            div { class: "page-header-text",
                h1 { class: "page-title", "{title}" }
                if let Some(sub) = subtitle {
                    p { class: "page-subtitle", "{sub}" }
                }
            }
            div { class: "page-actions", {children} }
        }
    }
}
