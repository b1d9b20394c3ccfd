use dioxus::prelude::*;

use crate::components::with_class;

/// Frosted panel used for page content blocks.
#[component]
pub fn Card(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let attrs = with_class("card", attributes);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { ..attrs, {children} }
    }
}

#[component]
pub fn CardHeader(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let attrs = with_class("card-header", attributes);
    rsx! {
        div { ..attrs, {children} }
    }
}

#[component]
pub fn CardTitle(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let attrs = with_class("card-title", attributes);
    rsx! {
        h3 { ..attrs, {children} }
    }
}

/// Muted secondary text under a card title.
#[component]
pub fn CardDescription(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let attrs = with_class("card-description", attributes);
    rsx! {
        p { ..attrs, {children} }
    }
}

#[component]
pub fn CardContent(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let attrs = with_class("card-content", attributes);
    rsx! {
        div { ..attrs, {children} }
    }
}

#[component]
pub fn CardFooter(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let attrs = with_class("card-footer", attributes);
    rsx! {
        div { ..attrs, {children} }
    }
}
