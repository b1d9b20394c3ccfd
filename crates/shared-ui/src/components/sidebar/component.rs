use dioxus::prelude::*;

use crate::components::with_class;

// ─── Context ───────────────────────────────────────────────────────────

/// Whether the sidebar drawer is open. On wide viewports the sidebar is
/// always shown and this only matters for the mobile drawer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SidebarState {
    pub open: bool,
}

/// Provides sidebar state to its children.
#[component]
pub fn SidebarProvider(#[props(default = false)] default_open: bool, children: Element) -> Element {
    let state = use_signal(|| SidebarState { open: default_open });
    use_context_provider(|| state);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            class: "sidebar-provider",
            "data-sidebar-open": if state().open { "true" } else { "false" },
            {children}
        }
    }
}

fn use_sidebar() -> Signal<SidebarState> {
    use_context::<Signal<SidebarState>>()
}

// ─── Layout ────────────────────────────────────────────────────────────

/// Sidebar container. Shows a backdrop on mobile while the drawer is open.
#[component]
pub fn Sidebar(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let mut state = use_sidebar();
    let is_open = state().open;

    let mut attrs = with_class("sidebar", attributes);
    attrs.push(Attribute::new(
        "data-state",
        if is_open { "open" } else { "closed" },
        None,
        false,
    ));

    rsx! {
        if is_open {
            div {
                class: "sidebar-backdrop",
                onclick: move |_| state.set(SidebarState { open: false }),
            }
        }
        aside {
            ..attrs,
            {children}
        }
    }
}

#[component]
pub fn SidebarHeader(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let attrs = with_class("sidebar-header", attributes);
    rsx! {
        div { ..attrs, {children} }
    }
}

#[component]
pub fn SidebarContent(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let attrs = with_class("sidebar-content", attributes);
    rsx! {
        div { ..attrs, {children} }
    }
}

#[component]
pub fn SidebarFooter(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let attrs = with_class("sidebar-footer", attributes);
    rsx! {
        div { ..attrs, {children} }
    }
}

// ─── Menu ──────────────────────────────────────────────────────────────

/// Navigation list.
#[component]
pub fn SidebarMenu(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let attrs = with_class("sidebar-menu", attributes);
    rsx! {
        ul { ..attrs, {children} }
    }
}

#[component]
pub fn SidebarMenuItem(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let attrs = with_class("sidebar-menu-item", attributes);
    rsx! {
        li { ..attrs, {children} }
    }
}

/// Menu row. Closes the mobile drawer when clicked so the page is visible
/// after navigating.
#[component]
pub fn SidebarMenuButton(
    #[props(default = false)] active: bool,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let mut state = use_sidebar();

    let mut attrs = with_class("sidebar-menu-button", attributes);
    attrs.push(Attribute::new(
        "data-active",
        if active { "true" } else { "false" },
        None,
        false,
    ));

    rsx! {
        button {
            r#type: "button",
            onclick: move |_| state.set(SidebarState { open: false }),
            ..attrs,
            {children}
        }
    }
}

// ─── Utility ───────────────────────────────────────────────────────────

/// Opens and closes the mobile drawer.
#[component]
pub fn SidebarTrigger(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let mut state = use_sidebar();
    let attrs = with_class("sidebar-trigger", attributes);

    rsx! {
        button {
            r#type: "button",
            "aria-label": "Toggle navigation",
            onclick: move |_| {
                let open = state().open;
                state.set(SidebarState { open: !open });
            },
            ..attrs,
            {children}
        }
    }
}

#[component]
pub fn SidebarSeparator() -> Element {
    rsx! {
        hr { class: "sidebar-separator" }
    }
}

/// Main content area beside the sidebar.
#[component]
pub fn SidebarInset(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let attrs = with_class("sidebar-inset", attributes);
    rsx! {
        main { ..attrs, {children} }
    }
}
