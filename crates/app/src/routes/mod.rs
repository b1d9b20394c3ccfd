pub mod claims;
pub mod insights;
pub mod landing;
pub mod login;
pub mod overview;
pub mod profile;
pub mod settings;
pub mod user_detail;
pub mod users;

use crate::auth::{use_auth, use_sign_out};
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdLayoutDashboard, LdLogOut, LdReceipt, LdSettings, LdUsers, LdZap,
};
use dioxus_free_icons::Icon;
use shared_types::{
    allowed_roles_for, evaluate_guard, visible_entries, FeatureFlags, GuardDecision, GuardTargets,
    NavIcon, DEFAULT_AUTHORIZED_PATH,
};
use shared_ui::theme::{use_theme, ThemeMode};
use shared_ui::{
    Button, ButtonVariant, Sidebar, SidebarContent, SidebarFooter, SidebarHeader, SidebarInset,
    SidebarMenu, SidebarMenuButton, SidebarMenuItem, SidebarProvider, SidebarSeparator,
    SidebarTrigger, Switch,
};

use claims::Claims;
use insights::Insights;
use landing::Landing;
use login::Login;
use overview::Overview;
use profile::Profile;
use settings::Settings;
use user_detail::UserDetail;
use users::Users;

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    Landing {},
    #[route("/login")]
    Login {},
    #[route("/dashboard")]
    DashboardIndex {},
    #[layout(AuthGuard)]
    #[layout(DashboardLayout)]
    #[route("/dashboard/overview")]
    Overview {},
    #[route("/dashboard/claims")]
    Claims {},
    #[route("/dashboard/insights?:user")]
    Insights { user: Option<String> },
    #[route("/dashboard/users")]
    Users {},
    #[route("/dashboard/users/:company_username")]
    UserDetail { company_username: String },
    #[route("/dashboard/profile")]
    Profile {},
    #[route("/dashboard/settings")]
    Settings {},
    #[end_layout]
    #[end_layout]
    #[route("/:..segments")]
    Unknown { segments: Vec<String> },
}

/// Resolve a path from the shared route table to a `Route`. Unparseable
/// paths land on the public landing page.
pub fn route_for(path: &str) -> Route {
    path.parse::<Route>().unwrap_or(Route::Landing {})
}

/// Navigate once the component mounts.
#[component]
pub(crate) fn RedirectTo(to: Route, #[props(default = true)] replace: bool) -> Element {
    let nav = navigator();
    use_effect(move || {
        if replace {
            nav.replace(to.clone());
        } else {
            nav.push(to.clone());
        }
    });
    rsx! {}
}

/// `/dashboard` has no page of its own.
#[component]
fn DashboardIndex() -> Element {
    rsx! { RedirectTo { to: route_for(DEFAULT_AUTHORIZED_PATH) } }
}

/// Any other path goes back to the landing page.
#[component]
fn Unknown(segments: Vec<String>) -> Element {
    tracing::debug!(path = %segments.join("/"), "unknown route");
    rsx! { RedirectTo { to: Route::Landing {} } }
}

/// Role-aware checkpoint in front of every dashboard route.
///
/// Re-evaluated on every render from the current session and the route's
/// allow list. Renders nothing while the session check is in flight.
#[component]
fn AuthGuard() -> Element {
    let auth = use_auth();
    let route: Route = use_route();
    let path = route.to_string();
    let principal = auth.principal();

    let decision = evaluate_guard(
        auth.is_loading(),
        principal.as_ref(),
        allowed_roles_for(&path),
        &GuardTargets::default(),
    );

    match decision {
        GuardDecision::Render => rsx! { Outlet::<Route> {} },
        GuardDecision::RenderNothing => rsx! {},
        GuardDecision::Redirect { to, replace } => {
            tracing::debug!(from = %path, %to, "guard redirect");
            rsx! { RedirectTo { to: route_for(to), replace } }
        }
    }
}

fn nav_icon(icon: NavIcon) -> Element {
    match icon {
        NavIcon::Overview => rsx! {
            Icon::<LdLayoutDashboard> { icon: LdLayoutDashboard, width: 18, height: 18 }
        },
        NavIcon::Claims => rsx! {
            Icon::<LdReceipt> { icon: LdReceipt, width: 18, height: 18 }
        },
        NavIcon::Users => rsx! {
            Icon::<LdUsers> { icon: LdUsers, width: 18, height: 18 }
        },
        NavIcon::Settings => rsx! {
            Icon::<LdSettings> { icon: LdSettings, width: 18, height: 18 }
        },
    }
}

fn page_title(route: &Route) -> &'static str {
    match route {
        Route::Overview {} => "Overview",
        Route::Claims {} => "Claims",
        Route::Insights { .. } => "Insights",
        Route::Users {} | Route::UserDetail { .. } => "Users",
        Route::Profile {} => "Profile",
        Route::Settings {} => "Settings",
        _ => "",
    }
}

/// Dashboard shell: sidebar with role-filtered navigation plus top bar.
#[component]
fn DashboardLayout() -> Element {
    let route: Route = use_route();
    let flags: FeatureFlags = use_context();
    let auth = use_auth();
    let mut theme = use_theme();
    let sign_out = use_sign_out();

    let principal = auth.principal();
    let caption = principal
        .as_ref()
        .map(|p| p.caption())
        .unwrap_or_default();
    let initials = principal
        .as_ref()
        .map(|p| p.initials())
        .unwrap_or_default();
    let entries = visible_entries(principal.as_ref().and_then(|p| p.raw_role()));
    let current_path = route.to_string();
    let title = page_title(&route);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./layout.css") }

        SidebarProvider { default_open: false,
            Sidebar {
                SidebarHeader {
                    div { class: "sidebar-brand-mark",
                        Icon::<LdZap> { icon: LdZap, width: 20, height: 20 }
                    }
                    div { class: "sidebar-brand",
                        span { class: "sidebar-brand-name", "Discovery Agent" }
                        span { class: "sidebar-caption", "{caption}" }
                    }
                    div { class: "sidebar-spacer" }
                    if flags.sidebar_status {
                        span { class: "status-dot", title: "Status: Active" }
                    }
                }

                SidebarSeparator {}

                SidebarContent {
                    SidebarMenu {
                        for entry in entries {
                            SidebarMenuItem { key: "{entry.route}",
                                Link { to: route_for(entry.route),
                                    SidebarMenuButton { active: entry.is_active(&current_path),
                                        {nav_icon(entry.icon)}
                                        "{entry.label}"
                                    }
                                }
                            }
                        }
                    }
                }

                SidebarSeparator {}

                SidebarFooter {
                    Switch {
                        label: "Light mode",
                        checked: theme.mode() == ThemeMode::Light,
                        on_change: move |_: bool| theme.toggle(),
                    }
                    Button { variant: ButtonVariant::Ghost, onclick: sign_out,
                        Icon::<LdLogOut> { icon: LdLogOut, width: 16, height: 16 }
                        "Sign out"
                    }
                    if flags.sidebar_status {
                        span { class: "sidebar-footnote", "v1.0 \u{2022} Theme \u{2022} RBAC" }
                    }
                }
            }

            SidebarInset {
                header { class: "topbar",
                    SidebarTrigger {
                        span { class: "topbar-trigger-icon", "\u{2630}" }
                    }
                    span { class: "topbar-title", "{title}" }
                    div { class: "topbar-spacer" }
                    Link { to: Route::Profile {}, class: "topbar-avatar", "{initials}" }
                }

                div { class: "page-content",
                    Outlet::<Route> {}
                }
            }
        }
    }
}
