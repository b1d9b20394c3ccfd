use crate::auth::use_sign_out;
use dioxus::prelude::*;
use shared_ui::theme::{use_theme, ThemeMode};
use shared_ui::{
    Button, ButtonVariant, Card, CardContent, CardDescription, CardHeader, CardTitle, PageHeader,
    Switch,
};

#[component]
pub fn Settings() -> Element {
    let mut theme = use_theme();
    let mode = theme.mode();

    let sign_out = use_sign_out();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./pages.css") }

        PageHeader { title: "Settings", subtitle: "Appearance and account" }

        div { class: "page-grid",
            Card {
                CardHeader {
                    CardTitle { "Appearance" }
                    CardDescription { "Current theme: {mode.display_name()}" }
                }
                CardContent {
                    Switch {
                        label: "Dark mode",
                        checked: mode.is_dark(),
                        on_change: move |dark: bool| {
                            theme.set_mode(if dark { ThemeMode::Dark } else { ThemeMode::Light });
                        },
                    }
                }
            }

            Card {
                CardHeader {
                    CardTitle { "Account" }
                    CardDescription { "End your session on this device" }
                }
                CardContent {
                    Button { variant: ButtonVariant::Outline, onclick: sign_out, "Sign out" }
                }
            }
        }
    }
}
