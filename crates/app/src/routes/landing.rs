use crate::auth::use_auth;
use crate::routes::{route_for, Route};
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdZap;
use dioxus_free_icons::Icon;
use shared_types::DEFAULT_AUTHORIZED_PATH;

/// Public landing page.
#[component]
pub fn Landing() -> Element {
    let auth = use_auth();
    let signed_in = auth.is_authenticated();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./login.css") }

        div { class: "landing",
            div { class: "landing-hero",
                div { class: "landing-mark",
                    Icon::<LdZap> { icon: LdZap, width: 28, height: 28 }
                }
                h1 { class: "landing-title", "Discovery Agent" }
                p { class: "landing-tagline",
                    "Activity logs, screenshots and insights for your organization, scoped to your role."
                }
                if signed_in {
                    Link { class: "landing-cta", to: route_for(DEFAULT_AUTHORIZED_PATH),
                        "Open dashboard"
                    }
                } else {
                    Link { class: "landing-cta", to: Route::Login {}, "Sign in" }
                }
            }
        }
    }
}
