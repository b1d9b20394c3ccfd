use dioxus::prelude::*;
use shared_types::FeatureFlags;
use shared_ui::theme::{ThemeMode, ThemeSeed, ThemeState};

mod auth;
mod routes;
use auth::{AuthState, SessionLoader};
use routes::Route;

const THEME_BASE: Asset = asset!("/assets/theme-base.css");

fn main() {
    #[cfg(feature = "server")]
    dioxus::serve(|| async move {
        server::config::load_config();
        let otel = server::telemetry::init_telemetry();
        server::health::record_start_time();

        let mut router = dioxus::server::router(App)
            .route("/health", axum::routing::get(server::health::health_check))
            .layer(server::telemetry::http_trace_layer());

        if otel {
            router = router.layer(server::telemetry::OtelTraceLayer);
        }

        let router = router
            .layer(axum::middleware::from_fn(
                server::auth::middleware::session_middleware,
            ))
            .layer(tower_http::request_id::PropagateRequestIdLayer::x_request_id())
            .layer(tower_http::request_id::SetRequestIdLayer::x_request_id(
                tower_http::request_id::MakeRequestUuid,
            ));
        Ok(router)
    });

    #[cfg(not(feature = "server"))]
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // Fetch feature flags once and provide via context (defaults on error)
    let flags_resource =
        use_server_future(move || async move { server::api::get_feature_flags().await })?;

    let flags = flags_resource
        .read()
        .as_ref()
        .cloned()
        .unwrap_or(Ok(FeatureFlags::default()))
        .unwrap_or_default();

    use_context_provider(|| flags);
    use_context_provider(AuthState::new);
    use_context_provider(|| ThemeState::new(ThemeMode::default()));

    rsx! {
        document::Link { rel: "stylesheet", href: THEME_BASE }
        ThemeSeed {}
        SessionLoader {}
        SuspenseBoundary {
            fallback: |_| rsx! {
                div { class: "auth-guard-loading",
                    p { "Loading..." }
                }
            },
            Router::<Route> {}
        }
    }
}
