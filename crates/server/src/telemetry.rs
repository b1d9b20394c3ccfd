use axum::{body::Body, http::Request, response::Response};
use opentelemetry::{
    global,
    trace::{SpanKind, TraceContextExt, Tracer},
    Context, KeyValue,
};
use opentelemetry_otlp::{WithExportConfig, WithTonicConfig};
use shared_types::{normalize_role, NO_ROLE};
use std::{
    future::Future,
    pin::Pin,
    sync::OnceLock,
    task::{Context as TaskContext, Poll},
};
use tower::{Layer, Service};
use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::trace::{MakeSpan, TraceLayer};

use crate::auth::jwt::SessionClaims;

const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
const SERVICE_NAME: &str = "discovery-agent";

/// Tokio runtime for the OTLP gRPC exporter. Tonic's `connect_lazy()`
/// needs a runtime context, which `dioxus::serve`'s init closure may not
/// have entered yet.
static OTEL_RUNTIME: OnceLock<tokio::runtime::Runtime> = OnceLock::new();

/// Configure OTLP trace export and register the provider globally.
///
/// Does nothing unless `features.telemetry` is on and
/// `OTEL_EXPORTER_OTLP_ENDPOINT` is set. Returns whether export is active.
///
///   - `OTEL_EXPORTER_OTLP_ENDPOINT`: collector gRPC address, e.g. `http://localhost:4317`
///   - `OTEL_SERVICE_NAME`: service name tag
///   - `DEPLOY_ENV`: deployment environment tag (default: `development`)
pub fn init_telemetry() -> bool {
    if !crate::config::feature_flags().telemetry {
        tracing::info!("telemetry feature off, skipping OTLP export");
        return false;
    }

    let Ok(endpoint) = std::env::var("OTEL_EXPORTER_OTLP_ENDPOINT") else {
        tracing::info!("OTEL_EXPORTER_OTLP_ENDPOINT not set, skipping OTLP export");
        return false;
    };

    let service_name =
        std::env::var("OTEL_SERVICE_NAME").unwrap_or_else(|_| SERVICE_NAME.to_string());
    let environment = std::env::var("DEPLOY_ENV").unwrap_or_else(|_| "development".to_string());

    let rt = match OTEL_RUNTIME.get() {
        Some(rt) => rt,
        None => {
            let built = tokio::runtime::Builder::new_multi_thread()
                .enable_all()
                .worker_threads(1)
                .build();
            match built {
                Ok(rt) => OTEL_RUNTIME.get_or_init(|| rt),
                Err(e) => {
                    tracing::error!(error = %e, "failed to start OTLP runtime");
                    return false;
                }
            }
        }
    };
    let _guard = rt.enter();

    let mut builder = opentelemetry_otlp::SpanExporter::builder()
        .with_tonic()
        .with_endpoint(&endpoint);

    if endpoint.starts_with("https://") {
        builder = builder.with_tls_config(
            opentelemetry_otlp::tonic_types::transport::ClientTlsConfig::new().with_native_roots(),
        );
    }

    let exporter = match builder.build() {
        Ok(exporter) => exporter,
        Err(e) => {
            tracing::error!(error = %e, "failed to create OTLP exporter");
            return false;
        }
    };

    let resource = opentelemetry_sdk::Resource::builder()
        .with_service_name(service_name)
        .with_attribute(KeyValue::new("service.version", APP_VERSION))
        .with_attribute(KeyValue::new("deployment.environment", environment))
        .build();

    let provider = opentelemetry_sdk::trace::SdkTracerProvider::builder()
        .with_batch_exporter(exporter)
        .with_resource(resource)
        .build();

    global::set_tracer_provider(provider);
    tracing::info!(%endpoint, version = APP_VERSION, "OTLP trace export initialized");
    true
}

/// Role recorded on request spans: the normalized session role, or
/// `anonymous` when the request carries no valid session.
pub fn span_role(claims: Option<&SessionClaims>) -> String {
    match claims {
        Some(c) => normalize_role(c.role.as_deref()),
        None => "anonymous".to_string(),
    }
}

/// Collapse parameterized dashboard paths so span names stay low-cardinality.
pub fn span_route(path: &str) -> String {
    match path.strip_prefix("/dashboard/users/") {
        Some(rest) if !rest.is_empty() => "/dashboard/users/:company_username".to_string(),
        _ => path.to_string(),
    }
}

/// `tower-http` span factory that tags each request with the session role.
#[derive(Clone, Copy, Debug, Default)]
pub struct SessionSpan;

impl<B> MakeSpan<B> for SessionSpan {
    fn make_span(&mut self, req: &Request<B>) -> tracing::Span {
        let claims = req.extensions().get::<SessionClaims>();
        let request_id = req
            .headers()
            .get("x-request-id")
            .and_then(|v| v.to_str().ok())
            .unwrap_or("");
        tracing::info_span!(
            "http",
            method = %req.method(),
            route = %span_route(req.uri().path()),
            request_id,
            role = %span_role(claims),
            user = claims.map(|c| c.sub),
        )
    }
}

/// Request tracing layer. Install inside the session middleware so the
/// claims are already in extensions.
pub fn http_trace_layer() -> TraceLayer<SharedClassifier<ServerErrorsAsFailures>, SessionSpan> {
    TraceLayer::new_for_http().make_span_with(SessionSpan)
}

/// Tower layer that opens an OpenTelemetry server span per request.
#[derive(Clone)]
pub struct OtelTraceLayer;

impl<S> Layer<S> for OtelTraceLayer {
    type Service = OtelTraceService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        OtelTraceService { inner }
    }
}

#[derive(Clone)]
pub struct OtelTraceService<S> {
    inner: S,
}

impl<S> Service<Request<Body>> for OtelTraceService<S>
where
    S: Service<Request<Body>, Response = Response> + Send + Clone + 'static,
    S::Future: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, cx: &mut TaskContext<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: Request<Body>) -> Self::Future {
        let tracer = global::tracer(SERVICE_NAME);
        let method = req.method().to_string();
        let route = span_route(req.uri().path());
        let claims = req.extensions().get::<SessionClaims>();

        let mut attributes = vec![
            KeyValue::new("http.method", method.clone()),
            KeyValue::new("http.route", route.clone()),
            KeyValue::new("user.role", span_role(claims)),
        ];
        match claims {
            Some(c) => {
                attributes.push(KeyValue::new("user.id", c.sub));
                attributes.push(KeyValue::new("auth.status", "authenticated"));
            }
            None => attributes.push(KeyValue::new("auth.status", "anonymous")),
        }
        if let Some(id) = req.headers().get("x-request-id").and_then(|v| v.to_str().ok()) {
            attributes.push(KeyValue::new("http.request_id", id.to_string()));
        }

        let span = tracer
            .span_builder(format!("{method} {route}"))
            .with_kind(SpanKind::Server)
            .with_attributes(attributes)
            .start(&tracer);

        let cx = Context::current_with_span(span);
        let mut inner = self.inner.clone();

        let guard = cx.clone().attach();
        let future = inner.call(req);
        drop(guard);

        Box::pin(async move {
            let response = future.await?;

            let span = cx.span();
            let status = response.status();
            span.set_attribute(KeyValue::new("http.status_code", status.as_u16() as i64));
            if status.is_server_error() {
                span.set_status(opentelemetry::trace::Status::error(status.to_string()));
            }

            Ok(response)
        })
    }
}
