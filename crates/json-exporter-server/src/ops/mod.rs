//! HTTP endpoints.
//!
//! - `/`        : landing page
//! - `/healthz` : liveness (does not probe)
//! - `/metrics` : one probe-and-flatten cycle, Prometheus text format

use axum::{
    extract::State,
    http::{header::CONTENT_TYPE, StatusCode},
    response::{Html, IntoResponse, Response},
};

use crate::app_state::AppState;
use crate::scrape;

const INDEX_HTML: &str = r#"<html>
<head><title>Json Exporter</title></head>
<body>
<h1>Json Exporter</h1>
<p><a href="/metrics">Metrics</a></p>
</body>
</html>"#;

pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

pub async fn healthz() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}

pub async fn metrics(State(state): State<AppState>) -> Response {
    match scrape::scrape(state.prober(), state.prefix()).await {
        Ok(body) => (StatusCode::OK, [(CONTENT_TYPE, scrape::CONTENT_TYPE)], body).into_response(),
        Err(e) => {
            tracing::warn!(code = e.code().as_str(), error = %e, "scrape failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                [(CONTENT_TYPE, "text/plain; charset=utf-8")],
                e.to_string(),
            )
                .into_response()
        }
    }
}
