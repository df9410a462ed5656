pub mod pages;

use anyhow::Result;
use axum::{
    body::Bytes,
    extract::{Query, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use checker::config::CheckerConfig;
use checker::{Encoding, ParsedQuery, Report, SymptomChecker};
use serde::Deserialize;
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

#[derive(Deserialize)]
pub struct CheckParams {
    /// Comma-separated symptom primes.
    #[serde(default)]
    pub symptoms: String,
}

#[derive(Clone)]
pub struct AppState {
    pub checker: Arc<SymptomChecker>,
}

/// Load the configured data and build the router.
pub fn build_app(config: &CheckerConfig) -> Result<Router> {
    let checker = SymptomChecker::from_config(config)?;
    tracing::info!(
        symptoms = checker.encoding().symptom_count(),
        diseases = checker.table().len(),
        "symptom checker ready"
    );
    Ok(router(checker))
}

pub fn router(checker: SymptomChecker) -> Router {
    let app_state = AppState { checker: Arc::new(checker) };

    // CORS: read CORS_ALLOW_ORIGIN (comma-separated) or allow Any by default
    let cors = match std::env::var("CORS_ALLOW_ORIGIN") {
        Ok(val) => {
            let origins: Vec<_> = val.split(',').filter_map(|s| s.trim().parse().ok()).collect();
            if origins.is_empty() {
                CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any)
            } else {
                CorsLayer::new().allow_origin(AllowOrigin::list(origins)).allow_methods(Any).allow_headers(Any)
            }
        }
        Err(_) => CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any),
    };

    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/", get(index_handler))
        .route("/analyze", post(analyze_handler))
        .route("/api/legend", get(legend_handler))
        .route("/api/check", get(check_handler))
        .route("/graph.svg", get(graph_handler))
        .with_state(app_state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

pub async fn index_handler(State(state): State<AppState>) -> Html<String> {
    Html(pages::index(&state.checker))
}

/// Form post with one `symptoms` field per checked box.
pub async fn analyze_handler(State(state): State<AppState>, body: Bytes) -> Response {
    let selected: Vec<String> = url::form_urlencoded::parse(&body)
        .filter(|(key, _)| key == "symptoms")
        .map(|(_, value)| value.into_owned())
        .collect();
    if selected.iter().all(|v| v.trim().is_empty()) {
        return (
            StatusCode::BAD_REQUEST,
            Json(serde_json::json!({ "error": "Please select at least one symptom" })),
        )
            .into_response();
    }

    let query = ParsedQuery::from_tokens(&selected, state.checker.encoding());
    let report = state.checker.check(&query);
    let svg = state.checker.graph(&report).map(|g| g.to_svg());
    tracing::info!(primes = ?report.primes, matches = report.results.len(), "analyzed form");
    Html(pages::results(&report, svg.as_deref())).into_response()
}

pub async fn legend_handler(State(state): State<AppState>) -> Json<Encoding> {
    Json(state.checker.encoding().clone())
}

pub async fn check_handler(State(state): State<AppState>, Query(params): Query<CheckParams>) -> Json<Report> {
    Json(state.checker.check_str(&params.symptoms))
}

pub async fn graph_handler(State(state): State<AppState>, Query(params): Query<CheckParams>) -> Response {
    let report = state.checker.check_str(&params.symptoms);
    match state.checker.graph(&report) {
        Some(layout) => ([(header::CONTENT_TYPE, "image/svg+xml")], layout.to_svg()).into_response(),
        None => (StatusCode::NOT_FOUND, "no valid symptoms provided or no matches found").into_response(),
    }
}
