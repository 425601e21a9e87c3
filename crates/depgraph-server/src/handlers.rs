use axum::{
    extract::{Query, State},
    http::{header, HeaderValue, StatusCode},
    response::IntoResponse,
    Json,
};
use depgraph_common::EcosystemView;
use serde::Deserialize;
use std::sync::Arc;

use crate::AppState;

#[derive(Deserialize)]
pub struct NodesParams {
    min_count: Option<String>,
    view: Option<String>,
}

/// Returns the edges of one ecosystem view where both endpoints have more
/// than `min_count` dependents.
pub async fn nodes(
    State(state): State<Arc<AppState>>,
    Query(params): Query<NodesParams>,
) -> axum::response::Response {
    let min_count: i64 = match params.min_count.as_deref().unwrap_or_default().parse() {
        Ok(v) => v,
        Err(_) => {
            return (StatusCode::BAD_REQUEST, "Invalid min_count parameter").into_response();
        }
    };

    let view = match params
        .view
        .as_deref()
        .unwrap_or_default()
        .parse::<i64>()
        .ok()
        .and_then(|code| EcosystemView::try_from(code).ok())
    {
        Some(v) => v,
        None => {
            return (StatusCode::BAD_REQUEST, "Invalid view parameter").into_response();
        }
    };

    tracing::info!("min_count: {}, view: {}", min_count, view.view_name());

    match state.store.edges_above(view, min_count).await {
        Ok(edges) => {
            tracing::info!("Sent {} edges from {}", edges.len(), view.view_name());
            Json(edges).into_response()
        }
        Err(e) => {
            tracing::error!("Query against {} failed: {}", view.view_name(), e);
            (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response()
        }
    }
}

/// Mirrors the cross-origin method and header allowances onto every
/// response; the cors layer adds them only to preflight replies.
pub async fn cors_headers(mut response: axum::response::Response) -> axum::response::Response {
    let headers = response.headers_mut();
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static("GET, POST, OPTIONS"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static("Content-Type"),
    );
    response
}

pub async fn root() -> &'static str {
    "Depgraph API is running."
}

pub async fn version() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "version": env!("CARGO_PKG_VERSION"),
        "build_time": env!("BUILD_TIME"),
    }))
}

#[cfg(test)]
#[path = "handlers_tests.rs"]
mod handlers_tests;
