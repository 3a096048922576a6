use axum::{
    middleware::{from_fn, from_fn_with_state},
    routing::{get, post},
    Router,
};
use service_core::middleware::request_id_middleware;
use tower_http::trace::TraceLayer;

use crate::handlers::{
    app::{health_check, not_found},
    org_chart::{assignment_policy, flatten_chart, list_departments, resolve_department},
};
use crate::middleware::role_guard_middleware;
use crate::AppState;

pub fn build_router(state: AppState) -> Router {
    // Admin views, gated by token role claims
    let org_chart_routes = Router::new()
        .route("/api/org-chart/flatten", post(flatten_chart))
        .route("/api/org-chart/departments", post(list_departments))
        .route(
            "/api/org-chart/departments/resolve",
            post(resolve_department),
        )
        .route("/api/org-chart/assignment-policy", post(assignment_policy))
        .layer(from_fn_with_state(state.clone(), role_guard_middleware));

    Router::new()
        .route("/health", get(health_check))
        .merge(org_chart_routes)
        .fallback(not_found)
        .with_state(state)
        // Add tracing layer
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                let request_id = request
                    .headers()
                    .get(service_core::middleware::REQUEST_ID_HEADER)
                    .and_then(|value| value.to_str().ok())
                    .unwrap_or("-");

                tracing::info_span!(
                    "http_request",
                    request_id = %request_id,
                    method = %request.method(),
                    uri = %request.uri(),
                )
            }),
        )
        // Add tracing middleware for request_id
        .layer(from_fn(request_id_middleware))
}
