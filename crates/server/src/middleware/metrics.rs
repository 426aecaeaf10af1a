use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use shared::{
    state::AppState,
    utils::{Method, Status},
};
use std::sync::Arc;
use tokio::time::Instant;

/// Records every request into the shared counter/histogram family,
/// labelled by method and outcome.
pub async fn track_metrics(
    State(state): State<Arc<AppState>>,
    req: Request,
    next: Next,
) -> Response {
    let started = Instant::now();

    let method = match req.method().as_str() {
        "POST" => Method::Post,
        "PUT" => Method::Put,
        "DELETE" => Method::Delete,
        _ => Method::Get,
    };

    let response = next.run(req).await;

    let status = if response.status().is_client_error() || response.status().is_server_error() {
        Status::Error
    } else {
        Status::Success
    };

    state
        .metrics
        .lock()
        .await
        .record(method, status, started.elapsed().as_secs_f64());

    response
}
