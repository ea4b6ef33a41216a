use axum::{
    body::Body,
    extract::State,
    http::{HeaderMap, HeaderValue, Method, StatusCode, Uri, header},
    response::{IntoResponse, Response},
};

use crate::modules::streaming::request_snapshot::{RequestSnapshot, detach};
use crate::shared::core::errors::HttpError;
use crate::shell::state::AppState;

/// Relays the configured upstream document; any upstream failure is a 503.
pub async fn data_from_reader(State(state): State<AppState>) -> Result<Response, HttpError> {
    let upstream = state.upstream.fetch().await?;

    let mut response = Response::new(upstream.body);
    let headers = response.headers_mut();
    if let Some(content_type) = upstream
        .content_type
        .and_then(|value| HeaderValue::from_str(&value).ok())
    {
        headers.insert(header::CONTENT_TYPE, content_type);
    }
    if let Some(length) = upstream.content_length {
        headers.insert(header::CONTENT_LENGTH, HeaderValue::from(length));
    }
    Ok(response)
}

pub async fn long_async(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
) -> StatusCode {
    let snapshot = RequestSnapshot::capture(&method, &uri, &headers);
    drop(detach(snapshot, state.config.long_task_delay));
    StatusCode::OK
}

pub async fn long_sync(State(state): State<AppState>, uri: Uri) -> impl IntoResponse {
    tokio::time::sleep(state.config.long_task_delay).await;
    tracing::info!("Done! in path {}", uri.path());
    (StatusCode::OK, Body::empty())
}
