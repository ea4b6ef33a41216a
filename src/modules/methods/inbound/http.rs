use axum::http::{Method, StatusCode};

/// Shared by the `/someGet`, `/somePost`, ... probes: logs the method and answers 200.
pub async fn probe(method: Method) -> StatusCode {
    tracing::info!("http {method}");
    StatusCode::OK
}
