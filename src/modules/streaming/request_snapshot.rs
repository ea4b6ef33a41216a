use std::time::Duration;

use axum::http::{HeaderMap, Method, Uri};
use tokio::task::JoinHandle;

/// Read-only copy of a request, safe to move into work that outlives it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestSnapshot {
    pub method: Method,
    pub path: String,
    pub query: Option<String>,
    pub headers: HeaderMap,
}

impl RequestSnapshot {
    pub fn capture(method: &Method, uri: &Uri, headers: &HeaderMap) -> Self {
        Self {
            method: method.clone(),
            path: uri.path().to_owned(),
            query: uri.query().map(str::to_owned),
            headers: headers.clone(),
        }
    }
}

/// Runs the slow part of a request on its own task. Callers may drop the handle.
pub fn detach(snapshot: RequestSnapshot, delay: Duration) -> JoinHandle<RequestSnapshot> {
    tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        tracing::info!(method = %snapshot.method, "Done! in path {}", snapshot.path);
        snapshot
    })
}
