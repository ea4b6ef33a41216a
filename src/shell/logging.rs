// Logging setup and the per-request access log.
//
// Responsibilities
// - Install the tracing subscriber, honouring RUST_LOG when set.
// - Write one access line per request and tag the response with a request id.

use std::fmt;
use std::net::SocketAddr;
use std::time::{Duration, Instant};

use axum::{
    extract::{ConnectInfo, Request},
    http::{HeaderValue, Method, StatusCode, Version, header},
    middleware::Next,
    response::Response,
};
use chrono::{DateTime, Utc};
use tracing_subscriber::{EnvFilter, fmt as subscriber_fmt};
use uuid::Uuid;

pub const DEFAULT_FILTER: &str = "web_tour=info,tower_http=info";
pub const REQUEST_ID_HEADER: &str = "x-request-id";

pub fn init(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    subscriber_fmt().with_env_filter(filter).init();
}

/// One request, rendered in the classic combined log style.
#[derive(Debug, Clone)]
pub struct AccessLine {
    pub client: String,
    pub timestamp: DateTime<Utc>,
    pub method: Method,
    pub path: String,
    pub version: Version,
    pub status: StatusCode,
    pub latency: Duration,
    pub user_agent: String,
}

impl fmt::Display for AccessLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - [{}] \"{} {} {:?} {} {:?} \"{}\"\"",
            self.client,
            self.timestamp.format("%a, %d %b %Y %H:%M:%S GMT"),
            self.method,
            self.path,
            self.version,
            self.status.as_u16(),
            self.latency,
            self.user_agent,
        )
    }
}

pub async fn access_log(request: Request, next: Next) -> Response {
    let started = Instant::now();
    let timestamp = Utc::now();
    let client = request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip().to_string())
        .unwrap_or_else(|| "-".to_string());
    let method = request.method().clone();
    let path = request.uri().path().to_owned();
    let version = request.version();
    let user_agent = request
        .headers()
        .get(header::USER_AGENT)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_owned();
    let request_id = Uuid::now_v7();

    let mut response = next.run(request).await;

    if let Ok(value) = HeaderValue::from_str(&request_id.to_string()) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }
    let line = AccessLine {
        client,
        timestamp,
        method,
        path,
        version,
        status: response.status(),
        latency: started.elapsed(),
        user_agent,
    };
    tracing::info!(target: "web_tour::access", %request_id, "{line}");
    response
}
