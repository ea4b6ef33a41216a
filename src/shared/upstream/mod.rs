// Port for the remote resource that `/someDataFromReader` relays.
//
// Responsibilities
// - Describe a fetch that yields a streaming body plus the headers worth forwarding.
// - Classify failures so the handler can answer 503 without inspecting transport details.

use async_trait::async_trait;
use axum::body::Body;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("upstream request failed: {0}")]
    Transport(String),

    #[error("upstream answered with status {0}")]
    Status(u16),
}

pub struct UpstreamResponse {
    pub content_type: Option<String>,
    pub content_length: Option<u64>,
    pub body: Body,
}

#[async_trait]
pub trait UpstreamSource: Send + Sync {
    async fn fetch(&self) -> Result<UpstreamResponse, UpstreamError>;
}

pub mod reqwest_source;
