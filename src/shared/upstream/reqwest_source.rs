use async_trait::async_trait;
use axum::body::Body;
use reqwest::{Client, StatusCode, header};

use crate::shared::upstream::{UpstreamError, UpstreamResponse, UpstreamSource};

pub struct ReqwestSource {
    client: Client,
    url: String,
}

impl ReqwestSource {
    pub fn new(client: Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }
}

#[async_trait]
impl UpstreamSource for ReqwestSource {
    async fn fetch(&self) -> Result<UpstreamResponse, UpstreamError> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| UpstreamError::Transport(e.to_string()))?;

        if response.status() != StatusCode::OK {
            return Err(UpstreamError::Status(response.status().as_u16()));
        }

        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned);
        let content_length = response.content_length();
        tracing::debug!(url = %self.url, ?content_type, ?content_length, "upstream responded");

        Ok(UpstreamResponse {
            content_type,
            content_length,
            body: Body::from_stream(response.bytes_stream()),
        })
    }
}
