use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::body::{Body, Bytes};
use axum::response::Response;
use http_body_util::BodyExt;

use crate::shared::auth::basic_auth::BasicAuth;
use crate::shared::templates::Templates;
use crate::shared::upstream::{UpstreamError, UpstreamResponse, UpstreamSource};
use crate::shell::config::Config;
use crate::shell::state::AppState;

pub const INDEX_TEMPLATE: &str = "<html><h1>{{ title }}</h1></html>";

/// Upstream that answers from memory.
pub enum StubUpstream {
    Serves {
        content_type: &'static str,
        body: &'static str,
    },
    Unavailable,
}

#[async_trait]
impl UpstreamSource for StubUpstream {
    async fn fetch(&self) -> Result<UpstreamResponse, UpstreamError> {
        match self {
            StubUpstream::Serves { content_type, body } => Ok(UpstreamResponse {
                content_type: Some(content_type.to_string()),
                content_length: Some(body.len() as u64),
                body: Body::from(*body),
            }),
            StubUpstream::Unavailable => Err(UpstreamError::Status(502)),
        }
    }
}

pub fn make_test_config(upload_dir: &Path) -> Config {
    let mut config = Config::from_lookup(|_| None).unwrap();
    config.upload_dir = upload_dir.to_path_buf();
    config.long_task_delay = Duration::from_millis(20);
    config.shutdown_timeout = Duration::from_millis(500);
    config
}

pub fn make_test_state_with(config: Config, upstream: StubUpstream) -> AppState {
    let templates = Templates::from_sources([("index.tmpl", INDEX_TEMPLATE)]).unwrap();
    AppState {
        basic_auth: BasicAuth::new(&config.admin_accounts),
        config: Arc::new(config),
        templates: Arc::new(templates),
        upstream: Arc::new(upstream),
    }
}

pub fn make_test_state() -> AppState {
    make_test_state_with(
        make_test_config(&std::env::temp_dir()),
        StubUpstream::Serves {
            content_type: "text/plain; charset=utf-8",
            body: "from upstream",
        },
    )
}

pub async fn body_bytes(response: Response) -> Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

pub async fn body_string(response: Response) -> String {
    String::from_utf8(body_bytes(response).await.to_vec()).unwrap()
}
