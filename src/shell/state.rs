use std::sync::Arc;

use anyhow::Context;

use crate::shared::auth::basic_auth::BasicAuth;
use crate::shared::templates::Templates;
use crate::shared::upstream::UpstreamSource;
use crate::shared::upstream::reqwest_source::ReqwestSource;
use crate::shell::config::Config;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub templates: Arc<Templates>,
    pub upstream: Arc<dyn UpstreamSource>,
    pub basic_auth: BasicAuth,
}

impl AppState {
    pub fn from_config(config: Config) -> anyhow::Result<Self> {
        let templates = Templates::load_dir(&config.templates_dir).with_context(|| {
            format!("loading templates from {}", config.templates_dir.display())
        })?;
        let client = reqwest::Client::builder()
            .build()
            .context("building the upstream http client")?;
        let upstream = ReqwestSource::new(client, config.upstream_url.clone());
        let basic_auth = BasicAuth::new(&config.admin_accounts);

        Ok(Self {
            config: Arc::new(config),
            templates: Arc::new(templates),
            upstream: Arc::new(upstream),
            basic_auth,
        })
    }
}
