use anyhow::Context;

use web_tour::shell::config::Config;
use web_tour::shell::state::AppState;
use web_tour::shell::{http, logging, server};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    logging::init(logging::DEFAULT_FILTER);

    let config = Config::from_env().context("reading configuration")?;
    let addr = config.addr;
    let shutdown_timeout = config.shutdown_timeout;
    let state = AppState::from_config(config)?;

    let listener = server::bind(addr).await?;
    let outcome = server::run(
        listener,
        http::router(state),
        server::shutdown_signal(),
        shutdown_timeout,
    )
    .await?;

    tracing::info!(?outcome, "server stopped");
    Ok(())
}
