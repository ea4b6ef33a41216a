use axum::{
    extract::State,
    http::{StatusCode, header},
    response::IntoResponse,
};

use crate::modules::rendering::inbound::http as rendering_http;
use crate::shell::state::AppState;

/// External redirect: `301` to the configured URL.
pub async fn redirect(State(state): State<AppState>) -> impl IntoResponse {
    (
        StatusCode::MOVED_PERMANENTLY,
        [(header::LOCATION, state.config.redirect_url.clone())],
    )
}

/// Internal redirect: served by the `/ping` handler without a round trip to the client.
pub async fn redirect_internal() -> impl IntoResponse {
    rendering_http::ping().await
}
