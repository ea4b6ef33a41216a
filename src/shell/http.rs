use axum::{
    Router,
    extract::DefaultBodyLimit,
    middleware,
    routing::{delete, get, head, options, patch, post, put},
};
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};

use crate::modules::admin::inbound::http as admin_http;
use crate::modules::forms::inbound::http as forms_http;
use crate::modules::methods::inbound::http as methods_http;
use crate::modules::redirects::inbound::http as redirects_http;
use crate::modules::rendering::inbound::http as rendering_http;
use crate::modules::streaming::inbound::http as streaming_http;
use crate::modules::uploads::inbound::http as uploads_http;
use crate::shared::auth::basic_auth::require_basic_auth;
use crate::shell::logging;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    let admin = Router::new()
        .route(
            "/authorized",
            get(admin_http::authorized).post(admin_http::authorized),
        )
        .route_layer(middleware::from_fn_with_state(
            state.basic_auth.clone(),
            require_basic_auth,
        ));

    let uploads = Router::new()
        .route("/upload", post(uploads_http::upload))
        .route("/uploads", post(uploads_http::uploads))
        .layer(DefaultBodyLimit::max(state.config.upload_limit_bytes));

    let app = Router::new()
        .route("/ping", get(rendering_http::ping))
        .route("/asciiJson", get(rendering_http::ascii_json))
        .route("/index", get(rendering_http::index))
        .route("/JSONP", get(rendering_http::jsonp))
        .route("/json", get(rendering_http::html_json))
        .route("/purejson", get(rendering_http::pure_json))
        .route("/someJSON", get(rendering_http::secure_json))
        .route("/post", post(forms_http::post_form))
        .route("/ShouldBindQuery", get(forms_http::should_bind_query))
        .route("/bindingurl/{name}/{address}", get(forms_http::binding_url))
        .route("/someDataFromReader", get(streaming_http::data_from_reader))
        .route("/long_async", get(streaming_http::long_async))
        .route("/long_sync", get(streaming_http::long_sync))
        .route("/redirect", get(redirects_http::redirect))
        .route("/redirect2", get(redirects_http::redirect_internal))
        .route("/someGet", get(methods_http::probe))
        .route("/somePost", post(methods_http::probe))
        .route("/somePut", put(methods_http::probe))
        .route("/someDelete", delete(methods_http::probe))
        .route("/somePatch", patch(methods_http::probe))
        .route("/someHead", head(methods_http::probe))
        .route("/someOptions", options(methods_http::probe))
        .merge(uploads)
        .nest("/admin", admin)
        .with_state(state);

    with_middleware(app)
}

/// Panics become a 500 inside the access log, so crashed requests are still logged.
pub fn with_middleware(app: Router) -> Router {
    app.layer(CatchPanicLayer::new())
        .layer(middleware::from_fn(logging::access_log))
        .layer(TraceLayer::new_for_http())
}
