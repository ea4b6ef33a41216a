use axum::{
    extract::{Query, State, rejection::QueryRejection},
    response::Html,
};
use serde::Deserialize;
use serde_json::{Value, json};

use crate::shared::core::errors::HttpError;
use crate::shared::render::{AsciiJson, EscapedJson, Jsonp, PureJson, SecureJson};
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct JsonpParams {
    pub callback: Option<String>,
}

pub async fn ping() -> EscapedJson<Value> {
    EscapedJson(json!({ "message": "pong" }))
}

pub async fn ascii_json() -> AsciiJson<Value> {
    AsciiJson(json!({
        "lang": "GO语言",
        "tag": "<br>",
    }))
}

pub async fn index(State(state): State<AppState>) -> Result<Html<String>, HttpError> {
    let html = state
        .templates
        .render("index.tmpl", json!({ "title": "Main website" }))?;
    Ok(Html(html))
}

/// `/JSONP?callback=x` answers `x({"foo":"bar"});`.
pub async fn jsonp(params: Result<Query<JsonpParams>, QueryRejection>) -> Jsonp<Value> {
    let callback = params.ok().and_then(|Query(params)| params.callback);
    Jsonp::new(callback, json!({ "foo": "bar" }))
}

pub async fn html_json() -> EscapedJson<Value> {
    EscapedJson(json!({ "html": "<b>Hello, world!</b>" }))
}

pub async fn pure_json() -> PureJson<Value> {
    PureJson(json!({ "html": "<b>Hello, world!</b>" }))
}

pub async fn secure_json() -> SecureJson<[&'static str; 3]> {
    SecureJson(["lena", "austin", "foo"])
}
