//! JSON response flavours.
//!
//! `axum::Json` writes serde output as is. The tour shows the other
//! flavours a browser-facing API tends to need:
//!
//! | Type          | Body                                                          |
//! |---------------|---------------------------------------------------------------|
//! | [`EscapedJson`] | `<`, `>`, `&`, U+2028 and U+2029 written as `\uXXXX`        |
//! | [`PureJson`]    | serde output untouched                                      |
//! | [`AsciiJson`]   | escaped JSON with every non-ASCII code point as `\uXXXX`    |
//! | [`SecureJson`]  | escaped JSON, arrays prefixed with [`SECURE_JSON_PREFIX`]   |
//! | [`Jsonp`]       | `callback(<escaped json>);` when a callback is given        |

use std::fmt::Write as _;

use axum::{
    http::header,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::shared::core::errors::HttpError;

pub const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";
pub const ASCII_JSON_CONTENT_TYPE: &str = "application/json";
pub const JAVASCRIPT_CONTENT_TYPE: &str = "application/javascript; charset=utf-8";

/// Prefix that keeps a top-level JSON array from being evaluated as a script.
pub const SECURE_JSON_PREFIX: &str = "while(1);";

pub struct EscapedJson<T>(pub T);

pub struct PureJson<T>(pub T);

pub struct AsciiJson<T>(pub T);

pub struct SecureJson<T>(pub T);

pub struct Jsonp<T> {
    pub callback: Option<String>,
    pub value: T,
}

impl<T> Jsonp<T> {
    pub fn new(callback: Option<String>, value: T) -> Self {
        Self { callback, value }
    }
}

pub fn to_escaped_json<T: Serialize>(value: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string(value).map(|json| escape_html(&json))
}

pub fn to_ascii_json<T: Serialize>(value: &T) -> Result<String, serde_json::Error> {
    to_escaped_json(value).map(|json| escape_non_ascii(&json))
}

pub fn to_secure_json<T: Serialize>(value: &T) -> Result<String, serde_json::Error> {
    let json = to_escaped_json(value)?;
    if json.starts_with('[') {
        Ok(format!("{SECURE_JSON_PREFIX}{json}"))
    } else {
        Ok(json)
    }
}

pub fn to_jsonp<T: Serialize>(callback: &str, value: &T) -> Result<String, serde_json::Error> {
    let json = to_escaped_json(value)?;
    Ok(format!("{}({json});", escape_js(callback)))
}

/// The characters replaced here only ever occur inside string literals of
/// serde output, so a textual pass keeps the document valid.
pub fn escape_html(json: &str) -> String {
    let mut out = String::with_capacity(json.len());
    for ch in json.chars() {
        match ch {
            '<' => out.push_str("\\u003c"),
            '>' => out.push_str("\\u003e"),
            '&' => out.push_str("\\u0026"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            ch => out.push(ch),
        }
    }
    out
}

/// Code points outside the BMP become a UTF-16 surrogate pair.
pub fn escape_non_ascii(json: &str) -> String {
    let mut out = String::with_capacity(json.len());
    let mut units = [0u16; 2];
    for ch in json.chars() {
        if ch.is_ascii() {
            out.push(ch);
            continue;
        }
        for unit in ch.encode_utf16(&mut units) {
            let _ = write!(out, "\\u{unit:04x}");
        }
    }
    out
}

/// Makes a caller supplied callback name safe to splice into a script body.
pub fn escape_js(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '"' => out.push_str("\\\""),
            '<' => out.push_str("\\u003C"),
            '>' => out.push_str("\\u003E"),
            '&' => out.push_str("\\u0026"),
            '=' => out.push_str("\\u003D"),
            ch if ch.is_control() => {
                let mut units = [0u16; 2];
                for unit in ch.encode_utf16(&mut units) {
                    let _ = write!(out, "\\u{unit:04X}");
                }
            }
            ch => out.push(ch),
        }
    }
    out
}

fn respond(content_type: &'static str, body: Result<String, serde_json::Error>) -> Response {
    match body {
        Ok(body) => ([(header::CONTENT_TYPE, content_type)], body).into_response(),
        Err(error) => HttpError::from(error).into_response(),
    }
}

impl<T: Serialize> IntoResponse for EscapedJson<T> {
    fn into_response(self) -> Response {
        respond(JSON_CONTENT_TYPE, to_escaped_json(&self.0))
    }
}

impl<T: Serialize> IntoResponse for PureJson<T> {
    fn into_response(self) -> Response {
        respond(JSON_CONTENT_TYPE, serde_json::to_string(&self.0))
    }
}

impl<T: Serialize> IntoResponse for AsciiJson<T> {
    fn into_response(self) -> Response {
        respond(ASCII_JSON_CONTENT_TYPE, to_ascii_json(&self.0))
    }
}

impl<T: Serialize> IntoResponse for SecureJson<T> {
    fn into_response(self) -> Response {
        respond(JSON_CONTENT_TYPE, to_secure_json(&self.0))
    }
}

impl<T: Serialize> IntoResponse for Jsonp<T> {
    fn into_response(self) -> Response {
        match self.callback.as_deref().filter(|callback| !callback.is_empty()) {
            Some(callback) => respond(JAVASCRIPT_CONTENT_TYPE, to_jsonp(callback, &self.value)),
            None => respond(JSON_CONTENT_TYPE, to_escaped_json(&self.value)),
        }
    }
}
