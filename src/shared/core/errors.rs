// Failure type shared by every handler.
//
// Responsibilities
// - Collect the ways a request can fail into one enum.
// - Own the single mapping from failure to HTTP status and body.

use axum::{
    Json,
    extract::multipart::MultipartError,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use crate::shared::templates::TemplateError;
use crate::shared::upstream::UpstreamError;

#[derive(Debug, Error)]
pub enum HttpError {
    #[error("{0}")]
    Binding(String),

    #[error("missing multipart field `{0}`")]
    MissingField(String),

    #[error(transparent)]
    Multipart(#[from] MultipartError),

    #[error("storage failure: {0}")]
    Storage(#[from] std::io::Error),

    #[error(transparent)]
    Template(#[from] TemplateError),

    #[error(transparent)]
    Upstream(#[from] UpstreamError),

    #[error("serialization failure: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl HttpError {
    pub fn status(&self) -> StatusCode {
        match self {
            HttpError::Binding(_) | HttpError::MissingField(_) => StatusCode::BAD_REQUEST,
            HttpError::Multipart(rejection) => rejection.status(),
            HttpError::Upstream(_) => StatusCode::SERVICE_UNAVAILABLE,
            HttpError::Storage(_) | HttpError::Template(_) | HttpError::Serialization(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            HttpError::Binding(msg) => (status, Json(json!({ "msg": msg }))).into_response(),
            HttpError::MissingField(_) | HttpError::Multipart(_) => {
                (status, self.to_string()).into_response()
            }
            HttpError::Upstream(error) => {
                tracing::warn!(%error, "upstream unavailable");
                status.into_response()
            }
            error => {
                tracing::error!(%error, "request failed");
                status.into_response()
            }
        }
    }
}
