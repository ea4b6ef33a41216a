use axum::extract::{Multipart, State};

use crate::shared::core::errors::HttpError;
use crate::shell::state::AppState;

pub const SINGLE_FIELD: &str = "file";
pub const MULTI_FIELD: &str = "file[]";
pub const SAVE_NAME: &str = "savefile";

/// Saves the `file` field to `<upload_dir>/savefile`.
pub async fn upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<&'static str, HttpError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(SINGLE_FIELD) {
            continue;
        }
        let file_name = field.file_name().unwrap_or_default().to_owned();
        let bytes = field.bytes().await?;
        tracing::info!(%file_name, size = bytes.len(), "received upload");

        tokio::fs::write(state.config.upload_dir.join(SAVE_NAME), &bytes).await?;
        return Ok("upload succeed.");
    }
    Err(HttpError::MissingField(SINGLE_FIELD.to_string()))
}

/// Saves every `file[]` field, in order, to `<upload_dir>/savefile<i>`.
pub async fn uploads(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<&'static str, HttpError> {
    let mut saved = 0usize;
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(MULTI_FIELD) {
            continue;
        }
        let file_name = field.file_name().unwrap_or_default().to_owned();
        let bytes = field.bytes().await?;
        let target = state.config.upload_dir.join(format!("{SAVE_NAME}{saved}"));
        tracing::info!(
            %file_name,
            size = bytes.len(),
            target = %target.display(),
            "received upload"
        );

        tokio::fs::write(&target, &bytes).await?;
        saved += 1;
    }
    tracing::debug!(saved, "multi upload finished");
    Ok("uploads succeed.")
}
