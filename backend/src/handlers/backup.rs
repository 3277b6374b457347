//! Backup download and restore upload handlers

use axum::{
    extract::{Multipart, State},
    http::header,
    response::IntoResponse,
    Json,
};
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::services::backup::RestoreSummary;
use crate::services::BackupService;
use crate::AppState;

/// Multipart field carrying the uploaded database
const UPLOAD_FIELD: &str = "file";

#[derive(Serialize)]
pub struct RestoreResponse {
    pub success: bool,
    pub restored: RestoreSummary,
}

/// Download the whole database as a file
pub async fn download_backup(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let service = BackupService::new(state.db);
    let (filename, bytes) = service.export().await?;

    let headers = [
        (header::CONTENT_TYPE, "application/octet-stream".to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", filename),
        ),
    ];
    Ok((headers, bytes))
}

/// Replace all data with an uploaded backup
pub async fn restore_backup(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<Json<RestoreResponse>> {
    let mut upload = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::ValidationError(format!("Invalid upload: {}", e)))?
    {
        if field.name() == Some(UPLOAD_FIELD) {
            let bytes = field
                .bytes()
                .await
                .map_err(|e| AppError::ValidationError(format!("Invalid upload: {}", e)))?;
            upload = Some(bytes);
            break;
        }
    }

    let bytes = upload.ok_or_else(|| AppError::invalid(UPLOAD_FIELD, "No file uploaded"))?;
    if bytes.is_empty() {
        return Err(AppError::invalid(UPLOAD_FIELD, "No file selected"));
    }

    let service = BackupService::new(state.db);
    let restored = service.restore(&bytes).await?;
    Ok(Json(RestoreResponse {
        success: true,
        restored,
    }))
}
