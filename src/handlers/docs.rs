//! Documentation handlers

use axum::{
    extract::{Path, State},
    http::header,
};

use crate::{AppError, AppResult, AppState};

/// Files the docs route is allowed to serve.
const DOC_FILES: &[&str] = &[
    "user_manual.md",
    "technical_reference.md",
    "logarithmic_scale_guide.md",
];

/// Serve one whitelisted documentation file as markdown.
pub async fn serve(
    State(app): State<AppState>,
    Path(filename): Path<String>,
) -> AppResult<([(header::HeaderName, &'static str); 1], String)> {
    if !DOC_FILES.contains(&filename.as_str()) {
        return Err(AppError::NotFound("File not found".to_string()));
    }

    let path = app.config.docs_dir.join(&filename);
    let content = tokio::fs::read_to_string(&path).await.map_err(|err| {
        if err.kind() == std::io::ErrorKind::NotFound {
            AppError::NotFound("File not found".to_string())
        } else {
            AppError::Internal(format!("Failed to read documentation {filename}: {err}"))
        }
    })?;

    Ok(([(header::CONTENT_TYPE, "text/markdown")], content))
}
