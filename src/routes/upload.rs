//! Image upload route
//!
//! Accepts a multipart form with an `image` field, stores the file under
//! the configured uploads directory and returns the public URL it will be
//! served from.

use crate::auth::AuthUser;
use crate::error::{ApiError, ApiResult};
use crate::state::AppState;
use axum::{
    extract::{DefaultBodyLimit, Multipart, State},
    routing::post,
    Json, Router,
};
use serde::Serialize;
use std::path::Path;
use tracing::info;
use uuid::Uuid;

const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024; // 10MB

/// Create upload routes
pub fn upload_routes() -> Router<AppState> {
    Router::new().route(
        "/upload-image",
        post(upload_image).layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES)),
    )
}

#[derive(Serialize)]
struct UploadResponse {
    success: bool,
    url: String,
}

/// POST /api/upload-image
async fn upload_image(
    State(state): State<AppState>,
    auth: AuthUser,
    mut multipart: Multipart,
) -> ApiResult<Json<UploadResponse>> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|_| ApiError::BadRequest("Invalid form data".to_string()))?
    {
        if field.name() != Some("image") {
            continue;
        }

        let original_name = field.file_name().unwrap_or("image").to_string();
        let data = field
            .bytes()
            .await
            .map_err(|_| ApiError::BadRequest("Invalid form data".to_string()))?;

        // Random prefix keeps names unique and unguessable; the sanitized
        // original name is kept for readability.
        let file_name = format!("{}_{}", Uuid::new_v4(), sanitize_file_name(&original_name));
        let dest = Path::new(&state.config().uploads.dir).join(&file_name);

        tokio::fs::write(&dest, &data)
            .await
            .map_err(|e| ApiError::Internal(anyhow::anyhow!("Failed to save image: {}", e)))?;

        info!(
            user_id = auth.user_id(),
            file = %file_name,
            bytes = data.len(),
            "image uploaded"
        );

        return Ok(Json(UploadResponse {
            success: true,
            url: format!("/uploads/{}", file_name),
        }));
    }

    Err(ApiError::BadRequest(
        "Image not found in request".to_string(),
    ))
}

/// Strip path separators and anything else that could escape the uploads
/// directory or break a URL.
fn sanitize_file_name(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '.' || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();

    if cleaned.trim_matches(['_', '.']).is_empty() {
        "image".to_string()
    } else {
        cleaned
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_keeps_simple_names() {
        assert_eq!(sanitize_file_name("cat-photo_01.png"), "cat-photo_01.png");
    }

    #[test]
    fn test_sanitize_strips_path_separators() {
        let cleaned = sanitize_file_name("../../etc/passwd");
        assert!(!cleaned.contains('/'));

        let cleaned = sanitize_file_name("..\\boot.ini");
        assert!(!cleaned.contains('\\'));
    }

    #[test]
    fn test_sanitize_empty_falls_back() {
        assert_eq!(sanitize_file_name(""), "image");
        assert_eq!(sanitize_file_name("///"), "image");
    }
}
