use std::fs;
use std::path::Path;

use actix_web::{web, HttpResponse};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use chrono::Utc;
use serde_json::json;

use crate::db::models::{NewActivity, NewLog};
use crate::db::{now_iso, repository};
use crate::errors::ApiError;
use crate::models::ActivityRequest;
use crate::routes::AppState;

/// Splits a `data:image/png;base64,<body>` payload at the header
/// separator and decodes the body.
fn decode_screenshot(payload: &str) -> Result<Vec<u8>, ApiError> {
    let (_, encoded) = payload.split_once(',').ok_or_else(|| {
        ApiError::Validation("screenshot payload is missing its data-URL header".to_string())
    })?;
    STANDARD
        .decode(encoded.trim())
        .map_err(|e| ApiError::Validation(format!("screenshot payload is not valid base64: {e}")))
}

fn screenshot_filename(username: &str, unix_seconds: i64) -> String {
    format!("{}_{}.png", username, unix_seconds)
}

/// The username becomes part of the screenshot filename; a value with
/// path separators or parent-directory components could escape the
/// screenshot directory on this unauthenticated endpoint.
fn validate_screenshot_username(username: &str) -> Result<(), ApiError> {
    if username.contains('/') || username.contains('\\') || username.contains("..") {
        return Err(ApiError::Validation(
            "username must not contain path separators".to_string(),
        ));
    }
    Ok(())
}

/// Ingests one telemetry event from a monitored client. A screenshot, if
/// present, is written to disk first and only its path is persisted; the
/// file write and the two inserts are not covered by one transaction, so
/// a crash in between can leave an orphaned file.
pub async fn record(
    data: web::Data<AppState>,
    req: web::Json<ActivityRequest>,
) -> Result<HttpResponse, ApiError> {
    let req = req.into_inner();
    let username = req
        .username
        .filter(|s| !s.trim().is_empty())
        .ok_or_else(|| ApiError::Validation("username is required".to_string()))?;
    let action = req.action.unwrap_or_default();

    let screenshot_path = match req.screenshot.as_deref() {
        Some(payload) if !payload.is_empty() => {
            let image_bytes = decode_screenshot(payload)?;
            let path = write_screenshot(&data.screenshot_dir, &username, &image_bytes)?;
            tracing::debug!(path = %path, "stored screenshot");
            Some(path)
        }
        _ => None,
    };

    let now = Utc::now().naive_utc();
    let conn = &mut data.pool.get()?;
    repository::insert_log(
        conn,
        NewLog {
            username: Some(username.clone()),
            login_time: now_iso(),
            logout_time: None,
            email: Some(
                req.email
                    .unwrap_or_else(|| "system@gmail.com".to_string()),
            ),
            domain: Some(
                req.app_url
                    .clone()
                    .unwrap_or_else(|| "Application".to_string()),
            ),
            role: Some("User".to_string()),
            designation: None,
            action: action.clone(),
        },
    )?;
    repository::insert_activity(
        conn,
        NewActivity {
            username,
            action: action.clone(),
            login_time: (action == "login").then_some(now),
            logout_time: (action == "logout").then_some(now),
            idle_time: req.idle_time,
            screenshot_path,
            app_url: req.app_url,
            metadata: req
                .timestamp
                .map(|ts| json!({ "timestamp": ts }).to_string()),
            created_at: now,
        },
    )?;

    Ok(HttpResponse::Created().json(json!({ "success": true })))
}

fn write_screenshot(dir: &Path, username: &str, bytes: &[u8]) -> Result<String, ApiError> {
    validate_screenshot_username(username)?;
    fs::create_dir_all(dir)
        .map_err(|e| ApiError::Internal(format!("cannot create screenshot directory: {e}")))?;
    let path = dir.join(screenshot_filename(username, Utc::now().timestamp()));
    fs::write(&path, bytes)
        .map_err(|e| ApiError::Internal(format!("cannot write screenshot: {e}")))?;
    Ok(path.to_string_lossy().into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_data_url_body() {
        let bytes = decode_screenshot("data:image/png;base64,aGVsbG8=").unwrap();
        assert_eq!(bytes, b"hello");
    }

    #[test]
    fn rejects_payload_without_header_separator() {
        assert!(matches!(
            decode_screenshot("aGVsbG8="),
            Err(ApiError::Validation(_))
        ));
    }

    #[test]
    fn rejects_invalid_base64_body() {
        assert!(matches!(
            decode_screenshot("data:image/png;base64,!!not-base64!!"),
            Err(ApiError::Validation(_))
        ));
    }

    #[test]
    fn filename_is_username_and_unix_seconds() {
        assert_eq!(
            screenshot_filename("alice", 1724912345),
            "alice_1724912345.png"
        );
    }

    #[test]
    fn username_with_path_separators_is_rejected() {
        assert!(matches!(
            validate_screenshot_username("../escape"),
            Err(ApiError::Validation(_))
        ));
        assert!(matches!(
            validate_screenshot_username("a/b"),
            Err(ApiError::Validation(_))
        ));
        assert!(matches!(
            validate_screenshot_username("a\\b"),
            Err(ApiError::Validation(_))
        ));
        assert!(validate_screenshot_username("alice.smith").is_ok());
    }

    #[test]
    fn traversal_username_cannot_escape_screenshot_dir() {
        let dir = std::env::temp_dir().join("isms-traversal-test");
        let _ = fs::remove_dir_all(&dir);
        let result = write_screenshot(&dir, "../traversal-escape", b"owned");
        assert!(matches!(result, Err(ApiError::Validation(_))));
        // Nothing may be written next to the configured directory.
        let sibling = std::env::temp_dir().join(format!(
            "traversal-escape_{}.png",
            chrono::Utc::now().timestamp()
        ));
        assert!(!sibling.exists());
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn writes_file_and_returns_path() {
        let dir = std::env::temp_dir().join("isms-screenshot-test");
        let _ = fs::remove_dir_all(&dir);
        let path = write_screenshot(&dir, "bob", b"png-bytes").unwrap();
        assert!(path.ends_with(".png"));
        assert_eq!(fs::read(&path).unwrap(), b"png-bytes");
        let _ = fs::remove_dir_all(&dir);
    }
}
