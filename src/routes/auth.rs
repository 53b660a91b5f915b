use actix_web::{web, HttpResponse};
use serde_json::json;

use crate::db::models::NewLog;
use crate::db::{now_iso, repository};
use crate::errors::ApiError;
use crate::identity;
use crate::models::{LoginRequest, LogoutRequest};
use crate::routes::AppState;
use crate::security;

/// Authenticates against the admins table first, then users, matching on
/// username OR email. Success marks the principal Active and appends one
/// session log row; failure mutates nothing.
pub async fn login(
    data: web::Data<AppState>,
    req: web::Json<LoginRequest>,
) -> Result<HttpResponse, ApiError> {
    let identifier = req.username.trim();
    let password = req.password.trim();
    if identifier.is_empty() || password.is_empty() {
        return Err(ApiError::Validation(
            "Username and password are required".to_string(),
        ));
    }

    let conn = &mut data.pool.get()?;
    let principal = identity::resolve_principal(conn, identifier)?
        .filter(|p| security::verify_password(password, p.password_hash()))
        .ok_or(ApiError::InvalidCredentials)?;

    principal.set_status(conn, "Active")?;
    repository::insert_log(
        conn,
        NewLog {
            username: Some(principal.username().to_string()),
            login_time: now_iso(),
            logout_time: None,
            email: Some(principal.email().to_string()),
            domain: Some(principal.audit_domain()),
            role: Some(principal.role().to_string()),
            designation: Some(principal.audit_designation()),
            action: "User Logged In".to_string(),
        },
    )?;
    tracing::info!(username = principal.username(), "login succeeded");

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "message": "Login successful",
        "user": principal,
    })))
}

/// Marks the principal Offline and stamps the most recent open session
/// log. With no open row (lost log, process restart) the status change
/// still applies and no log is written.
pub async fn logout(
    data: web::Data<AppState>,
    req: web::Json<LogoutRequest>,
) -> Result<HttpResponse, ApiError> {
    let username = req.username.trim();
    if username.is_empty() {
        return Err(ApiError::Validation(
            "Username is required for logout".to_string(),
        ));
    }

    let conn = &mut data.pool.get()?;
    if let Some(principal) = identity::resolve_by_username(conn, username)? {
        principal.set_status(conn, "Offline")?;
        if let Some(open) = repository::latest_open_log(conn, principal.username())? {
            repository::close_log(conn, open.id, &now_iso(), "User Session Completed")?;
        } else {
            tracing::warn!(username, "logout without an open session log");
        }
    }

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "message": "Logged out successfully",
    })))
}
