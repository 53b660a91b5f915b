use actix_web::{web, HttpResponse};
use serde_json::json;

use crate::db::models::{NewLog, NewUser, UpdateUser};
use crate::db::{now_iso, repository};
use crate::errors::ApiError;
use crate::models::{RoleQuery, UserRequest};
use crate::routes::AppState;
use crate::security;

pub async fn list(
    data: web::Data<AppState>,
    query: web::Query<RoleQuery>,
) -> Result<HttpResponse, ApiError> {
    let conn = &mut data.pool.get()?;
    let users = repository::get_users(conn, query.role.as_deref())?;
    Ok(HttpResponse::Ok().json(users))
}

pub async fn create(
    data: web::Data<AppState>,
    req: web::Json<UserRequest>,
) -> Result<HttpResponse, ApiError> {
    let req = req.into_inner();
    let username = req
        .full_name
        .filter(|s| !s.trim().is_empty())
        .ok_or_else(|| ApiError::Validation("fullName is required".to_string()))?;
    let email = req
        .email
        .filter(|s| !s.trim().is_empty())
        .ok_or_else(|| ApiError::Validation("email is required".to_string()))?;

    let conn = &mut data.pool.get()?;
    let custom_id = match req.user_id.filter(|s| !s.is_empty()) {
        Some(id) => id,
        None => repository::next_user_custom_id(conn)?,
    };
    let password = security::hash_password(req.password.as_deref().unwrap_or("123"))?;

    let user = repository::create_user(
        conn,
        NewUser {
            custom_id,
            username,
            email,
            password,
            role: "User".to_string(),
            domain: req.domain.or(req.department).unwrap_or_default(),
            designation: req.designation.unwrap_or_default(),
            status: req.status.unwrap_or_else(|| "Active".to_string()),
        },
    )?;
    Ok(HttpResponse::Created().json(user))
}

pub async fn update(
    data: web::Data<AppState>,
    id: web::Path<i32>,
    req: web::Json<UserRequest>,
) -> Result<HttpResponse, ApiError> {
    let id = id.into_inner();
    let req = req.into_inner();
    let conn = &mut data.pool.get()?;
    let existing = repository::get_user(conn, id)?
        .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

    let mut changes = UpdateUser {
        custom_id: req.user_id,
        username: req.full_name,
        email: req.email,
        password: None,
        domain: req.domain,
        designation: req.designation,
        status: req.status,
    };
    if let Some(password) = req.password.filter(|p| !p.is_empty()) {
        changes.password = Some(security::hash_password(&password)?);
    }

    if changes.custom_id.is_none()
        && changes.username.is_none()
        && changes.email.is_none()
        && changes.password.is_none()
        && changes.domain.is_none()
        && changes.designation.is_none()
        && changes.status.is_none()
    {
        return Ok(HttpResponse::Ok().json(existing));
    }
    let user = repository::update_user(conn, id, changes)?;
    Ok(HttpResponse::Ok().json(user))
}

/// Deletes a user and appends an audit log row naming the deleted
/// account. No session identity is carried, so the entry is attributed
/// to "System".
pub async fn delete(
    data: web::Data<AppState>,
    id: web::Path<i32>,
) -> Result<HttpResponse, ApiError> {
    let id = id.into_inner();
    let conn = &mut data.pool.get()?;
    let user = repository::get_user(conn, id)?
        .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

    repository::delete_user(conn, id)?;
    repository::insert_log(
        conn,
        NewLog {
            username: None,
            login_time: now_iso(),
            logout_time: None,
            email: Some("System".to_string()),
            domain: None,
            role: Some("System".to_string()),
            designation: None,
            action: format!("Deleted User: {}", user.username),
        },
    )?;

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "message": "User deleted successfully",
    })))
}
