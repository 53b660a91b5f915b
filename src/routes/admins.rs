use actix_web::{web, HttpResponse};
use serde_json::json;

use crate::db::models::{NewAdmin, UpdateAdmin};
use crate::db::repository;
use crate::errors::ApiError;
use crate::models::{effective_admin_role, AdminRequest, RoleQuery};
use crate::routes::AppState;
use crate::security;

pub async fn list(
    data: web::Data<AppState>,
    query: web::Query<RoleQuery>,
) -> Result<HttpResponse, ApiError> {
    let conn = &mut data.pool.get()?;
    let admins = repository::get_admins(conn, query.role.as_deref())?;
    Ok(HttpResponse::Ok().json(admins))
}

pub async fn create(
    data: web::Data<AppState>,
    req: web::Json<AdminRequest>,
) -> Result<HttpResponse, ApiError> {
    let req = req.into_inner();
    let role = effective_admin_role(req.designation.as_deref(), req.role.as_deref());
    let username = req
        .username
        .or(req.full_name)
        .filter(|s| !s.trim().is_empty())
        .ok_or_else(|| ApiError::Validation("username is required".to_string()))?;
    let email = req
        .email
        .filter(|s| !s.trim().is_empty())
        .ok_or_else(|| ApiError::Validation("email is required".to_string()))?;

    let conn = &mut data.pool.get()?;
    let custom_id = match req.admin_id.filter(|s| !s.is_empty()) {
        Some(id) => id,
        None => repository::next_admin_custom_id(conn, &role)?,
    };
    let password = security::hash_password(req.password.as_deref().unwrap_or("123"))?;

    let admin = repository::create_admin(
        conn,
        NewAdmin {
            custom_id,
            username,
            email,
            password,
            role,
            domain: req.domain.unwrap_or_default(),
            designation: req.designation.unwrap_or_default(),
            status: req.status.unwrap_or_else(|| "Active".to_string()),
        },
    )?;
    Ok(HttpResponse::Created().json(admin))
}

pub async fn update(
    data: web::Data<AppState>,
    id: web::Path<i32>,
    req: web::Json<AdminRequest>,
) -> Result<HttpResponse, ApiError> {
    let id = id.into_inner();
    let req = req.into_inner();
    let conn = &mut data.pool.get()?;
    let existing = repository::get_admin(conn, id)?
        .ok_or_else(|| ApiError::NotFound("Admin not found".to_string()))?;

    let mut changes = UpdateAdmin {
        custom_id: req.admin_id,
        username: req.username.or(req.full_name),
        email: req.email,
        password: None,
        role: req.role,
        domain: req.domain,
        designation: req.designation.clone(),
        status: req.status,
    };
    if let Some(password) = req.password.filter(|p| !p.is_empty()) {
        changes.password = Some(security::hash_password(&password)?);
    }
    // Re-derive the role when designation changes to Mentor.
    if let Some(designation) = req.designation.as_deref() {
        if designation.eq_ignore_ascii_case("mentor") {
            changes.role = Some("mentor".to_string());
        }
    }

    if changes.custom_id.is_none()
        && changes.username.is_none()
        && changes.email.is_none()
        && changes.password.is_none()
        && changes.role.is_none()
        && changes.domain.is_none()
        && changes.designation.is_none()
        && changes.status.is_none()
    {
        return Ok(HttpResponse::Ok().json(existing));
    }
    let admin = repository::update_admin(conn, id, changes)?;
    Ok(HttpResponse::Ok().json(admin))
}

pub async fn delete(
    data: web::Data<AppState>,
    id: web::Path<i32>,
) -> Result<HttpResponse, ApiError> {
    let conn = &mut data.pool.get()?;
    let deleted = repository::delete_admin(conn, id.into_inner())?;
    if deleted == 0 {
        return Err(ApiError::NotFound("Admin not found".to_string()));
    }
    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "message": "Admin deleted successfully",
    })))
}
