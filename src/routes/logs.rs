use actix_web::{web, HttpResponse};
use serde_json::json;

use crate::db::models::NewLog;
use crate::db::{now_iso, repository};
use crate::errors::ApiError;
use crate::models::{LogRequest, LogView};
use crate::routes::AppState;

pub async fn list(data: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let conn = &mut data.pool.get()?;
    let logs = repository::get_logs(conn)?;
    let views: Vec<LogView> = logs.into_iter().map(LogView::from).collect();
    Ok(HttpResponse::Ok().json(views))
}

/// Manual log entry, used by the dashboard for ad-hoc annotations.
pub async fn create(
    data: web::Data<AppState>,
    req: web::Json<LogRequest>,
) -> Result<HttpResponse, ApiError> {
    let req = req.into_inner();
    let conn = &mut data.pool.get()?;
    let log = repository::insert_log(
        conn,
        NewLog {
            username: req.username,
            login_time: now_iso(),
            logout_time: None,
            email: req.email,
            domain: Some(req.domain.unwrap_or_default()),
            role: Some(req.role.unwrap_or_else(|| "User".to_string())),
            designation: Some(req.designation.unwrap_or_default()),
            action: req
                .action
                .unwrap_or_else(|| "No action specified".to_string()),
        },
    )?;
    Ok(HttpResponse::Created().json(LogView::from(log)))
}

pub async fn clear(data: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let conn = &mut data.pool.get()?;
    let removed = repository::clear_logs(conn)?;
    tracing::info!(removed, "cleared session logs");
    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "message": "All logs cleared successfully",
    })))
}
