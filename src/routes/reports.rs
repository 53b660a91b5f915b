use actix_web::{web, HttpResponse};
use chrono::Utc;
use serde_json::json;

use crate::db::models::{DailyReport, WeeklyReport};
use crate::db::repository;
use crate::errors::ApiError;
use crate::identity;
use crate::ids;
use crate::models::{ReportRequest, ReportView};
use crate::routes::{audit_entry, AppState};

// ── Daily ───

pub async fn list_daily(data: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let conn = &mut data.pool.get()?;
    let reports = repository::get_daily_reports(conn)?;
    let views: Vec<ReportView<DailyReport>> = reports
        .into_iter()
        .map(|report| ReportView {
            report,
            kind: "Daily",
        })
        .collect();
    Ok(HttpResponse::Ok().json(views))
}

pub async fn create_daily(
    data: web::Data<AppState>,
    req: web::Json<ReportRequest>,
) -> Result<HttpResponse, ApiError> {
    let req = req.into_inner();
    let conn = &mut data.pool.get()?;

    let id = match req.id.clone().filter(|s| !s.is_empty()) {
        Some(id) => id,
        // Bump the millisecond stamp until free, so back-to-back
        // submissions in the same millisecond get distinct ids.
        None => ids::next_report_id("DR", Utc::now().timestamp_millis(), |candidate| {
            repository::daily_report_exists(conn, candidate)
        })?,
    };

    let report = repository::create_daily_report(
        conn,
        DailyReport {
            id,
            title: req.title.or_else(|| Some("Daily Report".to_string())),
            project_name: req.project_name,
            designation: req.designation,
            name: req.name,
            created_by: req.created_by.clone(),
            status: req.status.or_else(|| Some("Pending".to_string())),
            date: req.date,
            day: req.day,
            report_content: req.report_content,
            mobile_number: req.mobile_number,
            email: req.email.clone(),
        },
    )?;

    let actor = identity::resolve_actor(conn, req.created_by.as_deref())?;
    repository::insert_log(
        conn,
        audit_entry(
            actor.as_ref(),
            req.email.as_deref(),
            "Reports",
            format!("Submitted Daily Report: {}", report.id),
        ),
    )?;

    Ok(HttpResponse::Created().json(ReportView {
        report,
        kind: "Daily",
    }))
}

pub async fn delete_daily(
    data: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let id = id.into_inner();
    let conn = &mut data.pool.get()?;
    let deleted = repository::delete_daily_report(conn, &id)?;
    if deleted == 0 {
        return Err(ApiError::NotFound("Daily report not found".to_string()));
    }
    repository::insert_log(
        conn,
        audit_entry(None, None, "Reports", format!("Deleted Daily Report: {id}")),
    )?;
    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "message": "Daily report deleted",
    })))
}

// ── Weekly ───

pub async fn list_weekly(data: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let conn = &mut data.pool.get()?;
    let reports = repository::get_weekly_reports(conn)?;
    let views: Vec<ReportView<WeeklyReport>> = reports
        .into_iter()
        .map(|report| ReportView {
            report,
            kind: "Weekly",
        })
        .collect();
    Ok(HttpResponse::Ok().json(views))
}

pub async fn create_weekly(
    data: web::Data<AppState>,
    req: web::Json<ReportRequest>,
) -> Result<HttpResponse, ApiError> {
    let req = req.into_inner();
    let conn = &mut data.pool.get()?;

    let id = match req.id.clone().filter(|s| !s.is_empty()) {
        Some(id) => id,
        None => ids::next_report_id("WR", Utc::now().timestamp_millis(), |candidate| {
            repository::weekly_report_exists(conn, candidate)
        })?,
    };

    let report = repository::create_weekly_report(
        conn,
        WeeklyReport {
            id,
            title: req.title.or_else(|| Some("Weekly Report".to_string())),
            project_name: req.project_name,
            designation: req.designation,
            name: req.name,
            created_by: req.created_by.clone(),
            status: req.status.or_else(|| Some("Pending".to_string())),
            date: req.date,
            day: req.day,
            report_content: req.report_content,
            mobile_number: req.mobile_number,
            email: req.email.clone(),
            weekly_summary: req.weekly_summary,
            attachment_name: req.attachment_name,
        },
    )?;

    let actor = identity::resolve_actor(conn, req.created_by.as_deref())?;
    repository::insert_log(
        conn,
        audit_entry(
            actor.as_ref(),
            req.email.as_deref(),
            "Reports",
            format!("Submitted Weekly Report: {}", report.id),
        ),
    )?;

    Ok(HttpResponse::Created().json(ReportView {
        report,
        kind: "Weekly",
    }))
}

pub async fn delete_weekly(
    data: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let id = id.into_inner();
    let conn = &mut data.pool.get()?;
    let deleted = repository::delete_weekly_report(conn, &id)?;
    if deleted == 0 {
        return Err(ApiError::NotFound("Weekly report not found".to_string()));
    }
    repository::insert_log(
        conn,
        audit_entry(None, None, "Reports", format!("Deleted Weekly Report: {id}")),
    )?;
    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "message": "Weekly report deleted",
    })))
}
