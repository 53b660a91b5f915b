use actix_web::{web, HttpResponse};
use serde_json::json;

use crate::db::models::{NewTask, UpdateTask};
use crate::db::{now_iso, repository};
use crate::errors::ApiError;
use crate::identity;
use crate::models::TaskRequest;
use crate::routes::{audit_entry, AppState};

pub async fn list(data: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let conn = &mut data.pool.get()?;
    let tasks = repository::get_tasks(conn)?;
    Ok(HttpResponse::Ok().json(tasks))
}

pub async fn create(
    data: web::Data<AppState>,
    req: web::Json<TaskRequest>,
) -> Result<HttpResponse, ApiError> {
    let req = req.into_inner();
    let conn = &mut data.pool.get()?;
    let task = repository::create_task(
        conn,
        NewTask {
            title: req.title,
            domain: req.domain,
            assigned_to: req.assigned_to.clone(),
            user_id: req.user_id,
            deadline: req.deadline,
            priority: req.priority,
            description: req.description,
            status: req.status.or_else(|| Some("Pending".to_string())),
            created_at: req.created_at.unwrap_or_else(now_iso),
            is_checked: req.is_checked.unwrap_or(false),
        },
    )?;

    let actor = identity::resolve_actor(conn, req.assigned_to.as_deref())?;
    repository::insert_log(
        conn,
        audit_entry(
            actor.as_ref(),
            None,
            "Tasks",
            format!("Created Task: {}", task.id),
        ),
    )?;

    Ok(HttpResponse::Created().json(task))
}

pub async fn update(
    data: web::Data<AppState>,
    id: web::Path<i32>,
    req: web::Json<TaskRequest>,
) -> Result<HttpResponse, ApiError> {
    let id = id.into_inner();
    let req = req.into_inner();
    let conn = &mut data.pool.get()?;
    let existing = repository::get_task(conn, id)?
        .ok_or_else(|| ApiError::NotFound("Task not found".to_string()))?;

    let changes = UpdateTask {
        title: req.title,
        status: req.status,
        is_checked: req.is_checked,
        priority: req.priority,
        deadline: req.deadline,
    };
    if changes.title.is_none()
        && changes.status.is_none()
        && changes.is_checked.is_none()
        && changes.priority.is_none()
        && changes.deadline.is_none()
    {
        return Ok(HttpResponse::Ok().json(existing));
    }
    let task = repository::update_task(conn, id, changes)?;
    Ok(HttpResponse::Ok().json(task))
}

pub async fn delete(
    data: web::Data<AppState>,
    id: web::Path<i32>,
) -> Result<HttpResponse, ApiError> {
    let id = id.into_inner();
    let conn = &mut data.pool.get()?;
    let deleted = repository::delete_task(conn, id)?;
    if deleted == 0 {
        return Err(ApiError::NotFound("Task not found".to_string()));
    }
    repository::insert_log(
        conn,
        audit_entry(None, None, "Tasks", format!("Deleted Task: {id}")),
    )?;
    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "message": "Task deleted",
    })))
}
