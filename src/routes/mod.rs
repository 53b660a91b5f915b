pub mod activity;
pub mod admins;
pub mod auth;
pub mod logs;
pub mod reports;
pub mod tasks;
pub mod users;

use std::path::PathBuf;

use actix_web::{web, HttpResponse, Responder};
use serde_json::json;

use crate::db::connection::PgPool;
use crate::db::models::NewLog;
use crate::db::now_iso;
use crate::identity::Principal;

pub struct AppState {
    pub pool: PgPool,
    pub screenshot_dir: PathBuf,
}

async fn home() -> impl Responder {
    HttpResponse::Ok().json(json!({
        "status": "online",
        "message": "ISMS API Server Running",
        "version": "1.0.0",
    }))
}

// Kept for the dashboard's mentor widget; real aggregation never shipped.
async fn mentor_performance() -> impl Responder {
    HttpResponse::Ok().json(Vec::<serde_json::Value>::new())
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(home)).service(
        web::scope("/api")
            .route("/login", web::post().to(auth::login))
            .route("/logout", web::post().to(auth::logout))
            .route("/admins", web::get().to(admins::list))
            .route("/admins", web::post().to(admins::create))
            .route("/admins/{id}", web::put().to(admins::update))
            .route("/admins/{id}", web::delete().to(admins::delete))
            .route("/users", web::get().to(users::list))
            .route("/users", web::post().to(users::create))
            .route("/users/{id}", web::put().to(users::update))
            .route("/users/{id}", web::delete().to(users::delete))
            .route("/logs", web::get().to(logs::list))
            .route("/logs", web::post().to(logs::create))
            .route("/logs/clear", web::delete().to(logs::clear))
            .route("/daily-reports", web::get().to(reports::list_daily))
            .route("/daily-reports", web::post().to(reports::create_daily))
            .route("/daily-reports/{id}", web::delete().to(reports::delete_daily))
            .route("/weekly-reports", web::get().to(reports::list_weekly))
            .route("/weekly-reports", web::post().to(reports::create_weekly))
            .route("/weekly-reports/{id}", web::delete().to(reports::delete_weekly))
            .route("/tasks", web::get().to(tasks::list))
            .route("/tasks", web::post().to(tasks::create))
            .route("/tasks/{id}", web::put().to(tasks::update))
            .route("/tasks/{id}", web::delete().to(tasks::delete))
            .route("/activity", web::post().to(activity::record))
            .route("/mentors/performance", web::get().to(mentor_performance)),
    );
}

/// Audit trail entry for a report/task mutation. When no principal could
/// be attributed the entry falls back to the submitted email (or
/// "system") under the given domain.
pub(crate) fn audit_entry(
    actor: Option<&Principal>,
    fallback_email: Option<&str>,
    fallback_domain: &str,
    action: String,
) -> NewLog {
    match actor {
        Some(principal) => NewLog {
            username: None,
            login_time: now_iso(),
            logout_time: None,
            email: Some(principal.email().to_string()),
            domain: Some(principal.audit_domain()),
            role: Some(principal.role().to_string()),
            designation: None,
            action,
        },
        None => NewLog {
            username: None,
            login_time: now_iso(),
            logout_time: None,
            email: Some(fallback_email.unwrap_or("system").to_string()),
            domain: Some(fallback_domain.to_string()),
            role: Some("User".to_string()),
            designation: None,
            action,
        },
    }
}
