use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::db::schema::{activity, admins, daily_reports, logs, tasks, users, weekly_reports};

#[derive(Queryable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = admins)]
pub struct Admin {
    pub id: i32,
    pub custom_id: String,
    pub username: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password: String,
    pub role: String, // 'superadmin', 'admin' or 'mentor'
    pub domain: String,
    pub designation: String,
    pub status: String, // 'Active' or 'Offline'
}

#[derive(Insertable, Debug)]
#[diesel(table_name = admins)]
pub struct NewAdmin {
    pub custom_id: String,
    pub username: String,
    pub email: String,
    pub password: String,
    pub role: String,
    pub domain: String,
    pub designation: String,
    pub status: String,
}

#[derive(AsChangeset, Default, Debug)]
#[diesel(table_name = admins)]
pub struct UpdateAdmin {
    pub custom_id: Option<String>,
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub role: Option<String>,
    pub domain: Option<String>,
    pub designation: Option<String>,
    pub status: Option<String>,
}

#[derive(Queryable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = users)]
pub struct User {
    pub id: i32,
    pub custom_id: String,
    pub username: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password: String,
    pub role: String, // always 'User'
    pub domain: String,
    pub designation: String,
    pub status: String,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = users)]
pub struct NewUser {
    pub custom_id: String,
    pub username: String,
    pub email: String,
    pub password: String,
    pub role: String,
    pub domain: String,
    pub designation: String,
    pub status: String,
}

#[derive(AsChangeset, Default, Debug)]
#[diesel(table_name = users)]
pub struct UpdateUser {
    pub custom_id: Option<String>,
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub domain: Option<String>,
    pub designation: Option<String>,
    pub status: Option<String>,
}

/// One session/audit trail row. An open session is a row whose
/// `logout_time` is still null.
#[derive(Queryable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = logs)]
pub struct Log {
    pub id: i32,
    pub username: Option<String>,
    pub login_time: String,
    pub logout_time: Option<String>,
    pub email: Option<String>,
    pub domain: Option<String>,
    pub role: Option<String>,
    pub designation: Option<String>,
    pub action: String,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = logs)]
pub struct NewLog {
    pub username: Option<String>,
    pub login_time: String,
    pub logout_time: Option<String>,
    pub email: Option<String>,
    pub domain: Option<String>,
    pub role: Option<String>,
    pub designation: Option<String>,
    pub action: String,
}

#[derive(Queryable, Serialize, Debug, Clone)]
#[diesel(table_name = activity)]
pub struct Activity {
    pub id: i32,
    pub username: String,
    pub action: String,
    pub login_time: Option<NaiveDateTime>,
    pub logout_time: Option<NaiveDateTime>,
    pub idle_time: Option<i32>,
    pub screenshot_path: Option<String>,
    pub app_url: Option<String>,
    pub metadata: Option<String>,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = activity)]
pub struct NewActivity {
    pub username: String,
    pub action: String,
    pub login_time: Option<NaiveDateTime>,
    pub logout_time: Option<NaiveDateTime>,
    pub idle_time: Option<i32>,
    pub screenshot_path: Option<String>,
    pub app_url: Option<String>,
    pub metadata: Option<String>,
    pub created_at: NaiveDateTime,
}

#[derive(Queryable, Insertable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = daily_reports)]
#[serde(rename_all = "camelCase")]
pub struct DailyReport {
    pub id: String,
    pub title: Option<String>,
    pub project_name: Option<String>,
    pub designation: Option<String>,
    pub name: Option<String>,
    pub created_by: Option<String>,
    pub status: Option<String>,
    pub date: Option<String>,
    pub day: Option<String>,
    pub report_content: Option<String>,
    pub mobile_number: Option<String>,
    pub email: Option<String>,
}

#[derive(Queryable, Insertable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = weekly_reports)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyReport {
    pub id: String,
    pub title: Option<String>,
    pub project_name: Option<String>,
    pub designation: Option<String>,
    pub name: Option<String>,
    pub created_by: Option<String>,
    pub status: Option<String>,
    pub date: Option<String>,
    pub day: Option<String>,
    pub report_content: Option<String>,
    pub mobile_number: Option<String>,
    pub email: Option<String>,
    pub weekly_summary: Option<String>,
    pub attachment_name: Option<String>,
}

#[derive(Queryable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = tasks)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: i32,
    pub title: Option<String>,
    pub domain: Option<String>,
    pub assigned_to: Option<String>,
    pub user_id: Option<String>,
    pub deadline: Option<String>,
    pub priority: Option<String>,
    pub description: Option<String>,
    pub status: Option<String>,
    pub created_at: String,
    pub is_checked: bool,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = tasks)]
pub struct NewTask {
    pub title: Option<String>,
    pub domain: Option<String>,
    pub assigned_to: Option<String>,
    pub user_id: Option<String>,
    pub deadline: Option<String>,
    pub priority: Option<String>,
    pub description: Option<String>,
    pub status: Option<String>,
    pub created_at: String,
    pub is_checked: bool,
}

#[derive(AsChangeset, Default, Debug)]
#[diesel(table_name = tasks)]
pub struct UpdateTask {
    pub title: Option<String>,
    pub status: Option<String>,
    pub is_checked: Option<bool>,
    pub priority: Option<String>,
    pub deadline: Option<String>,
}
