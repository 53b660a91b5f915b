use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct LogoutRequest {
    #[serde(default)]
    pub username: String,
}

#[derive(Debug, Deserialize)]
pub struct RoleQuery {
    pub role: Option<String>,
}

/// Create/update payload for admins. The dashboard sends `fullName` when
/// no explicit username is chosen and `Domain` with a capital D.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct AdminRequest {
    #[serde(rename = "adminId")]
    pub admin_id: Option<String>,
    pub username: Option<String>,
    #[serde(rename = "fullName")]
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub role: Option<String>,
    #[serde(rename = "Domain")]
    pub domain: Option<String>,
    pub designation: Option<String>,
    pub status: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct UserRequest {
    #[serde(rename = "userId")]
    pub user_id: Option<String>,
    #[serde(rename = "fullName")]
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    #[serde(rename = "Domain")]
    pub domain: Option<String>,
    pub department: Option<String>,
    pub designation: Option<String>,
    pub status: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct LogRequest {
    pub username: Option<String>,
    pub email: Option<String>,
    pub domain: Option<String>,
    pub role: Option<String>,
    pub designation: Option<String>,
    pub action: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct ReportRequest {
    pub id: Option<String>,
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

#[derive(Debug, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct TaskRequest {
    pub title: Option<String>,
    pub domain: Option<String>,
    pub assigned_to: Option<String>,
    pub user_id: Option<String>,
    pub deadline: Option<String>,
    pub priority: Option<String>,
    pub description: Option<String>,
    pub status: Option<String>,
    pub created_at: Option<String>,
    pub is_checked: Option<bool>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct ActivityRequest {
    pub username: Option<String>,
    pub action: Option<String>,
    pub idle_time: Option<i32>,
    pub app_url: Option<String>,
    pub timestamp: Option<String>,
    pub email: Option<String>,
    /// Inline screenshot as a data URL: `data:image/png;base64,<body>`.
    pub screenshot: Option<String>,
}

/// Report payloads carry a `type` discriminator the dashboard switches on.
#[derive(Debug, Serialize)]
pub struct ReportView<T: Serialize> {
    #[serde(flatten)]
    pub report: T,
    #[serde(rename = "type")]
    pub kind: &'static str,
}

/// Log payloads duplicate `login_time` as `timestamp` for the dashboard.
#[derive(Debug, Serialize)]
pub struct LogView {
    #[serde(flatten)]
    pub log: crate::db::models::Log,
    pub timestamp: String,
}

impl From<crate::db::models::Log> for LogView {
    fn from(log: crate::db::models::Log) -> Self {
        let timestamp = log.login_time.clone();
        LogView { log, timestamp }
    }
}

/// A designation of "Mentor" forces the mentor role regardless of what
/// role the request asked for.
pub fn effective_admin_role(designation: Option<&str>, requested: Option<&str>) -> String {
    if designation
        .map(|d| d.eq_ignore_ascii_case("mentor"))
        .unwrap_or(false)
    {
        "mentor".to_string()
    } else {
        requested.unwrap_or("admin").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mentor_designation_overrides_requested_role() {
        assert_eq!(effective_admin_role(Some("Mentor"), Some("admin")), "mentor");
        assert_eq!(effective_admin_role(Some("MENTOR"), None), "mentor");
    }

    #[test]
    fn non_mentor_designation_keeps_requested_role() {
        assert_eq!(
            effective_admin_role(Some("HR Head"), Some("superadmin")),
            "superadmin"
        );
        assert_eq!(effective_admin_role(None, None), "admin");
    }

    #[test]
    fn report_view_flattens_and_tags_type() {
        let report = crate::db::models::DailyReport {
            id: "DR-1".into(),
            title: Some("Standup".into()),
            project_name: Some("ISMS".into()),
            designation: None,
            name: None,
            created_by: None,
            status: Some("Pending".into()),
            date: None,
            day: None,
            report_content: None,
            mobile_number: None,
            email: None,
        };
        let value = serde_json::to_value(ReportView {
            report,
            kind: "Daily",
        })
        .unwrap();
        assert_eq!(value["type"], "Daily");
        assert_eq!(value["projectName"], "ISMS");
        assert_eq!(value["id"], "DR-1");
    }

    #[test]
    fn log_view_duplicates_login_time_as_timestamp() {
        let log = crate::db::models::Log {
            id: 1,
            username: Some("alice".into()),
            login_time: "2026-08-29T09:00:00Z".into(),
            logout_time: None,
            email: None,
            domain: None,
            role: None,
            designation: None,
            action: "User Logged In".into(),
        };
        let value = serde_json::to_value(LogView::from(log)).unwrap();
        assert_eq!(value["timestamp"], value["login_time"]);
    }
}
