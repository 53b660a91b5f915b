use diesel::prelude::*;
use serde::Serialize;

use crate::db::models::{Admin, User};
use crate::db::repository;

/// A resolved principal from either credential table. Admins and regular
/// users live in disjoint tables with no shared index; this enum is the
/// single abstraction the handlers work against.
#[derive(Serialize, Debug, Clone)]
#[serde(untagged)]
pub enum Principal {
    Admin(Admin),
    User(User),
}

impl Principal {
    pub fn username(&self) -> &str {
        match self {
            Principal::Admin(a) => &a.username,
            Principal::User(u) => &u.username,
        }
    }

    pub fn email(&self) -> &str {
        match self {
            Principal::Admin(a) => &a.email,
            Principal::User(u) => &u.email,
        }
    }

    pub fn role(&self) -> &str {
        match self {
            Principal::Admin(a) => &a.role,
            Principal::User(u) => &u.role,
        }
    }

    pub fn password_hash(&self) -> &str {
        match self {
            Principal::Admin(a) => &a.password,
            Principal::User(u) => &u.password,
        }
    }

    /// Audit-trail domain, defaulting empty values the way the dashboard
    /// expects.
    pub fn audit_domain(&self) -> String {
        let domain = match self {
            Principal::Admin(a) => a.domain.as_str(),
            Principal::User(u) => u.domain.as_str(),
        };
        if domain.is_empty() {
            "System".to_string()
        } else {
            domain.to_string()
        }
    }

    pub fn audit_designation(&self) -> String {
        let designation = match self {
            Principal::Admin(a) => a.designation.as_str(),
            Principal::User(u) => u.designation.as_str(),
        };
        if designation.is_empty() {
            "N/A".to_string()
        } else {
            designation.to_string()
        }
    }

    pub fn set_status(&self, conn: &mut PgConnection, status: &str) -> QueryResult<()> {
        match self {
            Principal::Admin(a) => repository::set_admin_status(conn, a.id, status)?,
            Principal::User(u) => repository::set_user_status(conn, u.id, status)?,
        };
        Ok(())
    }
}

/// Resolves a login identifier (username or email, case-sensitive) to a
/// principal. The admins table is probed first; on a cross-table
/// username duplicate the admin silently wins.
pub fn resolve_principal(
    conn: &mut PgConnection,
    identifier: &str,
) -> QueryResult<Option<Principal>> {
    if let Some(admin) = repository::find_admin_by_identifier(conn, identifier)? {
        return Ok(Some(Principal::Admin(admin)));
    }
    Ok(repository::find_user_by_identifier(conn, identifier)?.map(Principal::User))
}

/// Logout resolution matches on username only.
pub fn resolve_by_username(
    conn: &mut PgConnection,
    username: &str,
) -> QueryResult<Option<Principal>> {
    if let Some(admin) = repository::find_admin_by_username(conn, username)? {
        return Ok(Some(Principal::Admin(admin)));
    }
    Ok(repository::find_user_by_username(conn, username)?.map(Principal::User))
}

/// Best-effort attribution for report/task audit entries: looks the
/// submitted author name up across both tables. Callers fall back to the
/// submitted email or "system" when nothing resolves.
pub fn resolve_actor(
    conn: &mut PgConnection,
    name: Option<&str>,
) -> QueryResult<Option<Principal>> {
    match name {
        Some(name) if !name.is_empty() => resolve_by_username(conn, name),
        _ => Ok(None),
    }
}
