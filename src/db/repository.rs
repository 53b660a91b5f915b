use diesel::prelude::*;

use crate::db::models::*;
use crate::db::schema::*;
use crate::ids;

// ── Admins ───

pub fn get_admins(conn: &mut PgConnection, role_filter: Option<&str>) -> QueryResult<Vec<Admin>> {
    let mut query = admins::table.into_boxed();
    if let Some(role) = role_filter {
        query = query.filter(admins::role.ilike(format!("%{}%", role)));
    }
    query.order(admins::id.asc()).load(conn)
}

pub fn get_admin(conn: &mut PgConnection, id: i32) -> QueryResult<Option<Admin>> {
    admins::table.find(id).first(conn).optional()
}

pub fn find_admin_by_identifier(
    conn: &mut PgConnection,
    identifier: &str,
) -> QueryResult<Option<Admin>> {
    admins::table
        .filter(
            admins::username
                .eq(identifier)
                .or(admins::email.eq(identifier)),
        )
        .first(conn)
        .optional()
}

pub fn find_admin_by_username(conn: &mut PgConnection, name: &str) -> QueryResult<Option<Admin>> {
    admins::table
        .filter(admins::username.eq(name))
        .first(conn)
        .optional()
}

pub fn create_admin(conn: &mut PgConnection, new_admin: NewAdmin) -> QueryResult<Admin> {
    diesel::insert_into(admins::table)
        .values(&new_admin)
        .get_result(conn)
}

pub fn update_admin(
    conn: &mut PgConnection,
    id: i32,
    changes: UpdateAdmin,
) -> QueryResult<Admin> {
    diesel::update(admins::table.find(id))
        .set(changes)
        .get_result(conn)
}

pub fn delete_admin(conn: &mut PgConnection, id: i32) -> QueryResult<usize> {
    diesel::delete(admins::table.find(id)).execute(conn)
}

pub fn set_admin_status(conn: &mut PgConnection, id: i32, status: &str) -> QueryResult<usize> {
    diesel::update(admins::table.find(id))
        .set(admins::status.eq(status))
        .execute(conn)
}

/// Sequence number starts at count-of-role + 1, then bumps past any
/// custom_id already taken so concurrent creations cannot collide on
/// the formatted id.
pub fn next_admin_custom_id(conn: &mut PgConnection, role: &str) -> QueryResult<String> {
    let count: i64 = admins::table
        .filter(admins::role.ilike(role))
        .count()
        .get_result(conn)?;
    ids::next_custom_id(
        ids::admin_role_prefix(role),
        &ids::current_year_short(),
        count + 1,
        |candidate| {
            let taken: i64 = admins::table
                .filter(admins::custom_id.eq(candidate))
                .count()
                .get_result(conn)?;
            Ok(taken > 0)
        },
    )
}

// ── Users ───

pub fn get_users(conn: &mut PgConnection, role_filter: Option<&str>) -> QueryResult<Vec<User>> {
    let mut query = users::table.into_boxed();
    if let Some(role) = role_filter {
        query = query.filter(users::role.ilike(format!("%{}%", role)));
    }
    query.order(users::id.asc()).load(conn)
}

pub fn get_user(conn: &mut PgConnection, id: i32) -> QueryResult<Option<User>> {
    users::table.find(id).first(conn).optional()
}

pub fn find_user_by_identifier(
    conn: &mut PgConnection,
    identifier: &str,
) -> QueryResult<Option<User>> {
    users::table
        .filter(
            users::username
                .eq(identifier)
                .or(users::email.eq(identifier)),
        )
        .first(conn)
        .optional()
}

pub fn find_user_by_username(conn: &mut PgConnection, name: &str) -> QueryResult<Option<User>> {
    users::table
        .filter(users::username.eq(name))
        .first(conn)
        .optional()
}

pub fn create_user(conn: &mut PgConnection, new_user: NewUser) -> QueryResult<User> {
    diesel::insert_into(users::table)
        .values(&new_user)
        .get_result(conn)
}

pub fn update_user(conn: &mut PgConnection, id: i32, changes: UpdateUser) -> QueryResult<User> {
    diesel::update(users::table.find(id))
        .set(changes)
        .get_result(conn)
}

pub fn delete_user(conn: &mut PgConnection, id: i32) -> QueryResult<usize> {
    diesel::delete(users::table.find(id)).execute(conn)
}

pub fn set_user_status(conn: &mut PgConnection, id: i32, status: &str) -> QueryResult<usize> {
    diesel::update(users::table.find(id))
        .set(users::status.eq(status))
        .execute(conn)
}

pub fn next_user_custom_id(conn: &mut PgConnection) -> QueryResult<String> {
    let count: i64 = users::table.count().get_result(conn)?;
    ids::next_custom_id(
        ids::USER_PREFIX,
        &ids::current_year_short(),
        count + 1,
        |candidate| {
            let taken: i64 = users::table
                .filter(users::custom_id.eq(candidate))
                .count()
                .get_result(conn)?;
            Ok(taken > 0)
        },
    )
}

// ── Session logs ───

pub fn get_logs(conn: &mut PgConnection) -> QueryResult<Vec<Log>> {
    logs::table.order(logs::id.desc()).load(conn)
}

pub fn insert_log(conn: &mut PgConnection, new_log: NewLog) -> QueryResult<Log> {
    diesel::insert_into(logs::table)
        .values(&new_log)
        .get_result(conn)
}

pub fn clear_logs(conn: &mut PgConnection) -> QueryResult<usize> {
    diesel::delete(logs::table).execute(conn)
}

/// The most recent open session row for a username, if any.
pub fn latest_open_log(conn: &mut PgConnection, name: &str) -> QueryResult<Option<Log>> {
    logs::table
        .filter(logs::username.eq(name))
        .filter(logs::logout_time.is_null())
        .order(logs::id.desc())
        .first(conn)
        .optional()
}

pub fn close_log(
    conn: &mut PgConnection,
    log_id: i32,
    logout_time: &str,
    action: &str,
) -> QueryResult<usize> {
    diesel::update(logs::table.find(log_id))
        .set((
            logs::logout_time.eq(logout_time),
            logs::action.eq(action),
        ))
        .execute(conn)
}

// ── Activity ───

pub fn insert_activity(conn: &mut PgConnection, new_activity: NewActivity) -> QueryResult<Activity> {
    diesel::insert_into(activity::table)
        .values(&new_activity)
        .get_result(conn)
}

// ── Reports ───

pub fn get_daily_reports(conn: &mut PgConnection) -> QueryResult<Vec<DailyReport>> {
    daily_reports::table.load(conn)
}

pub fn daily_report_exists(conn: &mut PgConnection, id: &str) -> QueryResult<bool> {
    let count: i64 = daily_reports::table
        .filter(daily_reports::id.eq(id))
        .count()
        .get_result(conn)?;
    Ok(count > 0)
}

pub fn create_daily_report(
    conn: &mut PgConnection,
    report: DailyReport,
) -> QueryResult<DailyReport> {
    diesel::insert_into(daily_reports::table)
        .values(&report)
        .get_result(conn)
}

pub fn delete_daily_report(conn: &mut PgConnection, id: &str) -> QueryResult<usize> {
    diesel::delete(daily_reports::table.find(id)).execute(conn)
}

pub fn get_weekly_reports(conn: &mut PgConnection) -> QueryResult<Vec<WeeklyReport>> {
    weekly_reports::table.load(conn)
}

pub fn weekly_report_exists(conn: &mut PgConnection, id: &str) -> QueryResult<bool> {
    let count: i64 = weekly_reports::table
        .filter(weekly_reports::id.eq(id))
        .count()
        .get_result(conn)?;
    Ok(count > 0)
}

pub fn create_weekly_report(
    conn: &mut PgConnection,
    report: WeeklyReport,
) -> QueryResult<WeeklyReport> {
    diesel::insert_into(weekly_reports::table)
        .values(&report)
        .get_result(conn)
}

pub fn delete_weekly_report(conn: &mut PgConnection, id: &str) -> QueryResult<usize> {
    diesel::delete(weekly_reports::table.find(id)).execute(conn)
}

// ── Tasks ───

pub fn get_tasks(conn: &mut PgConnection) -> QueryResult<Vec<Task>> {
    tasks::table.order(tasks::id.desc()).load(conn)
}

pub fn get_task(conn: &mut PgConnection, id: i32) -> QueryResult<Option<Task>> {
    tasks::table.find(id).first(conn).optional()
}

pub fn create_task(conn: &mut PgConnection, new_task: NewTask) -> QueryResult<Task> {
    diesel::insert_into(tasks::table)
        .values(&new_task)
        .get_result(conn)
}

pub fn update_task(conn: &mut PgConnection, id: i32, changes: UpdateTask) -> QueryResult<Task> {
    diesel::update(tasks::table.find(id))
        .set(changes)
        .get_result(conn)
}

pub fn delete_task(conn: &mut PgConnection, id: i32) -> QueryResult<usize> {
    diesel::delete(tasks::table.find(id)).execute(conn)
}
