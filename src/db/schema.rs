diesel::table! {
    admins (id) {
        id -> Int4,
        custom_id -> Varchar,
        username -> Varchar,
        email -> Varchar,
        password -> Varchar,
        role -> Varchar,
        domain -> Varchar,
        designation -> Varchar,
        status -> Varchar,
    }
}

diesel::table! {
    users (id) {
        id -> Int4,
        custom_id -> Varchar,
        username -> Varchar,
        email -> Varchar,
        password -> Varchar,
        role -> Varchar,
        domain -> Varchar,
        designation -> Varchar,
        status -> Varchar,
    }
}

diesel::table! {
    logs (id) {
        id -> Int4,
        username -> Nullable<Varchar>,
        login_time -> Varchar,
        logout_time -> Nullable<Varchar>,
        email -> Nullable<Varchar>,
        domain -> Nullable<Varchar>,
        role -> Nullable<Varchar>,
        designation -> Nullable<Varchar>,
        action -> Varchar,
    }
}

diesel::table! {
    activity (id) {
        id -> Int4,
        username -> Varchar,
        action -> Varchar,
        login_time -> Nullable<Timestamp>,
        logout_time -> Nullable<Timestamp>,
        idle_time -> Nullable<Int4>,
        screenshot_path -> Nullable<Varchar>,
        app_url -> Nullable<Varchar>,
        metadata -> Nullable<Text>,
        created_at -> Timestamp,
    }
}

diesel::table! {
    daily_reports (id) {
        id -> Varchar,
        title -> Nullable<Varchar>,
        project_name -> Nullable<Varchar>,
        designation -> Nullable<Varchar>,
        name -> Nullable<Varchar>,
        created_by -> Nullable<Varchar>,
        status -> Nullable<Varchar>,
        date -> Nullable<Varchar>,
        day -> Nullable<Varchar>,
        report_content -> Nullable<Text>,
        mobile_number -> Nullable<Varchar>,
        email -> Nullable<Varchar>,
    }
}

diesel::table! {
    weekly_reports (id) {
        id -> Varchar,
        title -> Nullable<Varchar>,
        project_name -> Nullable<Varchar>,
        designation -> Nullable<Varchar>,
        name -> Nullable<Varchar>,
        created_by -> Nullable<Varchar>,
        status -> Nullable<Varchar>,
        date -> Nullable<Varchar>,
        day -> Nullable<Varchar>,
        report_content -> Nullable<Text>,
        mobile_number -> Nullable<Varchar>,
        email -> Nullable<Varchar>,
        weekly_summary -> Nullable<Text>,
        attachment_name -> Nullable<Varchar>,
    }
}

diesel::table! {
    tasks (id) {
        id -> Int4,
        title -> Nullable<Varchar>,
        domain -> Nullable<Varchar>,
        assigned_to -> Nullable<Varchar>,
        user_id -> Nullable<Varchar>,
        deadline -> Nullable<Varchar>,
        priority -> Nullable<Varchar>,
        description -> Nullable<Text>,
        status -> Nullable<Varchar>,
        created_at -> Varchar,
        is_checked -> Bool,
    }
}

diesel::allow_tables_to_appear_in_same_query!(
    admins,
    users,
    logs,
    activity,
    daily_reports,
    weekly_reports,
    tasks,
);
