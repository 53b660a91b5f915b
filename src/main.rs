use actix_cors::Cors;
use actix_files::Files;
use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};
use diesel::prelude::*;
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use isms_backend::config::AppConfig;
use isms_backend::db::connection::init_pool;
use isms_backend::db::models::NewAdmin;
use isms_backend::db::schema::admins;
use isms_backend::routes::{self, AppState};
use isms_backend::security;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!();

/// Creates the default superadmin on first boot, and repairs its
/// domain/designation if an older deployment left them stale.
fn seed_superadmin(conn: &mut PgConnection) -> QueryResult<()> {
    use isms_backend::db::models::Admin;

    let existing: Option<Admin> = admins::table
        .filter(admins::username.eq("superadmin"))
        .first(conn)
        .optional()?;

    match existing {
        None => {
            let password = security::hash_password("123")
                .expect("failed to hash seed password");
            diesel::insert_into(admins::table)
                .values(&NewAdmin {
                    custom_id: "SA/IN/24/0001".to_string(),
                    username: "superadmin".to_string(),
                    email: "superadmin@isms.com".to_string(),
                    password,
                    role: "superadmin".to_string(),
                    domain: "Management".to_string(),
                    designation: "HR Head".to_string(),
                    status: "Active".to_string(),
                })
                .execute(conn)?;
            tracing::info!("seeded default superadmin");
        }
        Some(admin) if admin.designation != "HR Head" || admin.domain != "Management" => {
            diesel::update(admins::table.find(admin.id))
                .set((
                    admins::designation.eq("HR Head"),
                    admins::domain.eq("Management"),
                ))
                .execute(conn)?;
            tracing::info!("updated superadmin details");
        }
        Some(_) => {}
    }
    Ok(())
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let settings = AppConfig::load().expect("Failed to load configuration");
    let pool = init_pool(&settings);

    {
        let conn = &mut pool.get().expect("Failed to get connection from pool");
        conn.run_pending_migrations(MIGRATIONS)
            .expect("Failed to run migrations");
        seed_superadmin(conn).expect("Failed to seed superadmin");
    }
    std::fs::create_dir_all(&settings.screenshot_dir)?;

    let screenshot_dir = settings.screenshot_dir.clone();
    let app_state = web::Data::new(AppState {
        pool,
        screenshot_dir: screenshot_dir.clone(),
    });

    let bind_addr = (settings.host.clone(), settings.port);
    tracing::info!(host = %settings.host, port = settings.port, "starting HTTP server");

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header()
            .max_age(3600);

        App::new()
            .wrap(Logger::default())
            .wrap(cors)
            .app_data(app_state.clone())
            // Inline base64 screenshots can be large.
            .app_data(web::PayloadConfig::new(25 * 1024 * 1024))
            .service(Files::new("/screenshots", screenshot_dir.clone()))
            .configure(routes::configure)
    })
    .bind(bind_addr)?
    .run()
    .await
}
