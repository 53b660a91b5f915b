use diesel::pg::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool, PooledConnection};

use crate::config::AppConfig;

pub type PgPool = Pool<ConnectionManager<PgConnection>>;
pub type PgPooledConnection = PooledConnection<ConnectionManager<PgConnection>>;

pub fn init_pool(settings: &AppConfig) -> PgPool {
    let manager = ConnectionManager::<PgConnection>::new(&settings.database_url);
    Pool::builder()
        .max_size(settings.pool_size)
        .connection_timeout(std::time::Duration::from_secs(settings.timeout_seconds))
        .build(manager)
        .expect("Failed to create pool")
}
