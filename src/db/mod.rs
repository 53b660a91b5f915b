pub mod connection;
pub mod models;
pub mod repository;
pub mod schema;

use chrono::{SecondsFormat, Utc};

/// Session log timestamps are stored as ISO-8601 strings, matching what
/// monitoring clients and the dashboard already exchange.
pub fn now_iso() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true)
}
