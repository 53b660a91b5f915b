pub mod config;
pub mod db;
pub mod errors;
pub mod identity;
pub mod ids;
pub mod models;
pub mod routes;
pub mod security;
