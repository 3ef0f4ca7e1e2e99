//! Crate entrypoint wiring together configuration, the Postgres pool, and the API.

pub mod api;
pub mod auth;
pub mod chart;
pub mod config;
pub mod db;
pub mod error;
pub mod format;
pub mod models;
pub mod pagination;
pub mod seed;

use config::AppConfig;
use db::Db;

use std::sync::Arc;

/// Complete application dependencies shared across handlers.
pub struct AppState {
    pub config: AppConfig,
    pub db: Db,
}

/// Arc-wrapped version of `AppState` passed into Axum extensions.
pub type SharedState = Arc<AppState>;
