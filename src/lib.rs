pub mod auth;
pub mod client;
pub mod config;
pub mod context;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod openapi;
pub mod startup;
pub mod store;

use moka::future::Cache;
use std::sync::Arc;

pub use config::AppConfig;
pub use error::{AppError, AppResult};
pub use handlers::MetricsState;

pub struct AppState {
    pub store: store::Store,
    pub ai_usage: Cache<String, u32>, // user_id → analyses used today
    pub config: AppConfig,
    pub metrics: Arc<MetricsState>,
}
