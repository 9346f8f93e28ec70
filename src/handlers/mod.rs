pub mod ai_usage_handler;
pub mod auth_handler;
pub mod exercises_handler;
pub mod health;
pub mod meals_handler;
pub mod metrics;
pub mod weights_handler;

pub use health::health_check;
pub use metrics::{metrics_handler, setup_metrics_recorder, MetricsState};
