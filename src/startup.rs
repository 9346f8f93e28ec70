use axum::{
    http::{header, HeaderValue, Method},
    routing::{delete, get, post},
    Json, Router,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

use crate::middleware::{metrics_middleware, request_id_middleware};
use crate::{handlers, openapi::ApiDoc};

pub fn build_router(state: Arc<crate::AppState>) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(state.config.cors_origin.parse::<HeaderValue>().unwrap())
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION, header::ACCEPT])
        .allow_credentials(true);

    // Auth routes
    let auth_routes = Router::new().route("/me", get(handlers::auth_handler::get_me));

    // Weight routes
    let weight_routes = Router::new()
        .route("/", get(handlers::weights_handler::get_weights))
        .route("/", post(handlers::weights_handler::create_weight))
        .route("/{id}", delete(handlers::weights_handler::delete_weight));

    // Exercise routes
    let exercise_routes = Router::new()
        .route("/", get(handlers::exercises_handler::get_exercises))
        .route("/", post(handlers::exercises_handler::create_exercise))
        .route("/{id}", delete(handlers::exercises_handler::delete_exercise));

    // Meal routes
    let meal_routes = Router::new()
        .route("/", get(handlers::meals_handler::get_meals))
        .route("/", post(handlers::meals_handler::create_meal))
        .route("/analyze", post(handlers::meals_handler::analyze_meal))
        .route("/{id}", delete(handlers::meals_handler::delete_meal));

    // AI usage routes
    let ai_usage_routes = Router::new().route("/", get(handlers::ai_usage_handler::get_ai_usage));

    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/metrics", get(handlers::metrics_handler))
        .nest("/api/auth", auth_routes)
        .nest("/api/weights", weight_routes)
        .nest("/api/exercises", exercise_routes)
        .nest("/api/meals", meal_routes)
        .nest("/api/ai-usage", ai_usage_routes)
        .route("/api-docs/openapi.json", get(|| async { Json(ApiDoc::openapi()) }))
        .merge(Scalar::with_url("/docs", ApiDoc::openapi()))
        .layer(cors)
        .layer(axum::middleware::from_fn(metrics_middleware))
        // Added last so it is the outermost wrapper: the request context
        // exists before any other middleware or handler runs
        .layer(axum::middleware::from_fn(request_id_middleware))
        .with_state(state)
}
