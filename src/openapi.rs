use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::Modify;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Vitalog API",
        version = "1.0.0",
        description = "Backend API for the Vitalog lifestyle tracker",
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server"),
    ),
    paths(
        // Health
        crate::handlers::health::health_check,

        // Auth
        crate::handlers::auth_handler::get_me,

        // Weights
        crate::handlers::weights_handler::get_weights,
        crate::handlers::weights_handler::create_weight,
        crate::handlers::weights_handler::delete_weight,

        // Exercises
        crate::handlers::exercises_handler::get_exercises,
        crate::handlers::exercises_handler::create_exercise,
        crate::handlers::exercises_handler::delete_exercise,

        // Meals
        crate::handlers::meals_handler::get_meals,
        crate::handlers::meals_handler::create_meal,
        crate::handlers::meals_handler::delete_meal,
        crate::handlers::meals_handler::analyze_meal,

        // AI usage
        crate::handlers::ai_usage_handler::get_ai_usage,
    ),
    components(
        schemas(
            // Core models
            crate::models::WeightEntry,
            crate::models::ExerciseEntry,
            crate::models::MealEntry,
            crate::models::MealType,
            crate::models::AiUsage,
            crate::models::MealAnalysis,

            // Input models
            crate::models::CreateWeightInput,
            crate::models::CreateExerciseInput,
            crate::models::CreateMealInput,
            crate::models::AnalyzeMealInput,
            crate::models::MutationResponse,

            // Auth types
            crate::handlers::auth_handler::MeResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check"),
        (name = "auth", description = "Session identity"),
        (name = "weights", description = "Weight log"),
        (name = "exercises", description = "Exercise log"),
        (name = "meals", description = "Meal log and photo analysis"),
        (name = "ai-usage", description = "AI quota"),
    ),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "cookie_auth",
                SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::new("session"))),
            )
        }
    }
}
