pub mod ai_usage;
pub mod exercise;
pub mod meal;
pub mod weight;

use serde::Serialize;
use utoipa::ToSchema;

pub use ai_usage::AiUsage;
pub use exercise::{CreateExerciseInput, ExerciseEntry};
pub use meal::{AnalyzeMealInput, CreateMealInput, MealAnalysis, MealEntry, MealType};
pub use weight::{CreateWeightInput, WeightEntry};

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct MutationResponse {
    pub success: bool,
    pub message: Option<String>,
}
