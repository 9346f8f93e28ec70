use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MealEntry {
    pub id: i32,
    pub user_id: String,
    pub name: String,
    pub meal_type: MealType,
    pub calories: i32,
    pub recorded_on: NaiveDate,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateMealInput {
    pub name: String,
    pub meal_type: MealType,
    pub calories: i32,
    pub recorded_on: NaiveDate,
}

/// Request body for photo analysis. The photo travels as base64 because the
/// browser frontend reads it straight from a file input.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeMealInput {
    pub photo_base64: String,
    pub hint: Option<String>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MealAnalysis {
    pub description: String,
    pub estimated_calories: i32,
    pub suggested_meal_type: MealType,
    pub remaining_today: u32,
}
