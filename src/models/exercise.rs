use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseEntry {
    pub id: i32,
    pub user_id: String,
    pub activity: String,
    pub duration_minutes: i32,
    pub calories_burned: Option<i32>,
    pub recorded_on: NaiveDate,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateExerciseInput {
    pub activity: String,
    pub duration_minutes: i32,
    pub calories_burned: Option<i32>,
    pub recorded_on: NaiveDate,
}
