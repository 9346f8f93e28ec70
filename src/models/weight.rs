use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WeightEntry {
    pub id: i32,
    pub user_id: String,
    pub weight_kg: f64,
    pub recorded_on: NaiveDate,
    pub note: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateWeightInput {
    pub weight_kg: f64,
    pub recorded_on: NaiveDate,
    pub note: Option<String>,
}
