use axum::{
    extract::{Path, State},
    Json,
};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use chrono::Utc;
use moka::ops::compute::{CompResult, Op};
use std::sync::Arc;

use crate::{
    extractors::AuthenticatedUser,
    models::{AnalyzeMealInput, CreateMealInput, MealAnalysis, MealEntry, MealType, MutationResponse},
    AppError, AppResult, AppState,
};

/// GET /api/meals - All meal entries for the current user
#[utoipa::path(
    get,
    path = "/api/meals",
    responses(
        (status = 200, description = "List of meal entries", body = Vec<MealEntry>)
    ),
    tag = "meals",
    security(("cookie_auth" = []))
)]
pub async fn get_meals(
    State(state): State<Arc<AppState>>,
    auth: AuthenticatedUser,
) -> AppResult<Json<Vec<MealEntry>>> {
    let mut entries = state.store.list_meals(&auth.user_id).await;
    entries.sort_by_key(|e| e.recorded_on);
    Ok(Json(entries))
}

/// POST /api/meals - Log a meal
#[utoipa::path(
    post,
    path = "/api/meals",
    request_body = CreateMealInput,
    responses(
        (status = 200, description = "Meal entry created", body = MealEntry),
        (status = 422, description = "Invalid meal name or calories")
    ),
    tag = "meals",
    security(("cookie_auth" = []))
)]
pub async fn create_meal(
    State(state): State<Arc<AppState>>,
    auth: AuthenticatedUser,
    Json(input): Json<CreateMealInput>,
) -> AppResult<Json<MealEntry>> {
    if input.name.trim().is_empty() {
        return Err(AppError::Validation("Meal name must not be empty".to_string()));
    }
    if input.calories < 0 || input.calories > 10_000 {
        return Err(AppError::Validation(format!(
            "Calories must be between 0 and 10000, got {}",
            input.calories
        )));
    }

    let entry = MealEntry {
        id: state.store.next_id(),
        user_id: auth.user_id,
        name: input.name,
        meal_type: input.meal_type,
        calories: input.calories,
        recorded_on: input.recorded_on,
        created_at: Utc::now(),
    };
    state.store.insert_meal(entry.clone()).await;

    Ok(Json(entry))
}

/// DELETE /api/meals/{id} - Remove a meal entry
#[utoipa::path(
    delete,
    path = "/api/meals/{id}",
    params(
        ("id" = i32, Path, description = "Meal entry ID")
    ),
    responses(
        (status = 200, description = "Meal entry deleted", body = MutationResponse),
        (status = 404, description = "Meal entry not found")
    ),
    tag = "meals",
    security(("cookie_auth" = []))
)]
pub async fn delete_meal(
    State(state): State<Arc<AppState>>,
    Path(entry_id): Path<i32>,
    auth: AuthenticatedUser,
) -> AppResult<Json<MutationResponse>> {
    if !state.store.delete_meal(&auth.user_id, entry_id).await {
        return Err(AppError::NotFound(format!("Meal entry {} not found", entry_id)));
    }

    Ok(Json(MutationResponse {
        success: true,
        message: Some("Meal entry deleted".to_string()),
    }))
}

/// POST /api/meals/analyze - Estimate calories from a meal photo
///
/// Consumes one unit of the per-user daily AI quota. The analysis itself is a
/// local heuristic stub; the quota accounting and error contract are real.
#[utoipa::path(
    post,
    path = "/api/meals/analyze",
    request_body = AnalyzeMealInput,
    responses(
        (status = 200, description = "Analysis result", body = MealAnalysis),
        (status = 422, description = "Photo is not valid base64"),
        (status = 429, description = "Daily AI quota exhausted")
    ),
    tag = "meals",
    security(("cookie_auth" = []))
)]
pub async fn analyze_meal(
    State(state): State<Arc<AppState>>,
    auth: AuthenticatedUser,
    Json(input): Json<AnalyzeMealInput>,
) -> AppResult<Json<MealAnalysis>> {
    let photo = STANDARD
        .decode(input.photo_base64.as_bytes())
        .map_err(|_| AppError::Validation("Photo must be base64-encoded".to_string()))?;
    if photo.is_empty() {
        return Err(AppError::Validation("Photo must not be empty".to_string()));
    }

    let limit = state.config.ai_daily_limit;

    // Admission and increment are one atomic compute on the counter entry, so
    // concurrent calls from the same user cannot all slip past the limit
    let result = state
        .ai_usage
        .entry(auth.user_id.clone())
        .and_compute_with(|existing| {
            let current = existing.map(|e| e.into_value()).unwrap_or(0);
            std::future::ready(if current >= limit {
                Op::Nop
            } else {
                Op::Put(current + 1)
            })
        })
        .await;

    let used = match result {
        CompResult::Inserted(entry) | CompResult::ReplacedWith(entry) => entry.into_value(),
        _ => {
            return Err(AppError::QuotaExceeded(format!(
                "Daily AI analysis limit of {} reached",
                limit
            )));
        }
    };

    tracing::info!(user_id = %auth.user_id, used, limit, "meal photo analyzed");

    Ok(Json(analyze_photo(&photo, input.hint.as_deref(), limit - used)))
}

/// Heuristic stand-in for the vision model call.
fn analyze_photo(photo: &[u8], hint: Option<&str>, remaining: u32) -> MealAnalysis {
    let hint_lower = hint.unwrap_or("").to_lowercase();
    let suggested_meal_type = if hint_lower.contains("breakfast") {
        MealType::Breakfast
    } else if hint_lower.contains("lunch") {
        MealType::Lunch
    } else if hint_lower.contains("dinner") {
        MealType::Dinner
    } else {
        MealType::Snack
    };

    MealAnalysis {
        description: match hint {
            Some(h) if !h.trim().is_empty() => format!("Meal photo ({})", h.trim()),
            _ => "Meal photo".to_string(),
        },
        estimated_calories: 150 + (photo.len() % 600) as i32,
        suggested_meal_type,
        remaining_today: remaining,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hint_steers_the_suggested_meal_type() {
        assert_eq!(
            analyze_photo(b"img", Some("my breakfast"), 5).suggested_meal_type,
            MealType::Breakfast
        );
        assert_eq!(
            analyze_photo(b"img", None, 5).suggested_meal_type,
            MealType::Snack
        );
    }

    #[test]
    fn estimate_is_deterministic_for_the_same_photo() {
        let a = analyze_photo(b"same-bytes", None, 5);
        let b = analyze_photo(b"same-bytes", None, 5);
        assert_eq!(a.estimated_calories, b.estimated_calories);
    }
}
