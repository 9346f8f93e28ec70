use axum::{
    extract::{Path, State},
    Json,
};
use chrono::Utc;
use std::sync::Arc;

use crate::{
    extractors::AuthenticatedUser,
    models::{CreateExerciseInput, ExerciseEntry, MutationResponse},
    AppError, AppResult, AppState,
};

/// GET /api/exercises - All exercise entries for the current user
#[utoipa::path(
    get,
    path = "/api/exercises",
    responses(
        (status = 200, description = "List of exercise entries", body = Vec<ExerciseEntry>)
    ),
    tag = "exercises",
    security(("cookie_auth" = []))
)]
pub async fn get_exercises(
    State(state): State<Arc<AppState>>,
    auth: AuthenticatedUser,
) -> AppResult<Json<Vec<ExerciseEntry>>> {
    let mut entries = state.store.list_exercises(&auth.user_id).await;
    entries.sort_by_key(|e| e.recorded_on);
    Ok(Json(entries))
}

/// POST /api/exercises - Record an exercise session
#[utoipa::path(
    post,
    path = "/api/exercises",
    request_body = CreateExerciseInput,
    responses(
        (status = 200, description = "Exercise entry created", body = ExerciseEntry),
        (status = 422, description = "Invalid activity or duration")
    ),
    tag = "exercises",
    security(("cookie_auth" = []))
)]
pub async fn create_exercise(
    State(state): State<Arc<AppState>>,
    auth: AuthenticatedUser,
    Json(input): Json<CreateExerciseInput>,
) -> AppResult<Json<ExerciseEntry>> {
    if input.activity.trim().is_empty() {
        return Err(AppError::Validation(
            "Activity name must not be empty".to_string(),
        ));
    }
    if input.duration_minutes <= 0 || input.duration_minutes > 24 * 60 {
        return Err(AppError::Validation(format!(
            "Duration must be between 1 and 1440 minutes, got {}",
            input.duration_minutes
        )));
    }
    if input.calories_burned.is_some_and(|c| c < 0) {
        return Err(AppError::Validation(
            "Calories burned cannot be negative".to_string(),
        ));
    }

    let entry = ExerciseEntry {
        id: state.store.next_id(),
        user_id: auth.user_id,
        activity: input.activity,
        duration_minutes: input.duration_minutes,
        calories_burned: input.calories_burned,
        recorded_on: input.recorded_on,
        created_at: Utc::now(),
    };
    state.store.insert_exercise(entry.clone()).await;

    Ok(Json(entry))
}

/// DELETE /api/exercises/{id} - Remove an exercise entry
#[utoipa::path(
    delete,
    path = "/api/exercises/{id}",
    params(
        ("id" = i32, Path, description = "Exercise entry ID")
    ),
    responses(
        (status = 200, description = "Exercise entry deleted", body = MutationResponse),
        (status = 404, description = "Exercise entry not found")
    ),
    tag = "exercises",
    security(("cookie_auth" = []))
)]
pub async fn delete_exercise(
    State(state): State<Arc<AppState>>,
    Path(entry_id): Path<i32>,
    auth: AuthenticatedUser,
) -> AppResult<Json<MutationResponse>> {
    if !state.store.delete_exercise(&auth.user_id, entry_id).await {
        return Err(AppError::NotFound(format!(
            "Exercise entry {} not found",
            entry_id
        )));
    }

    Ok(Json(MutationResponse {
        success: true,
        message: Some("Exercise entry deleted".to_string()),
    }))
}
