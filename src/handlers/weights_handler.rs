use axum::{
    extract::{Path, State},
    Json,
};
use chrono::Utc;
use std::sync::Arc;

use crate::{
    extractors::AuthenticatedUser,
    models::{CreateWeightInput, MutationResponse, WeightEntry},
    AppError, AppResult, AppState,
};

/// GET /api/weights - All weight entries for the current user
#[utoipa::path(
    get,
    path = "/api/weights",
    responses(
        (status = 200, description = "List of weight entries", body = Vec<WeightEntry>)
    ),
    tag = "weights",
    security(("cookie_auth" = []))
)]
pub async fn get_weights(
    State(state): State<Arc<AppState>>,
    auth: AuthenticatedUser,
) -> AppResult<Json<Vec<WeightEntry>>> {
    let mut entries = state.store.list_weights(&auth.user_id).await;
    entries.sort_by_key(|e| e.recorded_on);
    Ok(Json(entries))
}

/// POST /api/weights - Record a weight measurement
#[utoipa::path(
    post,
    path = "/api/weights",
    request_body = CreateWeightInput,
    responses(
        (status = 200, description = "Weight entry created", body = WeightEntry),
        (status = 422, description = "Weight outside plausible range")
    ),
    tag = "weights",
    security(("cookie_auth" = []))
)]
pub async fn create_weight(
    State(state): State<Arc<AppState>>,
    auth: AuthenticatedUser,
    Json(input): Json<CreateWeightInput>,
) -> AppResult<Json<WeightEntry>> {
    if !input.weight_kg.is_finite() || input.weight_kg <= 20.0 || input.weight_kg >= 500.0 {
        return Err(AppError::Validation(format!(
            "Weight must be between 20 and 500 kg, got {}",
            input.weight_kg
        )));
    }
    if input.note.as_ref().is_some_and(|n| n.chars().count() > 500) {
        return Err(AppError::Validation(
            "Note must be 500 characters or fewer".to_string(),
        ));
    }

    let entry = WeightEntry {
        id: state.store.next_id(),
        user_id: auth.user_id,
        weight_kg: input.weight_kg,
        recorded_on: input.recorded_on,
        note: input.note,
        created_at: Utc::now(),
    };
    state.store.insert_weight(entry.clone()).await;

    Ok(Json(entry))
}

/// DELETE /api/weights/{id} - Remove a weight entry
#[utoipa::path(
    delete,
    path = "/api/weights/{id}",
    params(
        ("id" = i32, Path, description = "Weight entry ID")
    ),
    responses(
        (status = 200, description = "Weight entry deleted", body = MutationResponse),
        (status = 404, description = "Weight entry not found")
    ),
    tag = "weights",
    security(("cookie_auth" = []))
)]
pub async fn delete_weight(
    State(state): State<Arc<AppState>>,
    Path(entry_id): Path<i32>,
    auth: AuthenticatedUser,
) -> AppResult<Json<MutationResponse>> {
    if !state.store.delete_weight(&auth.user_id, entry_id).await {
        return Err(AppError::NotFound(format!(
            "Weight entry {} not found",
            entry_id
        )));
    }

    Ok(Json(MutationResponse {
        success: true,
        message: Some("Weight entry deleted".to_string()),
    }))
}
