//! Axum route handlers for the recommendation API.

use axum::{extract::State, Json};

use crate::errors::AppError;
use crate::models::farming::FarmingContext;
use crate::recommend::pipeline::{recommend_crops, RecommendationSet};
use crate::state::AppState;

/// POST /api/v1/recommendations
///
/// Body: a `FarmingContext`. Returns the recovered recommendation set;
/// fewer than `expected` entries means the reply was partially unusable.
pub async fn handle_recommend(
    State(state): State<AppState>,
    Json(context): Json<FarmingContext>,
) -> Result<Json<RecommendationSet>, AppError> {
    if context.region.trim().is_empty() {
        return Err(AppError::Validation("region cannot be empty".to_string()));
    }

    let set = recommend_crops(&state.completion, &state.weather, &context).await?;
    Ok(Json(set))
}
