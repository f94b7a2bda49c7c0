use axum::{
    extract::{Query, State},
    Extension, Json,
};
use serde::Deserialize;

use crate::{
    error::{AppError, AppResult},
    middleware::{CurrentUser, RequestId},
    models::RecommendationOutcome,
    routes::AppState,
    services::recommendations::{self, RecommendOptions},
};

/// Largest `limit` a caller may ask for
pub const MAX_LIMIT: usize = 50;

#[derive(Debug, Deserialize)]
pub struct RecommendationQuery {
    pub limit: Option<usize>,
}

/// Handler for player recommendations of the current user
pub async fn recommend_players(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    CurrentUser(user_id): CurrentUser,
    Query(query): Query<RecommendationQuery>,
) -> AppResult<Json<RecommendationOutcome>> {
    let limit = match query.limit {
        None => state.config.recommendation_limit,
        Some(limit) if (1..=MAX_LIMIT).contains(&limit) => limit,
        Some(limit) => {
            return Err(AppError::InvalidInput(format!(
                "limit must be between 1 and {}, got {}",
                MAX_LIMIT, limit
            )))
        }
    };

    tracing::info!(
        request_id = %request_id,
        user_id = %user_id,
        limit,
        "Processing recommendation request"
    );

    let outcome = recommendations::recommend_players(
        state.catalog.as_ref(),
        state.interactions.as_ref(),
        &user_id,
        RecommendOptions {
            limit,
            history_limit: state.config.history_limit,
        },
    )
    .await?;

    Ok(Json(outcome))
}
