use axum::{extract::State, Extension, Json};
use serde_json::{json, Value};

use crate::{
    error::AppResult,
    middleware::{CurrentUser, RequestId},
    models::NewInteraction,
    routes::AppState,
    services::interactions,
};

/// Handler that records a user interaction
pub async fn create_interaction(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    user: Option<CurrentUser>,
    Json(request): Json<NewInteraction>,
) -> AppResult<Json<Value>> {
    let user_id = user.map(|CurrentUser(id)| id);
    tracing::debug!(request_id = %request_id, user_id = ?user_id, "Recording interaction");

    interactions::record_interaction(state.interactions.as_ref(), user_id.as_deref(), request)
        .await?;

    Ok(Json(json!({ "ok": true })))
}
