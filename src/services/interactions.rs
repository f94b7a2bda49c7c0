use crate::{
    db::InteractionRepository,
    error::{AppError, AppResult},
    models::{InteractionEvent, NewInteraction},
};

/// Validates a client interaction and stores it for the user.
///
/// Body fields are checked before the user, so a malformed request is a 400
/// even when unauthenticated.
pub async fn record_interaction(
    store: &dyn InteractionRepository,
    user_id: Option<&str>,
    request: NewInteraction,
) -> AppResult<InteractionEvent> {
    let event = validate(user_id, request)?;
    store.record(&event).await?;

    tracing::info!(
        user_id = %event.user_id,
        item_type = %event.item_type,
        item_id = %event.item_id,
        event_type = %event.event_type,
        "Interaction recorded"
    );

    Ok(event)
}

fn validate(user_id: Option<&str>, request: NewInteraction) -> AppResult<InteractionEvent> {
    let item_id = request
        .item_id
        .map(|id| id.to_string())
        .filter(|id| !id.is_empty());
    let event_type = request
        .event_type
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty());

    let (Some(item_id), Some(event_type)) = (item_id, event_type) else {
        return Err(AppError::InvalidInput("Missing itemId/eventType".to_string()));
    };

    let weight = request.weight.unwrap_or(1.0);
    if !weight.is_finite() {
        return Err(AppError::InvalidInput("weight must be a finite number".to_string()));
    }

    let user_id = user_id.ok_or_else(|| AppError::Unauthorized("Not authenticated".to_string()))?;

    Ok(InteractionEvent {
        user_id: user_id.to_string(),
        item_type: request.item_type,
        item_id,
        event_type,
        weight,
    })
}
