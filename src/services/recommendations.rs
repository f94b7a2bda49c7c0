use std::time::Instant;

use crate::{
    db::{CatalogRepository, InteractionRepository},
    error::AppResult,
    models::{InteractionRecord, RecommendationOutcome},
    services::recommender,
};

/// Limits applied to one recommendation request
#[derive(Debug, Clone, Copy)]
pub struct RecommendOptions {
    /// Number of players to return
    pub limit: usize,
    /// Most recent interactions folded into the profile
    pub history_limit: usize,
}

/// Generates player recommendations for a user
///
/// Reads the user's recent history first and only loads the catalog when
/// there is something to build a profile from.
pub async fn recommend_players(
    catalog: &dyn CatalogRepository,
    interactions: &dyn InteractionRepository,
    user_id: &str,
    options: RecommendOptions,
) -> AppResult<RecommendationOutcome> {
    let start = Instant::now();

    let history = interactions
        .recent_interactions(user_id, options.history_limit)
        .await?;
    let history = most_recent(history, options.history_limit);

    if history.is_empty() {
        tracing::info!(user_id = %user_id, "No interactions, skipping catalog load");
        return Ok(recommender::recommend(&[], &history, options.limit));
    }

    let players = catalog.load_players().await?;

    tracing::debug!(
        user_id = %user_id,
        history = history.len(),
        catalog = players.len(),
        "Ranking candidates"
    );

    let outcome = recommender::recommend(&players, &history, options.limit);

    tracing::info!(
        user_id = %user_id,
        returned = outcome.recommendations().len(),
        reason = ?outcome.reason(),
        processing_time_ms = start.elapsed().as_millis(),
        "Recommendations generated"
    );

    Ok(outcome)
}

/// Newest `limit` interactions, newest first. Equal timestamps keep their
/// incoming order.
pub fn most_recent(mut history: Vec<InteractionRecord>, limit: usize) -> Vec<InteractionRecord> {
    history.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    history.truncate(limit);
    history
}
