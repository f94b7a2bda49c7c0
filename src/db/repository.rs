use async_trait::async_trait;

use crate::{
    error::AppResult,
    models::{InteractionEvent, InteractionRecord, PlayerRecord},
};

/// Source of the player catalog snapshot
///
/// Implementations must return players in a stable order; ranking ties are
/// broken by this order.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    async fn load_players(&self) -> AppResult<Vec<PlayerRecord>>;
}

/// Store of per-user interaction history
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait InteractionRepository: Send + Sync {
    /// Player interactions of a user, newest first, at most `limit` of them
    async fn recent_interactions(
        &self,
        user_id: &str,
        limit: usize,
    ) -> AppResult<Vec<InteractionRecord>>;

    async fn record(&self, event: &InteractionEvent) -> AppResult<()>;
}
