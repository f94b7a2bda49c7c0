use async_trait::async_trait;
use std::sync::Arc;

use crate::{
    cached,
    db::repository::CatalogRepository,
    error::AppResult,
    models::PlayerRecord,
};

use super::{Cache, CacheKey};

/// Catalog repository that keeps the snapshot in Redis for `ttl` seconds.
///
/// Only the raw snapshot is cached; feature spaces are still rebuilt from it
/// on every request.
pub struct CachedCatalog {
    source: Arc<dyn CatalogRepository>,
    cache: Cache,
    ttl: u64,
}

impl CachedCatalog {
    pub fn new(source: Arc<dyn CatalogRepository>, cache: Cache, ttl: u64) -> Self {
        Self { source, cache, ttl }
    }
}

#[async_trait]
impl CatalogRepository for CachedCatalog {
    async fn load_players(&self) -> AppResult<Vec<PlayerRecord>> {
        cached!(
            self.cache,
            CacheKey::Catalog("players".to_string()),
            self.ttl,
            self.source.load_players()
        )
    }
}
