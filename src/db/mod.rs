pub mod postgres;
pub mod redis;
pub mod repository;

pub use postgres::{create_pool, PgCatalogStore, PgInteractionStore};
pub use redis::{create_redis_client, Cache, CacheKey, CacheWriterHandle, CachedCatalog};
pub use repository::{CatalogRepository, InteractionRepository};
